use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Toasts stay up this long before auto-dismissing.
const DISMISS_MS: u32 = 5000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    fn accent(self) -> &'static str {
        match self {
            Severity::Success => "#10B981",
            Severity::Error => "#EF4444",
            Severity::Info => "#0EA5E9",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Error => "❌",
            Severity::Info => "ℹ️",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice { message: message.into(), severity: Severity::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice { message: message.into(), severity: Severity::Error }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notice { message: message.into(), severity: Severity::Info }
    }
}

/// Handed down through context; emit a `Notice` to show a toast.
pub type Notifier = Callback<Notice>;

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    pub children: Children,
}

/// Owns the single visible toast. Publishing a new notice replaces the old
/// one and drops its dismiss timer, so stale timers never close a newer
/// toast.
#[function_component(NotificationProvider)]
pub fn notification_provider(props: &ProviderProps) -> Html {
    let current = use_state(|| None::<Notice>);
    let dismiss_timer = use_mut_ref(|| None::<Timeout>);

    let notify: Notifier = {
        let current = current.clone();
        let dismiss_timer = dismiss_timer.clone();
        Callback::from(move |notice: Notice| {
            log::info!("notification ({:?}): {}", notice.severity, notice.message);
            current.set(Some(notice));
            let current = current.clone();
            *dismiss_timer.borrow_mut() =
                Some(Timeout::new(DISMISS_MS, move || current.set(None)));
        })
    };

    let close = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(None))
    };

    html! {
        <ContextProvider<Notifier> context={notify}>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        top: 100px;
                        right: 20px;
                        background: white;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        padding: 1.5rem;
                        max-width: 400px;
                        min-width: 320px;
                        z-index: 9999;
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        animation: toastIn 0.4s cubic-bezier(0.4, 0, 0.2, 1) both;
                    }
                    @keyframes toastIn {
                        from { transform: translateX(110%); }
                        to { transform: translateX(0); }
                    }
                    .toast-icon { font-size: 1.5rem; }
                    .toast-message {
                        flex: 1;
                        color: #374151;
                        line-height: 1.5;
                        font-size: 0.95rem;
                    }
                    .toast-close {
                        background: none;
                        border: none;
                        color: #6B7280;
                        cursor: pointer;
                        font-size: 1.5rem;
                        padding: 0;
                        line-height: 1;
                    }
                "#}
            </style>
            { for props.children.iter() }
            {
                if let Some(notice) = (*current).as_ref() {
                    html! {
                        <div
                            key={notice.message.clone()}
                            class="toast"
                            style={format!("border-left: 4px solid {};", notice.severity.accent())}
                        >
                            <div class="toast-icon">{ notice.severity.icon() }</div>
                            <div class="toast-message">{ &notice.message }</div>
                            <button class="toast-close" onclick={close}>{ "\u{00d7}" }</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </ContextProvider<Notifier>>
    }
}
