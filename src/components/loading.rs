use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// (target %, status text, hold before the next stage in ms)
const STAGES: &[(f64, &str, u32)] = &[
    (15.0, "Loading premium assets...", 200),
    (35.0, "Initializing components...", 300),
    (55.0, "Setting up navigation...", 250),
    (75.0, "Preparing animations...", 200),
    (90.0, "Optimizing performance...", 200),
    (100.0, "Ready for excellence!", 150),
];

const TICK_MS: u32 = 50;
/// The overlay starts fading this long after mount, independent of how far
/// the staged progress got.
const REVEAL_AFTER_MS: u32 = 1500;
const FADE_MS: u32 = 800;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    /// Emitted once the overlay has fully faded out and can be unmounted.
    pub on_done: Callback<()>,
}

/// Simulated multi-stage boot progress shown over the page until the app
/// reveals itself.
#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingProps) -> Html {
    let stage = use_state_eq(|| 0usize);
    let progress = use_state_eq(|| 0.0f64);
    let status = use_state_eq(|| "Initializing Excellence...".to_string());
    let fading = use_state_eq(|| false);

    // Per-stage progress ticker. Changing the stage dependency drops the
    // previous interval before the new one starts.
    {
        let progress = progress.clone();
        let status = status.clone();
        let stage_handle = stage.clone();
        use_effect_with_deps(
            move |&stage| {
                let hold: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let mut ticker: Option<Interval> = None;
                if let Some(&(target, text, hold_ms)) = STAGES.get(stage) {
                    // The handle deref is a snapshot; accumulate locally.
                    let shown = Cell::new(*progress);
                    let reached = Cell::new(false);
                    let hold_slot = hold.clone();
                    ticker = Some(Interval::new(TICK_MS, move || {
                        if reached.get() {
                            return;
                        }
                        let bump = js_sys::Math::random() * 3.0 + 1.5;
                        let next = (shown.get() + bump).min(target);
                        shown.set(next);
                        progress.set(next);
                        if next >= target {
                            reached.set(true);
                            status.set(text.to_string());
                            if stage + 1 < STAGES.len() {
                                let stage_handle = stage_handle.clone();
                                *hold_slot.borrow_mut() = Some(Timeout::new(hold_ms, move || {
                                    stage_handle.set(stage + 1);
                                }));
                            }
                        }
                    }));
                }
                move || {
                    drop(ticker);
                    drop(hold);
                }
            },
            *stage,
        );
    }

    // Reveal sequence: fade after a fixed delay, then hand control back.
    {
        let fading = fading.clone();
        let on_done = props.on_done.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    TimeoutFuture::new(REVEAL_AFTER_MS).await;
                    fading.set(true);
                    TimeoutFuture::new(FADE_MS).await;
                    on_done.emit(());
                });
                || ()
            },
            (),
        );
    }

    html! {
        <div class={classes!("loading-screen", (*fading).then_some("loading-fade"))}>
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        z-index: 10002;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #0f172a;
                        transition: all 0.8s cubic-bezier(0.4, 0, 0.2, 1);
                    }
                    .loading-fade {
                        opacity: 0;
                        transform: scale(0.95);
                    }
                    .loading-content {
                        width: min(320px, 80vw);
                        text-align: center;
                        color: #e2e8f0;
                    }
                    .loading-logo {
                        font-size: 1.4rem;
                        font-weight: 700;
                        letter-spacing: 0.05em;
                        margin-bottom: 1.5rem;
                    }
                    .loading-progress-bar {
                        background: rgba(14, 165, 233, 0.1);
                        border-radius: 4px;
                        overflow: hidden;
                        height: 6px;
                        margin: 1rem 0;
                    }
                    .loading-progress-fill {
                        height: 100%;
                        background: linear-gradient(90deg, #0EA5E9, #F97316);
                        border-radius: 4px;
                        transition: width 0.3s ease;
                    }
                    .loading-percentage {
                        color: #0EA5E9;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .loading-status {
                        color: rgba(203, 213, 225, 0.9);
                        font-size: 0.9rem;
                    }
                "#}
            </style>
            <div class="loading-content">
                <div class="loading-logo">{ "Maa Vaishnavi TALC Industries" }</div>
                <div class="loading-progress-bar">
                    <div
                        class="loading-progress-fill"
                        style={format!("width: {}%;", *progress)}
                    ></div>
                </div>
                <div class="loading-percentage">{ format!("{}%", progress.floor() as u32) }</div>
                <div class="loading-status">{ (*status).clone() }</div>
            </div>
        </div>
    }
}
