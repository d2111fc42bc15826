use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Display metadata for one certification, looked up by its short key.
#[derive(Clone, PartialEq, Debug)]
pub struct Certification {
    pub key: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        key: "iso",
        name: "ISO 9001:2015",
        image: "https://mvtalc.com/wp-content/uploads/2020/09/isotill2017-232x300.png",
        description: "Quality Management System Certification - This certificate validates \
                      our commitment to quality management systems, ensuring consistent \
                      quality processes, customer satisfaction, and continuous improvement.",
    },
    Certification {
        key: "msme",
        name: "MSME Registration",
        image: "https://mvtalc.com/wp-content/uploads/2021/08/Udyog-msme-246x300.png",
        description: "UDYAM-UK-07-0002622 - Certified under the Micro, Small & Medium \
                      Enterprises development program, recognizing our contribution to \
                      India's manufacturing sector.",
    },
];

pub fn lookup(key: &str) -> Option<&'static Certification> {
    CERTIFICATIONS.iter().find(|c| c.key == key)
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub cert: Certification,
    pub on_close: Callback<()>,
}

/// Shared detail popup for certification cards. Escape, the overlay, or the
/// close button dismisses it.
#[function_component(CertModal)]
pub fn cert_modal(props: &ModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                    if event.key() == "Escape" {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);
                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        callback.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(document) = &document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal">
            <style>
                {r#"
                    .modal {
                        position: fixed;
                        inset: 0;
                        z-index: 10000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .modal-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(5px);
                    }
                    .modal-content {
                        position: relative;
                        background: white;
                        border-radius: 1rem;
                        max-width: 600px;
                        width: 90%;
                        max-height: 80vh;
                        overflow: hidden;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .modal-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.5rem;
                        border-bottom: 1px solid #e5e7eb;
                    }
                    .modal-header h3 { color: #1f2937; }
                    .modal-close {
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        cursor: pointer;
                        color: #6b7280;
                        width: 30px;
                        height: 30px;
                        border-radius: 50%;
                    }
                    .modal-close:hover { background-color: #f3f4f6; }
                    .modal-body {
                        padding: 1.5rem;
                        display: grid;
                        grid-template-columns: 200px 1fr;
                        gap: 1.5rem;
                        align-items: center;
                    }
                    .modal-body img {
                        max-width: 100%;
                        height: auto;
                        border-radius: 0.5rem;
                    }
                    .modal-body h4 {
                        color: #1f2937;
                        margin-bottom: 0.5rem;
                        font-size: 1.25rem;
                    }
                    .modal-body p {
                        color: #6b7280;
                        line-height: 1.6;
                    }
                    @media (max-width: 768px) {
                        .modal-body {
                            grid-template-columns: 1fr;
                            text-align: center;
                        }
                    }
                "#}
            </style>
            <div class="modal-overlay" onclick={close.clone()}></div>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{ "Certification Details" }</h3>
                    <button class="modal-close" onclick={close}>{ "\u{00d7}" }</button>
                </div>
                <div class="modal-body">
                    <div>
                        <img src={props.cert.image} alt={props.cert.name} />
                    </div>
                    <div>
                        <h4>{ props.cert.name }</h4>
                        <p>{ props.cert.description }</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
