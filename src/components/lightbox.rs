use gloo_console::log;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config;
use crate::gallery::GalleryItem;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    /// The currently filtered subset, in display order. Never empty while
    /// the lightbox is mounted.
    pub items: Vec<GalleryItem>,
    pub cursor: usize,
    /// Emits -1 / +1 for prev / next.
    pub on_navigate: Callback<i32>,
    pub on_close: Callback<()>,
}

/// Full-viewport modal image viewer over the filtered gallery subset, with
/// wraparound prev/next and keyboard navigation.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    // Keyboard: arrows navigate, Escape closes. Listener lives only while
    // the lightbox is mounted, and re-registers whenever the parent hands
    // down fresh callbacks; a listener pinned to the mount-time callbacks
    // would keep stepping from the opening cursor forever.
    {
        use_effect_with_deps(
            move |(on_navigate, on_close): &(Callback<i32>, Callback<()>)| {
                let on_navigate = on_navigate.clone();
                let on_close = on_close.clone();
                let document = web_sys::window().and_then(|w| w.document());
                let callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                    match event.key().as_str() {
                        "ArrowLeft" => on_navigate.emit(-1),
                        "ArrowRight" => on_navigate.emit(1),
                        "Escape" => on_close.emit(()),
                        _ => {}
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
            (props.on_navigate.clone(), props.on_close.clone()),
        );
    }

    // Page scroll is locked while the viewer is open.
    use_effect_with_deps(
        move |_| {
            let body = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body());
            if let Some(body) = &body {
                let _ = body.style().set_property("overflow", "hidden");
            }
            move || {
                if let Some(body) = &body {
                    let _ = body.style().set_property("overflow", "");
                }
            }
        },
        (),
    );

    let Some(item) = props.items.get(props.cursor) else {
        log!(format!("lightbox cursor {} out of range", props.cursor));
        return html! {};
    };
    let src = format!("{}/{}", config::asset_base(), item.image);

    let prev = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(-1))
    };
    let next = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(1))
    };
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="lightbox">
            <style>
                {r#"
                    .lightbox {
                        position: fixed;
                        inset: 0;
                        z-index: 10001;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .lightbox-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.95);
                        backdrop-filter: blur(10px);
                    }
                    .lightbox-content {
                        position: relative;
                        max-width: 90vw;
                        max-height: 90vh;
                        background: white;
                        border-radius: 1rem;
                        overflow: hidden;
                        display: grid;
                        grid-template-columns: 1fr 300px;
                        min-height: 500px;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    }
                    .lightbox-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: rgba(0, 0, 0, 0.5);
                        color: white;
                        border: none;
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        font-size: 1.5rem;
                        cursor: pointer;
                        z-index: 10;
                    }
                    .lightbox-stage {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #f8f9fa;
                        overflow: hidden;
                    }
                    .lightbox-stage img {
                        max-width: 100%;
                        max-height: 90vh;
                        object-fit: contain;
                    }
                    .lightbox-fade {
                        animation: lightboxFade 0.15s ease-in both;
                    }
                    @keyframes lightboxFade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .lightbox-prev, .lightbox-next {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        background: rgba(0, 0, 0, 0.5);
                        color: white;
                        border: none;
                        width: 50px;
                        height: 50px;
                        border-radius: 50%;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .lightbox-prev { left: 1rem; }
                    .lightbox-next { right: 1rem; }
                    .lightbox-prev:hover, .lightbox-next:hover {
                        background: rgba(0, 0, 0, 0.8);
                    }
                    .lightbox-info {
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        background: white;
                    }
                    .lightbox-info h4 {
                        font-size: 1.5rem;
                        color: #1f2937;
                        margin-bottom: 1rem;
                    }
                    .lightbox-info p {
                        color: #6b7280;
                        line-height: 1.6;
                        margin-bottom: 2rem;
                    }
                    .lightbox-counter {
                        background: #f3f4f6;
                        padding: 0.5rem 1rem;
                        border-radius: 2rem;
                        text-align: center;
                        font-weight: 600;
                        color: #374151;
                        margin-top: auto;
                    }
                    @media (max-width: 768px) {
                        .lightbox-content {
                            grid-template-columns: 1fr;
                            grid-template-rows: 1fr auto;
                        }
                    }
                "#}
            </style>
            <div class="lightbox-overlay" onclick={close.clone()}></div>
            <div class="lightbox-content">
                <button class="lightbox-close" onclick={close}>{ "\u{00d7}" }</button>
                <div class="lightbox-stage">
                    // Keyed by source so cursor moves remount the image and
                    // replay the cross-fade.
                    <img key={src.clone()} class="lightbox-fade" src={src} alt={item.title} />
                    <button class="lightbox-prev" onclick={prev}>{ "\u{2039}" }</button>
                    <button class="lightbox-next" onclick={next}>{ "\u{203a}" }</button>
                </div>
                <div class="lightbox-info">
                    <h4>{ item.title }</h4>
                    <p>{ item.description }</p>
                    <div class="lightbox-counter">
                        { format!("{} of {}", props.cursor + 1, props.items.len()) }
                    </div>
                </div>
            </div>
        </div>
    }
}
