use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

const RIPPLE_MS: u32 = 600;

/// Appends an expanding translucent circle to the clicked element, removed
/// after the animation finishes. Degrades to a logged no-op when the event
/// has no element target.
pub fn spawn(event: &MouseEvent) {
    let target = event
        .current_target()
        .and_then(|t| t.dyn_into::<HtmlElement>().ok());
    let Some(element) = target else {
        log::warn!("ripple: click event without an element target");
        return;
    };

    let rect = element.get_bounding_client_rect();
    let size = rect.width().max(rect.height());
    let x = f64::from(event.client_x()) - rect.left() - size / 2.0;
    let y = f64::from(event.client_y()) - rect.top() - size / 2.0;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    let _ = ripple.set_attribute(
        "style",
        &format!(
            "position: absolute; width: {size}px; height: {size}px; \
             left: {x}px; top: {y}px; background: rgba(255, 255, 255, 0.3); \
             border-radius: 50%; transform: scale(0); \
             animation: ripple {RIPPLE_MS}ms linear; pointer-events: none; z-index: 1;"
        ),
    );

    let style = element.style();
    let _ = style.set_property("position", "relative");
    let _ = style.set_property("overflow", "hidden");
    if element.append_child(&ripple).is_ok() {
        Timeout::new(RIPPLE_MS, move || ripple.remove()).forget();
    }
}
