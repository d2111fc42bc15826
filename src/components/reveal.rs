use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Bottom margin: an element counts as "in view" once its top edge clears
/// the viewport bottom by this many pixels.
const REVEAL_MARGIN_PX: f64 = 50.0;

fn crossed_threshold(top: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_MARGIN_PX
}

/// Fires once when the referenced element first scrolls into view, then
/// stays true. Checks on mount and on every window scroll; after the first
/// hit a latch makes further scroll events an immediate no-op.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node| {
                let node = node.clone();
                // The state handle deref inside the closure would be the
                // mount-time snapshot; the latch carries the real "already
                // revealed" flag.
                let revealed = Rc::new(Cell::new(false));
                let check = move || {
                    if revealed.get() {
                        return;
                    }
                    let Some(window) = web_sys::window() else { return };
                    let Some(element) = node.cast::<Element>() else { return };
                    let viewport = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    if crossed_threshold(element.get_bounding_client_rect().top(), viewport) {
                        revealed.set(true);
                        visible.set(true);
                    }
                };

                check();

                let window = web_sys::window();
                let callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            node,
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    /// Index-proportional stagger delay for grouped reveals.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Wraps a block that starts hidden and fades up the first time it enters
/// the viewport. Once revealed it is never re-hidden.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone());

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("fade-in-up", revealed.then_some("animate"), props.class.clone())}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_respects_the_bottom_margin() {
        // 800 px viewport: elements reveal only once their top edge clears
        // the bottom by more than the margin.
        assert!(crossed_threshold(700.0, 800.0));
        assert!(!crossed_threshold(750.0, 800.0));
        assert!(!crossed_threshold(800.0, 800.0));
        // Above the viewport top counts as in view.
        assert!(crossed_threshold(-100.0, 800.0));
    }
}
