use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_hooks::{use_click_away, use_window_size};
use yew_router::prelude::*;

use crate::components::ripple;
use crate::state::{NavState, Page};
use crate::Route;

/// Breakpoint above which the mobile menu can never stay open.
const DESKTOP_MIN_WIDTH: f64 = 768.0;

/// Top navigation bar: brand, page links with the active indicator, and the
/// burger-toggled mobile menu. Clicks are guarded by the navigation state so
/// a transition in flight ignores further requests.
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let nav = use_context::<UseReducerHandle<NavState>>()
        .expect("NavBar rendered outside the navigation context");
    let navigator = use_navigator();
    let route = use_route::<Route>();

    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);
    let menu_ref = use_node_ref();

    // Background solidifies once the page scrolls.
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let top = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.document_element())
                        .map(|e| e.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(top > 50);
                }) as Box<dyn FnMut()>);
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // The mobile menu closes on outside clicks and on desktop resize.
    use_click_away(menu_ref.clone(), {
        let menu_open = menu_open.clone();
        move |_| menu_open.set(false)
    });
    let (window_width, _) = use_window_size();
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |&width| {
                if width > DESKTOP_MIN_WIDTH {
                    menu_open.set(false);
                }
                || ()
            },
            window_width,
        );
    }

    let active = route.map(Page::from).unwrap_or(nav.current);

    let go_to = |page: Page| {
        let nav = nav.clone();
        let navigator = navigator.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            ripple::spawn(&event);
            menu_open.set(false);
            if let Some(target) = nav.begin(page) {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::from(target));
                }
            } else {
                log::debug!("navigation to {} ignored", page.slug());
            }
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    html! {
        <nav
            ref={menu_ref}
            class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}
        >
            <div class="nav-content">
                <a
                    class="nav-brand"
                    href={format!("#{}", Route::from(Page::Home).to_path())}
                    onclick={go_to(Page::Home)}
                >
                    { "Maa Vaishnavi TALC" }
                </a>
                <button
                    class={classes!("burger-menu", (*menu_open).then_some("active"))}
                    onclick={toggle_menu}
                    aria-label="Toggle navigation"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-links", (*menu_open).then_some("mobile-open"))}>
                    {
                        for Page::ALL.into_iter().map(|page| html! {
                            <a
                                key={page.slug()}
                                class={classes!(
                                    "nav-link",
                                    (page == active).then_some("active"),
                                )}
                                href={format!("#{}", Route::from(page).to_path())}
                                onclick={go_to(page)}
                            >
                                { page.title() }
                            </a>
                        })
                    }
                </div>
            </div>
        </nav>
    }
}
