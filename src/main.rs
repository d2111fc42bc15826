use gloo_timers::callback::Timeout;
use log::{info, warn, Level};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod forms;
mod gallery;
mod state;

mod components {
    pub mod counter;
    pub mod lightbox;
    pub mod loading;
    pub mod modal;
    pub mod nav;
    pub mod notification;
    pub mod reveal;
    pub mod ripple;
}

mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod media;
    pub mod products;
    pub mod services;
    pub mod team;
}

use components::loading::LoadingScreen;
use components::nav::NavBar;
use components::notification::NotificationProvider;
use pages::{
    about::About, contact::Contact, home::Home, media::Media, products::Products,
    services::Services, team::Team,
};
use state::{NavAction, NavState, Page, VisualState, STORAGE_KEY, TRANSITION_MS};

#[derive(Clone, Copy, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/products")]
    Products,
    #[at("/services")]
    Services,
    #[at("/team")]
    Team,
    #[at("/media")]
    Media,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Route> for Page {
    fn from(route: Route) -> Self {
        match route {
            Route::Home => Page::Home,
            Route::About => Page::About,
            Route::Products => Page::Products,
            Route::Services => Page::Services,
            Route::Team => Page::Team,
            Route::Media => Page::Media,
            Route::Contact => Page::Contact,
            // Unrecognized fragments fall back to home.
            Route::NotFound => Page::Home,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home,
            Page::About => Route::About,
            Page::Products => Route::Products,
            Page::Services => Route::Services,
            Page::Team => Route::Team,
            Page::Media => Route::Media,
            Page::Contact => Route::Contact,
        }
    }
}

/// Cleared once the loading overlay has faded out; gates the hero counters
/// and the first page reveal.
#[derive(Clone, Copy, PartialEq)]
pub struct AppLoaded(pub bool);

/// Guarded page navigation for in-content buttons and links. No-ops while a
/// transition is in flight or when already on the target page.
#[hook]
pub fn use_page_nav() -> Callback<Page> {
    let nav = use_context::<UseReducerHandle<NavState>>()
        .expect("use_page_nav outside the navigation context");
    let navigator = use_navigator();
    Callback::from(move |page: Page| {
        if let Some(target) = nav.begin(page) {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::from(target));
            }
        }
    })
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn remember_page(page: Page) {
    if let Ok(Some(storage)) = web_sys::window().map_or(Ok(None), |w| w.session_storage()) {
        let _ = storage.set_item(STORAGE_KEY, page.slug());
    }
}

fn recall_page() -> Option<Page> {
    let storage = web_sys::window()?.session_storage().ok()??;
    let slug = storage.get_item(STORAGE_KEY).ok()??;
    Page::from_slug(&slug)
}

#[derive(Properties, PartialEq)]
struct ShellProps {
    page: Page,
}

/// Mounts the page subtree for the current route and drives its entry
/// transition: Entering → Animating → Visible over a fixed duration, then
/// settle (scroll to top, persist the page, re-enable navigation). Dropping
/// the pending timers on a route change cancels an interrupted transition.
#[function_component(PageShell)]
fn page_shell(props: &ShellProps) -> Html {
    let nav = use_context::<UseReducerHandle<NavState>>()
        .expect("PageShell rendered outside the navigation context");
    let visual = use_state_eq(|| VisualState::Entering);
    let shown_page = use_mut_ref(|| props.page);

    {
        let nav = nav.clone();
        let visual = visual.clone();
        let shown_page = shown_page.clone();
        use_effect_with_deps(
            move |&page| {
                *shown_page.borrow_mut() = page;
                info!("entering {} page", page.slug());
                nav.dispatch(NavAction::Begin(page));
                visual.set(VisualState::Entering);

                let slide = {
                    let visual = visual.clone();
                    Timeout::new(50, move || visual.set(VisualState::Animating))
                };
                let settle = Timeout::new(TRANSITION_MS + 50, move || {
                    visual.set(VisualState::Visible);
                    nav.dispatch(NavAction::Settle(page));
                    scroll_to_top();
                    remember_page(page);
                    info!("navigation to {} completed", page.slug());
                });

                move || {
                    drop(slide);
                    drop(settle);
                }
            },
            props.page,
        );
    }

    // Effects run after the commit; without this the first render of a new
    // page would briefly show it settled instead of at the animation start.
    let visual_now = if *shown_page.borrow() == props.page {
        *visual
    } else {
        VisualState::Entering
    };

    let inner = match props.page {
        Page::Home => html! { <Home /> },
        Page::About => html! { <About /> },
        Page::Products => html! { <Products /> },
        Page::Services => html! { <Services /> },
        Page::Team => html! { <Team /> },
        Page::Media => html! { <Media /> },
        Page::Contact => html! { <Contact /> },
    };

    html! {
        <main
            key={props.page.slug()}
            id={format!("page-{}", props.page.slug())}
            class={visual_now.class()}
        >
            { inner }
        </main>
    }
}

fn switch(route: Route) -> Html {
    if route == Route::NotFound {
        warn!("unknown fragment, falling back to home");
    }
    html! { <PageShell page={Page::from(route)} /> }
}

/// One-shot restore of the page persisted in session storage. Only applies
/// when the user landed without an explicit fragment.
#[function_component(SessionRestore)]
fn session_restore() -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>();

    use_effect_with_deps(
        move |_| {
            if matches!(route, Some(Route::Home) | None) {
                if let Some(saved) = recall_page().filter(|&p| p != Page::Home) {
                    info!("restoring last page: {}", saved.slug());
                    if let Some(navigator) = navigator {
                        Timeout::new(100, move || navigator.push(&Route::from(saved))).forget();
                    }
                }
            }
            || ()
        },
        (),
    );

    html! {}
}

#[function_component(App)]
fn app() -> Html {
    let nav = use_reducer(NavState::default);
    let loaded = use_state_eq(|| false);

    let on_loaded = {
        let loaded = loaded.clone();
        Callback::from(move |_| loaded.set(true))
    };

    html! {
        <ContextProvider<UseReducerHandle<NavState>> context={nav}>
        <ContextProvider<AppLoaded> context={AppLoaded(*loaded)}>
            <NotificationProvider>
                <HashRouter>
                    <style>{ GLOBAL_CSS }</style>
                    <SessionRestore />
                    <NavBar />
                    <Switch<Route> render={switch} />
                    {
                        if !*loaded {
                            html! { <LoadingScreen on_done={on_loaded} /> }
                        } else {
                            html! {}
                        }
                    }
                </HashRouter>
            </NotificationProvider>
        </ContextProvider<AppLoaded>>
        </ContextProvider<UseReducerHandle<NavState>>>
    }
}

const GLOBAL_CSS: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
        font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
        background: #f8fafc;
        color: #1f2937;
    }

    /* Page transitions */
    .page {
        max-width: 1200px;
        margin: 0 auto;
        padding: 90px 1.5rem 4rem;
    }
    .page-enter {
        opacity: 0;
        transform: translateX(20px);
    }
    .page-enter-active {
        opacity: 1;
        transform: translateX(0);
        transition: all 300ms cubic-bezier(0.4, 0, 0.2, 1);
    }

    /* Scroll reveals */
    .fade-in-up {
        opacity: 0;
        transform: translateY(30px);
        transition: all 0.8s cubic-bezier(0.4, 0, 0.2, 1);
    }
    .fade-in-up.animate {
        opacity: 1;
        transform: translateY(0);
    }

    /* Top navigation */
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 1000;
        background: rgba(255, 255, 255, 0.95);
        backdrop-filter: blur(8px);
        transition: box-shadow 0.3s ease;
    }
    .top-nav.scrolled { box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08); }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 1rem 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-brand {
        font-weight: 700;
        font-size: 1.1rem;
        color: #0EA5E9;
        text-decoration: none;
    }
    .nav-links { display: flex; gap: 1.25rem; }
    .nav-link {
        color: #374151;
        text-decoration: none;
        font-weight: 500;
        padding: 0.4rem 0.6rem;
        border-radius: 0.4rem;
    }
    .nav-link.active {
        color: #0EA5E9;
        background: rgba(14, 165, 233, 0.08);
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 4px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 6px;
    }
    .burger-menu span {
        width: 22px;
        height: 2px;
        background: #374151;
    }
    @media (max-width: 768px) {
        .burger-menu { display: flex; }
        .nav-links {
            display: none;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            flex-direction: column;
            background: white;
            padding: 1rem 1.5rem;
            box-shadow: 0 12px 24px rgba(0, 0, 0, 0.1);
        }
        .nav-links.mobile-open { display: flex; }
    }

    /* Hero */
    .hero {
        padding: 4rem 0 2rem;
        text-align: center;
    }
    .hero h1 {
        font-size: clamp(2rem, 5vw, 3.2rem);
        margin-bottom: 1rem;
    }
    .hero-subtitle {
        color: #6b7280;
        max-width: 560px;
        margin: 0 auto 2rem;
    }
    .hero-actions {
        display: flex;
        gap: 1rem;
        justify-content: center;
        margin-bottom: 3rem;
    }
    .hero-stats, .stats-row {
        display: flex;
        flex-wrap: wrap;
        gap: 2.5rem;
        justify-content: center;
    }
    .stat { text-align: center; }
    .stat-number {
        display: inline-block;
        font-size: 2.2rem;
        font-weight: 700;
        color: #0EA5E9;
        transition: transform 0.2s ease;
    }
    .stat-number.stat-pulse { transform: scale(1.05); }
    .stat-label { color: #6b7280; font-size: 0.9rem; }

    /* Cards */
    .section-header {
        text-align: center;
        margin: 3.5rem 0 1.5rem;
    }
    .section-header p { color: #6b7280; }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 1.5rem;
    }
    .premium-card, .service-card, .value-card, .team-member,
    .contact-item, .download-item, .certificate-card, .contact-form-wrap {
        background: white;
        border-radius: 1rem;
        padding: 1.75rem;
        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.07);
        transition: transform 0.3s cubic-bezier(0.4, 0, 0.2, 1),
                    box-shadow 0.3s cubic-bezier(0.4, 0, 0.2, 1);
    }
    .premium-card:hover, .service-card:hover, .value-card:hover,
    .team-member:hover, .certificate-card:hover {
        transform: translateY(-8px);
        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.1);
    }
    .certificate-card { cursor: pointer; text-align: center; }
    .card-grid h3 { margin-bottom: 0.5rem; }
    .card-grid p { color: #6b7280; line-height: 1.6; }
    .team-role { color: #0EA5E9; font-weight: 600; margin-bottom: 0.5rem; }
    .spec-list { margin-top: 0.75rem; padding-left: 1.2rem; color: #6b7280; }
    .story-content {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 2rem;
        align-items: center;
    }
    .story-content img { width: 100%; border-radius: 1rem; }
    @media (max-width: 768px) { .story-content { grid-template-columns: 1fr; } }

    /* Buttons */
    .btn {
        border: none;
        border-radius: 0.6rem;
        padding: 0.75rem 1.5rem;
        font-weight: 600;
        cursor: pointer;
        font-size: 1rem;
    }
    .btn:disabled { opacity: 0.7; cursor: default; }
    .btn-primary { background: #0EA5E9; color: white; }
    .btn-outline {
        background: none;
        border: 2px solid #0EA5E9;
        color: #0EA5E9;
    }
    .btn-spinner-row {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        justify-content: center;
    }
    .spinner {
        width: 16px;
        height: 16px;
        border: 2px solid rgba(255, 255, 255, 0.3);
        border-top: 2px solid white;
        border-radius: 50%;
        animation: spin 1s linear infinite;
    }
    @keyframes spin { to { transform: rotate(360deg); } }
    @keyframes ripple {
        to { transform: scale(2); opacity: 0; }
    }

    /* Gallery */
    .filter-bar {
        display: flex;
        flex-wrap: wrap;
        gap: 0.75rem;
        justify-content: center;
        margin-bottom: 2rem;
    }
    .filter-btn {
        border: 1px solid #d1d5db;
        background: white;
        border-radius: 2rem;
        padding: 0.5rem 1.25rem;
        cursor: pointer;
        font-weight: 500;
    }
    .filter-btn.active {
        background: #0EA5E9;
        border-color: #0EA5E9;
        color: white;
    }
    .gallery-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
        gap: 1.25rem;
    }
    .gallery-item {
        border-radius: 1rem;
        overflow: hidden;
        background: white;
        cursor: pointer;
        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.07);
    }
    .gallery-item img {
        width: 100%;
        height: 180px;
        object-fit: cover;
        display: block;
    }
    .gallery-item figcaption { padding: 1rem; }
    .gallery-item figcaption p { color: #6b7280; font-size: 0.9rem; }
    .gallery-item.show { animation: galleryIn 0.4s cubic-bezier(0.4, 0, 0.2, 1) both; }
    .gallery-item.leaving { animation: galleryOut 0.3s ease both; }
    .gallery-item.gone { display: none; }
    @keyframes galleryIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes galleryOut {
        from { opacity: 1; transform: translateY(0); }
        to { opacity: 0; transform: translateY(-20px); }
    }

    /* Contact form */
    .contact-grid {
        display: grid;
        grid-template-columns: 1fr 1.5fr;
        gap: 1.5rem;
        align-items: start;
    }
    @media (max-width: 768px) { .contact-grid { grid-template-columns: 1fr; } }
    .contact-form { display: flex; flex-direction: column; gap: 0.4rem; }
    .contact-form label { font-weight: 600; margin-top: 0.6rem; }
    .contact-form input, .contact-form textarea {
        border: 1px solid #d1d5db;
        border-radius: 0.5rem;
        padding: 0.65rem 0.8rem;
        font-size: 1rem;
        font-family: inherit;
    }
    .contact-form input.invalid, .contact-form textarea.invalid {
        border-color: #EF4444;
    }
    .contact-form button { margin-top: 1rem; }
    .field-error {
        color: #EF4444;
        font-size: 0.875rem;
        font-weight: 500;
        animation: shake 0.3s ease-in-out;
    }
    @keyframes shake {
        0%, 100% { transform: translateX(0); }
        25% { transform: translateX(-5px); }
        75% { transform: translateX(5px); }
    }
"#;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("starting mvtalc-web");
    yew::Renderer::<App>::new().render();
}
