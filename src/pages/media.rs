use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::lightbox::Lightbox;
use crate::components::notification::{Notice, Notifier};
use crate::components::reveal::Reveal;
use crate::components::ripple;
use crate::config;
use crate::gallery::{self, Filter, GalleryItem, ITEMS};

/// How long the leave animation runs before filtered-out items collapse out
/// of the layout.
const LEAVE_MS: u32 = 300;
const STAGGER_MS: u32 = 50;

const DOWNLOADS: &[(&str, &str)] = &[
    ("Company Brochure", "Plant, mine, and grade overview (PDF)"),
    ("Grade Specification Sheet", "Typical values for all five grade families (PDF)"),
    ("ISO 9001 Certificate", "Current certificate copy (PDF)"),
];

/// Media page: category-filtered image gallery with a lightbox viewer, plus
/// simulated document downloads. Mounting afresh on navigation resets the
/// filter to All with every item visible.
#[function_component(Media)]
pub fn media() -> Html {
    let filter = use_state_eq(Filter::default);
    // True once the leave animation of the last filter change has finished
    // and hidden items may drop out of the layout.
    let collapsed = use_state_eq(|| true);
    let collapse_timer = use_mut_ref(|| None::<Timeout>);
    // Cursor into the filtered subset while the lightbox is open.
    let lightbox = use_state_eq(|| None::<usize>);

    let pick_filter = |next: Filter| {
        let filter = filter.clone();
        let collapsed = collapsed.clone();
        let collapse_timer = collapse_timer.clone();
        Callback::from(move |event: MouseEvent| {
            ripple::spawn(&event);
            filter.set(next);
            collapsed.set(false);
            let collapsed = collapsed.clone();
            // Replacing the handle cancels the timer of a rapid refilter.
            *collapse_timer.borrow_mut() =
                Some(Timeout::new(LEAVE_MS, move || collapsed.set(true)));
        })
    };

    let visible = gallery::visible_indices(ITEMS, *filter);

    let open_lightbox = |index: usize| {
        let lightbox = lightbox.clone();
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(position) = visible.iter().position(|&i| i == index) {
                lightbox.set(Some(position));
            }
        })
    };

    let filtered: Vec<GalleryItem> = visible.iter().map(|&i| ITEMS[i].clone()).collect();

    let on_navigate = {
        let lightbox = lightbox.clone();
        let len = filtered.len();
        Callback::from(move |delta: i32| {
            if let (Some(cursor), true) = (*lightbox, len > 0) {
                lightbox.set(Some(gallery::step(cursor, len, delta)));
            }
        })
    };
    let on_close = {
        let lightbox = lightbox.clone();
        Callback::from(move |_| lightbox.set(None))
    };

    html! {
        <>
            <Reveal class={classes!("section-header")}>
                <h2>{ "Gallery" }</h2>
                <p>{ "Mine, mill, and dispatch as they look today." }</p>
            </Reveal>

            <div class="filter-bar">
                {
                    for std::iter::once(Filter::All)
                        .chain(gallery::Category::ALL.into_iter().map(Filter::Only))
                        .map(|f| html! {
                            <button
                                key={f.key()}
                                class={classes!("filter-btn", (f == *filter).then_some("active"))}
                                onclick={pick_filter(f)}
                            >
                                { f.label() }
                            </button>
                        })
                }
            </div>

            <section class="gallery-grid">
                {
                    for ITEMS.iter().enumerate().map(|(index, item)| {
                        let shown = filter.matches(item.category);
                        let class = if shown {
                            "gallery-item show"
                        } else if *collapsed {
                            "gallery-item gone"
                        } else {
                            "gallery-item leaving"
                        };
                        let position = visible.iter().position(|&i| i == index).unwrap_or(0);
                        let style = shown
                            .then(|| format!("animation-delay: {}ms;", position as u32 * STAGGER_MS));
                        html! {
                            // Keyed per filter so matches replay their entry
                            // animation after each filter change.
                            <figure
                                key={format!("{}-{}", filter.key(), index)}
                                {class}
                                {style}
                                onclick={open_lightbox(index)}
                            >
                                <img
                                    src={format!("{}/{}", config::asset_base(), item.image)}
                                    alt={item.title}
                                    loading="lazy"
                                />
                                <figcaption>
                                    <h4>{ item.title }</h4>
                                    <p>{ item.description }</p>
                                </figcaption>
                            </figure>
                        }
                    })
                }
            </section>

            {
                if let Some(cursor) = *lightbox {
                    html! {
                        <Lightbox
                            items={filtered.clone()}
                            {cursor}
                            {on_navigate}
                            {on_close}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <Reveal class={classes!("section-header")}>
                <h2>{ "Downloads" }</h2>
            </Reveal>
            <section class="card-grid downloads-grid">
                {
                    for DOWNLOADS.iter().enumerate().map(|(i, &(title, blurb))| html! {
                        <Reveal key={title} delay_ms={(i as u32) * 100} class={classes!("download-item")}>
                            <h4>{ title }</h4>
                            <p>{ blurb }</p>
                            <DownloadButton {title} />
                        </Reveal>
                    })
                }
            </section>
        </>
    }
}

const DOWNLOAD_DELAY_MS: u32 = 2000;

#[derive(Properties, PartialEq)]
struct DownloadProps {
    title: &'static str,
}

/// Simulated document download: the button spins for a moment, then an info
/// notification points at the sales inbox. Nothing leaves the browser.
#[function_component(DownloadButton)]
fn download_button(props: &DownloadProps) -> Html {
    let notifier = use_context::<Notifier>();
    let busy = use_state_eq(|| false);
    let timer = use_mut_ref(|| None::<Timeout>);

    let title = props.title;
    let onclick = {
        let busy = busy.clone();
        Callback::from(move |event: MouseEvent| {
            if *busy {
                return;
            }
            ripple::spawn(&event);
            busy.set(true);
            let busy = busy.clone();
            let notifier = notifier.clone();
            *timer.borrow_mut() = Some(Timeout::new(DOWNLOAD_DELAY_MS, move || {
                busy.set(false);
                if let Some(notifier) = &notifier {
                    notifier.emit(Notice::info(format!(
                        "{title} download will be available soon. Please contact our team \
                         at mvtalcind@gmail.com for immediate access to the document."
                    )));
                }
            }));
        })
    };

    html! {
        <button class="btn btn-primary download-btn" disabled={*busy} {onclick}>
            {
                if *busy {
                    html! { <span class="btn-spinner-row"><span class="spinner"></span>{ "Downloading..." }</span> }
                } else {
                    html! { { "Download" } }
                }
            }
        </button>
    }
}
