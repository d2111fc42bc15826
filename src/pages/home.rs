use yew::prelude::*;

use crate::components::counter::AnimatedCounter;
use crate::components::reveal::Reveal;
use crate::components::ripple;
use crate::state::Page;
use crate::use_page_nav;

const HERO_STATS: &[(u32, &'static str, &'static str)] = &[
    (25, "+", "Years of Excellence"),
    (5000, "+", "Tonnes Annual Capacity"),
    (200, "+", "Satisfied Clients"),
    (12, "", "Countries Served"),
];

#[function_component(Home)]
pub fn home() -> Html {
    let go = use_page_nav();

    let cta = |page: Page| {
        let go = go.clone();
        Callback::from(move |event: MouseEvent| {
            ripple::spawn(&event);
            go.emit(page);
        })
    };

    html! {
        <>
            <section class="hero">
                <div class="hero-inner">
                    <h1>{ "Premium Talc for Global Industry" }</h1>
                    <p class="hero-subtitle">
                        { "Mining and micronizing high-purity soapstone in the \
                           foothills of Uttarakhand since 1998." }
                    </p>
                    <div class="hero-actions">
                        <button class="btn btn-primary" onclick={cta(Page::Products)}>
                            { "Explore Products" }
                        </button>
                        <button class="btn btn-outline" onclick={cta(Page::Contact)}>
                            { "Contact Us" }
                        </button>
                    </div>
                    <div class="hero-stats">
                        {
                            for HERO_STATS.iter().enumerate().map(|(i, &(target, suffix, label))| html! {
                                <div class="stat" key={label}>
                                    <AnimatedCounter
                                        {target}
                                        duration_ms={2500}
                                        delay_ms={800 + (i as u32) * 200}
                                        {suffix}
                                    />
                                    <div class="stat-label">{ label }</div>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <Reveal class={classes!("section-header")}>
                <h2>{ "Why Maa Vaishnavi TALC" }</h2>
                <p>{ "From captive mine to packed pallet, every step stays in-house." }</p>
            </Reveal>

            <section class="card-grid">
                {
                    for [
                        ("Captive Mining", "Our own open-cast soapstone mine guarantees \
                                            consistent ore chemistry year after year."),
                        ("Micron Control", "Air-classifier mills hold particle size \
                                            distributions to tight sub-10-micron specs."),
                        ("Assured Whiteness", "Batch-wise brightness testing keeps every \
                                               grade above 96% whiteness."),
                    ]
                    .into_iter()
                    .enumerate()
                    .map(|(i, (title, body))| html! {
                        <Reveal key={title} delay_ms={(i as u32) * 100} class={classes!("premium-card")}>
                            <h3>{ title }</h3>
                            <p>{ body }</p>
                        </Reveal>
                    })
                }
            </section>
        </>
    }
}
