use yew::prelude::*;

use crate::components::reveal::Reveal;

const MEMBERS: &[(&str, &str, &str)] = &[
    (
        "Rajesh Agarwal",
        "Managing Director",
        "Third-generation miner; leads grade strategy and export relationships.",
    ),
    (
        "Sunita Agarwal",
        "Director, Finance",
        "Keeps the books, the bank, and the working capital honest.",
    ),
    (
        "Vikram Joshi",
        "Plant Head",
        "Twenty years running mills; owns throughput, safety, and uptime.",
    ),
    (
        "Dr. Meera Nair",
        "Quality Manager",
        "Runs the lab: whiteness, PSD, and the ISO 9001 system.",
    ),
    (
        "Arun Bisht",
        "Mine Superintendent",
        "Plans benches and blending so the ore feed never drifts.",
    ),
    (
        "Kavita Rawat",
        "Exports Lead",
        "Documentation, containers, and on-time dispatch across 12 countries.",
    ),
];

#[function_component(Team)]
pub fn team() -> Html {
    html! {
        <>
            <Reveal class={classes!("section-header")}>
                <h2>{ "Leadership & Operations" }</h2>
                <p>{ "A small team that has worked the same seam for decades." }</p>
            </Reveal>

            <section class="card-grid">
                {
                    for MEMBERS.iter().enumerate().map(|(i, &(name, role, bio))| html! {
                        <Reveal key={name} delay_ms={(i as u32) * 100} class={classes!("team-member")}>
                            <h3>{ name }</h3>
                            <div class="team-role">{ role }</div>
                            <p>{ bio }</p>
                        </Reveal>
                    })
                }
            </section>
        </>
    }
}
