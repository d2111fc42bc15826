use yew::prelude::*;

use crate::components::reveal::Reveal;

const SERVICES: &[(&str, &str)] = &[
    (
        "Custom Milling",
        "Toll micronizing of customer ore to an agreed particle size distribution.",
    ),
    (
        "Grade Development",
        "Joint lab trials to match a competitor grade or hit a new application spec.",
    ),
    (
        "Surface Treatment",
        "Stearate coating for polymer grades needing hydrophobic dispersion.",
    ),
    (
        "Export Logistics",
        "Containerized dispatch with fumigation, COA, and pre-shipment samples.",
    ),
    (
        "Technical Support",
        "Application engineers on call for loading, dosing, and dust-handling advice.",
    ),
    (
        "Quality Audits",
        "Plant and mine visits for customers qualifying a long-term supply chain.",
    ),
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <>
            <Reveal class={classes!("section-header")}>
                <h2>{ "Services" }</h2>
                <p>{ "Beyond the bag: everything needed to qualify and keep a talc supply." }</p>
            </Reveal>

            <section class="card-grid">
                {
                    for SERVICES.iter().enumerate().map(|(i, &(title, body))| html! {
                        <Reveal key={title} delay_ms={(i as u32) * 100} class={classes!("service-card")}>
                            <h3>{ title }</h3>
                            <p>{ body }</p>
                        </Reveal>
                    })
                }
            </section>
        </>
    }
}
