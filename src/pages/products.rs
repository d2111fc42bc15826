use yew::prelude::*;

use crate::components::counter::AnimatedCounter;
use crate::components::reveal::Reveal;

struct Grade {
    name: &'static str,
    use_case: &'static str,
    specs: &'static [&'static str],
}

const GRADES: &[Grade] = &[
    Grade {
        name: "Cosmetic Grade",
        use_case: "Body powders, pressed compacts, and soap finishing.",
        specs: &["98% whiteness", "D50 6 \u{00b5}m", "Asbestos free"],
    },
    Grade {
        name: "Pharma Grade",
        use_case: "Tablet glidant and anti-caking excipient.",
        specs: &["IP/BP compliant", "Low heavy metals", "Steam sterilizable"],
    },
    Grade {
        name: "Paper Grade",
        use_case: "Filler and pitch control for writing and packaging papers.",
        specs: &["High brightness", "Low abrasion", "Controlled top cut"],
    },
    Grade {
        name: "Paint Grade",
        use_case: "Matting and reinforcing extender for decorative coatings.",
        specs: &["Lamellar habit", "Low oil absorption", "Tight residue spec"],
    },
    Grade {
        name: "Polymer Grade",
        use_case: "Stiffness modifier for polypropylene compounds.",
        specs: &["Sub-5-micron", "Surface treated", "Low moisture"],
    },
];

#[function_component(Products)]
pub fn products() -> Html {
    html! {
        <>
            <Reveal class={classes!("section-header")}>
                <h2>{ "Talc Grades" }</h2>
                <p>{ "Five families of grades, each milled and classified to order." }</p>
            </Reveal>

            <section class="card-grid">
                {
                    for GRADES.iter().enumerate().map(|(i, grade)| html! {
                        <Reveal key={grade.name} delay_ms={(i as u32) * 100} class={classes!("premium-card")}>
                            <h3>{ grade.name }</h3>
                            <p>{ grade.use_case }</p>
                            <ul class="spec-list">
                                { for grade.specs.iter().map(|spec| html! {
                                    <li key={*spec}>{ *spec }</li>
                                }) }
                            </ul>
                        </Reveal>
                    })
                }
            </section>

            <Reveal class={classes!("section-header")}>
                <h2>{ "Production at a Glance" }</h2>
            </Reveal>
            <section class="stats-row">
                <div class="stat">
                    <AnimatedCounter target={5000} suffix="+" />
                    <div class="stat-label">{ "Tonnes Milled / Year" }</div>
                </div>
                <div class="stat">
                    <AnimatedCounter target={5} />
                    <div class="stat-label">{ "Grade Families" }</div>
                </div>
                <div class="stat">
                    <AnimatedCounter target={98} suffix="%" />
                    <div class="stat-label">{ "Typical Whiteness" }</div>
                </div>
            </section>
        </>
    }
}
