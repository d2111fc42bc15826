use yew::prelude::*;

use crate::components::modal::{lookup, CertModal, Certification};
use crate::components::reveal::Reveal;
use crate::config;

const VALUES: &[(&str, &str)] = &[
    ("Integrity", "Transparent grading, honest assays, and contracts we honor."),
    ("Consistency", "The same ore body, the same process, the same certificate of analysis."),
    ("Stewardship", "Progressive mine rehabilitation and dust-free processing."),
    ("Partnership", "Technical support from grade selection to trial runs."),
];

#[function_component(About)]
pub fn about() -> Html {
    let open_cert = use_state(|| None::<Certification>);

    let show = |key: &'static str| {
        let open_cert = open_cert.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(cert) = lookup(key) {
                open_cert.set(Some(cert.clone()));
            } else {
                log::warn!("unknown certification key: {key}");
            }
        })
    };

    let close = {
        let open_cert = open_cert.clone();
        Callback::from(move |_| open_cert.set(None))
    };

    html! {
        <>
            <Reveal class={classes!("section-header")}>
                <h2>{ "Our Story" }</h2>
            </Reveal>
            <Reveal class={classes!("story-content")}>
                <img
                    src={format!("{}/2020/09/finallaboutuscollage-1-1170x760.jpg", config::asset_base())}
                    alt="Plant collage"
                />
                <p>
                    { "Maa Vaishnavi TALC Industries began as a single jaw crusher beside \
                       a soapstone seam near Haldwani. Two decades later the same family \
                       runs a fully integrated operation: captive mining, sorting, \
                       micronizing, and export packing under one quality system." }
                </p>
            </Reveal>

            <Reveal class={classes!("section-header")}>
                <h2>{ "What We Stand For" }</h2>
            </Reveal>
            <section class="card-grid">
                {
                    for VALUES.iter().enumerate().map(|(i, &(title, body))| html! {
                        <Reveal key={title} delay_ms={(i as u32) * 100} class={classes!("value-card")}>
                            <h3>{ title }</h3>
                            <p>{ body }</p>
                        </Reveal>
                    })
                }
            </section>

            <Reveal class={classes!("section-header")}>
                <h2>{ "Certifications" }</h2>
                <p>{ "Click a certificate for details." }</p>
            </Reveal>
            <section class="card-grid cert-showcase">
                <Reveal class={classes!("certificate-card")}>
                    <div onclick={show("iso")}>
                        <h3>{ "ISO 9001:2015" }</h3>
                        <p>{ "Quality Management System" }</p>
                    </div>
                </Reveal>
                <Reveal delay_ms={100} class={classes!("certificate-card")}>
                    <div onclick={show("msme")}>
                        <h3>{ "MSME Registered" }</h3>
                        <p>{ "UDYAM-UK-07-0002622" }</p>
                    </div>
                </Reveal>
            </section>

            {
                if let Some(cert) = (*open_cert).clone() {
                    html! { <CertModal {cert} on_close={close} /> }
                } else {
                    html! {}
                }
            }
        </>
    }
}
