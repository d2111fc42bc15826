use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{Notice, Notifier};
use crate::components::reveal::Reveal;
use crate::forms::{validate_all, validate_field, FieldKind};

/// Simulated network round trip for the form submission.
const SUBMIT_DELAY_MS: u32 = 2500;

#[derive(Serialize)]
struct ContactPayload {
    name: String,
    email: String,
    phone: String,
    message: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum FieldId {
    Name,
    Email,
    Phone,
    Message,
}

impl FieldId {
    fn kind(self) -> FieldKind {
        match self {
            FieldId::Email => FieldKind::Email,
            FieldId::Phone => FieldKind::Phone,
            _ => FieldKind::Text,
        }
    }

    /// The phone number is the only optional field.
    fn required(self) -> bool {
        !matches!(self, FieldId::Phone)
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let notifier = use_context::<Notifier>();

    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(HashMap::<FieldId, &'static str>::new);
    let submitting = use_state_eq(|| false);
    let submit_timer = use_mut_ref(|| None::<Timeout>);

    let value_of = |field: FieldId| -> UseStateHandle<String> {
        match field {
            FieldId::Name => name.clone(),
            FieldId::Email => email.clone(),
            FieldId::Phone => phone.clone(),
            FieldId::Message => message.clone(),
        }
    };

    // Typing clears the field's error; leaving the field re-validates it.
    let oninput = |field: FieldId| {
        let value = value_of(field);
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            let text = match field {
                FieldId::Message => event.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => event.target_unchecked_into::<HtmlInputElement>().value(),
            };
            value.set(text);
            if errors.contains_key(&field) {
                let mut next = (*errors).clone();
                next.remove(&field);
                errors.set(next);
            }
        })
    };

    let onblur = |field: FieldId| {
        let value = value_of(field);
        let errors = errors.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*errors).clone();
            match validate_field(field.kind(), field.required(), &value) {
                Ok(()) => next.remove(&field),
                Err(why) => next.insert(field, why),
            };
            errors.set(next);
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let notifier = notifier.clone();
        let submit_timer = submit_timer.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }

            let fields = [
                (FieldId::Name, name.as_str()),
                (FieldId::Email, email.as_str()),
                (FieldId::Phone, phone.as_str()),
                (FieldId::Message, message.as_str()),
            ];
            let found = validate_all(
                &fields.map(|(id, value)| (id, id.kind(), id.required(), value)),
            );
            if !found.is_empty() {
                errors.set(found);
                if let Some(notifier) = &notifier {
                    notifier.emit(Notice::error(
                        "Please correct the errors in the form before submitting.",
                    ));
                }
                return;
            }

            let payload = ContactPayload {
                name: (*name).trim().to_string(),
                email: (*email).trim().to_string(),
                phone: (*phone).trim().to_string(),
                message: (*message).trim().to_string(),
            };
            log::info!(
                "simulating contact submission: {}",
                serde_json::to_string(&payload).unwrap_or_default()
            );

            submitting.set(true);
            let submitting = submitting.clone();
            let notifier = notifier.clone();
            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let message = message.clone();
            *submit_timer.borrow_mut() = Some(Timeout::new(SUBMIT_DELAY_MS, move || {
                submitting.set(false);
                if let Some(notifier) = &notifier {
                    notifier.emit(Notice::success(format!(
                        "Thank you, {}! Your message has been sent successfully. Our team \
                         will contact you within 24 hours to discuss your talc requirements.",
                        payload.name
                    )));
                }
                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                message.set(String::new());
            }));
        })
    };

    let field_error = |field: FieldId| -> Html {
        if let Some(why) = errors.get(&field) {
            html! { <div class="field-error">{ *why }</div> }
        } else {
            html! {}
        }
    };
    let field_class = |field: FieldId| -> Classes {
        classes!(errors.contains_key(&field).then_some("invalid"))
    };

    html! {
        <>
            <Reveal class={classes!("section-header")}>
                <h2>{ "Get in Touch" }</h2>
                <p>{ "Tell us the application and we will suggest a grade and send samples." }</p>
            </Reveal>

            <div class="contact-grid">
                <Reveal class={classes!("contact-item")}>
                    <h3>{ "Works & Office" }</h3>
                    <p>{ "Bhagwanpur Industrial Area, Haldwani, Uttarakhand 263139, India" }</p>
                    <p>{ "mvtalcind@gmail.com" }</p>
                    <p>{ "+91 94120 55555" }</p>
                </Reveal>

                <Reveal delay_ms={100} class={classes!("contact-form-wrap")}>
                    <form class="contact-form" {onsubmit}>
                        <label for="contact-name">{ "Name" }</label>
                        <input
                            id="contact-name"
                            type="text"
                            class={field_class(FieldId::Name)}
                            value={(*name).clone()}
                            oninput={oninput(FieldId::Name)}
                            onblur={onblur(FieldId::Name)}
                        />
                        { field_error(FieldId::Name) }

                        <label for="contact-email">{ "Email" }</label>
                        <input
                            id="contact-email"
                            type="email"
                            class={field_class(FieldId::Email)}
                            value={(*email).clone()}
                            oninput={oninput(FieldId::Email)}
                            onblur={onblur(FieldId::Email)}
                        />
                        { field_error(FieldId::Email) }

                        <label for="contact-phone">{ "Phone (optional)" }</label>
                        <input
                            id="contact-phone"
                            type="tel"
                            class={field_class(FieldId::Phone)}
                            value={(*phone).clone()}
                            oninput={oninput(FieldId::Phone)}
                            onblur={onblur(FieldId::Phone)}
                        />
                        { field_error(FieldId::Phone) }

                        <label for="contact-message">{ "Message" }</label>
                        <textarea
                            id="contact-message"
                            rows="5"
                            class={field_class(FieldId::Message)}
                            value={(*message).clone()}
                            oninput={oninput(FieldId::Message)}
                            onblur={onblur(FieldId::Message)}
                        />
                        { field_error(FieldId::Message) }

                        <button class="btn btn-primary" type="submit" disabled={*submitting}>
                            {
                                if *submitting {
                                    html! {
                                        <span class="btn-spinner-row">
                                            <span class="spinner"></span>
                                            { "Sending Message..." }
                                        </span>
                                    }
                                } else {
                                    html! { { "Send Message" } }
                                }
                            }
                        </button>
                    </form>
                </Reveal>
            </div>
        </>
    }
}
