//! Contact form posting to the configured email relay.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::net::contact::ContactMessage;
use crate::state::contact::{ContactState, FormStatus};

/// Hide the status line after `delay_ms` unless it changed in the meantime.
fn schedule_hide(contact: RwSignal<ContactState>, seq: u64, delay_ms: u32) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        contact.update(|c| c.hide_if_current(seq));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (contact, seq, delay_ms);
    }
}

/// Send `message` in the background and report the outcome on the form.
fn send(config: SiteConfig, contact: RwSignal<ContactState>, message: ContactMessage) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let delivered = match crate::net::contact::submit(&config.relay, &message).await {
            Ok(()) => true,
            Err(err) => {
                log::error!("contact form: {err}");
                false
            }
        };
        let mut seq = 0;
        contact.update(|c| seq = c.finish(delivered));
        schedule_hide(contact, seq, config.status_hide_ms);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, contact, message);
    }
}

/// Contact form with name, email, optional phone, and message.
#[component]
pub fn ContactForm() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let contact = expect_context::<RwSignal<ContactState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if contact.with_untracked(|c| c.status == FormStatus::Sending) {
            return;
        }
        match contact.with_untracked(ContactState::draft) {
            Ok(message) => {
                contact.update(|c| {
                    c.set_status(FormStatus::Sending);
                });
                send(config.clone(), contact, message);
            }
            Err(err) => {
                log::debug!("contact form rejected: {err}");
                let mut seq = 0;
                contact.update(|c| seq = c.set_status(FormStatus::Invalid(err.to_string())));
                schedule_hide(contact, seq, config.status_hide_ms);
            }
        }
    };

    let status_class = move || contact.with(|c| format!("form-message {}", c.status.class()));
    let status_text = move || contact.with(|c| c.status.message().map(str::to_owned));

    view! {
        <form id="contactForm" class="contact-form glass" on:submit=on_submit>
            <input
                type="text"
                name="name"
                placeholder="Your name"
                required=true
                prop:value=move || contact.with(|c| c.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    contact.update(|c| c.name = value);
                }
            />
            <input
                type="email"
                name="email"
                placeholder="Your email"
                required=true
                prop:value=move || contact.with(|c| c.email.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    contact.update(|c| c.email = value);
                }
            />
            <input
                type="tel"
                name="phone"
                placeholder="Phone (optional)"
                prop:value=move || contact.with(|c| c.phone.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    contact.update(|c| c.phone = value);
                }
            />
            <textarea
                name="message"
                rows="5"
                placeholder="Your message"
                required=true
                prop:value=move || contact.with(|c| c.message.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    contact.update(|c| c.message = value);
                }
            ></textarea>
            <button
                type="submit"
                class="btn btn--primary"
                disabled=move || contact.with(|c| c.status == FormStatus::Sending)
            >
                "Send Message"
            </button>
            <Show when=move || status_text().is_some()>
                <div id="formMessage" class=status_class>
                    {status_text}
                </div>
            </Show>
        </form>
    }
}
