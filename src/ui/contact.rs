//! Contact form component
//!
//! Holds a [`ContactForm`] in a signal and runs submission cycles with the
//! simulated submitter configured through [`SiteSettings`].

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{
    ContactField, ContactForm, FormStore, SimulatedSubmitter, SiteSettings, SubmissionError,
    SubmissionStatus, submit,
};
use crate::ui::icon::{Icon, icons};

/// Text shown when a submission fails
pub const FAILURE_ALERT: &str =
    "Failed to send. This form is a placeholder: connect it to your contact API.";

impl FormStore for RwSignal<ContactForm> {
    fn with_form<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> Option<T> {
        self.try_update(f)
    }
}

/// Surface a failed cycle to the user
fn report_failure(error: &SubmissionError) {
    match error {
        SubmissionError::InFlight => {
            leptos::logging::log!("Ignoring submit while a message is being sent");
        }
        SubmissionError::Detached => {
            leptos::logging::warn!("Contact form went away before the submission finished");
        }
        SubmissionError::Failed(reason) => {
            leptos::logging::error!("Contact submission failed: {}", reason);
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(FAILURE_ALERT);
                }
            }
        }
    }
}

/// Contact form with Send and Clear actions
#[component]
pub fn ContactFormPanel(
    /// Label for the submit button while idle
    #[prop(default = "Send Message")]
    submit_label: &'static str,
    /// Show the Clear button
    #[prop(default = true)]
    show_clear: bool,
) -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let submitter = SimulatedSubmitter::from_settings(&settings);
    let form = RwSignal::new(ContactForm::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let cycle = submit(form, submitter.clone());
        spawn_local(async move {
            if let Err(error) = cycle.await {
                report_failure(&error);
            }
        });
    };

    let is_sending = move || form.with(ContactForm::is_sending);
    let is_sent = move || form.with(|f| f.status() == SubmissionStatus::Sent);

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <FormInput form=form field=ContactField::Name label="Name" placeholder="Jane Doe" />
            <FormInput
                form=form
                field=ContactField::Email
                label="Email"
                placeholder="you@company.com"
                input_type="email"
            />
            <div>
                <label class="text-xs text-slate-400" for="contact-message">"Message"</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="4"
                    class="contact-input"
                    placeholder="Tell us what you need..."
                    prop:value=move || form.with(|f| f.field(ContactField::Message).to_string())
                    on:input=move |ev| {
                        form.update(|f| f.set_field(ContactField::Message, event_target_value(&ev)));
                    }
                ></textarea>
            </div>

            <div class="flex items-center gap-3">
                <button
                    type="submit"
                    class="landing-btn-primary inline-flex items-center gap-2"
                    disabled=is_sending
                >
                    {move || if is_sending() { "Sending..." } else { submit_label }}
                    <Icon name=icons::SEND class="w-4 h-4" />
                </button>
                {show_clear.then(|| view! {
                    <button
                        type="button"
                        class="landing-btn-secondary"
                        on:click=move |_| form.update(ContactForm::clear)
                    >
                        "Clear"
                    </button>
                })}
            </div>

            <Show when=is_sent>
                <div class="text-sm text-emerald-400" role="status">
                    "Thanks! We'll get back to you within 24 hours."
                </div>
            </Show>
        </form>
    }
}

/// Single-line input bound to one form field
#[component]
fn FormInput(
    form: RwSignal<ContactForm>,
    field: ContactField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")]
    input_type: &'static str,
) -> impl IntoView {
    let id = format!("contact-{}", field.as_str());

    view! {
        <div>
            <label class="text-xs text-slate-400" for=id.clone()>{label}</label>
            <input
                id=id
                name=field.as_str()
                type=input_type
                class="contact-input"
                placeholder=placeholder
                prop:value=move || form.with(|f| f.field(field).to_string())
                on:input=move |ev| {
                    form.update(|f| f.set_field(field, event_target_value(&ev)));
                }
            />
        </div>
    }
}
