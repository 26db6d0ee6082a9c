//! Contact form state and the simulated submission cycle
//!
//! [`ContactForm`] holds the three free-text fields and the
//! [`SubmissionStatus`] of the current cycle. A cycle is driven by
//! [`submit`], which works against any [`FormStore`] so the same code runs
//! with Leptos signals in the browser and a plain mutex in tests.

use std::future::Future;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{FormError, SubmissionError};
use super::settings::SiteSettings;

/// Addressable form field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl FromStr for ContactField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ContactField::Name),
            "email" => Ok(ContactField::Email),
            "message" => Ok(ContactField::Message),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Field values, all empty by default
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Lifecycle of one submission cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// Form fields plus the status of the current submission
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFormFields,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFormFields {
        &self.fields
    }

    pub fn field(&self, field: ContactField) -> &str {
        self.fields.get(field)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    /// Whether a new cycle may start
    pub fn can_submit(&self) -> bool {
        !self.is_sending()
    }

    /// Update a field. Editing after a completed cycle returns to idle.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.fields.set(field, value);
        if self.status == SubmissionStatus::Sent {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Reset all fields. The status is left alone.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Move to `Sending` and hand back the payload to deliver
    pub fn begin_submit(&mut self) -> Result<ContactFormFields, SubmissionError> {
        if self.is_sending() {
            return Err(SubmissionError::InFlight);
        }
        self.status = SubmissionStatus::Sending;
        Ok(self.fields.clone())
    }

    /// Apply the outcome of the in-flight cycle.
    ///
    /// Success clears every field, including edits made while sending. A
    /// failure returns to `Idle` and keeps the fields for a retry.
    pub fn finish_submit(&mut self, result: &Result<(), SubmissionError>) {
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Sent;
                self.fields.clear();
            }
            Err(_) => {
                self.status = SubmissionStatus::Idle;
            }
        }
    }
}

/// Shared storage a submission cycle reads and writes through.
///
/// Returns `None` when the underlying state is gone (a disposed signal or a
/// poisoned lock).
pub trait FormStore {
    fn with_form<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> Option<T>;
}

impl<T: FormStore> FormStore for &T {
    fn with_form<U>(&self, f: impl FnOnce(&mut ContactForm) -> U) -> Option<U> {
        (**self).with_form(f)
    }
}

impl FormStore for Mutex<ContactForm> {
    fn with_form<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> Option<T> {
        self.lock().ok().map(|mut form| f(&mut form))
    }
}

/// Delivers a contact payload somewhere.
///
/// The shipped implementation only simulates delivery; a real endpoint plugs
/// in here.
pub trait ContactSubmitter {
    fn submit(
        &self,
        fields: ContactFormFields,
    ) -> impl Future<Output = Result<(), SubmissionError>>;
}

impl<T: ContactSubmitter> ContactSubmitter for &T {
    fn submit(
        &self,
        fields: ContactFormFields,
    ) -> impl Future<Output = Result<(), SubmissionError>> {
        (**self).submit(fields)
    }
}

/// Waits a fixed latency and then reports success, or a configured failure
#[derive(Clone, Debug)]
pub struct SimulatedSubmitter {
    latency: Duration,
    failure: Option<String>,
}

impl SimulatedSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            failure: None,
        }
    }

    pub fn from_settings(settings: &SiteSettings) -> Self {
        Self::new(Duration::from_millis(u64::from(settings.contact_latency_ms)))
    }

    /// A submitter whose every attempt fails after the latency
    pub fn failing(latency: Duration, reason: impl Into<String>) -> Self {
        Self {
            latency,
            failure: Some(reason.into()),
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    async fn submit(&self, _fields: ContactFormFields) -> Result<(), SubmissionError> {
        delay(self.latency).await;
        match &self.failure {
            Some(reason) => Err(SubmissionError::Failed(reason.clone())),
            None => Ok(()),
        }
    }
}

/// Run one submission cycle.
///
/// The form moves to `Sending` when this is called, before the returned
/// future is first polled. Fields are cleared only once the submitter
/// completes successfully. Pass references to keep ownership, or `Copy`
/// handles such as signals to get a `'static` future.
pub fn submit<S, C>(store: S, submitter: C) -> impl Future<Output = Result<(), SubmissionError>>
where
    S: FormStore,
    C: ContactSubmitter,
{
    let started = store
        .with_form(ContactForm::begin_submit)
        .ok_or(SubmissionError::Detached)
        .and_then(|begun| begun);

    async move {
        let payload = started?;
        let result = submitter.submit(payload).await;

        store
            .with_form(|form| form.finish_submit(&result))
            .ok_or(SubmissionError::Detached)?;
        result
    }
}

async fn delay(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    tokio::time::sleep(duration).await;
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    let _ = duration;
}
