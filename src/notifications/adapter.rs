// Maps errors produced outside our validators into notifications

use axum::extract::rejection::JsonRejection;
use std::error::Error;

use super::models::{Notification, Notifications};

/// An error record produced by something other than our own validators,
/// e.g. the framework's request extraction.
pub trait ExternalError {
    /// Generic display message
    fn message(&self) -> String;

    /// Underlying cause, preferred over `message` when present
    fn cause(&self) -> Option<&(dyn Error + 'static)>;

    fn field(&self) -> Option<&str> {
        None
    }
}

/// A field-level error with an optional underlying cause
#[derive(Debug)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub cause: Option<Box<dyn Error + Send + Sync>>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}

impl ExternalError for FieldError {
    fn message(&self) -> String {
        self.message.clone()
    }

    fn cause(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|e| e as &(dyn Error + 'static))
    }

    fn field(&self) -> Option<&str> {
        Some(&self.field)
    }
}

impl ExternalError for JsonRejection {
    fn message(&self) -> String {
        self.body_text()
    }

    fn cause(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(self)
    }
}

/// Converts external errors one-to-one, keeping their order
pub fn external_errors_to_notifications<'a, E, I>(errors: I) -> Vec<Notification>
where
    E: ExternalError + ?Sized + 'a,
    I: IntoIterator<Item = &'a E>,
{
    errors
        .into_iter()
        .map(|error| {
            let message = match error.cause() {
                Some(cause) => cause.to_string(),
                None => error.message(),
            };
            match error.field() {
                Some(field) => Notification::for_field(field, message),
                None => Notification::new(message),
            }
        })
        .collect()
}

impl Notifications {
    pub fn add_external<'a, E, I>(&mut self, errors: I)
    where
        E: ExternalError + ?Sized + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        self.extend(external_errors_to_notifications(errors));
    }
}
