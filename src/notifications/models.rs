// Notification records and the per-request accumulator

/// A single failure recorded while handling one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    field: Option<String>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

/// Ordered, append-only list of notifications for one operation.
///
/// There is no way to remove or edit a record once added; `all()` hands out
/// a shared slice so callers can read but never mutate the records.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Notifications {
    records: Vec<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message. Empty messages are kept as-is.
    pub fn add(&mut self, message: impl Into<String>) {
        self.records.push(Notification::new(message));
    }

    pub fn add_for(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.records.push(Notification::for_field(field, message));
    }

    pub fn push(&mut self, notification: Notification) {
        self.records.push(notification);
    }

    pub fn has_any(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn all(&self) -> &[Notification] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Messages only, in insertion order
    pub fn messages(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|n| n.message().to_string())
            .collect()
    }

    /// Appends every record of `other` after the existing ones
    pub fn merge(&mut self, other: Notifications) {
        self.records.extend(other.records);
    }
}

impl Extend<Notification> for Notifications {
    fn extend<I: IntoIterator<Item = Notification>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}
