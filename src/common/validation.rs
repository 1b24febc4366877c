// Common validation trait

use crate::notifications::Notifications;

/// Checks a value and records each failed rule in `notifications`.
///
/// Returns `true` when this validator recorded nothing. Validators never
/// stop at the first failure.
pub trait Validator<T> {
    fn validate(&self, data: &T, notifications: &mut Notifications) -> bool;
}
