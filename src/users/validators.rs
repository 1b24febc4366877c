use regex::Regex;
use std::sync::OnceLock;

use super::models::RegisterUserRequest;
use crate::common::Validator;
use crate::notifications::Notifications;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 255;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

/// Validator for user registration requests
pub struct RegisterUserValidator;

impl Validator<RegisterUserRequest> for RegisterUserValidator {
    fn validate(&self, data: &RegisterUserRequest, notifications: &mut Notifications) -> bool {
        let before = notifications.len();

        let name = data.name.trim();
        if name.is_empty() {
            notifications.add_for("name", "name is required");
        } else if name.chars().count() > MAX_NAME_LENGTH {
            notifications.add_for(
                "name",
                format!("name must not exceed {} characters", MAX_NAME_LENGTH),
            );
        }

        let email = data.email.trim();
        if email.is_empty() {
            notifications.add_for("email", "email is required");
        } else if email.len() > MAX_EMAIL_LENGTH {
            notifications.add_for(
                "email",
                format!("email must not exceed {} characters", MAX_EMAIL_LENGTH),
            );
        } else if !email_pattern().is_match(email) {
            notifications.add_for("email", "email must be a valid address");
        }

        notifications.len() == before
    }
}
