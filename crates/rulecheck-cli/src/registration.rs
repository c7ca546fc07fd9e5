//! Sample data object validated by the CLI.

use rulecheck::Validate;

/// A user sign-up request.
#[derive(Debug, Clone, Validate)]
pub struct UserRegistration {
    #[rule(required)]
    #[rule(length(min = 10, max = 255))]
    pub user: String,

    #[rule(required)]
    #[rule(email)]
    pub email: String,
}

impl UserRegistration {
    pub fn new(user: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            email: email.into(),
        }
    }
}
