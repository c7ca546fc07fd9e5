//! # rulecheck
//!
//! Declarative field validation. Annotate struct fields with rule markers,
//! then run the validation engine to collect per-field error messages.
//!
//! ## Example
//!
//! ```rust
//! use rulecheck::Validate;
//!
//! #[derive(Validate)]
//! struct UserRegistration {
//!     #[rule(required, length(min = 10, max = 255))]
//!     user: String,
//!
//!     #[rule(required, email)]
//!     email: String,
//! }
//!
//! let registration = UserRegistration {
//!     user: "Tio Jobs".to_string(),
//!     email: "admin@admin.com".to_string(),
//! };
//!
//! let report = registration.validate();
//! assert_eq!(
//!     report.get("user").unwrap(),
//!     ["Invalid value for 'user' using 'Length' validation."]
//! );
//! assert!(report.get("email").is_none());
//! ```
//!
//! ## Rules
//!
//! - `required` - Rejects absent, zero, `false`, empty-string and empty-collection values
//! - `length(min = X, max = Y)` - Character count within `X..=Y` (inclusive)
//! - `email` - Validates `local@domain.tld` syntax
//!
//! ## Error Format
//!
//! Every failed rule adds the message
//! `Invalid value for '<field>' using '<Rule>' validation.` under the field's
//! key. The report serializes to JSON as a field map:
//!
//! ```json
//! {
//!   "user": ["Invalid value for 'user' using 'Length' validation."]
//! }
//! ```

// Lets the derive's `::rulecheck` paths resolve inside this crate's own tests.
extern crate self as rulecheck;

mod engine;
mod marker;
mod report;
mod strategy;
mod value;

pub use engine::{validate, Field, FieldSet, Validate, Validator};
pub use marker::RuleMarker;
pub use report::{EmptyFieldError, ValidationError, ValidationReport};
pub use strategy::{EmailValidator, LengthValidator, RequiredValidator, Strategy};
pub use value::{AsFieldValue, FieldValue};

/// Derive macro generating the [`Validate`] field table from `#[rule(...)]` attributes.
pub use rulecheck_macros::Validate;

/// Prelude module for validation
pub mod prelude {
    pub use crate::engine::{validate, Field, FieldSet, Validate, Validator};
    pub use crate::marker::RuleMarker;
    pub use crate::report::{EmptyFieldError, ValidationError, ValidationReport};
    pub use crate::value::{AsFieldValue, FieldValue};
    pub use rulecheck_macros::Validate;
}
