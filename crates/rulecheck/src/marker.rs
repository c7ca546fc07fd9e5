//! Rule markers.

use crate::strategy::{EmailValidator, LengthValidator, RequiredValidator, Strategy};
use crate::value::FieldValue;
use std::fmt;

/// A declarative validation rule attached to a field.
///
/// Markers carry only the rule's parameters. [`RuleMarker::check`] resolves
/// each variant to its strategy and argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleMarker {
    /// The field must hold a non-empty value.
    Required,
    /// The field's character count must lie in `min..=max`.
    Length {
        /// Minimum length (inclusive)
        min: usize,
        /// Maximum length (inclusive)
        max: usize,
    },
    /// The field must hold a syntactically valid email address.
    Email,
}

impl RuleMarker {
    /// Rule name used in error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            RuleMarker::Required => "Required",
            RuleMarker::Length { .. } => "Length",
            RuleMarker::Email => "Email",
        }
    }

    /// Run the strategy this marker resolves to against `value`.
    pub fn check(&self, value: &FieldValue<'_>) -> bool {
        match *self {
            RuleMarker::Required => RequiredValidator.validate(value, ()),
            RuleMarker::Length { min, max } => LengthValidator.validate(value, (min, max)),
            RuleMarker::Email => EmailValidator.validate(value, ()),
        }
    }
}

impl fmt::Display for RuleMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleMarker::Required => f.write_str("required"),
            RuleMarker::Length { min, max } => write!(f, "length(min = {min}, max = {max})"),
            RuleMarker::Email => f.write_str("email"),
        }
    }
}
