//! Validation engine.

use crate::marker::RuleMarker;
use crate::report::{ValidationError, ValidationReport};
use crate::value::{AsFieldValue, FieldValue};

/// One entry of a type's field-descriptor table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field<'a> {
    /// Field name as reported in errors.
    pub name: &'static str,
    /// The field's current value.
    pub value: FieldValue<'a>,
    /// Markers in declaration order.
    pub markers: &'a [RuleMarker],
}

impl<'a> Field<'a> {
    /// Describe a field.
    pub fn new<T>(name: &'static str, value: &'a T, markers: &'a [RuleMarker]) -> Self
    where
        T: AsFieldValue + ?Sized,
    {
        Self {
            name,
            value: value.as_field_value(),
            markers,
        }
    }
}

/// Builder for hand-written field tables.
///
/// ```rust
/// use rulecheck::{Field, FieldSet, RuleMarker, Validate};
///
/// struct Signup {
///     email: String,
/// }
///
/// impl Validate for Signup {
///     fn fields(&self) -> Vec<Field<'_>> {
///         FieldSet::new()
///             .field("email", &self.email, &[RuleMarker::Required, RuleMarker::Email])
///             .build()
///     }
/// }
///
/// let signup = Signup { email: "admin@admin.com".into() };
/// assert!(signup.validate().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct FieldSet<'a> {
    fields: Vec<Field<'a>>,
}

impl<'a> FieldSet<'a> {
    /// Start an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field.
    pub fn field<T>(mut self, name: &'static str, value: &'a T, markers: &'a [RuleMarker]) -> Self
    where
        T: AsFieldValue + ?Sized,
    {
        self.fields.push(Field::new(name, value, markers));
        self
    }

    /// Finish the table.
    pub fn build(self) -> Vec<Field<'a>> {
        self.fields
    }
}

/// Types that expose a field-descriptor table.
///
/// Usually derived with `#[derive(Validate)]`; see [`FieldSet`] for writing
/// an implementation by hand.
pub trait Validate {
    /// The annotated fields in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;

    /// Run every rule and collect the violations.
    fn validate(&self) -> ValidationReport {
        Validator.validate(self)
    }

    /// Validate, returning `Err` with the report when anything failed.
    fn check(&self) -> Result<(), ValidationReport> {
        Validate::validate(self).into_result()
    }

    /// Validate and return the value if valid.
    fn validated(self) -> Result<Self, ValidationReport>
    where
        Self: Sized,
    {
        self.check()?;
        Ok(self)
    }
}

/// The stateless validation engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Create a validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate `target`, returning a fresh report.
    pub fn validate<T>(&self, target: &T) -> ValidationReport
    where
        T: Validate + ?Sized,
    {
        let mut report = ValidationReport::new();
        let fields = target.fields();

        for field in &fields {
            for marker in field.markers {
                if marker.check(&field.value) {
                    continue;
                }
                tracing::trace!(
                    field = field.name,
                    rule = marker.name(),
                    value = %field.value,
                    "rule failed"
                );
                report.push(ValidationError::new(field.name, message(field.name, marker)));
            }
        }

        tracing::debug!(
            fields = fields.len(),
            errors = report.len(),
            "validation pass complete"
        );
        report
    }
}

/// Validate `target` with the default [`Validator`].
pub fn validate<T>(target: &T) -> ValidationReport
where
    T: Validate + ?Sized,
{
    Validator.validate(target)
}

fn message(field: &str, marker: &RuleMarker) -> String {
    format!(
        "Invalid value for '{}' using '{}' validation.",
        field,
        marker.name()
    )
}
