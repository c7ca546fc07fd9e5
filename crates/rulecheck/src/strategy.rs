//! Validator strategies.
//!
//! Each strategy is a stateless unit struct implementing one rule's
//! pass/fail test. The associated [`Strategy::Args`] type fixes the extra
//! arguments a strategy needs, so a marker handing over the wrong argument
//! list does not compile.

use crate::value::FieldValue;
use regex::Regex;
use std::sync::OnceLock;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        // dot-atom local part, at least two DNS labels in the domain
        Regex::new(
            r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
        )
        .expect("email pattern is a valid regex")
    })
}

/// A single validation rule's pass/fail test.
pub trait Strategy: Send + Sync {
    /// Extra arguments supplied by the marker, `()` when there are none.
    type Args;

    /// Returns `true` when `value` satisfies the rule.
    fn validate(&self, value: &FieldValue<'_>, args: Self::Args) -> bool;
}

/// Fails on absent, zero, `false`, empty-string and empty-collection values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiredValidator;

impl Strategy for RequiredValidator {
    type Args = ();

    fn validate(&self, value: &FieldValue<'_>, (): ()) -> bool {
        !value.is_empty()
    }
}

/// Checks `local@domain.tld` email syntax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailValidator;

impl Strategy for EmailValidator {
    type Args = ();

    fn validate(&self, value: &FieldValue<'_>, (): ()) -> bool {
        let Some(address) = value.as_str() else {
            return false;
        };
        if address.len() > MAX_EMAIL_LEN {
            return false;
        }
        match address.split_once('@') {
            Some((local, _)) if local.len() <= MAX_LOCAL_PART_LEN => {
                email_regex().is_match(address)
            }
            _ => false,
        }
    }
}

/// Inclusive `min..=max` bound on the value's character count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthValidator;

impl Strategy for LengthValidator {
    type Args = (usize, usize);

    fn validate(&self, value: &FieldValue<'_>, (min, max): (usize, usize)) -> bool {
        let len = value.char_len();
        min <= len && len <= max
    }
}
