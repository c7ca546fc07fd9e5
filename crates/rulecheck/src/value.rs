//! Borrowed views of field values.

use std::borrow::Cow;
use std::fmt;

/// A type-erased, borrowed view of a field's current value.
///
/// Strategies inspect a `FieldValue` instead of the concrete field type, so
/// one rule works the same way for strings, numbers, optionals and
/// collections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// An absent value (`None`).
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating point number.
    Float(f64),
    /// A single character.
    Char(char),
    /// A string slice.
    Str(&'a str),
    /// A collection, represented by its element count.
    Seq(usize),
}

impl FieldValue<'_> {
    /// Whether the value counts as "not provided".
    ///
    /// Absent values, `false`, numeric zero, the empty string, the string
    /// `"0"` and empty collections are empty. Whitespace-only strings are not.
    pub fn is_empty(&self) -> bool {
        match *self {
            FieldValue::Null => true,
            FieldValue::Bool(b) => !b,
            FieldValue::Int(n) => n == 0,
            FieldValue::UInt(n) => n == 0,
            FieldValue::Float(n) => n == 0.0,
            FieldValue::Char(_) => false,
            FieldValue::Str(s) => s.is_empty() || s == "0",
            FieldValue::Seq(len) => len == 0,
        }
    }

    /// Length of the value in Unicode scalar values.
    ///
    /// Scalars are measured through their textual form; collections report
    /// their element count.
    pub fn char_len(&self) -> usize {
        match *self {
            FieldValue::Null | FieldValue::Bool(false) => 0,
            FieldValue::Bool(true) | FieldValue::Char(_) => 1,
            FieldValue::Int(n) => n.to_string().len(),
            FieldValue::UInt(n) => n.to_string().len(),
            FieldValue::Float(n) => n.to_string().chars().count(),
            FieldValue::Str(s) => s.chars().count(),
            FieldValue::Seq(len) => len,
        }
    }

    /// The string slice, if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("null"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Int(n) => write!(f, "{n}"),
            FieldValue::UInt(n) => write!(f, "{n}"),
            FieldValue::Float(n) => write!(f, "{n}"),
            FieldValue::Char(c) => write!(f, "{c:?}"),
            FieldValue::Str(s) => write!(f, "{s:?}"),
            FieldValue::Seq(len) => write!(f, "[{len} item(s)]"),
        }
    }
}

/// Conversion of a field into a [`FieldValue`] view.
///
/// Implemented for the standard scalar, string, optional and collection
/// types. Implement it for your own newtypes to make them validatable.
pub trait AsFieldValue {
    /// Borrow the value as a [`FieldValue`].
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

impl AsFieldValue for Cow<'_, str> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_ref())
    }
}

impl AsFieldValue for bool {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl AsFieldValue for char {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Char(*self)
    }
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Int(i64::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::UInt(u64::from(*self))
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64);
impl_unsigned!(u8, u16, u32, u64);

impl AsFieldValue for isize {
    fn as_field_value(&self) -> FieldValue<'_> {
        // isize is at most 64 bits on every supported target
        FieldValue::Int(*self as i64)
    }
}

impl AsFieldValue for usize {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::UInt(*self as u64)
    }
}

impl AsFieldValue for f32 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(f64::from(*self))
    }
}

impl AsFieldValue for f64 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl<T: AsFieldValue> AsFieldValue for Option<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Some(value) => value.as_field_value(),
            None => FieldValue::Null,
        }
    }
}

impl<T> AsFieldValue for [T] {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.len())
    }
}

impl<T> AsFieldValue for Vec<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.len())
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Box<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}
