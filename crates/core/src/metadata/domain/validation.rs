use thiserror::Error;

use super::tag::{Tag, ValueKind};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{tag} expects a {expected:?} value, got {actual:?}")]
    KindMismatch {
        tag: Tag,
        expected: ValueKind,
        actual: ValueKind,
    },
    #[error("{tag}: {component} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        tag: Tag,
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{tag}: {component} is not a finite number")]
    NotFinite { tag: Tag, component: &'static str },
    #[error("tag id {0} is reserved")]
    ReservedTag(u16),
    #[error("tag id {0} does not name a known field")]
    UnrecognizedTag(u16),
    #[error("tag id {0} appears more than once")]
    DuplicateTag(u16),
}

/// Informational absence of a field. Not a failure of the record itself.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{0} is not present")]
pub struct NotPresent(pub Tag);

/// Checks that `value` is finite and inside `[min, max]`.
pub(crate) fn check_range(
    tag: Tag,
    component: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { tag, component });
    }
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            tag,
            component,
            value,
            min,
            max,
        });
    }
    Ok(())
}
