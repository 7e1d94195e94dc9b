//! Precondition checks shared by request types.
//!
//! Every failed check names the offending field and the constraint it broke, so
//! callers can report exactly what was rejected.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Constraint {
    #[error("must be between {min} and {max}")]
    OutOfRange { min: f64, max: f64 },
    #[error("must be strictly between {min} and {max}")]
    ExclusiveRange { min: f64, max: f64 },
    #[error("must be greater than 0")]
    NotPositive,
    #[error("must be a finite number")]
    NotFinite,
    #[error("must contain between {min} and {max} items")]
    Count { min: usize, max: usize },
    #[error("must be between {min} and {max} characters")]
    Length { min: usize, max: usize },
    #[error("must have exactly {0} elements")]
    Arity(usize),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {constraint}")]
pub struct ValidationError {
    pub field: String,
    pub constraint: Constraint,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, constraint: Constraint) -> Self {
        ValidationError {
            field: field.into(),
            constraint,
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

pub fn finite(field: &str, value: f64) -> ValidationResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::new(field, Constraint::NotFinite))
    }
}

/// Inclusive range check.
pub fn in_range(field: &str, value: f64, min: f64, max: f64) -> ValidationResult<f64> {
    finite(field, value)?;
    if value < min || value > max {
        return Err(ValidationError::new(
            field,
            Constraint::OutOfRange { min, max },
        ));
    }
    Ok(value)
}

pub fn in_open_range(field: &str, value: f64, min: f64, max: f64) -> ValidationResult<f64> {
    finite(field, value)?;
    if value <= min || value >= max {
        return Err(ValidationError::new(
            field,
            Constraint::ExclusiveRange { min, max },
        ));
    }
    Ok(value)
}

pub fn positive(field: &str, value: f64) -> ValidationResult<f64> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::new(field, Constraint::NotPositive));
    }
    Ok(value)
}

pub fn int_in_range(field: &str, value: i64, min: i64, max: i64) -> ValidationResult<i64> {
    if value < min || value > max {
        return Err(ValidationError::new(
            field,
            Constraint::OutOfRange {
                min: min as f64,
                max: max as f64,
            },
        ));
    }
    Ok(value)
}

pub fn count(field: &str, len: usize, min: usize, max: usize) -> ValidationResult<usize> {
    if len < min || len > max {
        return Err(ValidationError::new(field, Constraint::Count { min, max }));
    }
    Ok(len)
}

pub fn text_length(field: &str, value: &str, min: usize, max: usize) -> ValidationResult<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::new(field, Constraint::Length { min, max }));
    }
    Ok(())
}
