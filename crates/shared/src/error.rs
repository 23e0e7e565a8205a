use thiserror::Error;

use crate::domain::ToppingId;

/// Field-local validation failure. The display text is what the form shows inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("full name must be at least 3 characters")]
    FullNameTooShort,
    #[error("full name must be at most 20 characters")]
    FullNameTooLong,
    #[error("size must be S or M or L")]
    SizeIncorrect,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("topping {0} is not on the menu")]
    UnknownTopping(ToppingId),
    #[error("invalid topping id '{0}'")]
    InvalidToppingId(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
