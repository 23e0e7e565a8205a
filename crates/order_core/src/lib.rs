//! Validation rules and the draft-order state machine shared by every front-end.

pub mod form;
pub mod validation;

pub use form::{DraftOrder, FieldErrors, FieldStatus, FormField, OrderForm, SubmitOutcome};
pub use validation::{validate_full_name, validate_size};
