//! Draft state and transitions behind the order form.

use std::collections::BTreeSet;

use shared::{
    catalog,
    domain::{PizzaSize, ToppingId},
    error::{OrderError, ValidationError},
    order::PlacedOrder,
};
use tracing::{debug, info};

use crate::validation::{validate_full_name, validate_size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FullName,
    Size,
}

impl FormField {
    pub fn key(self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Size => "size",
        }
    }
}

/// Outcome of the last validation run for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// Not edited since the form was mounted or last reset.
    #[default]
    Untouched,
    Valid,
    Invalid(ValidationError),
}

impl FieldStatus {
    fn from_result<T>(result: &Result<T, ValidationError>) -> Self {
        match result {
            Ok(_) => FieldStatus::Valid,
            Err(err) => FieldStatus::Invalid(*err),
        }
    }

    pub fn error(self) -> Option<ValidationError> {
        match self {
            FieldStatus::Invalid(err) => Some(err),
            FieldStatus::Untouched | FieldStatus::Valid => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub full_name: FieldStatus,
    pub size: FieldStatus,
}

impl FieldErrors {
    pub fn status(&self, field: FormField) -> FieldStatus {
        match field {
            FormField::FullName => self.full_name,
            FormField::Size => self.size,
        }
    }

    pub fn message(&self, field: FormField) -> Option<String> {
        self.status(field).error().map(|err| err.to_string())
    }

    pub fn has_errors(&self) -> bool {
        self.full_name.error().is_some() || self.size.error().is_some()
    }

    /// Visible errors keyed the way the form reports them (`fullName`, `size`).
    pub fn iter(&self) -> impl Iterator<Item = (FormField, ValidationError)> + '_ {
        [FormField::FullName, FormField::Size]
            .into_iter()
            .filter_map(move |field| self.status(field).error().map(|err| (field, err)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftOrder {
    pub full_name: String,
    pub size: Option<PizzaSize>,
    pub toppings: BTreeSet<ToppingId>,
}

impl DraftOrder {
    pub fn is_selected(&self, id: ToppingId) -> bool {
        self.toppings.contains(&id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submit was disabled; nothing happened.
    Ignored,
    /// Re-validation failed; the draft is untouched and the errors are visible.
    Rejected(FieldErrors),
    Placed(PlacedOrder),
}

/// The single order form backing the order view.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    draft: DraftOrder,
    errors: FieldErrors,
    submit_enabled: bool,
    confirmation: Option<String>,
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &DraftOrder {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn confirmation(&self) -> Option<&str> {
        self.confirmation.as_deref()
    }

    pub fn set_full_name(&mut self, raw: &str) {
        self.confirmation = None;
        let result = validate_full_name(raw);
        self.draft.full_name = raw.trim().to_string();
        self.errors.full_name = FieldStatus::from_result(&result);
        self.recompute();
        debug!(status = ?self.errors.full_name, "full name edited");
    }

    pub fn select_size(&mut self, code: &str) {
        self.confirmation = None;
        let result = validate_size(code);
        self.errors.size = FieldStatus::from_result(&result);
        self.draft.size = result.ok();
        self.recompute();
        debug!(code, status = ?self.errors.size, "size selected");
    }

    /// Flips the topping and returns whether it is now selected.
    pub fn toggle_topping(&mut self, id: ToppingId) -> Result<bool, OrderError> {
        if !catalog::contains(id) {
            return Err(OrderError::UnknownTopping(id));
        }
        self.confirmation = None;
        let selected = if self.draft.toppings.remove(&id) {
            false
        } else {
            self.draft.toppings.insert(id);
            true
        };
        debug!(topping = %id, selected, "topping toggled");
        Ok(selected)
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.submit_enabled {
            debug!("submit ignored while disabled");
            return SubmitOutcome::Ignored;
        }
        self.confirmation = None;

        let name = validate_full_name(&self.draft.full_name);
        let size = self
            .draft
            .size
            .ok_or(ValidationError::SizeIncorrect)
            .and_then(|size| validate_size(size.code()));

        let (full_name, size) = match (name, size) {
            (Ok(full_name), Ok(size)) => (full_name, size),
            (name, size) => {
                self.errors.full_name = FieldStatus::from_result(&name);
                self.errors.size = FieldStatus::from_result(&size);
                self.recompute();
                return SubmitOutcome::Rejected(self.errors);
            }
        };

        let order = PlacedOrder {
            full_name,
            size,
            toppings: self.draft.toppings.iter().copied().collect(),
        };
        info!(
            full_name = %order.full_name,
            size = order.size.code(),
            toppings = ?order.topping_names(),
            "order placed"
        );

        self.draft = DraftOrder::default();
        self.errors = FieldErrors::default();
        self.recompute();
        self.confirmation = Some(order.summary());
        SubmitOutcome::Placed(order)
    }

    fn recompute(&mut self) {
        self.submit_enabled =
            validate_full_name(&self.draft.full_name).is_ok() && self.draft.size.is_some();
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
