use serde::{Deserialize, Serialize};

use crate::{
    catalog,
    domain::{PizzaSize, ToppingId},
};

/// Snapshot of a successfully submitted draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub full_name: String,
    pub size: PizzaSize,
    pub toppings: Vec<ToppingId>,
}

impl PlacedOrder {
    pub fn topping_names(&self) -> Vec<&'static str> {
        self.toppings
            .iter()
            .filter_map(|id| catalog::find(*id))
            .map(|topping| topping.name)
            .collect()
    }

    pub fn summary(&self) -> String {
        let toppings = match self.toppings.len() {
            0 => "no toppings".to_string(),
            1 => "1 topping".to_string(),
            n => format!("{n} toppings"),
        };
        format!(
            "Thank you for your order, {}! Your {} pizza with {toppings} is on the way.",
            self.full_name,
            self.size.label()
        )
    }
}
