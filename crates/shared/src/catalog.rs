//! The fixed topping menu offered by the order form.

use crate::domain::{Topping, ToppingId};

pub static TOPPINGS: [Topping; 5] = [
    Topping {
        id: ToppingId(1),
        name: "Pepperoni",
    },
    Topping {
        id: ToppingId(2),
        name: "Green Peppers",
    },
    Topping {
        id: ToppingId(3),
        name: "Pineapple",
    },
    Topping {
        id: ToppingId(4),
        name: "Mushrooms",
    },
    Topping {
        id: ToppingId(5),
        name: "Ham",
    },
];

pub fn all() -> &'static [Topping] {
    &TOPPINGS
}

pub fn find(id: ToppingId) -> Option<&'static Topping> {
    TOPPINGS.iter().find(|topping| topping.id == id)
}

pub fn contains(id: ToppingId) -> bool {
    find(id).is_some()
}

pub fn find_by_name(name: &str) -> Option<&'static Topping> {
    let name = name.trim();
    TOPPINGS
        .iter()
        .find(|topping| topping.name.eq_ignore_ascii_case(name))
}
