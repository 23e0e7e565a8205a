use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::OrderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToppingId(pub u8);

impl ToppingId {
    /// Parses the textual identifier used by the catalog (`"1"`..`"5"`).
    pub fn parse(raw: &str) -> Result<Self, OrderError> {
        raw.trim()
            .parse::<u8>()
            .map(Self)
            .map_err(|_| OrderError::InvalidToppingId(raw.to_string()))
    }
}

impl fmt::Display for ToppingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Topping {
    pub id: ToppingId,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PizzaSize {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl PizzaSize {
    pub const ALL: [PizzaSize; 3] = [PizzaSize::Small, PizzaSize::Medium, PizzaSize::Large];

    pub fn code(self) -> &'static str {
        match self {
            PizzaSize::Small => "S",
            PizzaSize::Medium => "M",
            PizzaSize::Large => "L",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PizzaSize::Small => "Small",
            PizzaSize::Medium => "Medium",
            PizzaSize::Large => "Large",
        }
    }

    /// Exact, case-sensitive match on the single-letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.code() == code)
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
