use std::fmt;

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// One stocked product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Item {
    pub name: String,
    pub amount: i64,
    /// Unit price
    pub price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, amount: i64, price: f64) -> Self {
        Self {
            name: name.into(),
            amount,
            price,
        }
    }

    /// `amount * price`
    pub fn value(&self) -> f64 {
        self.amount as f64 * self.price
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}\nAmount: {}\nPrice: {} kr",
            self.name, self.amount, self.price
        )
    }
}
