use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stashed_rust::{Record, Uuid};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
}

impl Product {
    pub fn new(name: &str, description: &str, price: Decimal, stock: u32) -> Self {
        Product {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            price,
            stock,
        }
    }
}
