//! Menu items - A polymorphic record: two concrete shapes behind one type.
//!
//! Dishes and beverages share the base shape `{id, name, price}` and add
//! their own fields. The persisted object carries a `kind` discriminator so
//! decoding reconstructs the concrete variant. The variant set is closed:
//! a record's variant never changes after creation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::Record;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub vegetarian: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Beverage {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub volume_ml: u32,
    pub alcoholic: bool,
}

/// One entry on the menu, either a dish or a beverage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuItem {
    Dish(Dish),
    Beverage(Beverage),
}

impl MenuItem {
    /// A new dish with a fresh identity.
    pub fn dish(
        name: impl Into<String>,
        price: Decimal,
        description: impl Into<String>,
        vegetarian: bool,
    ) -> Self {
        MenuItem::Dish(Dish {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            description: description.into(),
            vegetarian,
        })
    }

    /// A new beverage with a fresh identity.
    pub fn beverage(
        name: impl Into<String>,
        price: Decimal,
        volume_ml: u32,
        alcoholic: bool,
    ) -> Self {
        MenuItem::Beverage(Beverage {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            volume_ml,
            alcoholic,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            MenuItem::Dish(dish) => &dish.name,
            MenuItem::Beverage(beverage) => &beverage.name,
        }
    }

    pub fn price(&self) -> Decimal {
        match self {
            MenuItem::Dish(dish) => dish.price,
            MenuItem::Beverage(beverage) => beverage.price,
        }
    }
}

impl Record for MenuItem {
    const COLLECTION: &'static str = "menu_items";

    fn id(&self) -> Uuid {
        match self {
            MenuItem::Dish(dish) => dish.id,
            MenuItem::Beverage(beverage) => beverage.id,
        }
    }

    fn set_id(&mut self, id: Uuid) {
        match self {
            MenuItem::Dish(dish) => dish.id = id,
            MenuItem::Beverage(beverage) => beverage.id = id,
        }
    }
}
