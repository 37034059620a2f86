//! Frontend Models
//!
//! Data structures for the shopping list. Field names match the
//! persisted JSON format.

use serde::{Deserialize, Serialize};

/// A named line item with a quantity and a bought flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub quantity: u32,
    pub bought: bool,
}

impl Product {
    /// Create a new, not yet bought product
    pub fn new(name: String, quantity: u32) -> Self {
        Self {
            name,
            quantity,
            bought: false,
        }
    }
}
