//! Domain DTOs for the inventory collection.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates.
//!
//! `Item::price` is a `serde_json::Number` rather than `f64` so the table
//! shows the price exactly as the server wrote it (`1.50` stays `1.50`).
//! This relies on serde_json's `arbitrary_precision` feature, which keeps
//! the number's source text instead of an `f64`.

use serde::{Deserialize, Serialize};

/// A single inventory item returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub price: serde_json::Number,
}

/// Request payload for creating (or replacing) an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewItem {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Raw form field values as typed by the user, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub id: String,
    pub name: String,
    pub price: String,
}

impl FormInput {
    pub fn new(id: &str, name: &str, price: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price: price.to_string(),
        }
    }
}

/// A user action the UI wiring layer hands to `Inventory::dispatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Load,
    Delete(String),
}
