//! Client core for a single-page inventory manager.
//!
//! # Overview
//! Validates form input, talks to a remote `/items` collection, and keeps a
//! table and two status slots in step with the server's answers. The page
//! itself and the HTTP stack are collaborators behind the `View` and
//! `Transport` traits, so everything here runs and tests without a browser
//! or a network.
//!
//! # Design
//! - `ItemClient` is stateless and sans-IO: `build_*` produces a request,
//!   `parse_*` consumes a response.
//! - `Inventory` drives one operation at a time per call: validate, send,
//!   parse, then write the view. Every failure becomes a status message.
//! - The table is only ever replaced by a successful list response; nothing
//!   is cached or merged locally.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod inventory;
pub mod types;
pub mod validate;
pub mod view;

pub use client::ItemClient;
pub use config::InventoryConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use inventory::Inventory;
pub use types::{Command, FormInput, Item, NewItem};
pub use validate::{to_new_item, validate};
pub use view::{render_rows, DeleteControl, Page, StatusSlot, TableRow, View};
