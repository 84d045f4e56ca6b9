//! The controller that runs add, load and delete against a transport and a view.
//!
//! # Design
//! `Inventory` owns an `ItemClient`, a `Transport` and a `View`. Each
//! operation walks `idle -> request sent -> success | failure -> idle` and
//! always ends by writing a status message, so a caller never has to handle
//! an error to keep the page consistent. The returned `Result` only tells the
//! caller what already happened.
//!
//! Operations take `&self`. The view sits in a `RefCell` and is borrowed only
//! for the synchronous writes at the end of an operation, never across an
//! `.await`, so independent operations can be in flight together on one
//! thread. Whichever finishes last owns the status slot.

use std::cell::{Ref, RefCell, RefMut};

use crate::client::ItemClient;
use crate::config::InventoryConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{Command, FormInput};
use crate::validate::to_new_item;
use crate::view::{render_rows, StatusSlot, TableRow, View};

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const ITEM_ADDED: &str = "Item added successfully";
pub const DATA_LOADED: &str = "Data loaded successfully";
pub const INVALID_FORMAT: &str = "Invalid data format received";
pub const PARSE_ERROR_PREFIX: &str = "Error parsing data";

pub struct Inventory<T, V> {
    client: ItemClient,
    transport: T,
    view: RefCell<V>,
}

impl<T: Transport, V: View> Inventory<T, V> {
    pub fn new(client: ItemClient, transport: T, view: V) -> Self {
        Self {
            client,
            transport,
            view: RefCell::new(view),
        }
    }

    pub fn from_config(config: &InventoryConfig, transport: T, view: V) -> Self {
        Self::new(ItemClient::new(&config.base_url), transport, view)
    }

    pub fn client(&self) -> &ItemClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Panics if called while the view is mutably borrowed, which only
    /// happens inside a `View` method.
    pub fn view(&self) -> Ref<'_, V> {
        self.view.borrow()
    }

    pub fn view_mut(&self) -> RefMut<'_, V> {
        self.view.borrow_mut()
    }

    pub fn into_view(self) -> V {
        self.view.into_inner()
    }

    pub async fn dispatch(&self, command: Command) -> Result<(), ApiError> {
        match command {
            Command::Add => self.add_item().await,
            Command::Load => self.load_items().await,
            Command::Delete(id) => self.delete_item(&id).await,
        }
    }

    /// Validate the form, create the item, and on success clear the form.
    pub async fn add_item(&self) -> Result<(), ApiError> {
        let input = self.view.borrow().form_input();
        match self.create(&input).await {
            Ok(()) => {
                tracing::debug!(id = %input.id, "item added");
                let mut view = self.view.borrow_mut();
                view.clear_form();
                view.set_status(StatusSlot::Form, ITEM_ADDED);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "add item failed");
                self.view
                    .borrow_mut()
                    .set_status(StatusSlot::Form, &add_failure_message(&err));
                Err(err)
            }
        }
    }

    /// Fetch the collection and replace the table with it. On any failure
    /// the table keeps whatever it showed before.
    pub async fn load_items(&self) -> Result<(), ApiError> {
        match self.fetch().await {
            Ok(rows) => {
                tracing::debug!(rows = rows.len(), "items loaded");
                let mut view = self.view.borrow_mut();
                view.render_table(rows);
                view.set_status(StatusSlot::Load, DATA_LOADED);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "load items failed");
                self.view
                    .borrow_mut()
                    .set_status(StatusSlot::Load, &load_failure_message(&err));
                Err(err)
            }
        }
    }

    /// Delete one item, then reload the table from the server. The table is
    /// never edited locally; a failed delete skips the reload.
    pub async fn delete_item(&self, id: &str) -> Result<(), ApiError> {
        if let Err(err) = self.remove(id).await {
            tracing::warn!(id, error = %err, "delete item failed");
            self.view
                .borrow_mut()
                .set_status(StatusSlot::Load, &format!("Error deleting item: {err}"));
            return Err(err);
        }
        tracing::debug!(id, "item deleted");
        self.load_items().await
    }

    async fn create(&self, input: &FormInput) -> Result<(), ApiError> {
        let item = to_new_item(input)?;
        let request = self.client.build_create_item(&item)?;
        let response = self.send(request).await?;
        self.client.parse_create_item(response)
    }

    async fn fetch(&self) -> Result<Vec<TableRow>, ApiError> {
        let response = self.send(self.client.build_list_items()).await?;
        let items = self.client.parse_list_items(response)?;
        Ok(render_rows(&items))
    }

    async fn remove(&self, id: &str) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_item(id)).await?;
        self.client.parse_delete_item(response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.transport.execute(request).await?;
        tracing::debug!(status = response.status, "response received");
        Ok(response)
    }
}

fn add_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Validation => FILL_ALL_FIELDS.to_string(),
        other => format!("Error adding item: {other}"),
    }
}

fn load_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Parse(msg) => format!("{PARSE_ERROR_PREFIX}: {msg}"),
        ApiError::Schema => INVALID_FORMAT.to_string(),
        other => format!("Error loading data: {other}"),
    }
}
