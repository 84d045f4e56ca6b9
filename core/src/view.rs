//! Rendering items into table rows and the output sinks they land in.
//!
//! # Design
//! `View` is the whole surface the core needs from a page: read the form,
//! clear the form, overwrite a status slot, replace the table body. Every
//! write replaces its target wholesale, so whichever operation finishes last
//! wins and no merging is ever needed.
//!
//! `Page` is a plain in-memory `View`. Hosts that own a real DOM implement
//! `View` themselves; tests and headless hosts use `Page`.

use crate::types::{Command, FormInput, Item};

/// Form operations report to `Form`, list and delete operations to `Load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusSlot {
    Form,
    Load,
}

/// The per-row delete button. Activating it deletes this row's item only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteControl {
    item_id: String,
}

impl DeleteControl {
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn command(&self) -> Command {
        Command::Delete(self.item_id.clone())
    }
}

/// One rendered table row: three text cells plus its delete control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub name: String,
    pub price: String,
    pub delete: DeleteControl,
}

impl TableRow {
    pub fn cells(&self) -> [&str; 3] {
        [self.id.as_str(), self.name.as_str(), self.price.as_str()]
    }
}

/// Project an item sequence onto table rows, preserving order.
pub fn render_rows(items: &[Item]) -> Vec<TableRow> {
    items
        .iter()
        .map(|item| TableRow {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price.to_string(),
            delete: DeleteControl {
                item_id: item.id.clone(),
            },
        })
        .collect()
}

/// Output sinks and the form collaborator.
pub trait View {
    fn form_input(&self) -> FormInput;

    fn clear_form(&mut self);

    fn set_status(&mut self, slot: StatusSlot, message: &str);

    /// Replace the table body's rows entirely.
    fn render_table(&mut self, rows: Vec<TableRow>);
}

/// In-memory page state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub form: FormInput,
    pub form_status: String,
    pub load_status: String,
    pub table: Vec<TableRow>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, slot: StatusSlot) -> &str {
        match slot {
            StatusSlot::Form => &self.form_status,
            StatusSlot::Load => &self.load_status,
        }
    }

    /// Find the delete control rendered for `id`, if that row is shown.
    pub fn delete_control(&self, id: &str) -> Option<&DeleteControl> {
        self.table
            .iter()
            .map(|row| &row.delete)
            .find(|control| control.item_id() == id)
    }
}

impl View for Page {
    fn form_input(&self) -> FormInput {
        self.form.clone()
    }

    fn clear_form(&mut self) {
        self.form = FormInput::default();
    }

    fn set_status(&mut self, slot: StatusSlot, message: &str) {
        let target = match slot {
            StatusSlot::Form => &mut self.form_status,
            StatusSlot::Load => &mut self.load_status,
        };
        *target = message.to_string();
    }

    fn render_table(&mut self, rows: Vec<TableRow>) {
        self.table = rows;
    }
}
