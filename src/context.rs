//! Application Context
//!
//! Shared state provided via Leptos Context API. All list mutations go
//! through here so every successful change is followed by a
//! persistence write.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::persistence;
use crate::store::{AddOutcome, ShoppingList};

/// How long a toast stays on screen
const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// Transient notification shown in the toast area
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current shopping list - read
    pub list: ReadSignal<ShoppingList>,
    /// Current shopping list - write
    set_list: WriteSignal<ShoppingList>,
    /// Active toasts - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Active toasts - write
    set_toasts: WriteSignal<Vec<Toast>>,
    /// Counter for toast IDs
    next_toast_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new(
        list: (ReadSignal<ShoppingList>, WriteSignal<ShoppingList>),
        toasts: (ReadSignal<Vec<Toast>>, WriteSignal<Vec<Toast>>),
    ) -> Self {
        Self {
            list: list.0,
            set_list: list.1,
            toasts: toasts.0,
            set_toasts: toasts.1,
            next_toast_id: StoredValue::new(0),
        }
    }

    /// Populate the list from LocalStorage. Must run before any save.
    pub fn load(&self) {
        let products = persistence::load();
        self.set_list.update(|list| list.restore(products));
    }

    /// Add a new product. Returns true if the list changed; duplicate
    /// names are rejected with a toast.
    pub fn add_product(&self, name: &str, quantity: Option<u32>) -> bool {
        let mut outcome = AddOutcome::Invalid;
        self.set_list.update(|list| outcome = list.add(name, quantity));

        match outcome {
            AddOutcome::Added => {
                self.persist();
                true
            }
            AddOutcome::Duplicate => {
                self.push_toast(
                    "Hinzufügen fehlgeschlagen",
                    "Das Produkt ist bereits in der Einkaufsliste vorhanden.".to_string(),
                    ToastVariant::Destructive,
                );
                false
            }
            AddOutcome::Invalid => false,
        }
    }

    /// Flip the bought flag of a product
    pub fn toggle_product(&self, name: &str) {
        let mut changed = false;
        self.set_list.update(|list| changed = list.toggle(name));
        if changed {
            self.persist();
        }
    }

    /// Remove a product and announce the removal
    pub fn remove_product(&self, name: &str) {
        let mut removed = None;
        self.set_list.update(|list| removed = list.remove(name));

        if let Some(product) = removed {
            self.persist();
            self.push_toast(
                "Produkt gelöscht",
                format!("{} wurde aus der Einkaufsliste entfernt.", product.name),
                ToastVariant::Default,
            );
        }
    }

    pub fn dismiss_toast(&self, id: u32) {
        self.set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push_toast(&self, title: &str, description: String, variant: ToastVariant) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);

        self.set_toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                title: title.to_string(),
                description,
                variant,
            })
        });

        // Auto-dismiss
        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }

    /// Write the full list to LocalStorage. Skipped until the initial
    /// load has run, so a fresh session cannot clobber saved data.
    fn persist(&self) {
        let list = self.list.get_untracked();
        if list.is_loaded() {
            persistence::save(list.products());
        }
    }
}
