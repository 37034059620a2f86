//! UI Components
//!
//! Reusable Leptos components.

mod new_product_form;
mod product_card;
mod toast_area;

pub use new_product_form::NewProductForm;
pub use product_card::ProductCard;
pub use toast_area::ToastArea;
