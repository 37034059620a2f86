//! New Product Form Component
//!
//! Name and quantity inputs for adding products to the list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// Form for adding a product with a quantity
#[component]
pub fn NewProductForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(String::from("1"));

    let add_product = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let product = name.get();
        if product.is_empty() {
            return;
        }
        // A non-numeric quantity falls back to 1 in the store
        let count = quantity.get().parse::<u32>().ok();

        if ctx.add_product(&product, count) {
            set_name.set(String::new());
            set_quantity.set(String::from("1"));
        }
    };

    view! {
        <form class="new-product-form" on:submit=add_product>
            <div class="new-product-row">
                <input
                    type="text"
                    placeholder="Produkt eingeben..."
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />
                <input
                    type="number"
                    class="quantity-input"
                    min="1"
                    prop:value=move || quantity.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_quantity.set(input.value());
                    }
                />
            </div>

            <button
                type="submit"
                class="add-btn"
                prop:disabled=move || name.get().is_empty()
            >
                "Eintrag Hinzufügen"
            </button>
        </form>
    }
}
