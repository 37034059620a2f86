//! Einkaufsliste App
//!
//! Root component: wires up the signals, restores the persisted list
//! on mount and renders form, product cards and toasts.

use leptos::prelude::*;

use crate::components::{NewProductForm, ProductCard, ToastArea};
use crate::context::AppContext;
use crate::store::ShoppingList;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (list, set_list) = signal(ShoppingList::new());
    let (toasts, set_toasts) = signal(Vec::new());

    // Provide context to all children
    let ctx = AppContext::new((list, set_list), (toasts, set_toasts));
    provide_context(ctx);

    // Load persisted list once on mount, before any write can happen
    Effect::new(move |_| {
        ctx.load();
    });

    view! {
        <div class="app-layout">
            <h1>"Einkaufsliste"</h1>

            <NewProductForm />

            <div class="product-list">
                {move || {
                    list.with(|l| l.display_order().cloned().collect::<Vec<_>>())
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()
                }}
            </div>

            <ToastArea />
        </div>
    }
}
