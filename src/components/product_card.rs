//! Product Card Component
//!
//! One list entry with toggle and delete actions. Delete is only
//! offered once the product is bought.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Product;

/// Single shopping list entry
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let bought = product.bought;
    let toggle_name = product.name.clone();
    let remove_name = product.name.clone();

    view! {
        <div class="product-card">
            <div class="product-info">
                <h3 class=if bought { "product-name bought" } else { "product-name" }>
                    {product.name.clone()}
                </h3>
                <p class="product-quantity">"Anzahl: " {product.quantity}</p>
            </div>

            <div class="product-actions">
                <Show when=move || bought>
                    <button
                        class="delete-btn"
                        on:click={
                            let remove_name = remove_name.clone();
                            move |_| ctx.remove_product(&remove_name)
                        }
                    >
                        "×"
                    </button>
                </Show>
                <button
                    class=if bought { "toggle-btn bought" } else { "toggle-btn" }
                    on:click=move |_| ctx.toggle_product(&toggle_name)
                >
                    {if bought { "Zurück" } else { "Abhaken" }}
                </button>
            </div>
        </div>
    }
}
