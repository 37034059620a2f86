//! Toast Area Component
//!
//! Stacked transient notifications with a close button. Toasts are
//! pushed and auto-dismissed by the AppContext.

use leptos::prelude::*;

use crate::context::{AppContext, ToastVariant};

/// Notification stack, newest at the bottom
#[component]
pub fn ToastArea() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="toast-area">
            {move || {
                ctx.toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.variant {
                            ToastVariant::Default => "toast",
                            ToastVariant::Destructive => "toast destructive",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class>
                                <div class="toast-body">
                                    <h4>{toast.title}</h4>
                                    <p>{toast.description}</p>
                                </div>
                                <button class="toast-close" on:click=move |_| ctx.dismiss_toast(id)>
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
