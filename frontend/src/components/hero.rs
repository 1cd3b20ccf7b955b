//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Credit Card Fraud Detection"</h1>
            <p class="subtitle">
                "Upload a CSV of card transactions and the model flags the "
                "fraudulent ones. CSV only, up to 16 MB."
            </p>
        </div>
    }
}
