//! Blocking overlay shown while a submission is leaving the page.

use leptos::*;

#[component]
pub fn ProcessingOverlay(is_processing: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Show
            when=move || is_processing.get()
            fallback=|| view! {}
        >
            <div class="processing-overlay" id="processingOverlay">
                <div class="processing-box">
                    <i class="fas fa-spinner fa-spin processing-spinner"></i>
                    <div class="processing-title">"Analyzing transactions..."</div>
                    <div class="processing-hint">
                        "Running fraud detection on your CSV. This may take a moment."
                    </div>
                </div>
            </div>
        </Show>
    }
}
