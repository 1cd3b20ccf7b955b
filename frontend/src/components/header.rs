use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{APP_NAME}</a>
                <span class="badge">"AI"</span>
            </div>
            <div class="header-right">
                <a
                    href="https://github.com/fraudscan/fraudscan"
                    class="header-link"
                    target="_blank"
                >
                    "GitHub"
                </a>
            </div>
        </header>
    }
}
