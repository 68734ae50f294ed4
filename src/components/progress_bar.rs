//! Progress Bar Component

use leptos::prelude::*;

/// Thin horizontal completion bar, tinted with the project color
#[component]
pub fn ProgressBar(
    #[prop(into)] value: Signal<u8>,
    #[prop(optional, into)] color: String,
) -> impl IntoView {
    let fill = if color.is_empty() { "#8B5CF6".to_string() } else { color };

    view! {
        <div class="progress-track">
            <div
                class="progress-fill"
                style=move || format!("width: {}%; background-color: {};", value.get(), fill)
            ></div>
        </div>
    }
}
