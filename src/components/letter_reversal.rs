//! Letter Reversal Tool Component
//!
//! Small demo widget: reverses whatever is typed into it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

fn reverse_text(input: &str) -> String {
    input.chars().rev().collect()
}

#[component]
pub fn LetterReversal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (input_text, set_input_text) = signal(String::new());
    let (reversed_text, set_reversed_text) = signal(String::new());

    let reverse = move |_| {
        set_reversed_text.set(reverse_text(&input_text.get()));
        ctx.notify("Text Reversed", "Your text has been reversed successfully!");
    };

    view! {
        <div class="card letter-reversal">
            <h2>"Letter Reversal Tool"</h2>
            <input
                type="text"
                placeholder="Enter text to reverse"
                prop:value=move || input_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_input_text.set(input.value());
                }
            />
            <div class="letter-reversal-row">
                <button on:click=reverse>"Reverse Text"</button>
                <Show when=move || !reversed_text.get().is_empty()>
                    <p class="reversed-output">{move || reversed_text.get()}</p>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_hello() {
        assert_eq!(reverse_text("hello"), "olleh");
    }

    #[test]
    fn test_reverse_empty_and_unicode() {
        assert_eq!(reverse_text(""), "");
        assert_eq!(reverse_text("héllo"), "olléh");
    }
}
