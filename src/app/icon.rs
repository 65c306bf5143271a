use leptos::prelude::*;

/// Inline stroke icon. `path` holds one or more SVG path definitions drawn
/// on a 24x24 grid.
#[component]
pub fn Icon(path: &'static str, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=path />
        </svg>
    }
}
