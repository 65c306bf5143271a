use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::scrollspy::SectionId;

/// Shared wrapper for the page sections. Fades and slides the block in the
/// first time it enters the viewport, then leaves it alone.
#[component]
pub fn Section(
    id: SectionId,
    #[prop(optional, into)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();
    let (revealed, set_revealed) = signal(false);

    use_intersection_observer_with_options(
        node_ref,
        move |entries, observer| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_revealed(true);
                // One-shot: nothing left to observe once the section is in.
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![0.1]),
    );

    view! {
        <section
            node_ref=node_ref
            id=id.anchor()
            class=move || {
                if revealed() {
                    format!("{class} reveal reveal-in")
                } else {
                    format!("{class} reveal")
                }
            }
        >
            {children()}
        </section>
    }
}
