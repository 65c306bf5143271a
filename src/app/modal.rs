use leptos::prelude::*;

use crate::content::{glyphs, Project};

use super::icon::Icon;

/// Expanded detail view for one project, shown over a dimmed backdrop.
/// Closes on backdrop click, on the close button, or with its owner.
///
/// Page scroll stays suspended exactly as long as the modal is mounted.
/// The release is registered from inside the mount effect, so it runs on
/// every exit path, including teardown without an explicit close.
#[component]
pub fn ProjectModal(project: &'static Project, on_close: Callback<()>) -> impl IntoView {
    Effect::new(move |_| {
        suspend_page_scroll();
        on_cleanup(restore_page_scroll);
    });

    view! {
        <div
            class="fixed inset-0 bg-black/50 flex items-center justify-center z-50 modal-backdrop"
            on:click=move |_| on_close.run(())
        >
            <div
                class="bg-gray-800 p-8 rounded-lg max-w-2xl w-full mx-4 max-h-[80vh] overflow-y-auto modal-panel"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center mb-4">
                    <h2 class="text-2xl font-bold text-white">{project.title}</h2>
                    <button
                        class="text-gray-400 hover:text-white"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        <Icon path=glyphs::CLOSE class="w-6 h-6" />
                    </button>
                </div>
                <p class="text-gray-300 mb-4">{project.description}</p>
                <div class="text-gray-300 mb-6 space-y-4">
                    {project
                        .paragraphs()
                        .map(|paragraph| view! { <p>{paragraph}</p> })
                        .collect_view()}
                </div>
                {project
                    .link
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-2 text-blue-400 hover:text-blue-300"
                            >
                                "Project repository"
                                <Icon path=glyphs::ARROW_UP_RIGHT class="w-4 h-4" />
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}

fn suspend_page_scroll() {
    if let Some(body) = document().body() {
        let _ = body.style().set_property("overflow", "hidden");
    }
}

fn restore_page_scroll() {
    if let Some(body) = document().body() {
        let _ = body.style().remove_property("overflow");
    }
}
