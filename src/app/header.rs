use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::content::{glyphs, PROFILE};
use crate::scrollspy::SectionId;

use super::icon::Icon;
use super::PageState;

/// Smooth-scrolls the viewport so the section's top meets the viewport
/// top. A section that never rendered is skipped quietly.
pub fn scroll_to_section(id: SectionId) {
    let Some(el) = document().get_element_by_id(id.anchor()) else {
        log::debug!("no element rendered for section {id}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn NavBar() -> impl IntoView {
    let state = expect_context::<PageState>();

    view! {
        <nav class=move || {
            if state.scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-colors duration-300 bg-black/80 backdrop-blur-md"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-colors duration-300 bg-transparent"
            }
        }>
            <div class="max-w-screen-xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <span class=move || {
                        if state.scrolled.get() { "text-lg text-white" } else { "text-lg text-gray-900" }
                    }>
                        {PROFILE.name}
                        <span class="mx-2">"|"</span>
                        <span class="text-lg">{PROFILE.email}</span>
                    </span>
                    <NavLinks />
                    <div class="md:hidden">
                        <button
                            class=move || {
                                if state.scrolled.get() {
                                    "focus:outline-none text-white"
                                } else {
                                    "focus:outline-none text-gray-900"
                                }
                            }
                            aria-label="Toggle menu"
                            on:click=move |_| state.menu_open.update(|open| *open = !*open)
                        >
                            {move || {
                                let path = if state.menu_open.get() {
                                    glyphs::CLOSE
                                } else {
                                    glyphs::MENU
                                };
                                view! { <Icon path=path class="w-6 h-6" /> }
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Full-screen overlay with the same links, for small screens.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let state = expect_context::<PageState>();

    view! {
        <Show when=move || state.menu_open.get()>
            <div class="fixed inset-0 bg-gray-900 z-40 flex items-center justify-center menu-overlay">
                <div class="text-center">
                    <NavLinks mobile=true />
                </div>
                <button
                    class="absolute top-4 right-4 text-white"
                    aria-label="Close menu"
                    on:click=move |_| state.menu_open.set(false)
                >
                    <Icon path=glyphs::CLOSE class="w-6 h-6" />
                </button>
            </div>
        </Show>
    }
}

#[component]
fn NavLinks(#[prop(optional)] mobile: bool) -> impl IntoView {
    let state = expect_context::<PageState>();

    view! {
        <div class=if mobile {
            "flex flex-col space-y-6 text-2xl"
        } else {
            "hidden md:flex md:space-x-6"
        }>
            {SectionId::ALL
                .into_iter()
                .map(|id| {
                    view! {
                        <a
                            class=move || {
                                link_class(
                                    state.active_section.get() == id,
                                    mobile,
                                    state.scrolled.get(),
                                )
                            }
                            // Always drop the overlay, even when it wasn't up.
                            on:click=move |_| {
                                scroll_to_section(id);
                                state.menu_open.set(false);
                            }
                        >
                            {id.label()}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn link_class(active: bool, mobile: bool, scrolled: bool) -> &'static str {
    if active {
        "cursor-pointer transition-colors text-blue-400"
    } else if mobile || scrolled {
        "cursor-pointer transition-colors text-white hover:text-blue-300"
    } else {
        "cursor-pointer transition-colors text-gray-900 hover:text-blue-700"
    }
}
