use leptos::prelude::*;

use crate::content::{glyphs, Project, PROJECTS};
use crate::scrollspy::SectionId;

use super::icon::Icon;
use super::modal::ProjectModal;
use super::section::Section;

/// Next slide index, holding at the end of the list.
fn next_index(current: usize, len: usize) -> usize {
    if current + 1 < len {
        current + 1
    } else {
        current
    }
}

/// Previous slide index, holding at zero.
fn prev_index(current: usize) -> usize {
    current.saturating_sub(1)
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (slide, set_slide) = signal(0usize);
    // At most one project can be expanded; opening another replaces it.
    let (selected, set_selected) = signal(None::<&'static Project>);

    view! {
        <Section id=SectionId::Projects class="bg-gray-800 py-20 relative overflow-hidden min-h-screen">
            <div class="relative z-10 w-full mx-auto px-4 max-w-screen-xl pt-12">
                <h2 class="text-4xl font-bold mb-24 text-white">"Projects"</h2>

                <div class="flex items-center justify-between gap-4">
                    <button
                        class=move || arrow_class(slide() == 0)
                        aria-label="Previous project"
                        on:click=move |_| set_slide.update(|s| *s = prev_index(*s))
                    >
                        <Icon path=glyphs::CHEVRON_LEFT class="w-8 h-8" />
                    </button>

                    {move || {
                        let project = &PROJECTS[slide()];
                        view! {
                            <div class="text-white text-center max-w-4xl mx-auto py-8 px-4">
                                <h3 class="text-3xl sm:text-4xl font-bold mb-6">{project.title}</h3>
                                <p class="text-xl sm:text-2xl mb-8">{project.description}</p>
                                <button
                                    class="inline-flex items-center gap-3 bg-blue-500 text-white px-6 py-3 mt-16 mb-8 rounded-full hover:bg-blue-600 transition-colors text-lg sm:text-xl"
                                    on:click=move |_| set_selected(Some(project))
                                >
                                    "View details"
                                    <Icon path=glyphs::ARROW_UP_RIGHT class="w-6 h-6" />
                                </button>
                            </div>
                        }
                    }}

                    <button
                        class=move || arrow_class(slide() + 1 >= PROJECTS.len())
                        aria-label="Next project"
                        on:click=move |_| set_slide.update(|s| *s = next_index(*s, PROJECTS.len()))
                    >
                        <Icon path=glyphs::CHEVRON_RIGHT class="w-8 h-8" />
                    </button>
                </div>

                <div class="flex justify-center gap-3 mt-4">
                    {(0..PROJECTS.len())
                        .map(|i| {
                            view! {
                                <button
                                    class=move || {
                                        if slide() == i {
                                            "w-3 h-3 rounded-full bg-blue-400"
                                        } else {
                                            "w-3 h-3 rounded-full bg-gray-600 hover:bg-gray-500 transition-colors"
                                        }
                                    }
                                    aria-label=format!("Show project {}", i + 1)
                                    on:click=move |_| set_slide(i)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                selected()
                    .map(|project| {
                        view! {
                            <ProjectModal
                                project=project
                                on_close=Callback::new(move |_| set_selected(None))
                            />
                        }
                    })
            }}
        </Section>
    }
}

fn arrow_class(at_edge: bool) -> &'static str {
    if at_edge {
        "text-gray-600 cursor-default"
    } else {
        "text-white hover:text-blue-400 transition-colors"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_holds_at_both_ends() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(1, 3), 2);
        assert_eq!(next_index(2, 3), 2);
        assert_eq!(prev_index(2), 1);
        assert_eq!(prev_index(0), 0);
    }

    #[test]
    fn stepping_never_leaves_the_real_list() {
        let len = PROJECTS.len();
        let mut i = 0;
        for _ in 0..len * 2 {
            i = next_index(i, len);
            assert!(i < len);
        }
        for _ in 0..len * 2 {
            i = prev_index(i);
            assert!(i < len);
        }
    }

    #[test]
    fn single_slide_list_has_nowhere_to_go() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0), 0);
    }
}
