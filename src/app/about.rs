use leptos::prelude::*;

use crate::content::{ABOUT_CARDS, ABOUT_INTRO};
use crate::scrollspy::SectionId;

use super::icon::Icon;
use super::section::Section;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <Section id=SectionId::About class="bg-gray-800 py-20 min-h-screen flex justify-center">
            <div class="px-4 max-w-screen-xl flex flex-col justify-center">
                <div class="mb-12">
                    <h2 class="text-5xl font-bold text-white mb-4">"About Me"</h2>
                    <p class="text-xl text-gray-200">{ABOUT_INTRO}</p>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-rows-2 gap-8 lg:gap-6">
                    {ABOUT_CARDS
                        .iter()
                        .map(|card| {
                            view! {
                                <div class="bg-gray-700 p-6 rounded-lg shadow-lg hover:shadow-xl transition-shadow">
                                    <Icon
                                        path=card.icon
                                        class=format!("{} w-12 h-12 mb-4", card.accent)
                                    />
                                    <h3 class="text-2xl font-bold mb-2 text-gray-100">
                                        {card.title}
                                    </h3>
                                    <p class="text-gray-400">{card.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Section>
    }
}
