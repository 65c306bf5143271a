use leptos::prelude::*;

use crate::content::{glyphs, EXPERIENCE};
use crate::scrollspy::SectionId;

use super::icon::Icon;
use super::section::Section;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <Section id=SectionId::Experience class="bg-gray-800 py-20">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl font-bold mb-12 text-white">"Work Experience"</h2>
                {EXPERIENCE
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="bg-gray-700 rounded-lg p-8 shadow-lg">
                                <div class="flex items-center mb-4">
                                    <Icon path=glyphs::BRIEFCASE class="text-blue-400 w-6 h-6 mr-3" />
                                    <h3 class="text-2xl font-semibold text-blue-400">{entry.role}</h3>
                                </div>
                                <div class="flex items-center mb-6 text-gray-300">
                                    <Icon path=glyphs::CALENDAR class="w-4 h-4 mr-2" />
                                    <span>{entry.period}</span>
                                    <span class="mx-2">"|"</span>
                                    <span>{entry.company}</span>
                                </div>

                                <p class="mb-6 text-gray-300 leading-relaxed">{entry.summary}</p>

                                <BulletBlock title="Responsibilities" items=entry.responsibilities />
                                <BulletBlock title="Performance improvements" items=entry.highlights />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn BulletBlock(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="mb-8 last:mb-0">
            <h4 class="text-xl font-semibold mb-4 text-blue-300 flex items-center">
                <Icon path=glyphs::CHEVRON_RIGHT class="w-5 h-5 mr-2" />
                {title}
            </h4>
            <ul class="list-disc ml-10 text-gray-300 leading-7 space-y-2">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </div>
    }
}
