use leptos::prelude::*;

use crate::content::SKILL_GROUPS;
use crate::scrollspy::SectionId;

use super::icon::Icon;
use super::section::Section;

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <Section id=SectionId::Skills class="bg-gray-900 py-20 min-h-screen flex flex-col justify-center">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl font-bold mb-12 text-white">"Skills"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="p-6 bg-gray-800 rounded-lg shadow-lg hover:shadow-xl transition-shadow">
                                    <div class="flex items-center mb-4">
                                        <Icon
                                            path=group.icon
                                            class=format!("{} w-8 h-8 mr-3", group.accent)
                                        />
                                        <h3 class=format!("text-2xl font-bold {}", group.accent)>
                                            {group.title}
                                        </h3>
                                    </div>
                                    <div class="flex flex-wrap gap-2">
                                        {group
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <div class="rounded-lg px-3 py-2 text-sm text-white bg-gray-700 hover:bg-gray-600 transition-colors">
                                                        {*skill}
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Section>
    }
}
