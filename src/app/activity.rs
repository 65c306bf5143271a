use leptos::prelude::*;

use crate::content::ACTIVITIES;
use crate::scrollspy::SectionId;

use super::section::Section;

#[component]
pub fn ActivitySection() -> impl IntoView {
    view! {
        <Section id=SectionId::Activity class="bg-gray-900 py-20 min-h-screen">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl font-bold mb-12 text-white">"Activity"</h2>
                {ACTIVITIES
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        view! {
                            {(i > 0)
                                .then(|| view! { <div class="border-b border-gray-800 my-12"></div> })}
                            <div class="flex flex-col md:flex-row gap-8 md:gap-16">
                                <div class="flex flex-col gap-2 mb-4 md:mb-0 w-full md:w-96">
                                    <p class="text-gray-400">{entry.period}</p>
                                    <h3 class=format!("text-2xl font-semibold {}", entry.accent)>
                                        {entry.title}
                                    </h3>
                                    <h4 class="text-md text-gray-300">{entry.org}</h4>
                                </div>
                                <div class="flex flex-col gap-4">
                                    <ul class="list-disc list-inside ml-4 text-gray-300 leading-8">
                                        {entry
                                            .points
                                            .iter()
                                            .map(|point| view! { <li>{*point}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
