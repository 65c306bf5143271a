use leptos::prelude::*;

use crate::content::PROFILE;
use crate::scrollspy::SectionId;

use super::section::Section;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <Section id=SectionId::Home class="bg-gradient-to-br from-blue-100 to-indigo-200">
            <div class="min-h-screen flex items-center relative overflow-hidden">
                <div class="container mx-auto px-4 sm:px-6 lg:px-32 relative z-10">
                    <div class="lg:w-1/2">
                        <h5 class="text-xl sm:text-2xl text-blue-700 mb-2 text-center md:text-left">
                            {PROFILE.role}
                        </h5>
                        <h1 class="text-3xl sm:text-5xl lg:text-6xl font-bold text-gray-800 mb-4 text-center md:text-left">
                            {PROFILE.name}
                        </h1>
                        <p class="text-lg sm:text-xl text-gray-600 mb-8 text-center md:text-left">
                            {PROFILE.tagline}
                        </p>
                    </div>
                </div>

                <div
                    class="absolute top-1/4 left-1/4 w-64 h-64 bg-blue-300 rounded-full blur-3xl opacity-20 drift"
                    aria-hidden="true"
                ></div>
                <div
                    class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-indigo-300 rounded-full blur-3xl opacity-20 drift drift-late"
                    aria-hidden="true"
                ></div>

                <div class="absolute bottom-0 right-8 lg:right-32 w-1/2 h-4/5 hidden sm:block">
                    <img
                        src=PROFILE.portrait
                        alt=PROFILE.name
                        class="w-full h-full object-contain object-right-bottom"
                    />
                </div>
            </div>
        </Section>
    }
}
