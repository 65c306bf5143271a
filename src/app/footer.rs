use leptos::prelude::*;

use crate::content::{glyphs, PROFILE};

use super::icon::Icon;

#[component]
pub fn Footer() -> impl IntoView {
    // BUILD_TIME is RFC 3339, stamped by build.rs; the year is the prefix.
    let year = &env!("BUILD_TIME")[..4];

    view! {
        <footer class="bg-gray-950 text-gray-300 py-8">
            <div class="container mx-auto px-4 text-center">
                <div class="flex justify-center space-x-6 mb-4">
                    <a
                        href=PROFILE.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn profile"
                        class="text-blue-400 hover:text-blue-300 transition-colors"
                    >
                        <Icon path=glyphs::LINKEDIN class="w-7 h-7" />
                    </a>
                    <a
                        href=format!("mailto:{}", PROFILE.email)
                        aria-label="Email"
                        class="text-blue-400 hover:text-blue-300 transition-colors"
                    >
                        <Icon path=glyphs::MAIL class="w-7 h-7" />
                    </a>
                </div>
                <p>{format!("© {year} {}. All rights reserved.", PROFILE.name)}</p>
            </div>
        </footer>
    }
}
