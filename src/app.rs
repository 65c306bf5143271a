mod about;
mod activity;
mod experience;
mod footer;
mod header;
mod hero;
mod icon;
mod modal;
mod projects;
mod section;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_window_scroll;

use crate::scrollspy::{self, SectionBounds, SectionId};

use about::AboutSection;
use activity::ActivitySection;
use experience::ExperienceSection;
use footer::Footer;
use header::{MobileMenu, NavBar};
use hero::HeroSection;
use projects::ProjectsSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Top-level UI state: which section the nav highlights, whether the page
/// has scrolled past the hero edge, and whether the mobile menu overlay is
/// up. Shared through context rather than ambient globals so consumers stay
/// testable.
#[derive(Clone, Copy)]
pub struct PageState {
    pub active_section: RwSignal<SectionId>,
    pub scrolled: RwSignal<bool>,
    pub menu_open: RwSignal<bool>,
}

impl PageState {
    fn new() -> Self {
        Self {
            active_section: RwSignal::new(SectionId::default()),
            scrolled: RwSignal::new(false),
            menu_open: RwSignal::new(false),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Jiwoo Han - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let state = PageState::new();
    provide_context(state);

    track_sections(state);
    follow_location_hash();

    view! {
        <Title text="Backend Developer" />
        <Meta
            name="description"
            content="Portfolio of Jiwoo Han, a backend developer building live services with care."
        />
        <div class="bg-gray-900 text-white min-h-screen">
            <NavBar />
            <MobileMenu />
            <main>
                <HeroSection />
                <AboutSection />
                <SkillsSection />
                <ExperienceSection />
                <ActivitySection />
                <ProjectsSection />
            </main>
            <Footer />
        </div>
    }
}

/// Re-derives the active section and the nav background flag on every
/// window scroll, and once on hydration for the initial state.
fn track_sections(state: PageState) {
    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let y = scroll_y.get();
        if let Some(id) = scrollspy::active_section(&measure_sections()) {
            state.active_section.set(id);
        }
        state.scrolled.set(scrollspy::is_scrolled(y));
    });
}

/// Viewport boxes for every section currently in the document, in page
/// order. Sections without a rendered element are skipped.
fn measure_sections() -> Vec<(SectionId, SectionBounds)> {
    let doc = document();
    SectionId::ALL
        .iter()
        .filter_map(|id| {
            doc.get_element_by_id(id.anchor()).map(|el| {
                let rect = el.get_bounding_client_rect();
                (
                    *id,
                    SectionBounds {
                        top: rect.top(),
                        bottom: rect.bottom(),
                    },
                )
            })
        })
        .collect()
}

/// Honors a `#fragment` deep link on first load. Anything that is not a
/// known section anchor is ignored.
fn follow_location_hash() {
    Effect::new(move |_| {
        let Ok(hash) = window().location().hash() else {
            return;
        };
        let anchor = hash.trim_start_matches('#');
        if anchor.is_empty() {
            return;
        }
        match anchor.parse::<SectionId>() {
            Ok(id) => header::scroll_to_section(id),
            Err(err) => log::debug!("ignoring location hash: {err}"),
        }
    });
}
