use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Distance from the top of the viewport, in px, at which a section counts
/// as the one currently in focus.
pub const SECTION_PROBE_OFFSET: f64 = 100.0;

/// Scroll depth, in px, past which the nav switches to its solid look.
pub const NAV_SOLID_THRESHOLD: f64 = 50.0;

/// Anchor identifiers for the page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Experience,
    Activity,
    Projects,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Activity,
        SectionId::Projects,
    ];

    /// The DOM id the section is rendered under.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Activity => "activity",
            SectionId::Projects => "projects",
        }
    }

    /// Human-readable nav label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Activity => "Activity",
            SectionId::Projects => "Projects",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section anchor: {0}")]
pub struct UnknownAnchor(String);

impl FromStr for SectionId {
    type Err = UnknownAnchor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.anchor() == s)
            .ok_or_else(|| UnknownAnchor(s.to_string()))
    }
}

/// A section's bounding box relative to the viewport, as reported by
/// `getBoundingClientRect`. Negative `top` means the section has scrolled
/// partly above the fold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    fn straddles_probe(&self) -> bool {
        self.top <= SECTION_PROBE_OFFSET && self.bottom >= SECTION_PROBE_OFFSET
    }
}

/// Picks the section whose box straddles the probe line. Slice order is the
/// priority order; `None` means no section qualifies and the caller should
/// keep its last known value.
pub fn active_section(bounds: &[(SectionId, SectionBounds)]) -> Option<SectionId> {
    bounds
        .iter()
        .find(|(_, b)| b.straddles_probe())
        .map(|(id, _)| *id)
}

/// Whether the page has scrolled far enough for the nav background swap.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SOLID_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    // Lays the six sections out back-to-back with the given height and
    // returns their viewport boxes at a particular scroll offset.
    fn layout(section_height: f64, scroll_y: f64) -> Vec<(SectionId, SectionBounds)> {
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let top = i as f64 * section_height - scroll_y;
                (
                    *id,
                    SectionBounds {
                        top,
                        bottom: top + section_height,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn initial_scroll_position_selects_home() {
        let bounds = layout(800.0, 0.0);
        assert_eq!(active_section(&bounds), Some(SectionId::Home));
    }

    #[test]
    fn each_section_becomes_active_when_it_straddles_the_probe() {
        let height = 800.0;
        for (i, id) in SectionId::ALL.iter().enumerate() {
            // Scroll so this section's top sits 60px above the probe line.
            let scroll_y = i as f64 * height - SECTION_PROBE_OFFSET + 60.0;
            let bounds = layout(height, scroll_y);
            assert_eq!(active_section(&bounds), Some(*id), "section {id}");
        }
    }

    #[test]
    fn no_straddling_section_yields_none() {
        // Scrolled past the end of the last section.
        let bounds = layout(800.0, 6.0 * 800.0 + 500.0);
        assert_eq!(active_section(&bounds), None);
    }

    #[test]
    fn boundary_positions_count_as_straddling() {
        let exactly_at_probe = vec![(
            SectionId::Skills,
            SectionBounds {
                top: SECTION_PROBE_OFFSET,
                bottom: SECTION_PROBE_OFFSET,
            },
        )];
        assert_eq!(active_section(&exactly_at_probe), Some(SectionId::Skills));
    }

    #[test]
    fn missing_sections_are_skipped() {
        // Only two sections were found in the document; the probe still
        // resolves against what is there.
        let bounds = vec![
            (
                SectionId::Home,
                SectionBounds {
                    top: -900.0,
                    bottom: -100.0,
                },
            ),
            (
                SectionId::Projects,
                SectionBounds {
                    top: 50.0,
                    bottom: 850.0,
                },
            ),
        ];
        assert_eq!(active_section(&bounds), Some(SectionId::Projects));
        assert_eq!(active_section(&[]), None);
    }

    #[test]
    fn first_match_wins_on_overlap() {
        // Degenerate zero-height layout where two boxes sit on the probe
        // line; earlier slice position takes priority.
        let bounds = vec![
            (
                SectionId::About,
                SectionBounds {
                    top: 100.0,
                    bottom: 100.0,
                },
            ),
            (
                SectionId::Skills,
                SectionBounds {
                    top: 100.0,
                    bottom: 100.0,
                },
            ),
        ];
        assert_eq!(active_section(&bounds), Some(SectionId::About));
    }

    #[test]
    fn scrolled_flag_flips_strictly_past_the_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(NAV_SOLID_THRESHOLD));
        assert!(is_scrolled(NAV_SOLID_THRESHOLD + 0.1));
        assert!(is_scrolled(2400.0));
    }

    #[test]
    fn anchors_round_trip_and_are_distinct() {
        for id in SectionId::ALL {
            assert_eq!(id.anchor().parse::<SectionId>(), Ok(id));
            assert_eq!(id.to_string(), id.anchor());
        }
        let mut anchors: Vec<_> = SectionId::ALL.iter().map(|id| id.anchor()).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), SectionId::ALL.len());
    }

    #[test]
    fn unknown_anchor_fails_to_parse() {
        let err = "contact".parse::<SectionId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown section anchor: contact");
    }

    #[test]
    fn default_section_is_home() {
        assert_eq!(SectionId::default(), SectionId::Home);
    }
}
