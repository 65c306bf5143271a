//! Everything the page displays, as static data. The components decide how
//! it looks; this module decides what it says.

/// Stroke path data for the inline 24x24 icons, feather-style.
pub mod glyphs {
    pub const BRIEFCASE: &str =
        "M20 7H4a2 2 0 00-2 2v10a2 2 0 002 2h16a2 2 0 002-2V9a2 2 0 00-2-2zM16 7V5a2 2 0 00-2-2h-4a2 2 0 00-2 2v2";
    pub const TARGET: &str =
        "M12 12m-10 0a10 10 0 1020 0 10 10 0 10-20 0M12 12m-6 0a6 6 0 1012 0 6 6 0 10-12 0M12 12m-2 0a2 2 0 104 0 2 2 0 10-4 0";
    pub const USERS: &str =
        "M17 21v-2a4 4 0 00-4-4H5a4 4 0 00-4 4v2M9 11a4 4 0 100-8 4 4 0 000 8M23 21v-2a4 4 0 00-3-3.87M16 3.13a4 4 0 010 7.75";
    pub const PULSE: &str = "M22 12h-4l-3 9L9 3l-3 9H2";
    pub const CODE: &str = "M16 18l6-6-6-6M8 6l-6 6 6 6";
    pub const PEN: &str =
        "M12 19l7-7 3 3-7 7-3-3zM18 13l-1.5-7.5L2 2l3.5 14.5L13 18l5-5zM2 2l7.586 7.586";
    pub const DATABASE: &str =
        "M12 8c4.97 0 9-1.343 9-3s-4.03-3-9-3-9 1.343-9 3 4.03 3 9 3zM21 12c0 1.66-4 3-9 3s-9-1.34-9-3M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5";
    pub const CLOUD: &str = "M18 10h-1.26A8 8 0 109 20h9a5 5 0 000-10z";
    pub const CALENDAR: &str =
        "M8 2v4M16 2v4M3 10h18M5 4h14a2 2 0 012 2v14a2 2 0 01-2 2H5a2 2 0 01-2-2V6a2 2 0 012-2z";
    pub const CHEVRON_RIGHT: &str = "M9 18l6-6-6-6";
    pub const CHEVRON_LEFT: &str = "M15 18l-6-6 6-6";
    pub const ARROW_UP_RIGHT: &str = "M7 17L17 7M7 7h10v10";
    pub const CLOSE: &str = "M18 6L6 18M6 6l12 12";
    pub const MENU: &str = "M3 12h18M3 6h18M3 18h18";
    pub const MAIL: &str =
        "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2zM22 6l-10 7L2 6";
    pub const LINKEDIN: &str =
        "M16 8a6 6 0 016 6v7h-4v-7a2 2 0 00-2-2 2 2 0 00-2 2v7h-4v-7a6 6 0 016-6zM2 9h4v12H2zM4 6a2 2 0 100-4 2 2 0 000 4";
}

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub portrait: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "JIWOO HAN",
    role: "Backend Developer",
    tagline: "A developer who builds the value of a service into its code",
    email: "jiwoo.han.dev@gmail.com",
    linkedin: "https://www.linkedin.com/in/jiwoo-han-dev/",
    portrait: "/profile.svg",
};

pub struct AboutCard {
    pub icon: &'static str,
    pub accent: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub static ABOUT_INTRO: &str = "I'm Jiwoo Han, a backend developer who cares about the value a service delivers. I keep growing through collaboration and a steady appetite for new challenges.";

pub static ABOUT_CARDS: [AboutCard; 4] = [
    AboutCard {
        icon: glyphs::BRIEFCASE,
        accent: "text-blue-300",
        title: "Building and shipping",
        body: "Across several team projects I've owned everything from architecture design to deployment, and clear communication with teammates turned each one into a better result.",
    },
    AboutCard {
        icon: glyphs::TARGET,
        accent: "text-red-300",
        title: "Challenge and growth",
        body: "Solving the problem is the starting point, not the finish line. I keep asking how a change can add value to the service, and I never stop sharpening my craft.",
    },
    AboutCard {
        icon: glyphs::USERS,
        accent: "text-green-300",
        title: "Communication and teamwork",
        body: "Good partnerships multiply what a team can do. I aim for honest feedback, tight schedules kept, and every piece of work delivered on time.",
    },
    AboutCard {
        icon: glyphs::PULSE,
        accent: "text-yellow-300",
        title: "Ownership and leadership",
        body: "I take responsibility for what I ship, step up when problems appear, and as a lead I try to give the team a direction worth following.",
    },
];

pub struct SkillGroup {
    pub title: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        title: "Languages",
        icon: glyphs::CODE,
        accent: "text-blue-400",
        skills: &["Java", "Python", "TypeScript"],
    },
    SkillGroup {
        title: "Frameworks & Libraries",
        icon: glyphs::PEN,
        accent: "text-green-400",
        skills: &["Spring Boot", "Play"],
    },
    SkillGroup {
        title: "Infrastructure & Database",
        icon: glyphs::DATABASE,
        accent: "text-purple-400",
        skills: &["Jenkins", "AWS RDS", "AWS S3", "GCP", "MongoDB", "MySQL"],
    },
    SkillGroup {
        title: "Tools",
        icon: glyphs::CLOUD,
        accent: "text-red-400",
        skills: &["Git", "Slack", "Postman", "Jira", "Confluence"],
    },
];

pub struct ExperienceEntry {
    pub role: &'static str,
    pub period: &'static str,
    pub company: &'static str,
    pub summary: &'static str,
    pub responsibilities: &'static [&'static str],
    pub highlights: &'static [&'static str],
}

pub static EXPERIENCE: [ExperienceEntry; 1] = [ExperienceEntry {
    role: "Backend Developer",
    period: "2023.12 – present",
    company: "Highbrow",
    summary: "Content development and server operations for a live mobile collection game serving Korea, Asia, the Americas, Europe and Oceania.",
    responsibilities: &[
        "Server-side content development in Java",
        "Database operations over MongoDB (core content data) and MySQL (marketplace data)",
        "First responder for live-service incidents",
        "Operations-tool features: push, notices, alerts, data lookup and repair",
        "Weekly content drops for main features and events",
    ],
    highlights: &[
        "Reworked the village resource-collection loop from per-building requests to a single batched pass with a new data layout, cutting collection time sharply",
        "Turned the recurring QA patch routine (code deploy plus table refresh) into a three-click operations-tool flow",
        "Collapsed a step from the weekly update pipeline by uploading data tables to the QA server and propagating to live servers automatically",
        "Restructured marketplace trade data and added Redis caching so entry and search stay fast as thousands of weekly trades accumulate",
        "Made API-doc refresh conditional on new router registrations instead of rebuilding every entry, a tenfold improvement in load time",
    ],
}];

pub struct ActivityEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub org: &'static str,
    pub accent: &'static str,
    pub points: &'static [&'static str],
}

pub static ACTIVITIES: [ActivityEntry; 3] = [
    ActivityEntry {
        period: "2022.09 – 2023.11",
        title: "Digital literacy program supporter",
        org: "Ministry of Science and ICT / NIA",
        accent: "text-blue-400",
        points: &[
            "Hands-on support and technical help for a nationwide digital literacy program",
            "Taught workshops and practice sessions that raised participants' digital skills",
            "Helped organize seminars on current technology topics",
            "Co-authored training material with the program team",
        ],
    },
    ActivityEntry {
        period: "2022.03 – 2023.11",
        title: "KONNECT IT conference club, organizer",
        org: "Konkuk University",
        accent: "text-green-400",
        points: &[
            "Ran a conference community of about sixty members",
            "Hosted sessions sharing new technology and personal projects",
            "Shared hiring and interview knowledge for backend roles",
        ],
    },
    ActivityEntry {
        period: "2022.06 – 2023.03",
        title: "Algorithm study group member",
        org: "Konkuk University",
        accent: "text-pink-400",
        points: &[
            "Studied algorithms with a focus on performance",
            "Weekly problem solving with shared feedback",
            "Built visual walkthroughs to make hard problems approachable",
        ],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub link: Option<&'static str>,
}

impl Project {
    /// Detail copy split into display paragraphs, blank lines dropped.
    pub fn paragraphs(&self) -> impl Iterator<Item = &'static str> {
        self.details.lines().filter(|line| !line.trim().is_empty())
    }
}

pub static PROJECTS: [Project; 2] = [
    Project {
        title: "Doogeun",
        description: "A matchmaking and meetup platform for university students",
        details: "\
Web-based one-to-one matching and group meetup service built with Spring Boot, JPA, React, GCP, MySQL on RDS and S3 (2022.09 – 2023.06).
Daily one-to-one recommendations scored from each member's profile and stated preferences.
Group meetups anyone can host, with open rooms others can join to arrange a meeting.
JWT-based authentication and authorization, chosen for how easily it scales out.
A member page for profile management and a history of matches and meetups joined.
Deployed and monitored on Google Cloud Platform.
Started when remote semesters thinned out campus life, as a way to help students actually meet.
Follow-up work added one-to-one chat, a CI/CD pipeline, and a community board for reviews and venue tips.",
        link: Some("https://github.com/jiwoo-han-dev/doogeun"),
    },
    Project {
        title: "Asthma care monitor",
        description: "Real-time health monitoring built on IoT sensors and Fitbit data",
        details: "\
A health-care service for asthma patients that pairs ambient environment data from a Raspberry Pi with the wearer's Fitbit vitals.
A temperature and humidity sensor on the Pi streams readings through AWS IoT Core, processed by Lambda functions.
Fitbit heart-rate and activity data joins public air-quality feeds for combined analysis.
Correlates environment and health signals and alerts the patient when conditions turn risky.
I owned the sensor wiring and collection loop, the IoT Core and Lambda setup, and the realtime processing path down to the client.",
        link: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_drop_blank_lines() {
        let project = Project {
            title: "t",
            description: "d",
            details: "first\n\n  \nsecond\nthird\n",
            link: None,
        };
        let paragraphs: Vec<_> = project.paragraphs().collect();
        assert_eq!(paragraphs, vec!["first", "second", "third"]);
    }

    #[test]
    fn every_project_has_copy_to_render() {
        for project in &PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert!(project.paragraphs().count() > 1, "{}", project.title);
        }
    }

    #[test]
    fn list_content_is_populated() {
        assert!(ABOUT_CARDS.iter().all(|c| !c.body.is_empty()));
        assert!(SKILL_GROUPS.iter().all(|g| !g.skills.is_empty()));
        assert!(EXPERIENCE.iter().all(|e| !e.responsibilities.is_empty()));
        assert!(ACTIVITIES.iter().all(|a| !a.points.is_empty()));
    }
}
