//! Static site content and page sections.
//!
//! Everything here is presentation data: the page renders it verbatim and
//! never mutates it. The built-in defaults can be overridden from a TOML
//! file, so every struct derives serde both ways.

use serde::{Deserialize, Serialize};

/// In-page sections the navigation bar links to, in nav order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::About, Self::Projects, Self::Skills, Self::Contact];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    /// Anchor name used for navigation intents.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::About => "#about",
            Self::Projects => "#projects",
            Self::Skills => "#skills",
            Self::Contact => "#contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    /// Paragraphs for the about section, rendered in order.
    pub about: Vec<String>,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

/// Complete content for the single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Sanjeevi Kumar".to_string(),
                role: "Full Stack Engineer".to_string(),
                tagline: "Crafting distinct web experiences with modern tech.".to_string(),
                about: vec![
                    "Hey - I'm Sanjeevi, a developer who loves building things that feel \
                     smooth, simple, and genuinely useful. I'm currently studying at DTU, and \
                     somewhere between late-night debugging and college chaos, I discovered \
                     that I enjoy solving problems that actually help people."
                        .to_string(),
                    "I've worked on a few cool things - like the backend for an \
                     emotional-analysis prototype for SIH, and a Flutter app where I handled \
                     the entire frontend. I'm also growing fast in Python, SQL, and currently \
                     diving deep into Django."
                        .to_string(),
                    "I like clean code, meaningful products, and working with people who \
                     think the same. If you want to build something interesting - let's talk."
                        .to_string(),
                ],
                socials: vec![
                    SocialLink {
                        name: "GitHub".to_string(),
                        url: "https://github.com/sanju-077".to_string(),
                    },
                    SocialLink {
                        name: "LinkedIn".to_string(),
                        url: "https://linkedin.com".to_string(),
                    },
                    SocialLink {
                        name: "Twitter".to_string(),
                        url: "https://twitter.com".to_string(),
                    },
                ],
            },
            projects: vec![
                Project {
                    title: "Personal Portfolio".to_string(),
                    description: "This portfolio where I share projects, case studies and \
                                  experiments. Focused on speed and accessibility."
                        .to_string(),
                    tags: vec!["Rust".to_string(), "ratatui".to_string()],
                    link: Some("#projects".to_string()),
                    repo: Some("https://github.com/sanju-077".to_string()),
                },
                Project {
                    title: "Taskly - Smart Task Manager".to_string(),
                    description: "A productivity app that intelligently schedules tasks and \
                                  syncs with calendars. Includes offline-first sync and a \
                                  lightweight mobile view."
                        .to_string(),
                    tags: vec![
                        "React".to_string(),
                        "Node.js".to_string(),
                        "PostgreSQL".to_string(),
                    ],
                    link: None,
                    repo: None,
                },
                Project {
                    title: "Streamlytics".to_string(),
                    description: "Real-time event dashboards and visualizations for streaming \
                                  analytics, designed to handle high-throughput data with low \
                                  latency."
                        .to_string(),
                    tags: vec![
                        "D3".to_string(),
                        "WebSockets".to_string(),
                        "Node.js".to_string(),
                    ],
                    link: None,
                    repo: None,
                },
            ],
            skills: vec![
                SkillGroup {
                    name: "Frontend".to_string(),
                    items: vec!["HTML/CSS".to_string(), "Flutter".to_string()],
                },
                SkillGroup {
                    name: "Backend & Data".to_string(),
                    items: vec![
                        "Python".to_string(),
                        "Django".to_string(),
                        "SQL".to_string(),
                        "Firebase".to_string(),
                    ],
                },
                SkillGroup {
                    name: "Tools".to_string(),
                    items: vec!["Git".to_string(), "VS Code".to_string()],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Section;

    #[test]
    fn nav_order_matches_page_order() {
        assert_eq!(
            Section::ALL,
            [
                Section::About,
                Section::Projects,
                Section::Skills,
                Section::Contact
            ]
        );
    }

    #[test]
    fn anchors_are_lowercase_labels() {
        for section in Section::ALL {
            let anchor = section.anchor();
            assert!(anchor.starts_with('#'));
            assert_eq!(anchor[1..], section.label().to_ascii_lowercase());
        }
    }
}
