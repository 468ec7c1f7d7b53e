//! Static copy for the portfolio page.

pub const OWNER_NAME: &str = "Alex Morgan";
pub const OWNER_ROLE: &str = "Systems & Web Engineer";
pub const TAGLINE: &str = "I build fast, dependable software, from storage engines to the pixels on your screen.";
pub const CONTACT_EMAIL: &str = "hello@alexmorgan.dev";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I've spent the last decade shipping backend services, developer tooling and the occasional frontend that needed to feel instant.",
    "These days I work mostly in Rust and TypeScript, and I care about clear interfaces, honest error handling and code that is pleasant to delete.",
];

/// A named group of skills rendered as one card.
pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup { title: "Languages", items: &["Rust", "TypeScript", "Go", "SQL"] },
    SkillGroup { title: "Backend", items: &["axum", "tokio", "PostgreSQL", "Redis"] },
    SkillGroup { title: "Frontend", items: &["Leptos", "WebAssembly", "React", "CSS"] },
    SkillGroup { title: "Operations", items: &["Docker", "Kubernetes", "Terraform", "Observability"] },
];

pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Ledgerline",
        summary: "Append-only event store with snapshotting and point-in-time queries.",
        tags: &["Rust", "Storage"],
        url: "https://github.com/alexmorgan/ledgerline",
    },
    Project {
        name: "Quill",
        summary: "Collaborative markdown editor with CRDT sync over WebSockets.",
        tags: &["Leptos", "WebSockets"],
        url: "https://github.com/alexmorgan/quill",
    },
    Project {
        name: "Tern",
        summary: "Tiny HTTP load generator with latency histograms and CSV export.",
        tags: &["CLI", "Networking"],
        url: "https://github.com/alexmorgan/tern",
    },
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/alexmorgan"),
    ("LinkedIn", "https://www.linkedin.com/in/alexmorgan"),
];
