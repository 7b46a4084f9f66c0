//! Static portfolio data: profile, skills, experience, projects, achievements.
//!
//! This is content, not configuration. It is compiled in as `'static` data
//! and never mutated; everything language-sensitive about it lives in the
//! message catalogs, not here.

use crate::locale::MessageKey;

/// Owner identity and the fixed numbers shown on the hero screen.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub resume_url: &'static str,
    pub resume_url_es: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub booking_url: &'static str,
    pub years_experience: u32,
    pub projects_completed: u32,
    pub technologies_mastered: u32,
    pub coffee_consumed: u32,
}

/// Skill grouping used by the skills screen filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Design,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Backend,
        SkillCategory::Frontend,
        SkillCategory::Tools,
        SkillCategory::Design,
    ];

    pub fn message_key(&self) -> MessageKey {
        match self {
            SkillCategory::Frontend => MessageKey::CategoryFrontend,
            SkillCategory::Backend => MessageKey::CategoryBackend,
            SkillCategory::Tools => MessageKey::CategoryTools,
            SkillCategory::Design => MessageKey::CategoryDesign,
        }
    }
}

/// Closed icon set. The source data can only name icons that exist here, and
/// anything future data leaves unspecified renders as the `Code` glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillIcon {
    Rust,
    Go,
    TypeScript,
    React,
    Postgres,
    Kafka,
    Redis,
    Grpc,
    Docker,
    Kubernetes,
    Git,
    Linux,
    #[default]
    Code,
}

impl SkillIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            SkillIcon::Rust => "🦀",
            SkillIcon::Go => "🐹",
            SkillIcon::TypeScript => "🟦",
            SkillIcon::React => "⚛",
            SkillIcon::Postgres => "🐘",
            SkillIcon::Kafka => "🪵",
            SkillIcon::Redis => "🟥",
            SkillIcon::Grpc => "🔌",
            SkillIcon::Docker => "🐳",
            SkillIcon::Kubernetes => "☸",
            SkillIcon::Git => "🌿",
            SkillIcon::Linux => "🐧",
            SkillIcon::Code => "⚙",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
    pub icon: SkillIcon,
    pub years: u32,
    pub is_core: bool,
    pub used_at: &'static [&'static str],
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct ExperienceEntry {
    pub id: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub current: bool,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub technologies: &'static [&'static str],
    pub repo_url: Option<&'static str>,
    pub featured: bool,
}

#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
}

pub const PROFILE: Profile = Profile {
    name: "Alex Moreno",
    role: "Staff Backend Engineer",
    company: "Portabledict",
    location: "Medellín, Colombia",
    resume_url: "https://alexmoreno.dev/resume/AlexMoreno_Resume_EN.pdf",
    resume_url_es: "https://alexmoreno.dev/resume/AlexMoreno_Resume_ES.pdf",
    github: "https://github.com/alexmoreno-dev",
    linkedin: "https://www.linkedin.com/in/alex-moreno-dev/",
    booking_url: "https://cal.com/alexmoreno/30min",
    years_experience: 9,
    projects_completed: 30,
    technologies_mastered: 20,
    coffee_consumed: 5000,
};

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Rust",
        category: SkillCategory::Backend,
        icon: SkillIcon::Rust,
        years: 6,
        is_core: true,
        used_at: &["Portabledict", "Datakraken"],
        description: "Primary language for the Portabledict platform services: an append-only event store, the API gateway and most of the internal tooling. Brought the team from one experimental service to Rust-first for everything latency-sensitive.",
    },
    Skill {
        name: "PostgreSQL",
        category: SkillCategory::Backend,
        icon: SkillIcon::Postgres,
        years: 8,
        is_core: true,
        used_at: &["Portabledict", "Datakraken", "Verdant"],
        description: "Schema design, query tuning and operational care for databases between gigabytes and low terabytes. The event ledger's snapshot compaction lives entirely in SQL.",
    },
    Skill {
        name: "Go",
        category: SkillCategory::Backend,
        icon: SkillIcon::Go,
        years: 5,
        is_core: true,
        used_at: &["Datakraken", "Verdant"],
        description: "Built the Datakraken stream router and its operator tooling. Still the language I reach for when a service needs to exist by Friday.",
    },
    Skill {
        name: "Kafka",
        category: SkillCategory::Backend,
        icon: SkillIcon::Kafka,
        years: 4,
        is_core: false,
        used_at: &["Datakraken"],
        description: "Exactly-once pipelines, consumer-group surgery and partition rebalancing stories I tell at dinner parties.",
    },
    Skill {
        name: "Redis",
        category: SkillCategory::Backend,
        icon: SkillIcon::Redis,
        years: 5,
        is_core: false,
        used_at: &["Datakraken", "Verdant"],
        description: "Caching, rate limiting and the occasional misuse as a queue. Verdant's payment idempotency keys lived here.",
    },
    Skill {
        name: "gRPC",
        category: SkillCategory::Backend,
        icon: SkillIcon::Grpc,
        years: 4,
        is_core: false,
        used_at: &["Portabledict"],
        description: "Service contracts for the Portabledict platform. Strong opinions about deadline propagation.",
    },
    Skill {
        name: "TypeScript",
        category: SkillCategory::Frontend,
        icon: SkillIcon::TypeScript,
        years: 5,
        is_core: false,
        used_at: &["Portabledict", "Verdant"],
        description: "Internal dashboards and the admin console at Verdant. Backend engineers also deserve type errors in the browser.",
    },
    Skill {
        name: "React",
        category: SkillCategory::Frontend,
        icon: SkillIcon::React,
        years: 4,
        is_core: false,
        used_at: &["Verdant"],
        description: "Built the merchant-facing settlement views at Verdant and enough internal tools to respect the people who do this full time.",
    },
    Skill {
        name: "Docker",
        category: SkillCategory::Tools,
        icon: SkillIcon::Docker,
        years: 7,
        is_core: false,
        used_at: &["Portabledict", "Datakraken", "Verdant"],
        description: "Reproducible builds and dev environments everywhere since 2018.",
    },
    Skill {
        name: "Kubernetes",
        category: SkillCategory::Tools,
        icon: SkillIcon::Kubernetes,
        years: 4,
        is_core: false,
        used_at: &["Portabledict", "Datakraken"],
        description: "Runs everything I ship. On first-name terms with CrashLoopBackOff.",
    },
    Skill {
        name: "Git",
        category: SkillCategory::Tools,
        icon: SkillIcon::Git,
        years: 10,
        is_core: false,
        used_at: &["Portabledict", "Datakraken", "Verdant", "Freelance"],
        description: "Version control and release workflows across every role, including the ones where I was the release workflow.",
    },
    Skill {
        name: "Linux",
        category: SkillCategory::Tools,
        icon: SkillIcon::Linux,
        years: 10,
        is_core: false,
        used_at: &["Portabledict", "Datakraken", "Verdant", "Freelance"],
        description: "Daily driver and production target. This portfolio is a love letter to the terminal.",
    },
    Skill {
        name: "API Design",
        category: SkillCategory::Design,
        icon: SkillIcon::Code,
        years: 6,
        is_core: true,
        used_at: &["Portabledict", "Verdant"],
        description: "Versioning strategies, pagination that survives contact with reality, and error contracts people can actually program against.",
    },
    Skill {
        name: "CLI Design",
        category: SkillCategory::Design,
        icon: SkillIcon::Code,
        years: 3,
        is_core: false,
        used_at: &["Portabledict"],
        description: "Operator tooling with --help worth reading. Exhibit A: the thing you are looking at.",
    },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        id: "portabledict-staff",
        company: "Portabledict",
        role: "Staff Backend Engineer",
        period: "2024-now",
        description: "Own the platform services: event ledger, API gateway, internal service mesh. Led the migration of the audit trail to an append-only store, cutting storage costs by 40%.",
        technologies: &["Rust", "PostgreSQL", "gRPC", "Kubernetes"],
        current: true,
    },
    ExperienceEntry {
        id: "portabledict-senior",
        company: "Portabledict",
        role: "Senior Backend Engineer",
        period: "2022-2024",
        description: "Designed and shipped the first Rust service in the fleet, then the second through tenth. Introduced structured error taxonomies and request tracing across the platform.",
        technologies: &["Rust", "PostgreSQL", "Docker"],
        current: false,
    },
    ExperienceEntry {
        id: "datakraken-eng2",
        company: "Datakraken",
        role: "Backend Engineer II",
        period: "2020-2022",
        description: "Built the stream router that moved billions of events a day between Kafka topics with exactly-once delivery. On-call veteran, incident postmortem enthusiast.",
        technologies: &["Go", "Kafka", "Redis"],
        current: false,
    },
    ExperienceEntry {
        id: "datakraken-eng",
        company: "Datakraken",
        role: "Backend Engineer",
        period: "2019-2020",
        description: "Consumer-group tooling and the ingestion edge. First taste of systems that page you at 3am and the instrumentation that stops them doing it twice.",
        technologies: &["Go", "Kafka"],
        current: false,
    },
    ExperienceEntry {
        id: "verdant-fullstack",
        company: "Verdant",
        role: "Full Stack Developer",
        period: "2018-2019",
        description: "Payments plumbing and the merchant settlement console. Idempotency keys, reconciliation jobs and a React frontend that mostly behaved.",
        technologies: &["TypeScript", "React", "PostgreSQL"],
        current: false,
    },
    ExperienceEntry {
        id: "verdant-dev",
        company: "Verdant",
        role: "Software Developer",
        period: "2017-2018",
        description: "Internal tools and integrations against bank APIs of varying honesty.",
        technologies: &["TypeScript", "Redis"],
        current: false,
    },
    ExperienceEntry {
        id: "freelance",
        company: "Freelance",
        role: "Web Developer",
        period: "2016-2017",
        description: "Small-business sites and shops. Learned estimation the expensive way.",
        technologies: &["JavaScript"],
        current: false,
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "event-ledger",
        title: "Event Ledger",
        description: "Append-only event store with snapshot compaction powering an enterprise audit trail.",
        long_description: "Designed and built Portabledict's audit backbone: an append-only event store in Rust over PostgreSQL with periodic snapshot compaction, cursor-based replay and gRPC streaming reads. Handles the full write path for platform audit events with p99 write latency under 4ms, and cut audit storage costs by 40% against the previous document-store design.",
        technologies: &["Rust", "PostgreSQL", "gRPC", "tokio"],
        repo_url: None,
        featured: true,
    },
    Project {
        id: "stream-router",
        title: "Stream Router",
        description: "Exactly-once delivery router between Kafka topics with pluggable transforms.",
        long_description: "Datakraken's routing layer: consumes from source topics, applies per-route transforms and produces to destinations with exactly-once semantics via transactional producers. Billions of events a day, hot-reloadable route tables, and a small operator CLI that became unexpectedly popular with the support team.",
        technologies: &["Go", "Kafka", "Redis"],
        repo_url: None,
        featured: true,
    },
    Project {
        id: "termfolio",
        title: "termfolio",
        description: "This portfolio: a ratatui app with an embedded command interpreter.",
        long_description: "A terminal rendition of the classic single-page portfolio: markdown blog with frontmatter, bilingual content, and a toy shell with command history, autocomplete and at least one hidden command. Built with ratatui and tokio; the blog posts are plain markdown files discovered at startup.",
        technologies: &["Rust", "ratatui", "tokio"],
        repo_url: Some("https://github.com/alexmoreno-dev/termfolio"),
        featured: true,
    },
    Project {
        id: "pl0-compiler",
        title: "PL/0 Compiler",
        description: "Academic compiler implementation for the PL/0 language.",
        long_description: "A complete compiler for PL/0 written during systems engineering coursework: lexer, recursive-descent parser and stack-machine code generation. Kept around as a reminder that parsers are never as simple as the grammar suggests.",
        technologies: &["Python", "Compilers"],
        repo_url: Some("https://github.com/alexmoreno-dev/pl0"),
        featured: false,
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "rust-evangelist",
        title: "Rust Evangelist",
        description: "Converted an entire platform team, one borrow checker argument at a time",
        icon: "🦀",
        unlocked: true,
    },
    Achievement {
        id: "postgres-whisperer",
        title: "Postgres Whisperer",
        description: "8+ years of EXPLAIN ANALYZE",
        icon: "🐘",
        unlocked: true,
    },
    Achievement {
        id: "pipeline-plumber",
        title: "Pipeline Plumber",
        description: "Billions of events a day, delivered exactly once",
        icon: "🔧",
        unlocked: true,
    },
    Achievement {
        id: "open-source",
        title: "Open Source Contributor",
        description: "Giving back to the crates that carry this app",
        icon: "🌍",
        unlocked: true,
    },
    Achievement {
        id: "coffee-addict",
        title: "Coffee Addict",
        description: "5000+ cups and counting",
        icon: "☕",
        unlocked: true,
    },
    Achievement {
        id: "night-owl",
        title: "Night Owl",
        description: "Best code written after midnight",
        icon: "🦉",
        unlocked: true,
    },
];

/// Skills for the skills screen: optional category filter, then most
/// experienced first. Ties keep the declaration order (core skills are
/// declared first within a category).
pub fn filtered_skills(category: Option<SkillCategory>) -> Vec<&'static Skill> {
    let mut skills: Vec<&Skill> = SKILLS
        .iter()
        .filter(|skill| category.map_or(true, |c| skill.category == c))
        .collect();
    skills.sort_by(|a, b| b.years.cmp(&a.years));
    skills
}

/// Distinct technology names across all projects, alphabetical.
pub fn all_technologies() -> Vec<&'static str> {
    let mut techs: Vec<&str> = PROJECTS
        .iter()
        .flat_map(|project| project.technologies.iter().copied())
        .collect();
    techs.sort_unstable();
    techs.dedup();
    techs
}

/// Projects matching a technology filter, in declaration order.
pub fn filtered_projects(technology: Option<&str>) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|project| {
            technology.map_or(true, |tech| project.technologies.contains(&tech))
        })
        .collect()
}
