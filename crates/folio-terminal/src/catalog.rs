//! Static resume content served by the terminal.

use folio_types::config::Project;

/// Literal commands answered with a fixed block of text.
pub const CANNED: &[(&str, &str)] = &[
    (
        "/help",
        "Available commands:\n\
         /help - show this help\n\
         /about - summary\n\
         /projects - list featured projects\n\
         /open <n> - open project by number\n\
         /skills - show core skills\n\
         /experience - show work experience\n\
         /contact - contact info\n\
         /theme dark|light - switch theme (visual)\n\
         /clear - clear the screen",
    ),
    (
        "/contact",
        "Contact:\n\
         Email: vidantforeal@gmail.com\n\
         GitHub: https://github.com/vidanttt\n\
         LinkedIn: www.linkedin.com/in/vidaant",
    ),
    (
        "/about",
        "Full-stack developer focused on building performant, accessible web applications with modern tooling.",
    ),
];

/// Look up the canned response for an exact command string.
pub fn canned(cmd: &str) -> Option<&'static str> {
    CANNED
        .iter()
        .find(|(name, _)| *name == cmd)
        .map(|(_, text)| *text)
}

/// Built-in projects, used when the host supplies none.
pub const DEFAULT_PROJECTS: &[(&str, &str)] = &[
    (
        "Netflix Portfolio",
        "Netflix-style portfolio (Next.js, Tailwind, Framer Motion)",
    ),
    (
        "E-Commerce Platform",
        "Full-stack commerce app (React, Node.js, Stripe)",
    ),
    (
        "Task Management App",
        "Real-time collaboration (Vue, WebSockets, PostgreSQL)",
    ),
    ("AI Chat Bot", "NLP powered assistant (Python, OpenAI API)"),
];

pub fn default_projects() -> Vec<Project> {
    DEFAULT_PROJECTS
        .iter()
        .map(|(title, desc)| Project::new(*title, *desc))
        .collect()
}

/// Skill categories and their items, in display order.
pub const SKILLS: &[(&str, &[&str])] = &[
    (
        "Frontend",
        &["React/Next.js", "TypeScript", "Tailwind", "Accessibility"],
    ),
    ("Backend", &["Node.js", "Python"]),
    ("DevOps", &["AWS/Vercel"]),
];

/// A work-history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Senior Full Stack Developer",
        company: "TechCorp Inc.",
        period: "2023 - Present",
    },
    Experience {
        role: "Frontend Developer",
        company: "StartupXYZ",
        period: "2021 - 2023",
    },
    Experience {
        role: "Junior Developer",
        company: "WebSolutions Ltd.",
        period: "2020 - 2021",
    },
];

pub fn skill_lines() -> Vec<String> {
    SKILLS
        .iter()
        .map(|(category, items)| format!("{category}: {}", items.join(", ")))
        .collect()
}

pub fn experience_lines() -> Vec<String> {
    EXPERIENCE
        .iter()
        .map(|e| format!("{} @ {} ({})", e.role, e.company, e.period))
        .collect()
}
