//! Copy and data rendered by the page sections.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Navy,
    Camel,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Navy => "accent-navy",
            Accent::Camel => "accent-camel",
        }
    }
}

pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: Option<&'static str>,
    pub icon: &'static str,
    pub accent: Accent,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Hyperion – Automated Trading System",
        description: "A fully automated trading system implementing the ICT 2022 methodology for forex and indices markets. The system analyzes real-time market data, detects complex patterns, executes trades, and manages risk dynamically – operating autonomously in live financial markets. Demonstrates ability to build complex, reliable systems in financial domain with strong architectural thinking.",
        tech_stack: &["Python", "MetaTrader 5 API", "Algorithmic Trading", "YAML Configuration"],
        github_url: "https://github.com/israelalalibo/Hyperion",
        live_url: None,
        icon: "📈",
        accent: Accent::Navy,
    },
    Project {
        name: "StudentHub – Full Stack Web Platform",
        description: "Production web platform with MVC architecture, database integration, payment processing, and automated deployment. Features PostgreSQL integration, Stripe payment processing for secure financial transactions, load testing with Locust for performance validation, and CI/CD deployment on Vercel with automated pipelines.",
        tech_stack: &["Node.js", "Express.js", "PostgreSQL", "Stripe API", "CI/CD", "Vercel"],
        github_url: "https://github.com/israelalalibo/StudentHub",
        live_url: Some("https://student-hub-beige-pi.vercel.app"),
        icon: "🛒",
        accent: Accent::Camel,
    },
    Project {
        name: "AlbumReview – Secure Web Application",
        description: "Web application demonstrating security-first development practices and clean, maintainable code. Features parameterized SQL queries preventing injection vulnerabilities, bcrypt password hashing, secure session management, Docker Compose for consistent development environments, and clean architecture with focus on maintainability.",
        tech_stack: &["PHP", "MySQL", "JavaScript", "Docker", "Security Best Practices"],
        github_url: "https://github.com/israelalalibo/AlbumReview",
        live_url: None,
        icon: "🎵",
        accent: Accent::Camel,
    },
];

pub struct SkillCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
    pub accent: Accent,
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Backend & Enterprise",
        icon: "🖥",
        skills: &["C# .NET", "ASP.NET Core", "REST APIs", "Entity Framework", "n-tier Architecture", "Python"],
        accent: Accent::Navy,
    },
    SkillCategory {
        name: "Databases & Data",
        icon: "🗄",
        skills: &["SQL Server", "PostgreSQL", "MySQL", "Query Optimization", "Stored Procedures", "Schema Design"],
        accent: Accent::Camel,
    },
    SkillCategory {
        name: "Frontend",
        icon: "🖌",
        skills: &["JavaScript", "TypeScript", "HTML5", "CSS3", "Responsive Design"],
        accent: Accent::Camel,
    },
    SkillCategory {
        name: "DevOps & CI/CD",
        icon: "🔧",
        skills: &["Azure DevOps", "Git", "CI/CD Pipelines", "Docker", "Automated Testing"],
        accent: Accent::Navy,
    },
];

/// Language name and self-assessed proficiency in percent.
pub const LANGUAGE_SKILLS: &[(&str, u8)] = &[
    ("C#", 95),
    ("SQL", 90),
    ("JavaScript", 85),
    ("TypeScript", 80),
    ("Python", 85),
];

pub const TOOLS: &[(&str, &str)] = &[
    ("🔀", "Azure DevOps"),
    ("📦", "Docker"),
    ("🗂", "Agile/Scrum"),
    ("🧪", "TDD"),
];

/// Headline numbers shown under the hero text.
pub const HERO_STATS: &[(&str, &str)] = &[
    ("15+", "Technologies"),
    ("3+", "Major Projects"),
    ("1.5+", "Years Professional"),
];

/// CSS `transition-delay` that staggers cards in a grid.
pub fn stagger_delay(index: usize) -> String {
    format!("transition-delay: {}ms;", index * 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_stagger_by_a_hundred_milliseconds() {
        assert_eq!(stagger_delay(0), "transition-delay: 0ms;");
        assert_eq!(stagger_delay(3), "transition-delay: 300ms;");
    }

    #[test]
    fn language_levels_are_percentages() {
        assert!(LANGUAGE_SKILLS.iter().all(|(_, level)| *level <= 100));
    }

    #[test]
    fn every_project_links_to_source() {
        assert!(PROJECTS.iter().all(|project| project.github_url.starts_with("https://github.com/")));
        assert_eq!(PROJECTS.iter().filter(|project| project.live_url.is_some()).count(), 1);
    }
}
