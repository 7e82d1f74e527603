//! Static content rendered by the portfolio sections.

pub const NAME: &str = "G.J. Rahul";
pub const INITIALS: &str = "GR";
pub const TAGLINE: &str = "Building the Intelligence of Tomorrow";
pub const LOCATION: &str = "Bengaluru, Karnataka, India";
pub const EMAIL: &str = "opentowork0621@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/gjrahul1";
pub const GITHUB_HANDLE: &str = "@gjrahul1";
pub const SUMMARY: &str = "AI/ML Product Engineer building production-grade AI systems across ML models, pipelines, and agentic AI. Experienced with Generative AI, LLMs, and retrieval-augmented generation (RAG), with a focus on scalability, reasoning, and clean system design. Passionate about delivering knowledge-driven applications that bridge ML fundamentals with next-gen AI.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub position: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        position: "AI/ML Product Engineer • AI Developer Intern",
        company: "MNR Technologies Global Pvt Ltd",
        location: "Hyderabad, Telangana, India",
        duration: "June 2025 - September 2025 (4 months)",
        description: "Designed and developed end-to-end AI Pipelines and workflows. Progressed from intern to product engineer role, contributing to scalable AI system architecture and implementation.",
    },
    Experience {
        position: "Gen AI Intern",
        company: "Innomatics Research Labs",
        location: "Remote",
        duration: "January 2025 - April 2025 (4 months)",
        description: "Worked on Generative AI projects and research initiatives",
    },
    Experience {
        position: "Machine Learning Engineer",
        company: "Feynn Labs Consultancy Services",
        location: "Remote",
        duration: "December 2024 - March 2025 (4 months)",
        description: "AI product/service Prototyping and Market Segmentation",
    },
    Experience {
        position: "Data Science Trainee",
        company: "Meta Scifor Technologies",
        location: "Bengaluru, Karnataka, India",
        duration: "October 2024 - March 2025 (6 months)",
        description: "Comprehensive training in data science methodologies and machine learning techniques",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub field: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Bachelor of Engineering",
        field: "Information Science & Engineering",
        institution: "AMC Engineering College",
        duration: "December 2021 - August 2025",
        description: "Focused on computer science fundamentals with specialization in AI/ML",
    },
    Education {
        degree: "Senior Secondary (XII)",
        field: "Science",
        institution: "Surana College",
        duration: "2019 - 2021",
        description: "Science stream with focus on Mathematics and Physics",
    },
    Education {
        degree: "Secondary (X)",
        field: "Science",
        institution: "A.P.S. Public School",
        duration: "2019",
        description: "Secondary education with strong foundation in sciences",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Completed,
    InDevelopment,
    Planning,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::InDevelopment => "In Development",
            Self::Planning => "Planning",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Active => "text-neon-green",
            Self::Completed => "text-blue-400",
            Self::InDevelopment => "text-yellow-400",
            Self::Planning => "text-light-secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: Option<&'static str>,
    pub status: ProjectStatus,
}

impl Project {
    pub fn uses(&self, skill: &str) -> bool {
        self.technologies
            .iter()
            .any(|t| t.eq_ignore_ascii_case(skill))
    }
}

pub const PROJECTS: &[Project] = &[Project {
    title: "MedLabs",
    description: "AI-powered medical laboratory management system with intelligent diagnostics and automated reporting",
    technologies: &["Python", "Machine Learning", "Healthcare AI", "Data Analytics"],
    github_url: "https://github.com/gjrahul1/MedLabs",
    live_url: None,
    status: ProjectStatus::Active,
}];

pub const SKILL_GROUPS: &[(&str, &[&str])] = &[
    (
        "Core Skills",
        &[
            "Machine Learning",
            "Deep Learning",
            "LLMs & RAG",
            "Agentic AI",
            "System Design",
            "Design Patterns",
        ],
    ),
    (
        "Tools & Technologies",
        &[
            "Python",
            "TensorFlow",
            "PyTorch",
            "LangChain",
            "FastAPI",
            "React",
            "Docker",
            "Git",
            "N8n",
            "Zapier",
        ],
    ),
];

/// Word cloud input: skill and weight on a 2..=9 scale.
pub const SKILL_WEIGHTS: &[(&str, f64)] = &[
    ("Machine Learning", 9.0),
    ("Python", 8.0),
    ("LLMs", 7.0),
    ("RAG", 6.0),
    ("AI Agents", 6.0),
    ("Deep Learning", 6.0),
    ("TensorFlow", 5.0),
    ("PyTorch", 5.0),
    ("Docker", 4.0),
    ("React", 4.0),
    ("Design Patterns", 4.0),
    ("Git", 4.0),
    ("System Design", 3.0),
    ("FastAPI", 3.0),
    ("LangChain", 3.0),
    ("N8n", 2.0),
    ("Zapier", 2.0),
];

pub const FOOTER_LINKS: &[(&str, &str)] = &[
    ("Experience", "#experience"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Blog", "#blog"),
    ("Contact", "#contact"),
];
