//! Static site content: profile, skills, projects, and contact details.

pub const OWNER_NAME: &str = "Alex Morgan";
pub const OWNER_LOCATION: &str = "Pune, Maharashtra, India";
pub const OWNER_EMAIL: &str = "hello@example.com";
pub const OWNER_PHONE: &str = "+91 00000 00000";
pub const RESUME_PATH: &str = "/resume.pdf";

pub const GITHUB_URL: &str = "https://github.com/example";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/example";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/example";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub const SKILLS: [Skill; 8] = [
    Skill { name: "HTML", level: 95 },
    Skill { name: "CSS", level: 90 },
    Skill { name: "JavaScript", level: 45 },
    Skill { name: "Python", level: 38 },
    Skill { name: "React", level: 45 },
    Skill { name: "Node.js", level: 23 },
    Skill { name: "Java", level: 55 },
    Skill { name: "MySQL", level: 75 },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub count: u32,
}

pub const STATS: [Stat; 3] = [
    Stat { label: "Projects", count: 12 },
    Stat { label: "Completed", count: 8 },
    Stat { label: "Technologies", count: 12 },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BioItem {
    pub label: &'static str,
    pub value: &'static str,
}

pub const BIO: [BioItem; 4] = [
    BioItem { label: "Name", value: OWNER_NAME },
    BioItem { label: "Diploma", value: "Diploma in Mechanical Engineering" },
    BioItem { label: "Graduation", value: "BE in Computer Engineering" },
    BioItem { label: "Interests", value: "Web Development, AI, Problem Solving" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub about: &'static str,
    pub technologies: &'static [&'static str],
    pub github: &'static str,
    pub live: Option<&'static str>,
}

pub const PROJECTS: [Project; 5] = [
    Project {
        id: 1,
        title: "Community Safety Android App",
        description: "An Android application providing safety alerts, health resources, and educational material in one place.",
        about: "Built with Java and Android Studio, backed by Firebase for real-time alerts and cloud data. Covers authentication, database integration, and responsive layouts.",
        technologies: &["Java", "Android Studio", "Firebase"],
        github: "https://github.com/example/safety-app",
        live: None,
    },
    Project {
        id: 2,
        title: "Booking System (Frontend)",
        description: "A responsive booking frontend for managing reservations and schedules with live updates.",
        about: "Plain HTML, CSS and JavaScript with interactive forms and a clean interface for managing reservations.",
        technologies: &["HTML", "CSS", "JavaScript"],
        github: "https://github.com/example/booking-system",
        live: Some("https://booking.example.com"),
    },
    Project {
        id: 3,
        title: "Finance Tracker",
        description: "A React + Node.js app to monitor expenses, savings, and goals with MongoDB storage.",
        about: "Dashboards, charts, and goal tracking on top of a Node.js API with authenticated users.",
        technologies: &["React", "Node.js", "MongoDB"],
        github: "https://github.com/example/finance-tracker",
        live: Some("https://finance.example.com"),
    },
    Project {
        id: 4,
        title: "Audio Deepfake Detection",
        description: "A deep learning model that flags manipulated or synthetic audio.",
        about: "Feature extraction with Librosa and a TensorFlow classifier distinguishing real from synthetic samples.",
        technologies: &["Python", "TensorFlow", "Librosa"],
        github: "https://github.com/example/audio-detection",
        live: None,
    },
    Project {
        id: 5,
        title: "Portfolio Website",
        description: "This site: routed pages, six accent themes, dark mode, and a contact form.",
        about: "Written in Rust with Dioxus. Theme and dark-mode preferences persist in local storage.",
        technologies: &["Rust", "Dioxus", "CSS3"],
        github: "https://github.com/example/portfolio",
        live: Some("https://portfolio.example.com"),
    },
];

pub fn project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactCard {
    pub title: &'static str,
    pub content: &'static str,
}

pub const CONTACT_CARDS: [ContactCard; 3] = [
    ContactCard { title: "Phone", content: OWNER_PHONE },
    ContactCard { title: "Email", content: OWNER_EMAIL },
    ContactCard { title: "Location", content: OWNER_LOCATION },
];
