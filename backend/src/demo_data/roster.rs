//! The demo roster: ten pairs of users whose teach and learn lists mirror
//! each other, so every user has exactly one full-overlap partner.

/// One demo profile before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoUser {
    pub name: &'static str,
    pub email: &'static str,
    pub teach: [&'static str; 4],
    pub learn: [&'static str; 4],
}

const WEB_FRONT: [&str; 4] = ["JavaScript", "React", "Node.js", "HTML"];
const WEB_BACK: [&str; 4] = ["Python", "Django", "Flask", "SQL"];
const JVM: [&str; 4] = ["Java", "Spring", "Hibernate", "Maven"];
const SYSTEMS: [&str; 4] = ["C++", "Data Structures", "Algorithms", "Linux"];
const AWS: [&str; 4] = ["AWS", "Docker", "Kubernetes", "Terraform"];
const CLOUD_OPS: [&str; 4] = ["Azure", "GCP", "CI/CD", "DevOps"];
const DESIGN: [&str; 4] = ["Photoshop", "Illustrator", "Figma", "Sketch"];
const MOTION: [&str; 4] = ["After Effects", "Premiere Pro", "3D Modeling", "Animation"];
const DATABASES: [&str; 4] = ["SQL", "NoSQL", "MongoDB", "PostgreSQL"];
const DATA_STORES: [&str; 4] = ["Redis", "Elasticsearch", "Cassandra", "BigQuery"];
const VCS: [&str; 4] = ["Git", "GitHub", "GitLab", "Bitbucket"];
const CI: [&str; 4] = ["Jenkins", "CircleCI", "TravisCI", "TeamCity"];
const STYLING: [&str; 4] = ["HTML", "CSS", "Bootstrap", "Tailwind"];
const FRAMEWORKS: [&str; 4] = ["JavaScript", "TypeScript", "React", "Vue.js"];
const UNIX: [&str; 4] = ["Linux", "Bash", "Shell Scripting", "System Administration"];
const WINDOWS: [&str; 4] = ["Windows", "PowerShell", "Active Directory", "Networking"];
const ANALYSIS: [&str; 4] = ["Data Analysis", "Pandas", "NumPy", "Matplotlib"];
const ML: [&str; 4] = ["Machine Learning", "TensorFlow", "PyTorch", "Keras"];
const SEARCH_MARKETING: [&str; 4] = ["SEO", "Content Writing", "Digital Marketing", "Google Ads"];
const SOCIAL_MARKETING: [&str; 4] = [
    "Social Media Marketing",
    "Email Marketing",
    "Affiliate Marketing",
    "Branding",
];

const fn user(
    name: &'static str,
    email: &'static str,
    teach: [&'static str; 4],
    learn: [&'static str; 4],
) -> DemoUser {
    DemoUser {
        name,
        email,
        teach,
        learn,
    }
}

/// Seeded in this order.
pub const DEMO_ROSTER: [DemoUser; 20] = [
    user("Alice", "alice@example.com", WEB_FRONT, WEB_BACK),
    user("Bob", "bob@example.com", WEB_BACK, WEB_FRONT),
    user("Charlie", "charlie@example.com", JVM, SYSTEMS),
    user("David", "david@example.com", SYSTEMS, JVM),
    user("Eve", "eve@example.com", AWS, CLOUD_OPS),
    user("Frank", "frank@example.com", CLOUD_OPS, AWS),
    user("Grace", "grace@example.com", DESIGN, MOTION),
    user("Hank", "hank@example.com", MOTION, DESIGN),
    user("Ivy", "ivy@example.com", DATABASES, DATA_STORES),
    user("Jack", "jack@example.com", DATA_STORES, DATABASES),
    user("Kate", "kate@example.com", VCS, CI),
    user("Leo", "leo@example.com", CI, VCS),
    user("Mia", "mia@example.com", STYLING, FRAMEWORKS),
    user("Nina", "nina@example.com", FRAMEWORKS, STYLING),
    user("Oscar", "oscar@example.com", UNIX, WINDOWS),
    user("Paul", "paul@example.com", WINDOWS, UNIX),
    user("Quinn", "quinn@example.com", ANALYSIS, ML),
    user("Rose", "rose@example.com", ML, ANALYSIS),
    user("Sam", "sam@example.com", SEARCH_MARKETING, SOCIAL_MARKETING),
    user("Tina", "tina@example.com", SOCIAL_MARKETING, SEARCH_MARKETING),
];
