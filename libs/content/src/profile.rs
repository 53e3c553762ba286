//! Read-only profile content for the about page

use serde::{Deserialize, Serialize};

/// Skill grouping used by the skill charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Blockchain,
    Ai,
    Tools,
}

/// A single skill with a self-assessed level from 0 to 100
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

/// Kind of timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    Award,
    Project,
    Education,
    Work,
}

/// Timeline entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free-form, e.g. "2024" or "2023-2024"
    pub date: String,
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_image: Option<String>,
}

/// Profile content bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub skills: Vec<Skill>,
    pub achievements: Vec<Achievement>,
}

impl Profile {
    /// Skills in one category, in fixture order
    pub fn skills_in(&self, category: SkillCategory) -> Vec<Skill> {
        self.skills
            .iter()
            .filter(|skill| skill.category == category)
            .cloned()
            .collect()
    }

    /// The profile published on the portfolio site
    pub fn portfolio() -> Self {
        use SkillCategory::*;

        let skills = [
            ("React/Next.js", 92, Frontend),
            ("TypeScript", 88, Frontend),
            ("Tailwind CSS", 95, Frontend),
            ("Framer Motion", 85, Frontend),
            ("Node.js", 85, Backend),
            ("Python", 80, Backend),
            ("PostgreSQL", 78, Backend),
            ("Express/FastAPI", 82, Backend),
            ("Solidity", 75, Blockchain),
            ("Ethers.js/Web3.js", 80, Blockchain),
            ("Celo/Base", 78, Blockchain),
            ("Smart Contracts", 72, Blockchain),
            ("OpenAI API", 88, Ai),
            ("LangChain", 75, Ai),
            ("Machine Learning", 65, Ai),
            ("Git/GitHub", 90, Tools),
            ("Docker", 70, Tools),
            ("Vercel/Railway", 85, Tools),
        ]
        .into_iter()
        .map(|(name, level, category)| Skill {
            name: name.to_string(),
            level,
            category,
        })
        .collect();

        let achievements = [
            (
                "UPSTU Regionals & Nationals",
                "Represented the school at the Uganda Physics & Sciences Teachers' Union competitions",
                "2024",
                AchievementKind::Award,
            ),
            (
                "SESEMAT Exhibition",
                "Exhibited IntelliTutor AI at the Secondary Science & Mathematics Teachers conference",
                "2024",
                AchievementKind::Award,
            ),
            (
                "ISCC Uganda",
                "Took part in the International Science & Computing Challenge",
                "2023",
                AchievementKind::Award,
            ),
            (
                "Hackathons & Proof of Ship",
                "Regular hackathon participant and builder in public challenges",
                "2023-2024",
                AchievementKind::Project,
            ),
        ]
        .into_iter()
        .enumerate()
        .map(|(index, (title, description, date, kind))| Achievement {
            id: (index + 1).to_string(),
            title: title.to_string(),
            description: description.to_string(),
            date: date.to_string(),
            kind,
            icon: None,
            certificate_url: None,
            certificate_image: None,
        })
        .collect();

        Self {
            skills,
            achievements,
        }
    }
}
