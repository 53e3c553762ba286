//! Seed data loaded into a repository at construction

use chrono::{TimeZone, Utc};

use crate::models::{Post, Project};

/// Fixture records a repository starts with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seed {
    pub projects: Vec<Project>,
    pub posts: Vec<Post>,
}

impl Seed {
    /// A seed with no content
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a project to the seed
    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    /// Add a post to the seed
    pub fn with_post(mut self, post: Post) -> Self {
        self.posts.push(post);
        self
    }

    /// The content published on the portfolio site
    pub fn portfolio() -> Self {
        Self {
            projects: portfolio_projects(),
            posts: portfolio_posts(),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn portfolio_projects() -> Vec<Project> {
    vec![
        Project {
            id: "intellitutor-ai".to_string(),
            title: "IntelliTutor AI".to_string(),
            description: "An AI-powered learning platform that adapts lessons, quizzes and study material to each student.".to_string(),
            long_description: Some(
                "IntelliTutor AI builds a personal learning path for every student. It tracks performance as \
                 lessons progress, adjusts difficulty and teaching style, and generates revision notes, \
                 quizzes and essay feedback through an intelligent tutoring assistant."
                    .to_string(),
            ),
            tech_stack: strings(&["React", "TypeScript", "Python", "TensorFlow", "OpenAI API", "PostgreSQL", "FastAPI"]),
            category: "AI".to_string(),
            image_url: Some("https://i.postimg.cc/4yQBP057/Intellitutor_AI.png".to_string()),
            live_url: Some("https://intellitutor-ai.onrender.com/".to_string()),
            github_url: Some("https://github.com/intellitutorai/IntelliTutorAI".to_string()),
            featured: true,
            order: 1,
        },
        Project {
            id: "glidepay".to_string(),
            title: "GlidePay".to_string(),
            description: "Cross-border payments across Africa with secure rent payments and built-in chat.".to_string(),
            long_description: Some(
                "GlidePay makes everyday payments in Africa simpler: instant transfers across borders, \
                 flexible and secure rent payments, and an encrypted chat between users. On-chain \
                 components keep transactions transparent and fast."
                    .to_string(),
            ),
            tech_stack: strings(&["React", "Solidity", "Ethers.js", "Node.js", "Hardhat", "IPFS", "The Graph"]),
            category: "Web3 / FinTech".to_string(),
            image_url: Some("https://i.postimg.cc/sgvv4hj8/Glidepay.png".to_string()),
            live_url: Some("https://glide-pay.onrender.com".to_string()),
            github_url: Some("https://github.com/Edcode-bot/Glide-Pay".to_string()),
            featured: true,
            order: 2,
        },
        Project {
            id: "rockchain-duel-arena".to_string(),
            title: "Rockchain Duel Arena".to_string(),
            description: "An on-chain duel game where players battle, wager and win with Celo MiniPay.".to_string(),
            long_description: Some(
                "Rockchain Duel Arena is a mobile-first arcade duel game on Celo. Players meet head to head, \
                 place small wagers through MiniPay and settle every round with smart contracts, so the \
                 game stays provably fair while feeling instant to newcomers."
                    .to_string(),
            ),
            tech_stack: strings(&["Solidity", "Celo Blockchain", "MiniPay SDK", "React", "JavaScript", "HTML & CSS"]),
            category: "Web3 / Blockchain Gaming / Full-Stack".to_string(),
            image_url: Some("https://i.postimg.cc/tgdy3q6q/Rocakchain_duel.png".to_string()),
            live_url: Some("https://rockchain-deul-arena.vercel.app/".to_string()),
            github_url: Some("https://github.com/Edcode-bot/RockchainDeulArena".to_string()),
            featured: true,
            order: 3,
        },
    ]
}

fn portfolio_posts() -> Vec<Post> {
    vec![
        Post {
            id: "post-1".to_string(),
            title: "Competing at ISCC Uganda".to_string(),
            content: "A full day at the ISCC Uganda competition, solving problems in Python against the clock \
                      alongside some of the sharpest students in the country."
                .to_string(),
            image_url: Some("https://i.postimg.cc/q7qV3Jjy/ISCC_Uganda.jpg".to_string()),
            image_urls: Some(strings(&[
                "https://i.postimg.cc/vHbKn8m8/ISCC_ug.jpg",
                "https://i.postimg.cc/Z5fznzbd/profile.jpg",
                "https://i.postimg.cc/q7qV3Jjy/ISCC_Uganda.jpg",
            ])),
            hashtags: Some(strings(&["AI", "OpenAI", "Development", "Tech"])),
            created_at: Utc.with_ymd_and_hms(2025, 12, 10, 0, 0, 0).single(),
            likes: 42,
        },
        Post {
            id: "post-2".to_string(),
            title: "Showcasing IntelliTutor AI at the National Science Fair".to_string(),
            content: "Presented IntelliTutor AI at the National Science Fair in Kololo: an assistant that helps \
                      students revise, take quizzes, write essays and find learning videos."
                .to_string(),
            image_url: Some("https://i.postimg.cc/85zJ26p9/SESEMAT_Nationals.jpg".to_string()),
            image_urls: Some(strings(&[
                "https://i.postimg.cc/85zJ26p9/SESEMAT_Nationals.jpg",
                "https://i.postimg.cc/Mp1QVw3t/SESEMAT_Nationals.jpg",
            ])),
            hashtags: Some(strings(&["AI", "Education", "ScienceFair"])),
            created_at: Utc.with_ymd_and_hms(2025, 7, 8, 0, 0, 0).single(),
            likes: 38,
        },
        Post {
            id: "post-3".to_string(),
            title: "Presenting IntelliTutor AI at the UPSTU National Innovation Competition".to_string(),
            content: "Took IntelliTutor AI to the UPSTU National Science Innovation Competition 2025 at MUBS \
                      Nakawa and shared how AI can support learning across Uganda."
                .to_string(),
            image_url: Some("https://i.postimg.cc/XqZTDQtz/UPSTU_nationals.jpg".to_string()),
            image_urls: Some(strings(&["https://i.postimg.cc/bdcFV8xr/UPSTU_nationals.jpg"])),
            hashtags: Some(strings(&["AI", "Innovation", "Uganda"])),
            created_at: Utc.with_ymd_and_hms(2025, 8, 5, 0, 0, 0).single(),
            likes: 55,
        },
    ]
}
