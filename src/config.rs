use std::path::PathBuf;

use serde::Deserialize;

use crate::models::{TeamMember, User};

/// Application settings, read from the same figment as Rocket's own
/// configuration (`Rocket.toml`, `ROCKET_*` environment variables).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default = "default_team")]
    pub team: Vec<TeamMember>,
    #[serde(default = "default_users")]
    pub users: Vec<User>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            categories: default_categories(),
            team: default_team(),
            users: default_users(),
        }
    }
}

impl AppConfig {
    pub fn is_known_category(&self, category: &str) -> bool {
        self.categories.iter().any(|known| known == category)
    }
}

fn default_database_path() -> PathBuf {
    let mut path = PathBuf::from("data");
    path.push("costs.sqlite");
    path
}

fn default_categories() -> Vec<String> {
    ["food", "health", "housing", "sport", "education"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            first_name: "Pavel".into(),
            last_name: "Sagalov".into(),
        },
        TeamMember {
            first_name: "Ofir".into(),
            last_name: "Cohen".into(),
        },
    ]
}

fn default_users() -> Vec<User> {
    vec![User {
        userid: 123123,
        first_name: "mosh".into(),
        last_name: "israeli".into(),
        birthday: "1990-01-10".into(),
        marital_status: "single".into(),
    }]
}
