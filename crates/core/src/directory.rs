//! Participant display information, keyed by identity reference.
//!
//! Built once per request from a fetched user list, then queried for each
//! interview participant. Unknown identifiers resolve to a placeholder
//! name and initials rather than an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::user::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    pub image: String,
    pub initials: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    entries: HashMap<String, UserInfo>,
}

impl UserDirectory {
    pub fn from_users(users: &[User]) -> Self {
        let entries = users
            .iter()
            .map(|user| {
                (
                    user.clerk_id.clone(),
                    UserInfo {
                        name: user.name.clone(),
                        email: user.email.clone(),
                        image: user.image.clone().unwrap_or_default(),
                        initials: initials(&user.name),
                    },
                )
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, clerk_id: &str) -> Option<&UserInfo> {
        self.entries.get(clerk_id)
    }

    /// Resolves an interviewer, falling back to a placeholder for unknown
    /// identifiers or blank names.
    pub fn interviewer(&self, clerk_id: &str) -> UserInfo {
        self.resolve(clerk_id, "Unknown Interviewer", "UI")
    }

    /// Resolves a candidate, falling back to a placeholder for unknown
    /// identifiers or blank names.
    pub fn candidate(&self, clerk_id: &str) -> UserInfo {
        self.resolve(clerk_id, "Unknown Candidate", "UC")
    }

    fn resolve(&self, clerk_id: &str, fallback_name: &str, fallback_initials: &str) -> UserInfo {
        match self.entries.get(clerk_id) {
            Some(info) => {
                let mut info = info.clone();
                if info.initials.is_empty() {
                    info.initials = fallback_initials.to_string();
                }
                info
            }
            None => UserInfo {
                name: fallback_name.to_string(),
                email: String::new(),
                image: String::new(),
                initials: fallback_initials.to_string(),
            },
        }
    }
}

/// First letters of the first two name words, uppercased. A single word
/// yields one letter; a blank name yields an empty string.
fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|word| word.chars().next());
    let second = words.next().and_then(|word| word.chars().next());

    first
        .into_iter()
        .chain(second)
        .flat_map(char::to_uppercase)
        .collect()
}
