//! User domain model

use serde::{Deserialize, Serialize};

/// A talent profile, created at login or signup and edited in place.
///
/// Field names serialize in camelCase so the persisted `auth` blob matches
/// the layout the web client wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub location: Option<String>,
    pub availability: Option<String>,
    pub salary_expectation: Option<String>,
    pub preferred_work_mode: Option<String>,
    pub bio: Option<String>,
}

impl User {
    /// Shallow-merge the given patch into this user. Fields absent from the
    /// patch are left untouched; no validation is performed.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = Some(avatar);
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(experience) = patch.experience {
            self.experience = Some(experience);
        }
        if let Some(location) = patch.location {
            self.location = Some(location);
        }
        if let Some(availability) = patch.availability {
            self.availability = Some(availability);
        }
        if let Some(salary_expectation) = patch.salary_expectation {
            self.salary_expectation = Some(salary_expectation);
        }
        if let Some(preferred_work_mode) = patch.preferred_work_mode {
            self.preferred_work_mode = Some(preferred_work_mode);
        }
        if let Some(bio) = patch.bio {
            self.bio = Some(bio);
        }
    }
}

/// Partial user fields for signup payloads and profile updates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<String>,
    pub location: Option<String>,
    pub availability: Option<String>,
    pub salary_expectation: Option<String>,
    pub preferred_work_mode: Option<String>,
    pub bio: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.role.is_none()
            && self.avatar.is_none()
            && self.skills.is_none()
            && self.experience.is_none()
            && self.location.is_none()
            && self.availability.is_none()
            && self.salary_expectation.is_none()
            && self.preferred_work_mode.is_none()
            && self.bio.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            name: "Sarah Schmidt".to_string(),
            email: "sarah.schmidt@example.com".to_string(),
            role: "Full-Stack Developer".to_string(),
            avatar: None,
            skills: vec!["React".to_string(), "TypeScript".to_string()],
            experience: Some("5 years".to_string()),
            location: Some("Berlin, Germany".to_string()),
            availability: None,
            salary_expectation: None,
            preferred_work_mode: Some("Hybrid".to_string()),
            bio: None,
        }
    }

    #[test]
    fn test_apply_merges_only_present_fields() {
        let mut user = sample_user();
        user.apply(UserPatch {
            location: Some("Munich, Germany".to_string()),
            bio: Some("Looking for a new challenge.".to_string()),
            ..Default::default()
        });

        assert_eq!(user.location.as_deref(), Some("Munich, Germany"));
        assert_eq!(user.bio.as_deref(), Some("Looking for a new challenge."));
        // Untouched fields survive the merge
        assert_eq!(user.name, "Sarah Schmidt");
        assert_eq!(user.skills.len(), 2);
    }

    #[test]
    fn test_apply_replaces_skills_wholesale() {
        let mut user = sample_user();
        user.apply(UserPatch {
            skills: Some(vec!["Rust".to_string()]),
            ..Default::default()
        });
        assert_eq!(user.skills, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_camel_case_blob_layout() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert!(json.get("preferredWorkMode").is_some());
        assert!(json.get("salaryExpectation").is_some());
    }
}
