//! Read-only catalog records: companies, jobs, talents, recommendations
//!
//! These are fixture data the services filter against by id. Nothing in the
//! core ever mutates them.

use serde::{Deserialize, Serialize};

/// An employer presented in the swipe deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub logo: String,
    pub industry: String,
    pub location: String,
    pub size: String,
    pub description: String,
    pub website: String,
    pub culture: Vec<String>,
    pub benefits: Vec<String>,
}

/// A job posting linked to a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub company_id: i64,
    pub title: String,
    pub company: String,
    pub logo: String,
    pub location: String,
    pub work_mode: String,
    pub salary: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub level: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub nice_to_have: Vec<String>,
    pub posted: String,
    pub applicants: u32,
}

/// A candidate profile on the talent side of the marketplace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Talent {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub location: String,
    pub availability: String,
    pub salary_expectation: String,
    pub preferred_work_mode: String,
    pub bio: String,
}

/// A pre-authored "AI" recommendation pointing at a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub job_id: i64,
    pub match_score: u8,
    pub reason: String,
    pub highlights: Vec<String>,
}

/// Dashboard statistics for the current user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub profile_views: u32,
    pub matches: u32,
    pub applications: u32,
    pub saved_jobs: u32,
    pub weekly_activity: Vec<DayActivity>,
}

/// Profile views for one day of the week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivity {
    pub day: String,
    pub views: u32,
}
