//! Frontend Models
//!
//! Data structures for profiles, opportunities, applications and rounds.

use serde::{Deserialize, Serialize};

/// Status of a single interview round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    Completed,
    Current,
    #[default]
    Upcoming,
}

impl RoundStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundStatus::Completed => "completed",
            RoundStatus::Current => "current",
            RoundStatus::Upcoming => "upcoming",
        }
    }
}

/// One evaluation step (e.g. an interview) of an application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Unique within the owning collection, not necessarily contiguous
    pub id: u32,
    pub status: RoundStatus,
    #[serde(default)]
    pub notes: String,
    pub interviewer: Option<String>,
    /// Calendar date string as typed by the user
    pub date: Option<String>,
}

impl Round {
    pub fn new(id: u32, status: RoundStatus) -> Self {
        Self {
            id,
            status,
            notes: String::new(),
            interviewer: None,
            date: None,
        }
    }
}

/// Which onboarding branch the user followed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    #[default]
    Student,
    Professional,
    CareerChanger,
}

impl ProfileType {
    pub const ALL: [ProfileType; 3] = [
        ProfileType::Student,
        ProfileType::Professional,
        ProfileType::CareerChanger,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileType::Student => "student",
            ProfileType::Professional => "professional",
            ProfileType::CareerChanger => "careerchanger",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "student" => Some(ProfileType::Student),
            "professional" => Some(ProfileType::Professional),
            "careerchanger" => Some(ProfileType::CareerChanger),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// User profile, persisted as JSON in local storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub profile_type: ProfileType,
    pub target_role: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub years_experience: u32,
    #[serde(default)]
    pub remote_ok: bool,
    /// Only meaningful for career changers
    #[serde(default)]
    pub previous_field: Option<String>,
    /// Only meaningful for students
    #[serde(default)]
    pub graduation_year: Option<u32>,
    /// Students who turn this off are not shown intern openings
    #[serde(default)]
    pub wants_internship: bool,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Intern,
    Junior,
    Mid,
    Senior,
}

impl Seniority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Intern => "intern",
            Seniority::Junior => "junior",
            Seniority::Mid => "mid",
            Seniority::Senior => "senior",
        }
    }

    /// Number of bands between two seniority levels
    pub fn distance(&self, other: Seniority) -> u32 {
        (*self as i32 - other as i32).unsigned_abs()
    }
}

/// A job opening (hard-coded mock data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: u32,
    pub company: String,
    pub title: String,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub remote: bool,
    pub seniority: Seniority,
    pub required_skills: Vec<String>,
    pub nice_skills: Vec<String>,
    pub summary: String,
}

/// Pipeline phase of an application (display only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    #[default]
    Submitted,
    Review,
    Interview,
    Decision,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 4] = [
        PipelineStage::Submitted,
        PipelineStage::Review,
        PipelineStage::Interview,
        PipelineStage::Decision,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Submitted => "submitted",
            PipelineStage::Review => "review",
            PipelineStage::Interview => "interview",
            PipelineStage::Decision => "decision",
        }
    }

    /// Following stage; `Decision` is terminal
    pub fn next(&self) -> Option<PipelineStage> {
        match self {
            PipelineStage::Submitted => Some(PipelineStage::Review),
            PipelineStage::Review => Some(PipelineStage::Interview),
            PipelineStage::Interview => Some(PipelineStage::Decision),
            PipelineStage::Decision => None,
        }
    }
}

/// A tracked application to one opportunity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: u32,
    pub opportunity_id: u32,
    pub stage: PipelineStage,
    pub applied_on: String,
    pub rounds: Vec<Round>,
    /// Ids of finished preparation checklist entries
    #[serde(default)]
    pub prep_done: Vec<String>,
}

impl Application {
    /// Fresh application with a single active round
    pub fn new(id: u32, opportunity_id: u32, applied_on: String) -> Self {
        Self {
            id,
            opportunity_id,
            stage: PipelineStage::Submitted,
            applied_on,
            rounds: vec![Round::new(1, RoundStatus::Current)],
            prep_done: Vec::new(),
        }
    }
}
