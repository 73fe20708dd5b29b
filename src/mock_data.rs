//! Mock Data
//!
//! Hard-coded opportunities and seed applications.

use crate::models::{
    Application, Coordinates, Opportunity, PipelineStage, Round, RoundStatus, Seniority,
};

fn skills(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn opportunity(
    id: u32,
    company: &str,
    title: &str,
    location: &str,
    coordinates: Option<(f64, f64)>,
    remote: bool,
    seniority: Seniority,
    required: &[&str],
    nice: &[&str],
    summary: &str,
) -> Opportunity {
    Opportunity {
        id,
        company: company.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        coordinates: coordinates.map(|(lat, lon)| Coordinates { lat, lon }),
        remote,
        seniority,
        required_skills: skills(required),
        nice_skills: skills(nice),
        summary: summary.to_string(),
    }
}

pub fn opportunities() -> Vec<Opportunity> {
    vec![
        opportunity(
            1,
            "Northwind Labs",
            "Backend Engineer",
            "Berlin",
            Some((52.52, 13.405)),
            true,
            Seniority::Mid,
            &["rust", "postgresql", "docker"],
            &["kubernetes", "grpc"],
            "Own the billing services behind a fast growing logistics platform.",
        ),
        opportunity(
            2,
            "Lumen Health",
            "Data Analyst Intern",
            "Amsterdam",
            Some((52.3676, 4.9041)),
            false,
            Seniority::Intern,
            &["sql", "python"],
            &["tableau"],
            "Six month internship analysing patient journey data.",
        ),
        opportunity(
            3,
            "Harbor & Co",
            "Frontend Developer",
            "Lyon",
            Some((45.764, 4.8357)),
            true,
            Seniority::Junior,
            &["typescript", "css", "react"],
            &["accessibility", "figma"],
            "Build the customer portal of a mid-sized insurance broker.",
        ),
        opportunity(
            4,
            "Quartz Systems",
            "Staff Platform Engineer",
            "Munich",
            Some((48.1351, 11.582)),
            false,
            Seniority::Senior,
            &["go", "kubernetes", "terraform", "aws"],
            &["rust"],
            "Lead the internal developer platform team.",
        ),
        opportunity(
            5,
            "Fieldnote",
            "Product Designer",
            "Oslo",
            Some((59.9139, 10.7522)),
            true,
            Seniority::Mid,
            &["figma", "user research"],
            &["css", "prototyping"],
            "Shape the mobile app used by field researchers.",
        ),
        opportunity(
            6,
            "Pinecrest Bank",
            "Junior Data Engineer",
            "Potsdam",
            Some((52.3906, 13.0645)),
            false,
            Seniority::Junior,
            &["python", "sql", "airflow"],
            &["docker"],
            "Maintain the nightly pipelines feeding the risk warehouse.",
        ),
    ]
}

/// Applications present on first load
pub fn applications() -> Vec<Application> {
    vec![Application {
        id: 1,
        opportunity_id: 1,
        stage: PipelineStage::Interview,
        applied_on: "2026-09-28".to_string(),
        rounds: vec![
            Round {
                id: 1,
                status: RoundStatus::Completed,
                notes: "Recruiter call. Asked about **notice period** and salary band.".to_string(),
                interviewer: Some("Mira (Talent)".to_string()),
                date: Some("2026-10-06".to_string()),
            },
            Round {
                id: 2,
                status: RoundStatus::Current,
                notes: String::new(),
                interviewer: Some("Jonas (Eng Manager)".to_string()),
                date: Some("2026-10-22".to_string()),
            },
            Round::new(3, RoundStatus::Upcoming),
        ],
        prep_done: vec!["research".to_string()],
    }]
}
