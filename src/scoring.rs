//! Fit Scoring
//!
//! Deterministic keyword scorer comparing a profile against an opportunity.
//!
//! Points (total 100):
//! - required skills: 60 × matched / required
//! - nice-to-have skills: 15 × matched / nice
//! - seniority: 15 same band, 8 one band apart
//! - location: 10 for remote-friendly, same city, or within 50 km

use serde::{Deserialize, Serialize};

use crate::models::{Coordinates, Opportunity, Profile, ProfileType, Seniority};

const REQUIRED_POINTS: f64 = 60.0;
const NICE_POINTS: f64 = 15.0;
const SENIORITY_EXACT: u32 = 15;
const SENIORITY_ADJACENT: u32 = 8;
const LOCATION_POINTS: u32 = 10;
const NEARBY_KM: f64 = 50.0;
const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitBand {
    Strong,
    Good,
    Stretch,
}

impl FitBand {
    pub const ALL: [FitBand; 3] = [FitBand::Strong, FitBand::Good, FitBand::Stretch];

    pub fn from_score(score: u32) -> Self {
        match score {
            75.. => FitBand::Strong,
            50.. => FitBand::Good,
            _ => FitBand::Stretch,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitBand::Strong => "strong",
            FitBand::Good => "good",
            FitBand::Stretch => "stretch",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    /// 0 – 100
    pub score: u32,
    pub band: FitBand,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub distance_km: Option<f64>,
}

/// Seniority band implied by a profile's experience
pub fn profile_seniority(profile: &Profile) -> Seniority {
    match profile.years_experience {
        0 if profile.profile_type == ProfileType::Student => Seniority::Intern,
        0..=2 => Seniority::Junior,
        3..=5 => Seniority::Mid,
        _ => Seniority::Senior,
    }
}

pub fn score_fit(profile: &Profile, opportunity: &Opportunity) -> FitReport {
    let skills: Vec<String> = profile.skills.iter().map(|s| normalize(s)).collect();
    let has = |skill: &String| skills.contains(&normalize(skill));

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = opportunity
        .required_skills
        .iter()
        .cloned()
        .partition(|s| has(s));
    let nice_matched = opportunity.nice_skills.iter().filter(|s| has(*s)).count();

    let required = coverage(matched_skills.len(), opportunity.required_skills.len()) * REQUIRED_POINTS;
    let nice = coverage(nice_matched, opportunity.nice_skills.len()) * NICE_POINTS;

    let seniority = match profile_seniority(profile).distance(opportunity.seniority) {
        0 => SENIORITY_EXACT,
        1 => SENIORITY_ADJACENT,
        _ => 0,
    };

    let distance_km = match (profile.coordinates, opportunity.coordinates) {
        (Some(a), Some(b)) => Some(haversine_km(a, b)),
        _ => None,
    };
    let same_city = profile
        .location
        .as_deref()
        .is_some_and(|loc| normalize(loc) == normalize(&opportunity.location));
    let nearby = distance_km.is_some_and(|d| d <= NEARBY_KM);
    let location = if (opportunity.remote && profile.remote_ok) || same_city || nearby {
        LOCATION_POINTS
    } else {
        0
    };

    let score = ((required + nice).round() as u32 + seniority + location).min(100);
    FitReport {
        score,
        band: FitBand::from_score(score),
        matched_skills,
        missing_skills,
        distance_km,
    }
}

/// Scored opportunities visible to `profile`, best first (ties by id)
pub fn rank_opportunities(
    profile: &Profile,
    opportunities: &[Opportunity],
    band: Option<FitBand>,
) -> Vec<(Opportunity, FitReport)> {
    let hide_internships =
        profile.profile_type == ProfileType::Student && !profile.wants_internship;
    let mut ranked: Vec<(Opportunity, FitReport)> = opportunities
        .iter()
        .filter(|o| !(hide_internships && o.seniority == Seniority::Intern))
        .map(|o| (o.clone(), score_fit(profile, o)))
        .filter(|(_, report)| band.map_or(true, |b| report.band == b))
        .collect();
    ranked.sort_by(|(a, ra), (b, rb)| rb.score.cmp(&ra.score).then(a.id.cmp(&b.id)));
    ranked
}

/// Great-circle distance in kilometres
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

fn coverage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        matched as f64 / total as f64
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BERLIN: Coordinates = Coordinates { lat: 52.52, lon: 13.405 };
    const POTSDAM: Coordinates = Coordinates { lat: 52.3906, lon: 13.0645 };
    const MUNICH: Coordinates = Coordinates { lat: 48.1351, lon: 11.582 };

    fn make_profile(skills: &[&str], years: u32) -> Profile {
        Profile {
            name: "Sam".to_string(),
            profile_type: ProfileType::Professional,
            target_role: "Engineer".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            location: Some("Berlin".to_string()),
            coordinates: None,
            years_experience: years,
            remote_ok: false,
            previous_field: None,
            graduation_year: None,
            wants_internship: false,
            language: "en".to_string(),
        }
    }

    fn make_opportunity(required: &[&str], nice: &[&str], seniority: Seniority) -> Opportunity {
        Opportunity {
            id: 1,
            company: "Acme".to_string(),
            title: "Engineer".to_string(),
            location: "Munich".to_string(),
            coordinates: Some(MUNICH),
            remote: false,
            seniority,
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            nice_skills: nice.iter().map(|s| s.to_string()).collect(),
            summary: String::new(),
        }
    }

    #[test]
    fn test_perfect_match_is_strong() {
        let mut profile = make_profile(&["Rust", "SQL", "docker"], 4);
        profile.location = Some(" munich ".to_string());
        let opp = make_opportunity(&["rust", "sql"], &["Docker"], Seniority::Mid);
        let report = score_fit(&profile, &opp);
        assert_eq!(report.score, 100);
        assert_eq!(report.band, FitBand::Strong);
        assert_eq!(report.matched_skills, vec!["rust", "sql"]);
        assert!(report.missing_skills.is_empty());
    }

    #[test]
    fn test_partial_skills_and_adjacent_seniority() {
        let profile = make_profile(&["rust"], 1);
        let opp = make_opportunity(&["rust", "go"], &["k8s"], Seniority::Mid);
        let report = score_fit(&profile, &opp);
        // 30 (half the required) + 0 nice + 8 adjacent + 0 location
        assert_eq!(report.score, 38);
        assert_eq!(report.band, FitBand::Stretch);
        assert_eq!(report.missing_skills, vec!["go"]);
    }

    #[test]
    fn test_remote_counts_only_when_profile_accepts() {
        let mut profile = make_profile(&["rust"], 4);
        let mut opp = make_opportunity(&["rust"], &[], Seniority::Mid);
        opp.remote = true;
        assert_eq!(score_fit(&profile, &opp).score, 90);
        profile.remote_ok = true;
        assert_eq!(score_fit(&profile, &opp).score, 100);
    }

    #[test]
    fn test_nearby_coordinates_count_as_local() {
        let mut profile = make_profile(&["rust"], 4);
        profile.location = Some("Potsdam".to_string());
        profile.coordinates = Some(POTSDAM);
        let mut opp = make_opportunity(&["rust"], &[], Seniority::Mid);
        opp.location = "Berlin".to_string();
        opp.coordinates = Some(BERLIN);
        let report = score_fit(&profile, &opp);
        assert_eq!(report.score, 100);
        let km = report.distance_km.unwrap();
        assert!(km > 20.0 && km < 40.0, "distance was {}", km);
    }

    #[test]
    fn test_profile_seniority_bands() {
        let mut student = make_profile(&[], 0);
        student.profile_type = ProfileType::Student;
        assert_eq!(profile_seniority(&student), Seniority::Intern);
        assert_eq!(profile_seniority(&make_profile(&[], 0)), Seniority::Junior);
        assert_eq!(profile_seniority(&make_profile(&[], 3)), Seniority::Mid);
        assert_eq!(profile_seniority(&make_profile(&[], 6)), Seniority::Senior);
    }

    #[test]
    fn test_haversine_berlin_munich() {
        let km = haversine_km(BERLIN, MUNICH);
        assert!((km - 504.0).abs() < 5.0, "distance was {}", km);
        assert_eq!(haversine_km(BERLIN, BERLIN), 0.0);
    }

    #[test]
    fn test_rank_orders_and_filters() {
        let profile = make_profile(&["rust", "sql"], 4);
        let mut a = make_opportunity(&["rust"], &[], Seniority::Mid);
        a.id = 1;
        let mut b = make_opportunity(&["go"], &[], Seniority::Senior);
        b.id = 2;
        let mut c = make_opportunity(&["sql"], &[], Seniority::Mid);
        c.id = 3;
        let ranked = rank_opportunities(&profile, &[b.clone(), c.clone(), a.clone()], None);
        let ids: Vec<u32> = ranked.iter().map(|(o, _)| o.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);

        let strong = rank_opportunities(&profile, &[a, b, c], Some(FitBand::Strong));
        assert!(strong.iter().all(|(_, r)| r.band == FitBand::Strong));
        assert_eq!(strong.len(), 2);
    }

    #[test]
    fn test_students_without_internship_interest_skip_intern_roles() {
        let mut student = make_profile(&["sql"], 0);
        student.profile_type = ProfileType::Student;
        let intern = make_opportunity(&["sql"], &[], Seniority::Intern);
        assert!(rank_opportunities(&student, &[intern.clone()], None).is_empty());
        student.wants_internship = true;
        assert_eq!(rank_opportunities(&student, &[intern], None).len(), 1);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(FitBand::from_score(75), FitBand::Strong);
        assert_eq!(FitBand::from_score(74), FitBand::Good);
        assert_eq!(FitBand::from_score(50), FitBand::Good);
        assert_eq!(FitBand::from_score(49), FitBand::Stretch);
    }
}
