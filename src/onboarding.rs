//! Onboarding Questionnaire
//!
//! Branching question flow. The first answer picks a `ProfileType`, which
//! decides the branch questions that follow the common ones.

use std::collections::HashMap;

use crate::error::{AppError, AppResult};
use crate::models::{Profile, ProfileType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionId {
    ProfileType,
    Name,
    TargetRole,
    Skills,
    Location,
    Remote,
    GraduationYear,
    Internship,
    Years,
    PreviousField,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuestionKind {
    /// One of the listed option values
    Choice(&'static [&'static str]),
    Text { required: bool },
    Number,
    /// Comma separated values
    List,
    YesNo,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    /// Translation key of the prompt
    pub prompt: &'static str,
    pub kind: QuestionKind,
}

const PROFILE_TYPE_OPTIONS: &[&str] = &["student", "professional", "careerchanger"];

const fn question(id: QuestionId, prompt: &'static str, kind: QuestionKind) -> Question {
    Question { id, prompt, kind }
}

const FIRST: Question = question(
    QuestionId::ProfileType,
    "q.profile_type",
    QuestionKind::Choice(PROFILE_TYPE_OPTIONS),
);

const COMMON: &[Question] = &[
    question(QuestionId::Name, "q.name", QuestionKind::Text { required: true }),
    question(QuestionId::TargetRole, "q.target_role", QuestionKind::Text { required: true }),
    question(QuestionId::Skills, "q.skills", QuestionKind::List),
    question(QuestionId::Location, "q.location", QuestionKind::Text { required: false }),
    question(QuestionId::Remote, "q.remote", QuestionKind::YesNo),
];

const STUDENT: &[Question] = &[
    question(QuestionId::GraduationYear, "q.graduation_year", QuestionKind::Number),
    question(QuestionId::Internship, "q.internship", QuestionKind::YesNo),
];

const PROFESSIONAL: &[Question] = &[question(QuestionId::Years, "q.years", QuestionKind::Number)];

const CAREER_CHANGER: &[Question] = &[
    question(QuestionId::PreviousField, "q.previous_field", QuestionKind::Text { required: true }),
    question(QuestionId::Years, "q.years", QuestionKind::Number),
];

/// Validated answer value
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Choice(String),
    Text(String),
    Number(u32),
    List(Vec<String>),
    YesNo(bool),
}

impl Answer {
    /// Form used to prefill inputs when stepping back
    pub fn to_input(&self) -> String {
        match self {
            Answer::Choice(s) | Answer::Text(s) => s.clone(),
            Answer::Number(n) => n.to_string(),
            Answer::List(items) => items.join(", "),
            Answer::YesNo(true) => "yes".to_string(),
            Answer::YesNo(false) => "no".to_string(),
        }
    }
}

fn parse_answer(kind: QuestionKind, raw: &str) -> AppResult<Answer> {
    let raw = raw.trim();
    let invalid = |key: &str| AppError::InvalidAnswer(key.to_string());
    match kind {
        QuestionKind::Choice(options) => options
            .iter()
            .find(|o| **o == raw)
            .map(|o| Answer::Choice(o.to_string()))
            .ok_or_else(|| invalid("err.choice")),
        QuestionKind::Text { required } => {
            if required && raw.is_empty() {
                Err(invalid("err.required"))
            } else {
                Ok(Answer::Text(raw.to_string()))
            }
        }
        QuestionKind::Number => raw
            .parse::<u32>()
            .map(Answer::Number)
            .map_err(|_| invalid("err.number")),
        QuestionKind::List => {
            let mut items: Vec<String> = Vec::new();
            for item in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                if !items.iter().any(|i| i.eq_ignore_ascii_case(item)) {
                    items.push(item.to_string());
                }
            }
            Ok(Answer::List(items))
        }
        QuestionKind::YesNo => match raw {
            "yes" => Ok(Answer::YesNo(true)),
            "no" => Ok(Answer::YesNo(false)),
            _ => Err(invalid("err.choice")),
        },
    }
}

/// Progress through the onboarding questions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Questionnaire {
    answers: HashMap<QuestionId, Answer>,
    index: usize,
}

impl Questionnaire {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile_type(&self) -> Option<ProfileType> {
        match self.answers.get(&QuestionId::ProfileType) {
            Some(Answer::Choice(value)) => ProfileType::from_str(value),
            _ => None,
        }
    }

    /// Questions for the chosen branch; only the first one until a type is picked
    pub fn questions(&self) -> Vec<Question> {
        let mut questions = vec![FIRST];
        let branch = match self.profile_type() {
            None => return questions,
            Some(ProfileType::Student) => STUDENT,
            Some(ProfileType::Professional) => PROFESSIONAL,
            Some(ProfileType::CareerChanger) => CAREER_CHANGER,
        };
        questions.extend_from_slice(COMMON);
        questions.extend_from_slice(branch);
        questions
    }

    pub fn current(&self) -> Option<Question> {
        self.questions().get(self.index).copied()
    }

    /// 1-based step and total for the progress label
    pub fn step(&self) -> (usize, usize) {
        let total = self.questions().len();
        ((self.index + 1).min(total), total)
    }

    pub fn previous_answer(&self, id: QuestionId) -> Option<&Answer> {
        self.answers.get(&id)
    }

    /// Answer the current question and advance
    /// Record an answer for the current question. Returns `true` only for
    /// the answer that completes the questionnaire; answering once already
    /// complete changes nothing.
    pub fn answer(&mut self, raw: &str) -> AppResult<bool> {
        let Some(question) = self.current() else {
            return Ok(false);
        };
        let answer = parse_answer(question.kind, raw)?;
        self.answers.insert(question.id, answer);

        if question.id == QuestionId::ProfileType {
            // drop answers belonging to a branch that no longer applies
            let ids: Vec<QuestionId> = self.questions().iter().map(|q| q.id).collect();
            self.answers.retain(|id, _| ids.contains(id));
        }
        self.index += 1;
        Ok(self.is_complete())
    }

    pub fn back(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn is_complete(&self) -> bool {
        self.profile_type().is_some() && self.index >= self.questions().len()
    }

    /// Build the profile once every question is answered
    pub fn to_profile(&self, language: &str) -> Option<Profile> {
        if !self.is_complete() {
            return None;
        }
        let profile_type = self.profile_type()?;
        Some(Profile {
            name: self.text(QuestionId::Name).unwrap_or_default(),
            profile_type,
            target_role: self.text(QuestionId::TargetRole).unwrap_or_default(),
            skills: match self.answers.get(&QuestionId::Skills) {
                Some(Answer::List(items)) => items.clone(),
                _ => Vec::new(),
            },
            location: self.text(QuestionId::Location).filter(|s| !s.is_empty()),
            coordinates: None,
            years_experience: self.number(QuestionId::Years).unwrap_or(0),
            remote_ok: self.yes_no(QuestionId::Remote),
            previous_field: self.text(QuestionId::PreviousField),
            graduation_year: self.number(QuestionId::GraduationYear),
            wants_internship: self.yes_no(QuestionId::Internship),
            language: language.to_string(),
        })
    }

    fn text(&self, id: QuestionId) -> Option<String> {
        match self.answers.get(&id) {
            Some(Answer::Text(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn number(&self, id: QuestionId) -> Option<u32> {
        match self.answers.get(&id) {
            Some(Answer::Number(n)) => Some(*n),
            _ => None,
        }
    }

    fn yes_no(&self, id: QuestionId) -> bool {
        matches!(self.answers.get(&id), Some(Answer::YesNo(true)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(q: &mut Questionnaire, answers: &[&str]) {
        for raw in answers {
            q.answer(raw).unwrap();
        }
    }

    fn ids(q: &Questionnaire) -> Vec<QuestionId> {
        q.questions().iter().map(|q| q.id).collect()
    }

    #[test]
    fn test_only_type_question_before_choice() {
        let q = Questionnaire::new();
        assert_eq!(ids(&q), vec![QuestionId::ProfileType]);
        assert_eq!(q.step(), (1, 1));
        assert!(!q.is_complete());
    }

    #[test]
    fn test_student_branch() {
        let mut q = Questionnaire::new();
        answer_all(&mut q, &["student", "Lin", "Data Analyst", "python, SQL, Python", "", "no", "2027", "yes"]);
        assert!(q.is_complete());
        let profile = q.to_profile("zh").unwrap();
        assert_eq!(profile.profile_type, ProfileType::Student);
        assert_eq!(profile.skills, vec!["python", "SQL"]);
        assert_eq!(profile.location, None);
        assert_eq!(profile.graduation_year, Some(2027));
        assert!(profile.wants_internship);
        assert!(!profile.remote_ok);
        assert_eq!(profile.years_experience, 0);
        assert_eq!(profile.language, "zh");
    }

    #[test]
    fn test_career_changer_branch() {
        let mut q = Questionnaire::new();
        answer_all(&mut q, &["careerchanger", "Kai", "Frontend Dev", "css", "Lyon", "yes", "Teaching", "8"]);
        let profile = q.to_profile("en").unwrap();
        assert_eq!(profile.previous_field.as_deref(), Some("Teaching"));
        assert_eq!(profile.years_experience, 8);
        assert_eq!(profile.location.as_deref(), Some("Lyon"));
        assert!(profile.remote_ok);
    }

    #[test]
    fn test_invalid_answers_do_not_advance() {
        let mut q = Questionnaire::new();
        assert_eq!(q.answer("pirate"), Err(AppError::InvalidAnswer("err.choice".to_string())));
        q.answer("professional").unwrap();
        assert_eq!(q.answer("   "), Err(AppError::InvalidAnswer("err.required".to_string())));
        assert_eq!(q.current().map(|q| q.id), Some(QuestionId::Name));
        answer_all(&mut q, &["Ada", "SRE", "", ""]);
        assert!(q.answer("maybe").is_err());
        assert_eq!(q.current().map(|q| q.id), Some(QuestionId::Remote));
        q.answer("no").unwrap();
        assert_eq!(q.answer("lots"), Err(AppError::InvalidAnswer("err.number".to_string())));
    }

    #[test]
    fn test_switching_type_drops_branch_answers() {
        let mut q = Questionnaire::new();
        answer_all(&mut q, &["student", "Lin", "Analyst", "sql", "", "yes", "2026", "no"]);
        assert!(q.is_complete());

        // walk back to the first question and change branch
        for _ in 0..8 {
            q.back();
        }
        assert_eq!(q.current().map(|q| q.id), Some(QuestionId::ProfileType));
        q.answer("professional").unwrap();
        assert!(q.previous_answer(QuestionId::GraduationYear).is_none());
        assert_eq!(
            q.previous_answer(QuestionId::Name).map(Answer::to_input).as_deref(),
            Some("Lin")
        );
        assert!(!q.is_complete());
        assert_eq!(ids(&q).last(), Some(&QuestionId::Years));
    }

    #[test]
    fn test_back_saturates_and_answer_after_end_is_ignored() {
        let mut q = Questionnaire::new();
        q.back();
        assert_eq!(q.step(), (1, 1));
        answer_all(&mut q, &["professional", "Ada", "SRE", "go", "Oslo", "yes"]);
        assert!(!q.is_complete());
        assert_eq!(q.answer("5"), Ok(true));
        assert!(q.is_complete());
        // a repeated final submit must not complete a second time
        assert_eq!(q.answer("5"), Ok(false));
        assert_eq!(q.answer("extra"), Ok(false));
        assert_eq!(q.to_profile("en").unwrap().years_experience, 5);
    }

    #[test]
    fn test_only_last_answer_reports_completion() {
        let mut q = Questionnaire::new();
        let answers = ["student", "Lin", "Analyst", "sql", "", "yes", "2026", "no"];
        let completed: Vec<bool> = answers.iter().map(|raw| q.answer(raw).unwrap()).collect();
        assert_eq!(completed, vec![false, false, false, false, false, false, false, true]);
    }
}
