use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pipeline::invalid_input::InvalidInputError;

/// Interview question families. Scoring bonuses and feedback templates
/// branch on this, so parsing rejects anything outside the known set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    Behavioral,
    Technical,
    Situational,
    #[serde(rename = "Company-Specific")]
    CompanySpecific,
}

impl QuestionType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Behavioral => "Behavioral",
            Self::Technical => "Technical",
            Self::Situational => "Situational",
            Self::CompanySpecific => "Company-Specific",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuestionType {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Behavioral" => Ok(Self::Behavioral),
            "Technical" => Ok(Self::Technical),
            "Situational" => Ok(Self::Situational),
            "Company-Specific" => Ok(Self::CompanySpecific),
            other => Err(InvalidInputError::UnknownQuestionType(other.to_string())),
        }
    }
}

/// The question the answer responds to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub category: String,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        question_type: QuestionType,
        category: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            question_type,
            category: category.into(),
        }
    }
}
