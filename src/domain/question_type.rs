use serde::{Deserialize, Serialize};

/// Question types supported by the platform's library, together with the
/// single-letter codes the backend uses for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "o")]
    MultipleChoice,
    #[serde(rename = "p")]
    Programming,
    #[serde(rename = "u")]
    Frontend,
    #[serde(rename = "s")]
    Subjective,
    #[serde(rename = "ds")]
    DataScience,
    #[serde(rename = "q")]
    Sql,
    #[serde(rename = "l")]
    MachineLearning,
    #[serde(rename = "prj")]
    Project,
    #[serde(rename = "g")]
    Golf,
    #[serde(rename = "dg")]
    Diagram,
    #[serde(rename = "a")]
    Approximate,
    #[serde(rename = "fs")]
    Fullstack,
    #[serde(rename = "do")]
    Devops,
    #[serde(rename = "f")]
    FileUpload,
}

impl QuestionType {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::MultipleChoice => "o",
            QuestionType::Programming => "p",
            QuestionType::Frontend => "u",
            QuestionType::Subjective => "s",
            QuestionType::DataScience => "ds",
            QuestionType::Sql => "q",
            QuestionType::MachineLearning => "l",
            QuestionType::Project => "prj",
            QuestionType::Golf => "g",
            QuestionType::Diagram => "dg",
            QuestionType::Approximate => "a",
            QuestionType::Fullstack => "fs",
            QuestionType::Devops => "do",
            QuestionType::FileUpload => "f",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
