mod assessment_name;
mod candidate_credentials;
mod candidate_email_address;
mod question_type;

pub use assessment_name::AssessmentName;
pub use candidate_credentials::{CandidateCredentials, DEFAULT_CANDIDATE_PASSWORD};
pub use candidate_email_address::CandidateEmailAddress;
pub use question_type::QuestionType;
