//! Generators for throwaway test data, used by flows that must not collide
//! with previously created entities.

use crate::domain::{AssessmentName, CandidateEmailAddress};
use chrono::Utc;
use rand::Rng;
use rand::distributions::Alphanumeric;

/// A fresh email address for flows that register a brand new candidate,
/// as opposed to the pooled accounts handed out by the allocator.
pub fn random_candidate_email() -> CandidateEmailAddress {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(4)
        .map(char::from)
        .collect();
    let email = format!(
        "test-{}-{}@example.com",
        suffix.to_lowercase(),
        Utc::now().timestamp_millis()
    );
    CandidateEmailAddress::parse(email).expect("generated email addresses are well-formed")
}

/// An assessment name unique enough for parallel suite runs.
pub fn random_assessment_name() -> AssessmentName {
    let name = format!("Test Assessment {}", Utc::now().timestamp_millis());
    AssessmentName::parse(name).expect("generated assessment names are well-formed")
}
