use secrecy::Secret;

/// Every candidate account in the test data pool shares the same password.
pub const DEFAULT_CANDIDATE_PASSWORD: &str = "Candidate@123";

/// Login credentials for one allocated test candidate.
#[derive(Debug, Clone)]
pub struct CandidateCredentials {
    pub email: String,
    pub password: Secret<String>,
}

impl CandidateCredentials {
    pub fn new(email: String) -> Self {
        Self {
            email,
            password: Secret::new(DEFAULT_CANDIDATE_PASSWORD.to_string()),
        }
    }
}
