use validator::ValidateEmail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEmailAddress(String);

impl CandidateEmailAddress {
    /// Returns an instance of `CandidateEmailAddress` if the input satisfies
    /// our validation constraints on candidate email addresses.
    /// It returns an error message otherwise.
    pub fn parse(s: String) -> Result<CandidateEmailAddress, String> {
        if s.validate_email() {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid candidate email address.", s))
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for CandidateEmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CandidateEmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
