use crate::candidate_pool::loader::load_candidate_emails;
use crate::domain::CandidateCredentials;
use sha2::{Digest, Sha256};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum AllocationError {
    #[error("No candidate emails loaded. The candidate pool is empty.")]
    NoCandidateData,
}

/// The pool of seeded candidate accounts available to the test suites.
///
/// Loaded once per process and shared by reference afterwards; the pool never
/// changes after construction. `test_support::fixtures` holds the shared
/// instance used by the suites, while tests of the allocator itself construct
/// isolated pools via `from_emails`.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    emails: Vec<String>,
}

impl CandidatePool {
    /// Build the pool from the candidate CSV files under `directory`.
    ///
    /// Loading problems are logged and leave the pool empty or partially
    /// filled; `email_for` reports the emptiness when it matters.
    pub fn load(directory: &Path) -> Self {
        Self {
            emails: load_candidate_emails(directory),
        }
    }

    /// Build a pool directly from a list of emails, bypassing the CSV loader.
    pub fn from_emails(emails: Vec<String>) -> Self {
        Self { emails }
    }

    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    /// Deterministically pick one pool email for `identifier`.
    ///
    /// A fixed identifier maps to the same email on every run as long as the
    /// underlying data files are unchanged. Distinct identifiers spread over
    /// the pool on a best-effort basis and may collide.
    ///
    /// The double modulo (smallest prime >= pool size, then pool size) is
    /// load-bearing: collapsing it to a single `hash % len` would reassign
    /// every existing identifier.
    #[tracing::instrument(name = "Allocate candidate email", skip(self))]
    pub fn email_for(&self, identifier: &str) -> Result<&str, AllocationError> {
        if self.emails.is_empty() {
            return Err(AllocationError::NoCandidateData);
        }

        let digest = hex::encode(Sha256::digest(identifier.as_bytes()));
        // The first eight hex characters of the digest, as an integer.
        let hash_prefix =
            u64::from_str_radix(&digest[..8], 16).expect("a hex-encoded digest is valid base-16");

        let prime = smallest_prime_at_least(self.emails.len());
        let index = hash_prefix as usize % prime % self.emails.len();
        Ok(&self.emails[index])
    }

    /// `email_for`, paired with the shared candidate password.
    pub fn credentials_for(
        &self,
        identifier: &str,
    ) -> Result<CandidateCredentials, AllocationError> {
        let email = self.email_for(identifier)?;
        Ok(CandidateCredentials::new(email.to_string()))
    }
}

/// Smallest prime greater than or equal to `n`.
fn smallest_prime_at_least(n: usize) -> usize {
    let mut candidate = n;
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}
