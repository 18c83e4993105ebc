use crate::candidate_pool::{AllocationError, CandidatePool};
use crate::configuration::get_configuration;
use crate::domain::CandidateCredentials;
use once_cell::sync::Lazy;

// The pool is loaded at most once per process; every suite in the process
// observes the same fully-loaded instance. A configuration failure degrades
// to an empty pool, which the first allocation then reports.
static CANDIDATE_POOL: Lazy<CandidatePool> = Lazy::new(|| match get_configuration() {
    Ok(settings) => CandidatePool::load(&settings.candidate_data.directory),
    Err(e) => {
        tracing::error!("Failed to read configuration: {:?}", e);
        CandidatePool::from_emails(Vec::new())
    }
});

/// The process-wide candidate pool, loaded from configuration on first use.
pub fn candidate_pool() -> &'static CandidatePool {
    &CANDIDATE_POOL
}

/// Credentials for the candidate assigned to `test_name`.
///
/// Suites pass their own test-function name (see the `function_name!` macro
/// in the integration tests) so that reruns of a test land on the same
/// candidate account.
pub fn unique_candidate_credentials(
    test_name: &str,
) -> Result<CandidateCredentials, AllocationError> {
    let credentials = candidate_pool().credentials_for(test_name)?;
    tracing::info!(
        "Using candidate email {} for test {}",
        credentials.email,
        test_name
    );
    Ok(credentials)
}
