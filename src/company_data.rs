use anyhow::Context;
use secrecy::Secret;
use serde::Deserialize;
use std::path::Path;

/// API client credentials for companies that exercise the public API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCredentials {
    pub client_id: String,
    pub client_secret: Secret<String>,
}

/// Seeded data for one test company.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyData {
    pub company_name: String,
    pub admin: String,
    pub admin_password: Secret<String>,
    pub secondary_admin: Option<String>,
    pub secondary_admin_password: Option<Secret<String>>,
    pub api_credentials: Option<ApiCredentials>,
}

/// Load the fixture for `key` from the company fixture directory.
///
/// Unlike the candidate pool, a named company fixture must exist: a test that
/// asks for a company it cannot get has no way to proceed.
pub fn get_company_data(directory: &Path, key: &str) -> Result<CompanyData, anyhow::Error> {
    let path = directory.join(format!("{}.json", key));
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read company fixture {}", path.display()))?;
    let company = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse company fixture {}", path.display()))?;
    Ok(company)
}
