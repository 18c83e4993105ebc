pub mod candidate_pool;
pub mod company_data;
pub mod configuration;
pub mod domain;
pub mod telemetry;
pub mod test_data;

// Fixture layer shared by the integration suites
pub mod test_support;
