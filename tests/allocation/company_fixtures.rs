use crate::helpers::init_tracing;
use auqa::company_data::get_company_data;
use auqa::configuration::get_configuration;
use auqa::domain::CandidateEmailAddress;
use claims::{assert_err, assert_ok, assert_some};

#[test]
fn the_seeded_company_fixture_loads() {
    // Arrange
    init_tracing();
    let configuration = assert_ok!(get_configuration());

    // Act
    let company = assert_ok!(get_company_data(
        &configuration.company_data.directory,
        "qa_test_company_15"
    ));

    // Assert
    assert_eq!(company.company_name, "QA Test Company 15");
    assert_ok!(CandidateEmailAddress::parse(company.admin));
    assert_some!(company.api_credentials);
}

#[test]
fn an_unknown_company_key_is_an_error() {
    // Arrange
    init_tracing();
    let configuration = assert_ok!(get_configuration());

    // Act & Assert
    assert_err!(get_company_data(
        &configuration.company_data.directory,
        "no_such_company"
    ));
}
