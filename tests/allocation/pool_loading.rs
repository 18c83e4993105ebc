use crate::helpers::{init_tracing, write_candidate_file};
use auqa::candidate_pool::CandidatePool;
use auqa::configuration::get_configuration;
use claims::{assert_err, assert_ok};

#[test]
fn allocation_against_a_csv_backed_pool_is_reproducible() {
    // Arrange
    init_tracing();
    let directory = tempfile::tempdir().unwrap();
    write_candidate_file(
        directory.path(),
        "pool.csv",
        "1,a@x.com,Candidate A\n2,b@x.com,Candidate B\n3,c@x.com,Candidate C\n4,d@x.com,Candidate D\n",
    );

    // Act
    let pool = CandidatePool::load(directory.path());

    // Assert - four emails, modulus 5, and "test-1" hashes onto index 3
    assert_eq!(pool.len(), 4);
    assert_eq!(assert_ok!(pool.email_for("test-1")), "d@x.com");
}

#[test]
fn incomplete_rows_are_dropped_during_loading() {
    // Arrange
    init_tracing();
    let directory = tempfile::tempdir().unwrap();
    write_candidate_file(
        directory.path(),
        "pool.csv",
        "1,short@x.com\n2,complete@x.com,Complete Row\n",
    );

    // Act
    let pool = CandidatePool::load(directory.path());

    // Assert
    assert_eq!(pool.emails().to_vec(), vec!["complete@x.com"]);
}

#[test]
fn an_empty_data_directory_means_allocation_fails() {
    // Arrange
    init_tracing();
    let directory = tempfile::tempdir().unwrap();

    // Act
    let pool = CandidatePool::load(directory.path());

    // Assert
    assert_err!(pool.email_for("any-test"));
}

#[test]
fn the_configured_sample_pool_loads() {
    // Arrange
    init_tracing();
    let configuration = assert_ok!(get_configuration());

    // Act
    let pool = CandidatePool::load(&configuration.candidate_data.directory);

    // Assert - the checked-in sample has two batches of eight candidates
    assert_eq!(pool.len(), 16);
}
