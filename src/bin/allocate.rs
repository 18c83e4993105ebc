//! Ad-hoc allocation preview for the candidate data files.
//!
//! `cargo run --bin allocate -- <identifier>...` loads the configured pool,
//! reports its size and prints the email each identifier resolves to. Useful
//! for sanity-checking data-file changes without running a suite.

use auqa::candidate_pool::CandidatePool;
use auqa::configuration::get_configuration;
use auqa::telemetry::{get_subscriber, init_subscriber};

fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("allocate".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    let pool = CandidatePool::load(&configuration.candidate_data.directory);
    println!(
        "Candidate pool: {} emails from {}",
        pool.len(),
        configuration.candidate_data.directory.display()
    );

    for identifier in std::env::args().skip(1) {
        let email = pool.email_for(&identifier)?;
        println!("{} -> {}", identifier, email);
    }

    Ok(())
}
