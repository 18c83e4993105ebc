use auqa::telemetry::{get_subscriber, init_subscriber};
use std::path::Path;
use std::sync::LazyLock;

// Ensure that the `tracing` stack is only initialised once using `LazyLock`
static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub fn init_tracing() {
    // The first time `force` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    LazyLock::force(&TRACING);
}

pub fn write_candidate_file(directory: &Path, name: &str, contents: &str) {
    std::fs::write(directory.join(name), contents).expect("Failed to write candidate data file.");
}
