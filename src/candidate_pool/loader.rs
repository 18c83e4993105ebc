use anyhow::Context;
use std::path::{Path, PathBuf};

/// Read every candidate CSV file under `directory` and collect the email
/// column into one ordered list.
///
/// Loading never fails: an unreadable directory yields an empty list and an
/// unparsable file keeps whatever the files before it contributed. The
/// allocator reports an empty pool at allocation time instead.
#[tracing::instrument(name = "Load candidate emails")]
pub(super) fn load_candidate_emails(directory: &Path) -> Vec<String> {
    let mut emails = Vec::new();

    let files = match candidate_files(directory) {
        Ok(files) => files,
        Err(e) => {
            tracing::error!("Error loading candidate emails: {:?}", e);
            return emails;
        }
    };

    for path in &files {
        match read_email_column(path) {
            Ok(mut file_emails) => emails.append(&mut file_emails),
            Err(e) => tracing::error!("Error loading candidate emails: {:?}", e),
        }
    }

    tracing::info!("Loaded {} candidate emails", emails.len());
    emails
}

/// All `.csv` files in `directory`, in lexicographic filename order.
fn candidate_files(directory: &Path) -> Result<Vec<PathBuf>, anyhow::Error> {
    let entries = std::fs::read_dir(directory).with_context(|| {
        format!(
            "Failed to read candidate data directory {}",
            directory.display()
        )
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| {
                format!(
                    "Failed to list candidate data directory {}",
                    directory.display()
                )
            })?
            .path();
        if path.extension().is_some_and(|extension| extension == "csv") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// The email sits in the second field. Rows with fewer than three fields are
/// incomplete exports and contribute nothing.
fn read_email_column(path: &Path) -> Result<Vec<String>, anyhow::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open candidate data file {}", path.display()))?;

    let mut emails = Vec::new();
    for record in reader.records() {
        let record = record
            .with_context(|| format!("Failed to parse candidate data file {}", path.display()))?;
        if record.len() >= 3 {
            emails.push(record[1].to_string());
        }
    }
    Ok(emails)
}
