//! Error display and exit codes for the CLI.

use colored::Colorize;
use propstore_store::{Status, StoreError};

/// Map an error to the process exit code for its status.
///
/// Errors that did not come from the store (bad arguments, unreadable
/// configuration) exit with 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<StoreError>().map(StoreError::status) {
        Some(Status::Ok) => 0,
        Some(Status::NotFound) => 2,
        Some(Status::AlreadyExists) => 3,
        Some(Status::InvalidType) => 4,
        Some(Status::UnknownError) | None => 1,
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }

    if let Some(store_err) = err.downcast_ref::<StoreError>() {
        match store_err {
            StoreError::AlreadyExists(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Pass --update to overwrite the existing value.".yellow()
                );
            }
            StoreError::InvalidType { actual, .. } => {
                eprintln!(
                    "\n{}",
                    format!(
                        "Hint: The property is stored as {}. Use --type {} or delete it first.",
                        actual, actual
                    )
                    .yellow()
                );
            }
            _ => {}
        }
    }
}
