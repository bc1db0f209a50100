//! package-deb - Debian package builder for the desktop client.
//!
//! Derives the package options for one build variant and hands them to
//! electron-installer-debian. Exits 0 on success and 1 on any failure.

use std::io;
use std::process;
use threema_desktop_packaging::PackagingError;
use threema_desktop_packaging::packaging::OutputManager;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = match threema_desktop_packaging::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            log::debug!("Recoverable: {}", e.is_recoverable());
            if let Err(write_err) = report(&OutputManager::new(false), &e) {
                log::error!("Failed to report error: {}", write_err);
            }
            1
        }
    };

    process::exit(exit_code);
}

/// Print the error, its cause chain, debug detail and recovery hints
fn report(output: &OutputManager, e: &PackagingError) -> io::Result<()> {
    output.error(&format!("Error: {}", e))?;
    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        output.error(&format!("  caused by: {}", cause))?;
        source = cause.source();
    }
    output.error(&format!("{:?}", e))?;
    for suggestion in e.recovery_suggestions() {
        output.error(&format!("  hint: {}", suggestion))?;
    }
    Ok(())
}
