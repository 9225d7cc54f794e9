use anyhow::Result;
use portfolio_explorer::cli;
use portfolio_explorer::utils::init_logging;

fn main() -> Result<()> {
    // Logging is best-effort; a read-only data directory must not stop the CLI
    let _guard = match init_logging() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
    };

    cli::run()
}
