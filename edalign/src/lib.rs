use log::{LevelFilter, debug};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

pub mod align;
pub mod complement;
pub mod fasta;

fn initialise_logging(log_level: LevelFilter) {
    // Fails if a logger was already set, e.g. when running multiple commands in one test binary.
    if TermLogger::init(
        log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .is_err()
    {
        debug!("Logger was already initialised");
    }
}
