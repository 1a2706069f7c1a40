use std::io;
use std::process::ExitCode;

/// Logs go to stderr so stdout carries the report only.
/// Level comes from `RUST_LOG`, defaulting to `warn`.
#[cfg(feature = "tracing")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    #[cfg(feature = "tracing")]
    init_logging();

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    match pwd_analyzer::run(&mut input, &mut output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\nError: {}", e);
            ExitCode::FAILURE
        }
    }
}
