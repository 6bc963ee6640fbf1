use rested_export::core;
use rested_export::status::ExitStatus;

/// Entry point - collects argv and delegates to core::run()
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    let args: Vec<String> = std::env::args().collect();
    core::run(args)
}
