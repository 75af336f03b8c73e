//! Binary entrypoint for the `taskmaster` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Recording and replay are handled in commands::dispatch via
    // TASKMASTER_RECORD=<dir> and TASKMASTER_REPLAY=<cassette>.
    match taskmaster::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
