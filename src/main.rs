//! Launches the table editor window.

use std::process::ExitCode;

fn main() -> ExitCode {
    match variantgrid_gui::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("variantgrid: {}", err);
            ExitCode::FAILURE
        }
    }
}
