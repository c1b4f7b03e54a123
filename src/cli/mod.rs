mod context;
mod flags;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

use clap::Parser;

pub use context::Context;
pub use flags::CliFlags;

/// Parse arguments and run. No arguments at all opens the form.
pub fn run(args: Vec<String>) -> ExitCode {
    let open_form = args.len() <= 1;
    let mut flags = match CliFlags::try_parse_from(&args) {
        Ok(flags) => flags,
        Err(e) => e.exit(),
    };
    flags.tui |= open_form;

    match Context::new(flags).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            if e.is_validation() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
