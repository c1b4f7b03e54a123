use std::env;
use std::process::ExitCode;

mod cli;
mod clipboard;
mod error;
mod exits;
mod form;
mod pass;
mod rng;
mod settings;
mod terminal;
mod text;
mod tui;

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    env_logger::Builder::from_env(env_logger::Env::default().filter_or("EASYPASS_LOG", "warn"))
        .format_timestamp(None)
        .init();

    cli::run(env::args().collect())
}
