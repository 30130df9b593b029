use std::process::ExitCode;

use createfile::{CreateFileError, cli, output as out};

mod app;
mod logging;

fn main() -> ExitCode {
    let args = cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            let code = e
                .downcast_ref::<CreateFileError>()
                .map(CreateFileError::code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
