use std::process::ExitCode;

use clap::{CommandFactory, Parser, error::ErrorKind};
use county::{app, args::Args};
use county_shared_kernel::CountyError;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if err.downcast_ref::<CountyError>().is_some_and(CountyError::is_configuration) {
                eprintln!("\n{}", Args::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}
