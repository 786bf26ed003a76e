use std::process::ExitCode;

fn main() -> ExitCode {
    match slugsmith::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
