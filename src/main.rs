use std::process::ExitCode;

fn main() -> ExitCode {
    gitconf::cli::run()
}
