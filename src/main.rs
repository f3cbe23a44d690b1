use std::process::ExitCode;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = strip_dsx::cli::parse();
    app::run(args)
}
