use clap::Parser;
use configreader::cli::{run, Cli};
use env_logger::Env;

fn main() -> std::process::ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));
    run(Cli::parse())
}
