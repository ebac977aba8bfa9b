use clap::Parser;

use pic2ascii::cli::{self, Args, CliError, Command};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    match args.command {
        Some(Command::Probe) => cli::probe(),
        Some(Command::Config { ref action }) => cli::handle_config_action(action, args),
        None => cli::convert(args),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!();
            eprintln!("{}", hint);
        }
        std::process::exit(1);
    }
}
