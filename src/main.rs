//! `wp-main-file` binary entry point.
use anyhow::Result;
use clap::Parser;

use wp_main_file::actions::{GithubOutputs, emit_command, format_error_command};
use wp_main_file::cli::{Cli, Command};
use wp_main_file::commands;
use wp_main_file::config::Inputs;
use wp_main_file::logging::{self, Logger};

fn main() {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose);

    if let Err(err) = run(args.command) {
        emit_command(&format_error_command(&format!("{err:#}")));
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate(opts) => {
            let inputs = Inputs::from_opts(&opts)?;
            let outputs = GithubOutputs::new(inputs.output_file.clone());
            commands::generate::run(&inputs, &Logger::new(), &outputs)
        }
        Command::Version => {
            commands::version::run();
            Ok(())
        }
    }
}
