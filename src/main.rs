mod cli;
mod commands;
mod error;
mod loader;
mod output;

use std::cmp::max;

use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use cli::{Cli, GlobalOpts};
use error::{CliError, CliResult};

fn init_logger(opts: &GlobalOpts) -> CliResult<()> {
    // --debug never makes logging quieter than --log-level asked for
    let level = if opts.debug {
        max(LevelFilter::Debug, opts.log_level)
    } else {
        opts.log_level
    };

    let mut config = ConfigBuilder::new();
    config
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off);
    if !opts.debug {
        config.set_time_level(LevelFilter::Off);
    }

    let color = if opts.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    TermLogger::init(level, config.build(), TerminalMode::Stderr, color)
        .map_err(|e| CliError::Logger(e.to_string()))
}

fn report(err: &CliError, color: bool) {
    if let CliError::Parse {
        label,
        source,
        errors,
    } = err
    {
        // Rendering to stderr only fails if stderr is gone
        if parser::error::report_errors(label, source, errors, color).is_ok() {
            return;
        }
    }

    eprintln!("{}", output::error(&err.to_string(), color));
}

fn run(args: &Cli) -> CliResult<String> {
    init_logger(&args.global_opts)?;
    log::debug!("Parsed arguments: {:?}", args);
    commands::execute(&args.command)
}

fn main() {
    let args = Cli::parse();
    let color = !args.global_opts.no_color;

    match run(&args) {
        Ok(text) => println!("{}", text),
        Err(err) => {
            report(&err, color);
            std::process::exit(err.exit_code());
        }
    }
}
