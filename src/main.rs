// SPDX-License-Identifier: MPL-2.0
use dashboard_feedback::app::{self, Flags};
use dashboard_feedback::config;
use dashboard_feedback::ui::theming::ThemeMode;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: dashboard_feedback [OPTIONS]

Options:
  --config <DIR>    Directory containing settings.toml
  --theme <MODE>    light, dark or system (overrides settings.toml)
  -h, --help        Print this help";

fn parse_flags() -> Result<(Flags, Vec<OsString>), pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: args.opt_value_from_str::<_, PathBuf>("--config")?,
        theme: args.opt_value_from_str::<_, ThemeMode>("--theme")?,
    };

    Ok((flags, args.finish()))
}

fn main() -> ExitCode {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let (flags, unexpected) = match parse_flags() {
        Ok(parsed) => parsed,
        Err(error) => {
            eprintln!("error: {error}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let (config, config_warning) = config::load_with_override(flags.config_dir.clone());

    if let Err(error) = simple_logger::SimpleLogger::new()
        .with_level(config.general.level_filter())
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
    {
        eprintln!("failed to build logger instance: {error}");
    }

    if !unexpected.is_empty() {
        log::warn!("ignoring unexpected arguments: {unexpected:?}");
    }
    if let Some(warning) = &config_warning {
        log::warn!("{warning}");
    }

    match app::run(flags, config, config_warning) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("application error: {error}");
            ExitCode::FAILURE
        }
    }
}
