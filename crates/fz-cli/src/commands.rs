use super::args::Cli;
use crate::logging;
use crate::presentation::{ConsoleView, FormatOptions};
use anyhow::Result;
use clap::CommandFactory;
use fz_runtime::{Config, ControllerConfig, resolve_config_path};
use is_terminal::IsTerminal;
use std::io::BufReader;
use std::time::Duration;

/// Colour is off when asked for by flag, by `NO_COLOR`, by config
/// `color = false`, or when the stream is not a terminal
fn colors_enabled(no_color: bool, config_color: bool, is_terminal: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none() && config_color && is_terminal
}

/// Whether diagnostics on stderr may be coloured.
///
/// An unreadable config counts as `color = true`; its error is reported
/// by [`run`].
pub fn stderr_color(cli: &Cli) -> bool {
    let config_color = load_config(cli).map(|config| config.color).unwrap_or(true);
    colors_enabled(cli.no_color, config_color, std::io::stderr().is_terminal())
}

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level, stderr_color(&cli));

    if std::io::stdin().is_terminal() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let config = load_config(&cli)?;
    let controller_config = controller_config(&cli, &config);

    let options = FormatOptions {
        enable_color: colors_enabled(cli.no_color, config.color, std::io::stdout().is_terminal()),
    };

    let view = ConsoleView::new(std::io::stdout(), options);
    let outcome = fz_runtime::run_stream(BufReader::new(std::io::stdin()), controller_config, view)?;
    tracing::info!(?outcome, "run finished");

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    match resolve_config_path(cli.config.as_deref()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Ok(Config::load_from(&path)?)
        }
        None => Ok(Config::default()),
    }
}

/// Command-line flags override the config file
fn controller_config(cli: &Cli, config: &Config) -> ControllerConfig {
    let mut controller = config.controller();

    if let Some(secs) = cli.grace {
        controller.shutdown_grace = Duration::from_secs(secs);
    }
    if cli.summary_on_eof {
        controller.summary_on_eof = true;
    }

    controller
}
