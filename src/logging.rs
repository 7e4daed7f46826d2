use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

use crate::cli::Cli;

/// Filter used when `RUST_LOG` is unset.
#[must_use]
pub fn default_filter(cli: &Cli) -> &'static str {
    if cli.one_shot {
        "warn"
    } else if cli.log_file.is_some() {
        "info"
    } else {
        "off"
    }
}

pub fn init(cli: &Cli) -> Result<()> {
    if !cli.one_shot && cli.log_file.is_none() {
        // no logger installed: every record is dropped, RUST_LOG included
        return Ok(());
    }
    let env = Env::default().default_filter_or(default_filter(cli));
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(path) = &cli.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("installing logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::default_filter;
    use crate::test_support::state_test_cli;

    #[test]
    fn interactive_mode_is_silent_without_a_log_file() {
        assert_eq!(default_filter(&state_test_cli()), "off");
    }

    #[test]
    fn log_file_enables_info() {
        let mut cli = state_test_cli();
        cli.log_file = Some(PathBuf::from("dashboard.log"));
        assert_eq!(default_filter(&cli), "info");
    }

    #[test]
    fn one_shot_logs_warnings_to_stderr() {
        let mut cli = state_test_cli();
        cli.one_shot = true;
        assert_eq!(default_filter(&cli), "warn");
    }
}
