use clap::Args;
use flybase_gff::exports::anyhow;
use flybase_gff::exports::log::LevelFilter;
use flybase_gff::exports::pretty_env_logger;
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(short, long, default_value_t = false, help = "Log debug messages.")]
    pub verbose: bool,
    #[arg(long, default_value_t = false, help = "Hide the progress spinner.")]
    pub no_progress: bool,
}

impl UtilsArgs {
    /// Installs the logger. `RUST_LOG` takes precedence over `--verbose`.
    pub fn setup(&self) -> anyhow::Result<()> {
        let level = if self.verbose {
            LevelFilter::Debug
        }
        else {
            LevelFilter::Info
        };
        pretty_env_logger::formatted_builder()
            .filter_level(level)
            .parse_env("RUST_LOG")
            .try_init()?;
        Ok(())
    }
}

pub fn init_spinner(hidden: bool) -> anyhow::Result<ProgressBar> {
    if hidden {
        return Ok(ProgressBar::hidden());
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos:>8.green} records {msg}")?,
    );
    spinner.set_message("Processing...");
    Ok(spinner)
}
