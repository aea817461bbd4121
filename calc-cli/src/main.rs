use std::path::PathBuf;

use anyhow::{Context, Result};
use calc_cli::{app, config::AppConfig, logging};
use calc_core::ProgressiveCalculator;
use calc_core::screens::{Alert, CounterAction};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Pocket calculators: INSS payroll deduction, grade average, length
/// conversion, a login form and a counter.
#[derive(Debug, Parser)]
#[command(name = "calcs", version, about)]
struct Cli {
    /// TOML configuration file (logging and bracket table).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, overriding both the config file and RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the INSS deduction and net salary for a gross salary.
    Inss {
        /// Gross salary, e.g. `2000` or `2.000,00`.
        #[arg(allow_hyphen_values = true)]
        gross: String,

        /// Also print the per-bracket contributions.
        #[arg(long)]
        breakdown: bool,
    },

    /// Average three grades between 0 and 10.
    Grades {
        #[arg(allow_hyphen_values = true)]
        first: String,
        #[arg(allow_hyphen_values = true)]
        second: String,
        #[arg(allow_hyphen_values = true)]
        third: String,
    },

    /// Convert metres to centimetres.
    Convert {
        #[arg(allow_hyphen_values = true)]
        metres: String,
    },

    /// Check that both login fields are filled in.
    Login {
        #[arg(long, default_value = "")]
        user: String,
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Apply counter button presses in order, starting from zero.
    Counter {
        #[arg(value_enum)]
        steps: Vec<CounterStep>,
    },

    /// Print the active bracket table.
    Table,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CounterStep {
    Inc,
    Dec,
    Reset,
}

impl From<CounterStep> for CounterAction {
    fn from(step: CounterStep) -> Self {
        match step {
            CounterStep::Inc => CounterAction::Increment,
            CounterStep::Dec => CounterAction::Decrement,
            CounterStep::Reset => CounterAction::Reset,
        }
    }
}

// ─── logging ─────────────────────────────────────────────────────────────────

fn init_logging(
    cli: &Cli,
    config: &AppConfig,
) -> Result<()> {
    logging::init_logging(&config.logging.level);

    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = cli.log_file.as_ref().or(config.logging.file.as_ref()) {
        logging::enable_file_logging(path)?;
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

/// Prints `output`, or fails with the screen's error alert.
fn finish(
    output: String,
    alert: Option<&Alert>,
) -> Result<()> {
    if let Some(alert) = alert.filter(|alert| alert.is_error()) {
        anyhow::bail!("{alert}");
    }
    print!("{output}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    init_logging(&cli, &config)?;
    debug!(config = ?cli.config, brackets = config.inss.brackets.len(), "configuration loaded");

    let calculator = ProgressiveCalculator::new(config.inss.clone());

    match &cli.command {
        Command::Inss { gross, breakdown } => {
            let screen = app::run_inss(&calculator, gross);
            let mut output = app::render_inss(&screen, calculator.table());
            if let (true, Some(result)) = (*breakdown, &screen.result) {
                let detail = calculator.breakdown(result.gross)?;
                output.push_str(&app::render_breakdown(&detail));
            }
            finish(output, screen.alert.as_ref())
        }
        Command::Grades {
            first,
            second,
            third,
        } => {
            let screen = app::run_grades([first.as_str(), second.as_str(), third.as_str()]);
            finish(app::render_grades(&screen), screen.alert.as_ref())
        }
        Command::Convert { metres } => {
            let screen = app::run_converter(metres);
            finish(app::render_converter(&screen), screen.alert.as_ref())
        }
        Command::Login { user, password } => {
            let screen = app::run_login(user, password);
            finish(app::render_login(&screen), screen.alert.as_ref())
        }
        Command::Counter { steps } => {
            let actions: Vec<CounterAction> = steps.iter().copied().map(Into::into).collect();
            let screen = app::run_counter(&actions);
            info!(value = screen.value, "counter updated");
            finish(app::render_counter(&screen), None)
        }
        Command::Table => finish(app::render_table(calculator.table()), None),
    }
}
