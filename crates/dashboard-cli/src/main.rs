//! Sales dashboard reports
//!
//! Loads an ordered sequence of monthly records, narrows it to a period range
//! and prints totals, tables and a text bar chart.

mod config;
mod constants;
mod dataset;
mod reports;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dashboard_core::{BoundsPolicy, ChartSpec, Measure, PeriodRecord, RangeSelection, RangeView, ThemeName};
use std::path::PathBuf;
use tracing::{Level, debug, warn};

use config::{Config, FileConfig};
use dataset::PeriodRef;

#[derive(Parser, Debug)]
#[command(name = "sales-dashboard")]
#[command(about = "Range-filtered revenue, expense and profit reports")]
struct Args {
    /// Config file (default: ./config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// CSV dataset with label,revenue,expenses,profit columns (default: built-in sample)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Period range shared by the reporting commands
#[derive(clap::Args, Debug, Clone, Default)]
struct RangeArgs {
    /// First period, as 0-based index or label (default: first period)
    #[arg(long)]
    start: Option<PeriodRef>,

    /// Last period, inclusive, as 0-based index or label (default: last period)
    #[arg(long)]
    end: Option<PeriodRef>,

    /// Fail on inverted or out-of-range selections instead of clamping
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the periods in the dataset
    Periods,

    /// Print the filtered periods and their totals
    Summary {
        #[command(flatten)]
        range: RangeArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Draw the filtered periods as a text bar chart
    Chart {
        #[command(flatten)]
        range: RangeArgs,

        /// Measures to draw, comma separated (revenue, expenses, profit)
        #[arg(long, value_delimiter = ',')]
        series: Vec<Measure>,

        /// Width of the longest bar, in characters
        #[arg(long)]
        width: Option<usize>,
    },

    /// Write the filtered periods to a CSV file
    Export {
        #[command(flatten)]
        range: RangeArgs,

        /// Path to output CSV file
        file: PathBuf,
    },

    /// Print the resolved theme tokens as CSS custom properties
    Theme {
        /// Preset to resolve (default: from config)
        #[arg(long)]
        name: Option<ThemeName>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let file_config = FileConfig::discover(args.config.as_deref())?;
    let config = Config::from_file(file_config, args.data);

    // Theme tokens don't need a dataset
    if let Command::Theme { name } = args.command {
        let theme = match name {
            Some(name) => config.theme.with_name(name),
            None => config.theme,
        };
        print!("{}", reports::theme_sheet(&theme));
        return Ok(());
    }

    let records = dataset::load_dataset(config.data_path.as_deref())?;
    handle_command(args.command, &config, &records)
}

fn handle_command(command: Command, config: &Config, records: &[PeriodRecord]) -> Result<()> {
    match command {
        Command::Periods => {
            println!("{}", reports::periods_table(records));
            println!("\n{} period(s)", records.len());
            Ok(())
        }

        Command::Summary { range, format } => {
            let selection = select_range(&range, config, records)?;
            let mut view = RangeView::with_selection(records, selection);
            let snapshot = view.snapshot();
            match format {
                OutputFormat::Table => print!("{}", reports::summary_text(&snapshot, records)),
                OutputFormat::Json => println!("{}", reports::summary_json(&snapshot)?),
            }
            Ok(())
        }

        Command::Chart { range, series, width } => {
            let selection = select_range(&range, config, records)?;
            let mut view = RangeView::with_selection(records, selection);

            let measures = if series.is_empty() { &config.series } else { &series };
            let spec = ChartSpec::default().with_series(measures);
            let width = width.unwrap_or(config.chart_width).max(1);

            print!("{}", reports::text_chart(view.filtered(), &spec, width));
            Ok(())
        }

        Command::Export { range, file } => {
            let selection = select_range(&range, config, records)?;
            let mut view = RangeView::with_selection(records, selection);
            let filtered = view.filtered();

            dataset::export_to_csv(filtered, &file)?;
            println!("  Exported {} period(s) to {}", filtered.len(), file.display());
            Ok(())
        }

        // Handled before the dataset is loaded
        Command::Theme { .. } => Ok(()),
    }
}

/// Resolve command-line and config bounds into a selection, applying the bounds policy
fn select_range(args: &RangeArgs, config: &Config, records: &[PeriodRecord]) -> Result<RangeSelection> {
    let len = records.len();
    let full = RangeSelection::full(len);

    let start = match args.start.as_ref().or(config.start.as_ref()) {
        Some(period) => period.resolve(records).context("Invalid start period")?,
        None => full.start(),
    };
    let end = match args.end.as_ref().or(config.end.as_ref()) {
        Some(period) => period.resolve(records).context("Invalid end period")?,
        None => full.end(),
    };

    let selection = RangeSelection::new(start, end);
    let policy = if args.strict {
        BoundsPolicy::Strict
    } else {
        config.policy
    };
    debug!("Selected periods {}..={} ({:?} bounds)", start, end, policy);

    policy
        .check(&selection, len)
        .context("Invalid period range")?;

    if let Err(err) = selection.validate(len) {
        warn!(
            "{}; showing {} of {} periods",
            err,
            selection.span(len).len(),
            len
        );
    }

    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::sample_periods;

    fn config() -> Config {
        Config::from_file(FileConfig::default(), None)
    }

    fn range(start: Option<&str>, end: Option<&str>, strict: bool) -> RangeArgs {
        RangeArgs {
            start: start.map(|s| s.parse().unwrap()),
            end: end.map(|s| s.parse().unwrap()),
            strict,
        }
    }

    #[test]
    fn test_select_defaults_to_full_range() {
        let data = sample_periods();
        let sel = select_range(&RangeArgs::default(), &config(), &data).unwrap();
        assert_eq!(sel, RangeSelection::new(0, 5));
    }

    #[test]
    fn test_select_by_label_and_index() {
        let data = sample_periods();
        let sel = select_range(&range(Some("feb"), Some("3"), false), &config(), &data).unwrap();
        assert_eq!(sel, RangeSelection::new(1, 3));
    }

    #[test]
    fn test_select_inverted_lenient_and_strict() {
        let data = sample_periods();
        let lenient = select_range(&range(Some("4"), Some("2"), false), &config(), &data).unwrap();
        assert!(lenient.is_inverted());

        assert!(select_range(&range(Some("4"), Some("2"), true), &config(), &data).is_err());
    }

    #[test]
    fn test_select_strict_from_config() {
        let data = sample_periods();
        let mut strict = config();
        strict.policy = BoundsPolicy::Strict;
        assert!(select_range(&range(None, Some("9"), false), &strict, &data).is_err());
        assert!(select_range(&range(None, Some("9"), false), &config(), &data).is_ok());
    }

    #[test]
    fn test_select_unknown_label_fails() {
        let data = sample_periods();
        assert!(select_range(&range(Some("Dec"), None, false), &config(), &data).is_err());
    }

    #[test]
    fn test_select_numeric_labels() {
        let data = vec![
            PeriodRecord::new("2023", 400_000.0, 250_000.0, 150_000.0),
            PeriodRecord::new("2024", 480_000.0, 290_000.0, 190_000.0),
        ];
        let sel = select_range(&range(Some("2024"), None, false), &config(), &data).unwrap();
        assert_eq!(sel, RangeSelection::new(1, 1));
        assert_eq!(sel.span(data.len()), 1..2);
    }

    #[test]
    fn test_select_from_config_string_index() {
        let data = sample_periods();
        let file = FileConfig::parse("[range]\nstart = \"1\"\n").unwrap();
        let config = Config::from_file(file, None);
        let sel = select_range(&RangeArgs::default(), &config, &data).unwrap();
        assert_eq!(sel, RangeSelection::new(1, 5));
    }

    #[test]
    fn test_select_unknown_config_label_names_bound() {
        let data = sample_periods();
        let config = Config::from_file(FileConfig::parse("[range]\nend = \"Dec\"\n").unwrap(), None);
        let err = select_range(&RangeArgs::default(), &config, &data).unwrap_err();
        assert!(err.to_string().contains("Invalid end period"));
    }

    #[test]
    fn test_cli_parses() {
        let args = Args::try_parse_from([
            "sales-dashboard",
            "chart",
            "--start",
            "Feb",
            "--series",
            "revenue,profit",
            "--width",
            "20",
        ])
        .unwrap();
        match args.command {
            Command::Chart { range, series, width } => {
                assert_eq!(range.start, Some("Feb".parse::<PeriodRef>().unwrap()));
                assert_eq!(series, vec![Measure::Revenue, Measure::Profit]);
                assert_eq!(width, Some(20));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_measure() {
        assert!(Args::try_parse_from(["sales-dashboard", "chart", "--series", "margin"]).is_err());
    }
}
