use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::period::PeriodKind;
use crate::services::correlation::CorrelationKind;
use crate::services::distribution::MetricField;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Simulation results JSON file, or a directory of timestamped results
    #[arg(short, long, global = true)]
    pub input: Option<String>,
    /// Path to dashboard config YAML
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate one period window and print the dashboard cards
    Summarize {
        /// Aggregation period (defaults to the configured period)
        #[arg(short, long, value_enum)]
        period: Option<PeriodKind>,
        /// Zero-based window index (defaults to the latest window)
        #[arg(short = 'n', long)]
        instance: Option<usize>,
        /// Optional output YAML file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Summarize the distribution of a daily metric
    Distribution {
        /// Daily metric to summarize
        #[arg(short, long, value_enum, default_value_t = MetricField::default())]
        metric: MetricField,
        /// Optional output YAML file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Count bottleneck days and average waiting time per workstation
    Bottlenecks {
        /// Optional output YAML file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Compare workstation occupancy against the target
    Occupancy {
        /// Aggregation period (the whole dataset when omitted)
        #[arg(short, long, value_enum)]
        period: Option<PeriodKind>,
        /// Zero-based window index (defaults to the latest window)
        #[arg(short = 'n', long, requires = "period")]
        instance: Option<usize>,
        /// Occupancy target in [0, 1] (defaults to the configured target)
        #[arg(long)]
        target: Option<f64>,
        /// Optional output YAML file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Export a correlation scatter series as YAML
    Correlation {
        /// Pair of metrics to correlate
        #[arg(short, long, value_enum)]
        kind: CorrelationKind,
        /// Workstation whose waiting time colors the points
        #[arg(short = 'w', long, default_value_t = 0)]
        station: usize,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Step through period windows on a timer
    Play {
        /// Aggregation period (defaults to the configured period)
        #[arg(short, long, value_enum)]
        period: Option<PeriodKind>,
        /// Milliseconds between steps (defaults to the configured interval)
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Stop after this many steps instead of running until Ctrl-C
        #[arg(short, long)]
        ticks: Option<usize>,
    },
    /// Render a box plot of a daily metric into a PNG chart
    PlotDistribution {
        /// Daily metric to plot
        #[arg(short, long, value_enum, default_value_t = MetricField::default())]
        metric: MetricField,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Render aggregated workstation occupancy into a PNG bar chart
    PlotOccupancy {
        /// Aggregation period (defaults to the configured period)
        #[arg(short, long, value_enum)]
        period: Option<PeriodKind>,
        /// Zero-based window index (defaults to the latest window)
        #[arg(short = 'n', long)]
        instance: Option<usize>,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
