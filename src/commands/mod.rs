pub mod base_commands;
pub mod bottlenecks_cmd;
pub mod command_context;
pub mod command_error;
pub mod completions_cmd;
pub mod correlation_cmd;
pub mod distribution_cmd;
pub mod occupancy_cmd;
pub mod play_cmd;
pub mod plot_distribution_cmd;
pub mod plot_occupancy_cmd;
pub mod report_format;
pub mod summarize_cmd;
