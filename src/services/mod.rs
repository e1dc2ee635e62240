pub mod aggregation;
pub mod bottleneck;
pub mod box_plot;
pub mod correlation;
pub mod dashboard;
pub mod data_source;
pub mod distribution;
pub mod occupancy;
pub mod occupancy_plot;
pub mod percentiles;
pub mod playback;
pub mod records_json;
pub mod windowing;
