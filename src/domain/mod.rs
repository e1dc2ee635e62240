pub mod aggregated_record;
pub mod daily_record;
pub mod dataset;
pub mod distribution;
pub mod period;
