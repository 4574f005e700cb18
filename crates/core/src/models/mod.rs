pub mod chart;
pub mod dashboard;
pub mod fund;
pub mod nav;
pub mod performance;
pub mod period;
pub mod settings;
