pub mod analyze;
pub mod probes;
pub mod ui;
