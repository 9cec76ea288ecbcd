pub mod dataset;
pub mod logging;
