pub mod console;
pub mod data_handling;
pub mod graph;
pub mod util;
