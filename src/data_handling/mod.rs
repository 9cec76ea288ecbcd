pub mod city;
pub mod dat;
pub mod error;


pub use city::City;
pub use dat::{load_city_graph, read_cities, read_city_graph, read_roads, CityGraph, Road};
pub use error::LoadError;
