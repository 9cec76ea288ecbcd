//! functions for reading the city and road .dat files
//!
//! Both formats are plain text with one record per line and whitespace-separated fields.
//! `city.dat`: `number code name... population elevation`, where the name may span several
//! tokens and ends at the first token that parses as an integer.
//! `road.dat`: `source target distance`, with cities referred to by their 1-based number.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::data_handling::city::City;
use crate::data_handling::error::{LoadError, Result};
use crate::graph::{IndexT, MutableGraph, Weight, WeightedDigraph};

pub type CityGraph = WeightedDigraph<City>;

/// a road as written in road.dat
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Road {
    pub source: u32,
    pub target: u32,
    pub distance: Weight,
}

impl Road {
    /// 0-based vertex index of the source city, `None` for city number 0
    pub fn source_index(&self) -> Option<IndexT> {
        self.source.checked_sub(1)
    }

    /// 0-based vertex index of the target city, `None` for city number 0
    pub fn target_index(&self) -> Option<IndexT> {
        self.target.checked_sub(1)
    }
}

/// parses one line of city.dat
pub fn parse_city_line(line: &str) -> std::result::Result<City, String> {
    let mut tokens = line.split_whitespace();

    let number = parse_field::<u32>(tokens.next(), "city number")?;
    let code = tokens.next().ok_or("missing city code")?;

    let mut name_parts: Vec<&str> = Vec::new();
    let population = loop {
        match tokens.next() {
            Some(token) => match token.parse::<i64>() {
                Ok(population) => break population,
                Err(_) => name_parts.push(token),
            },
            None => return Err("missing population".to_string()),
        }
    };
    if name_parts.is_empty() {
        return Err("missing city name".to_string());
    }

    let elevation = parse_field::<i64>(tokens.next(), "elevation")?;
    if let Some(extra) = tokens.next() {
        return Err(format!("unexpected trailing field {:?}", extra));
    }

    Ok(City::new(number, code, &name_parts.join(" "), population, elevation))
}

/// parses one line of road.dat
pub fn parse_road_line(line: &str) -> std::result::Result<Road, String> {
    let mut tokens = line.split_whitespace();

    let source = parse_field::<u32>(tokens.next(), "source city number")?;
    let target = parse_field::<u32>(tokens.next(), "target city number")?;
    let distance = parse_field::<Weight>(tokens.next(), "distance")?;
    if let Some(extra) = tokens.next() {
        return Err(format!("unexpected trailing field {:?}", extra));
    }
    if source == 0 || target == 0 {
        return Err("city numbers start at 1".to_string());
    }

    Ok(Road {
        source,
        target,
        distance,
    })
}

fn parse_field<T: std::str::FromStr>(
    token: Option<&str>,
    what: &str,
) -> std::result::Result<T, String> {
    let token = token.ok_or_else(|| format!("missing {}", what))?;
    token
        .parse::<T>()
        .map_err(|_| format!("invalid {} {:?}", what, token))
}

/// Applies `parse` to every non-blank line of a file, tagging failures with their line number.
fn read_records<T, F>(path: &Path, parse: F) -> Result<Vec<T>>
where
    F: Fn(&str) -> std::result::Result<T, String>,
{
    let io_error = |source: std::io::Error| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(io_error)?;
        if line.trim().is_empty() {
            continue;
        }
        let record = parse(&line).map_err(|message| LoadError::Parse {
            path: path.to_path_buf(),
            line: i + 1,
            message,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// read the vertex list from a city.dat file
pub fn read_cities(path: &Path) -> Result<Vec<City>> {
    let cities = read_records(path, parse_city_line)?;
    debug!("read {} cities from {}", cities.len(), path.display());
    Ok(cities)
}

/// read the edge list from a road.dat file
pub fn read_roads(path: &Path) -> Result<Vec<Road>> {
    let roads = read_records(path, parse_road_line)?;
    debug!("read {} roads from {}", roads.len(), path.display());
    Ok(roads)
}

/// Builds the road map. Cities keep their file order as vertex indices, so a road's
/// 1-based numbers map directly onto them.
pub fn load_city_graph(cities: Vec<City>, roads: &[Road]) -> Result<CityGraph> {
    let mut graph = CityGraph::new(cities);
    for road in roads {
        let (Some(source), Some(target)) = (road.source_index(), road.target_index()) else {
            return Err(LoadError::CityNumber {
                source_number: road.source,
                target_number: road.target,
            });
        };
        graph
            .add_edge(source, target, road.distance)
            .map_err(|error| LoadError::Road {
                source_number: road.source,
                target_number: road.target,
                error,
            })?;
    }
    info!(
        "loaded road map with {} cities and {} roads",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// reads both files and builds the road map
pub fn read_city_graph(cities_path: &Path, roads_path: &Path) -> Result<CityGraph> {
    let cities = read_cities(cities_path)?;
    let roads = read_roads(roads_path)?;
    load_city_graph(cities, &roads)
}
