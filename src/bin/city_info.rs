use std::collections::HashMap;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Arg, Command};

use city_routes::data_handling::read_city_graph;
use city_routes::graph::Graph;
use city_routes::util::dataset::infer_dataset_paths;
use city_routes::util::logging::init_logging;

fn main() {
    let matches = Command::new("city_info")
        .about("Summary statistics for a city/road dataset")
        .arg(
            Arg::new("dataset")
                .long("dataset")
                .short('d')
                .help("Dataset name or directory")
                .default_value("data"),
        )
        .arg(
            Arg::new("cities")
                .long("cities")
                .value_name("FILE")
                .help("Path to city.dat"),
        )
        .arg(
            Arg::new("roads")
                .long("roads")
                .value_name("FILE")
                .help("Path to road.dat"),
        )
        .get_matches();

    init_logging(false);

    let inferred = infer_dataset_paths(matches.get_one::<String>("dataset").unwrap());
    let cities_path: PathBuf = matches
        .get_one::<String>("cities")
        .map(PathBuf::from)
        .unwrap_or(inferred.cities);
    let roads_path: PathBuf = matches
        .get_one::<String>("roads")
        .map(PathBuf::from)
        .unwrap_or(inferred.roads);

    println!(
        "Reading road map from: {} and {}",
        cities_path.display(),
        roads_path.display()
    );

    let start = Instant::now();
    let graph = match read_city_graph(&cities_path, &roads_path) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error reading dataset: {}", e);
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    let n = graph.vertex_count();
    println!("Road map loaded in {:.3} seconds", elapsed.as_secs_f64());
    println!("Number of cities: {}", n);
    println!("Number of roads: {}", graph.edge_count());
    if n == 0 {
        return;
    }

    let mut in_degrees = vec![0usize; n];
    let mut min_degree = usize::MAX;
    let mut max_degree = 0;
    let mut degree_distribution = HashMap::new();
    let mut self_loops = 0;

    for i in 0..n as u32 {
        let roads = graph.neighbors(i);
        min_degree = min_degree.min(roads.len());
        max_degree = max_degree.max(roads.len());
        *degree_distribution.entry(roads.len()).or_insert(0) += 1;
        for road in roads {
            in_degrees[road.to as usize] += 1;
            if road.to == i {
                self_loops += 1;
            }
        }
    }

    println!(
        "Average out-degree: {:.2}",
        graph.edge_count() as f64 / n as f64
    );
    println!("Minimum out-degree: {}", min_degree);
    println!("Maximum out-degree: {}", max_degree);

    println!("\nOut-degree distribution:");
    let mut distribution: Vec<_> = degree_distribution.into_iter().collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for (degree, count) in &distribution {
        println!(
            "  {} cities with {} roads ({:.2}%)",
            count,
            degree,
            (*count as f64 / n as f64) * 100.0
        );
    }

    let isolated: Vec<&str> = graph
        .vertices()
        .iter()
        .enumerate()
        .filter(|&(i, _)| in_degrees[i] == 0 && graph.neighbors(i as u32).is_empty())
        .map(|(_, city)| city.code.as_str())
        .collect();
    if !isolated.is_empty() {
        println!("\nCities without any road: {}", isolated.join(", "));
    }
    if self_loops > 0 {
        println!("\nNote: found {} roads that start and end at the same city", self_loops);
    }

    println!("\nSample of roads:");
    for (i, city) in graph.vertices().iter().enumerate().take(5) {
        let roads: Vec<String> = graph
            .neighbors(i as u32)
            .iter()
            .map(|road| format!("{} ({})", graph.vertices()[road.to as usize].code, road.weight))
            .collect();
        println!("  {} {} -> [{}]", city.code, city.name, roads.join(", "));
    }

    println!("\nRoad map info summary complete");
}
