use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Arg, ArgAction, Command};
use tracing::info;

use city_routes::console::{run, Menu, Session};
use city_routes::data_handling::read_city_graph;
use city_routes::util::dataset::infer_dataset_paths;
use city_routes::util::logging::init_logging;

fn main() {
    let matches = Command::new("city_routes")
        .about("Interactive shortest-route queries over a map of cities and roads")
        .arg(
            Arg::new("dataset")
                .long("dataset")
                .short('d')
                .help("Dataset name or directory holding city.dat and road.dat")
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
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Log loading and command details to stderr"),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let dataset = matches.get_one::<String>("dataset").unwrap();
    let inferred = infer_dataset_paths(dataset);

    let cities_path: PathBuf = matches
        .get_one::<String>("cities")
        .map(PathBuf::from)
        .unwrap_or(inferred.cities);

    let roads_path: PathBuf = matches
        .get_one::<String>("roads")
        .map(PathBuf::from)
        .unwrap_or(inferred.roads);

    let start = Instant::now();
    let graph = match read_city_graph(&cities_path, &roads_path) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    info!("read road map in {:?}", start.elapsed());

    let mut session = Session::new(graph);
    let menu = Menu::road_map();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    if let Err(e) = run(&mut session, &menu, stdin.lock(), &mut stdout, &mut stderr) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
