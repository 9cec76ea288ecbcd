use std::path::{Path, PathBuf};

pub struct DatasetPaths {
    pub cities: PathBuf,
    pub roads: PathBuf,
}

/// Locates city.dat and road.dat for a dataset. A name that is not an existing path is
/// looked up under `data/`.
pub fn infer_dataset_paths(dataset: &str) -> DatasetPaths {
    let dataset_root = if Path::new(dataset).exists() {
        PathBuf::from(dataset)
    } else {
        PathBuf::from("data").join(dataset)
    };
    DatasetPaths {
        cities: dataset_root.join("city.dat"),
        roads: dataset_root.join("road.dat"),
    }
}
