//! the vertex payload of the road map

use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Debug)]
pub struct City {
    pub number: u32,
    pub code: String,
    pub name: String,
    pub population: i64,
    pub elevation: i64,
}

impl City {
    pub fn new(number: u32, code: &str, name: &str, population: i64, elevation: i64) -> City {
        City {
            number,
            code: code.to_string(),
            name: name.to_string(),
            population,
            elevation,
        }
    }

    /// a placeholder city that only carries a code, used as a lookup key
    pub fn with_code(code: &str) -> City {
        City::new(0, code, "unnamed_city", 0, 0)
    }
}

// cities are identified by their code, ignoring ASCII case

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.code.eq_ignore_ascii_case(&other.code)
    }
}

impl Eq for City {}

impl PartialOrd for City {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for City {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.code.bytes().map(|b| b.to_ascii_lowercase());
        let rhs = other.code.bytes().map(|b| b.to_ascii_lowercase());
        lhs.cmp(rhs)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.number, self.code, self.name, self.population, self.elevation
        )
    }
}
