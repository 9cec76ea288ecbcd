//! Executes road map requests against an owned graph.
//!
//! A session never reads or writes the terminal: every request yields either the text to
//! show or a `CommandError` describing why it was refused.

use itertools::Itertools;
use tracing::debug;

use crate::console::command::Request;
use crate::console::CommandError;
use crate::data_handling::{City, CityGraph};
use crate::graph::{GraphError, IndexT, MutableGraph, Weight};

pub struct Session {
    graph: CityGraph,
}

impl Session {
    pub fn new(graph: CityGraph) -> Session {
        Session { graph }
    }

    pub fn graph(&self) -> &CityGraph {
        &self.graph
    }

    pub fn execute(&mut self, request: Request) -> Result<String, CommandError> {
        debug!(?request, "executing");
        match request {
            Request::Query { code } => self.query_city(&code),
            Request::Distance { from, to } => self.minimum_distance(&from, &to),
            Request::Insert { from, to, distance } => self.insert_road(&from, &to, distance),
            Request::Remove { from, to } => self.remove_road(&from, &to),
        }
    }

    pub fn query_city(&self, code: &str) -> Result<String, CommandError> {
        let index = self.lookup(code)?;
        Ok(self.city(index)?.to_string())
    }

    pub fn minimum_distance(&self, from: &str, to: &str) -> Result<String, CommandError> {
        let source = self.lookup(from)?;
        let target = self.lookup(to)?;
        let source_city = self.city(source)?;
        let target_city = self.city(target)?;

        let path = match self.graph.shortest_path(source, target) {
            Ok(path) => path,
            Err(GraphError::TargetUnreachable { .. }) => {
                return Err(CommandError::NoRoute {
                    from: source_city.name.clone(),
                    to: target_city.name.clone(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        let route = path
            .nodes
            .iter()
            .map(|&i| self.city(i).map(|city| city.code.as_str()))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .join(", ");
        Ok(format!(
            "The minimum distance between {} and {} is {} through the route: {}.",
            source_city.name, target_city.name, path.length, route
        ))
    }

    /// Adds a road unless one already runs from `from` to `to`. Distances must be positive.
    pub fn insert_road(&mut self, from: &str, to: &str, distance: Weight) -> Result<String, CommandError> {
        if distance < 0 {
            return Err(CommandError::NegativeDistance);
        }
        if distance == 0 {
            return Err(CommandError::ZeroDistance);
        }
        let source = self.lookup(from)?;
        let target = self.lookup(to)?;
        let (source_name, target_name) = self.names(source, target)?;

        if self.graph.edge_weight(source, target)?.is_some() {
            return Err(CommandError::RoadExists {
                from: source_name,
                to: target_name,
            });
        }
        self.graph.add_edge(source, target, distance)?;
        Ok(format!(
            "You have inserted a road from {} to {} with a distance of {}.",
            source_name, target_name, distance
        ))
    }

    pub fn remove_road(&mut self, from: &str, to: &str) -> Result<String, CommandError> {
        let source = self.lookup(from)?;
        let target = self.lookup(to)?;
        let (source_name, target_name) = self.names(source, target)?;

        match self.graph.remove_edge(source, target)? {
            Some(_) => Ok(format!(
                "You have removed a road from {} to {}.",
                source_name, target_name
            )),
            None => Err(CommandError::RoadMissing {
                from: source_name,
                to: target_name,
            }),
        }
    }

    fn lookup(&self, code: &str) -> Result<IndexT, CommandError> {
        self.graph
            .vertex_index(&City::with_code(code))
            .ok_or_else(|| CommandError::UnknownCity {
                code: code.to_uppercase(),
            })
    }

    fn city(&self, index: IndexT) -> Result<&City, CommandError> {
        Ok(self.graph.vertex(index)?)
    }

    fn names(&self, source: IndexT, target: IndexT) -> Result<(String, String), CommandError> {
        Ok((self.city(source)?.name.clone(), self.city(target)?.name.clone()))
    }
}
