//! Degrees of separation over a person ↔ movie co-starring graph.
//!
//! Load a dataset with [`data_cleaning::load_dataset`], turn names into ids
//! with [`name_resolver`], then ask [`path_finder::shortest_path`] for the
//! fewest shared movies linking two people.

pub mod data_cleaning;
pub mod error;
pub mod frontier;
pub mod graph_store;
pub mod logging;
pub mod name_resolver;
pub mod node;
pub mod path_finder;
pub mod report;

pub use error::{DegreesError, Result};
pub use graph_store::{GraphStore, MovieId, PersonId};
pub use path_finder::{shortest_path, Path};
