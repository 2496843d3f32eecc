//! Degrees of separation between people in a film-cast dataset.

pub mod data_loading;
pub mod dataset;
pub mod error;
pub mod frontier;
pub mod neighbors;
pub mod path;
pub mod report;
pub mod resolver;
pub mod search;

pub use dataset::{Dataset, Movie, MovieId, Person, PersonId};
pub use error::{DegreesError, Result};
pub use path::{Path, Step};
pub use search::{find_path, shortest_path, Strategy};
