use std::collections::BTreeSet;

use crate::dataset::{Dataset, MovieId, PersonId};

/// `(movie_id, person_id)` pairs for everyone who starred with `person_id`,
/// the person itself included. Unknown ids have no neighbors.
pub fn neighbors_for_person(dataset: &Dataset, person_id: &str) -> BTreeSet<(MovieId, PersonId)> {
    let mut neighbors = BTreeSet::new();
    let Some(person) = dataset.person(person_id) else {
        return neighbors;
    };
    for movie_id in &person.movies {
        if let Some(movie) = dataset.movie(movie_id) {
            for star in &movie.stars {
                neighbors.insert((movie_id.clone(), star.clone()));
            }
        }
    }
    neighbors
}
