//! Path search over the implicit co-star graph.
//!
//! A person is marked seen when first enqueued, so nobody is expanded twice
//! and the search ends after at most one expansion per person. With a FIFO
//! frontier the first time the target turns up it is through a shortest
//! path. Neighbors are enumerated in `(movie_id, person_id)` order, which
//! fixes which of several equally short paths is returned.

use std::collections::HashSet;

use tracing::debug;

use crate::dataset::{Dataset, PersonId};
use crate::frontier::{Frontier, Node, QueueFrontier, StackFrontier};
use crate::neighbors::neighbors_for_person;
use crate::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Queue frontier, shortest path.
    #[default]
    Breadth,
    /// Stack frontier, some path.
    Depth,
}

/// Shortest list of `(movie, person)` steps from `source` to `target`, or
/// `None` when they are not connected.
pub fn shortest_path(dataset: &Dataset, source: &str, target: &str) -> Option<Path> {
    search_with(dataset, source, target, QueueFrontier::new())
}

pub fn find_path(dataset: &Dataset, source: &str, target: &str, strategy: Strategy) -> Option<Path> {
    match strategy {
        Strategy::Breadth => search_with(dataset, source, target, QueueFrontier::new()),
        Strategy::Depth => search_with(dataset, source, target, StackFrontier::new()),
    }
}

pub fn search_with<F: Frontier>(
    dataset: &Dataset,
    source: &str,
    target: &str,
    mut frontier: F,
) -> Option<Path> {
    if source == target {
        return Some(Path::default()); // zero degrees from yourself
    }

    let mut search = Search {
        dataset,
        source,
        target,
        explored: Vec::new(),
        seen: HashSet::new(),
    };

    // first hop: source's co-stars become roots with no parent
    if let Some(terminal) = search.expand(source, None, &mut frontier) {
        return Some(search.finish(&terminal));
    }

    while let Some(node) = frontier.remove() {
        let index = search.explored.len();
        let state = node.state.clone();
        search.explored.push(node); // pushed before any child can refer to it
        if let Some(terminal) = search.expand(&state, Some(index), &mut frontier) {
            return Some(search.finish(&terminal));
        }
    }

    debug!(
        explored = search.explored.len(),
        "frontier exhausted, {} and {} are not connected",
        source,
        target
    );
    None
}

struct Search<'a> {
    dataset: &'a Dataset,
    source: &'a str,
    target: &'a str,
    explored: Vec<Node>,
    seen: HashSet<PersonId>,
}

impl Search<'_> {
    /// Pushes unseen co-stars of `person_id` onto the frontier. Returns the
    /// terminal node as soon as the target shows up among them.
    fn expand<F: Frontier>(
        &mut self,
        person_id: &str,
        parent: Option<usize>,
        frontier: &mut F,
    ) -> Option<Node> {
        for (movie_id, costar) in neighbors_for_person(self.dataset, person_id) {
            if costar == self.target {
                return Some(Node {
                    state: costar,
                    action: movie_id,
                    parent,
                });
            }
            if costar != self.source && !self.seen.contains(&costar) {
                self.seen.insert(costar.clone());
                frontier.add(Node {
                    state: costar,
                    action: movie_id,
                    parent,
                });
            }
        }
        None
    }

    fn finish(&self, terminal: &Node) -> Path {
        let path = Path::reconstruct(&self.explored, terminal);
        debug!(
            explored = self.explored.len(),
            seen = self.seen.len(),
            degrees = path.degrees(),
            "path found"
        );
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(movie: &str, person: &str) -> (String, String) {
        (movie.to_string(), person.to_string())
    }

    /// A in M1 with B, B in M2 with C, C only in M2, D in nothing.
    fn abc() -> Dataset {
        let mut dataset = Dataset::new();
        for id in ["A", "B", "C", "D"] {
            dataset.add_person(id, id, None);
        }
        dataset.add_movie("M1", "Movie One", "2000");
        dataset.add_movie("M2", "Movie Two", "2001");
        dataset.add_star("A", "M1");
        dataset.add_star("B", "M1");
        dataset.add_star("B", "M2");
        dataset.add_star("C", "M2");
        dataset
    }

    #[test]
    fn test_two_degrees() {
        let path = shortest_path(&abc(), "A", "C").unwrap();
        assert_eq!(path.pairs(), vec![pair("M1", "B"), pair("M2", "C")]);
        assert_eq!(path.degrees(), 2);
    }

    #[test]
    fn test_direct_costar_is_one_degree() {
        let path = shortest_path(&abc(), "A", "B").unwrap();
        assert_eq!(path.pairs(), vec![pair("M1", "B")]);
    }

    #[test]
    fn test_person_without_movies_is_not_connected() {
        assert_eq!(shortest_path(&abc(), "A", "D"), None);
        assert_eq!(shortest_path(&abc(), "D", "A"), None);
    }

    #[test]
    fn test_disjoint_components() {
        let mut dataset = abc();
        dataset.add_person("E", "E", None);
        dataset.add_person("F", "F", None);
        dataset.add_movie("M3", "Elsewhere", "1990");
        dataset.add_star("E", "M3");
        dataset.add_star("F", "M3");

        assert_eq!(shortest_path(&dataset, "A", "F"), None);
        assert_eq!(shortest_path(&dataset, "E", "F").unwrap().degrees(), 1);
    }

    #[test]
    fn test_self_query_is_zero_degrees() {
        let path = shortest_path(&abc(), "A", "A").unwrap();
        assert_eq!(path.degrees(), 0);
    }

    #[test]
    fn test_prefers_shorter_route() {
        // long chain A-B-C-D-E plus a shortcut A-X-E
        let mut dataset = Dataset::new();
        for id in ["A", "B", "C", "D", "E", "X"] {
            dataset.add_person(id, id, None);
        }
        for (movie, left, right) in [
            ("m1", "A", "B"),
            ("m2", "B", "C"),
            ("m3", "C", "D"),
            ("m4", "D", "E"),
            ("m8", "A", "X"),
            ("m9", "X", "E"),
        ] {
            dataset.add_movie(movie, movie, "2000");
            dataset.add_star(left, movie);
            dataset.add_star(right, movie);
        }

        let path = shortest_path(&dataset, "A", "E").unwrap();
        assert_eq!(path.pairs(), vec![pair("m8", "X"), pair("m9", "E")]);
        assert!(path.verify(&dataset, "A"));
    }

    #[test]
    fn test_depth_first_finds_a_valid_path() {
        let dataset = abc();
        let path = find_path(&dataset, "A", "C", Strategy::Depth).unwrap();
        assert!(path.verify(&dataset, "A"));
        assert_eq!(path.steps.last().unwrap().person_id, "C");
        assert_eq!(find_path(&dataset, "A", "D", Strategy::Depth), None);
    }

    /// Queue frontier that remembers every state handed to it.
    #[derive(Default)]
    struct RecordingFrontier {
        inner: QueueFrontier,
        added: Vec<String>,
    }

    impl Frontier for RecordingFrontier {
        fn add(&mut self, node: Node) {
            self.added.push(node.state.clone());
            self.inner.add(node);
        }

        fn remove(&mut self) -> Option<Node> {
            self.inner.remove()
        }

        fn is_empty(&self) -> bool {
            self.inner.is_empty()
        }
    }

    #[test]
    fn test_enqueues_each_person_once_and_never_the_source() {
        // triangle A-B, B-C, C-A plus Z who is in no movie
        let mut dataset = Dataset::new();
        for id in ["A", "B", "C", "Z"] {
            dataset.add_person(id, id, None);
        }
        for (movie, left, right) in [("m1", "A", "B"), ("m2", "B", "C"), ("m3", "C", "A")] {
            dataset.add_movie(movie, movie, "2000");
            dataset.add_star(left, movie);
            dataset.add_star(right, movie);
        }

        let mut frontier = RecordingFrontier::default();
        assert_eq!(search_with(&dataset, "A", "Z", &mut frontier), None);

        let mut added = frontier.added.clone();
        added.sort();
        assert_eq!(added, vec!["B", "C"]); // each once, A never
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_unknown_source() {
        assert_eq!(shortest_path(&abc(), "ghost", "A"), None);
    }
}
