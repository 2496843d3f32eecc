use crate::dataset::{Dataset, MovieId, PersonId};
use crate::frontier::Node;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub movie_id: MovieId,
    pub person_id: PersonId,
}

/// Ordered steps from the source (not included) to the target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    pub steps: Vec<Step>,
}

impl Path {
    /// Walks parent indices back from `terminal` through `explored`.
    /// Every parent index must point into `explored`.
    pub(crate) fn reconstruct(explored: &[Node], terminal: &Node) -> Path {
        let mut steps = vec![Step {
            movie_id: terminal.action.clone(),
            person_id: terminal.state.clone(),
        }];
        let mut parent = terminal.parent;
        while let Some(index) = parent {
            let node = &explored[index];
            steps.push(Step {
                movie_id: node.action.clone(),
                person_id: node.state.clone(),
            });
            parent = node.parent;
        }
        steps.reverse(); // collected target-first
        Path { steps }
    }

    pub fn degrees(&self) -> usize {
        self.steps.len()
    }

    pub fn pairs(&self) -> Vec<(MovieId, PersonId)> {
        self.steps
            .iter()
            .map(|step| (step.movie_id.clone(), step.person_id.clone()))
            .collect()
    }

    /// Checks that each consecutive pair of people, starting at `source`,
    /// actually co-starred in the movie of the step between them.
    pub fn verify(&self, dataset: &Dataset, source: &str) -> bool {
        let mut previous = source;
        for step in &self.steps {
            let Some(movie) = dataset.movie(&step.movie_id) else {
                return false;
            };
            if !movie.stars.contains(previous) || !movie.stars.contains(&step.person_id) {
                return false;
            }
            previous = step.person_id.as_str();
        }
        true
    }
}
