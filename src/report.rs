use crate::dataset::Dataset;
use crate::error::{DegreesError, Result};
use crate::path::Path;

/// Lines printed for a search result.
pub fn render_path(dataset: &Dataset, source: &str, path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path else {
        return Ok(vec!["Not connected.".to_string()]);
    };

    let mut lines = vec![format!("{} degrees of separation.", path.degrees())];
    let mut previous = person_name(dataset, source)?;
    for (i, step) in path.steps.iter().enumerate() {
        let person = person_name(dataset, &step.person_id)?;
        let movie = dataset
            .movie(&step.movie_id)
            .ok_or_else(|| DegreesError::UnknownMovie(step.movie_id.clone()))?;
        lines.push(format!("{}: {} and {} starred in {}", i + 1, previous, person, movie.title));
        previous = person;
    }
    Ok(lines)
}

fn person_name<'a>(dataset: &'a Dataset, id: &str) -> Result<&'a str> {
    dataset
        .person(id)
        .map(|person| person.name.as_str())
        .ok_or_else(|| DegreesError::UnknownPerson(id.to_string()))
}
