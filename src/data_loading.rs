//! Loads `people.csv`, `movies.csv` and `stars.csv` from a directory.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    #[serde(default)]
    birth: String,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    #[serde(default)]
    year: String,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Counts reported after a load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub people: usize,
    pub movies: usize,
    pub stars: usize,
    pub skipped: usize,
}

pub fn load_data(directory: &Path) -> Result<(Dataset, LoadSummary)> {
    let mut dataset = Dataset::new();

    parse_people(csv::Reader::from_path(directory.join("people.csv"))?, &mut dataset)?;
    parse_movies(csv::Reader::from_path(directory.join("movies.csv"))?, &mut dataset)?;
    let (stars, skipped) =
        parse_stars(csv::Reader::from_path(directory.join("stars.csv"))?, &mut dataset)?;

    let summary = LoadSummary {
        people: dataset.num_people(),
        movies: dataset.num_movies(),
        stars,
        skipped,
    };
    info!(
        people = summary.people,
        movies = summary.movies,
        stars = summary.stars,
        skipped = summary.skipped,
        "dataset loaded from {}",
        directory.display()
    );
    Ok((dataset, summary))
}

pub fn parse_people<R: Read>(mut reader: csv::Reader<R>, dataset: &mut Dataset) -> Result<()> {
    for row in reader.deserialize() {
        let row: PersonRow = row?;
        let birth = Some(row.birth.trim()).filter(|b| !b.is_empty()); // empty birth column means unknown
        dataset.add_person(&row.id, &row.name, birth);
    }
    Ok(())
}

pub fn parse_movies<R: Read>(mut reader: csv::Reader<R>, dataset: &mut Dataset) -> Result<()> {
    for row in reader.deserialize() {
        let row: MovieRow = row?;
        dataset.add_movie(&row.id, &row.title, &row.year);
    }
    Ok(())
}

/// Returns `(linked, skipped)`. Rows naming an unknown person or movie are
/// skipped, never fatal.
pub fn parse_stars<R: Read>(
    mut reader: csv::Reader<R>,
    dataset: &mut Dataset,
) -> Result<(usize, usize)> {
    let mut linked = 0;
    let mut skipped = 0;
    for row in reader.deserialize() {
        let row: StarRow = row?;
        if dataset.add_star(&row.person_id, &row.movie_id) {
            linked += 1;
        } else {
            debug!(person_id = %row.person_id, movie_id = %row.movie_id, "skipping cast row with unknown id");
            skipped += 1;
        }
    }
    Ok((linked, skipped))
}
