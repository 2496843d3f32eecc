//! In-memory lookup tables for people, movies and the name index.

use std::collections::{BTreeSet, HashMap};

pub type PersonId = String;
pub type MovieId = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<String>,
    pub movies: BTreeSet<MovieId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: String,
    pub stars: BTreeSet<PersonId>,
}

/// People, movies and the lowercased name index. Built once by the loader,
/// read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct Dataset {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    names: HashMap<String, BTreeSet<PersonId>>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_person(&mut self, id: &str, name: &str, birth: Option<&str>) {
        self.people.insert(
            id.to_string(),
            Person {
                id: id.to_string(),
                name: name.to_string(),
                birth: birth.map(str::to_string),
                movies: BTreeSet::new(),
            },
        );
        self.names
            .entry(name.to_lowercase())
            .or_default()
            .insert(id.to_string()); // duplicate names share one index entry
    }

    pub fn add_movie(&mut self, id: &str, title: &str, year: &str) {
        self.movies.insert(
            id.to_string(),
            Movie {
                id: id.to_string(),
                title: title.to_string(),
                year: year.to_string(),
                stars: BTreeSet::new(),
            },
        );
    }

    /// Links a person to a movie in both directions. Returns `false` and
    /// leaves the tables untouched when either id is unknown.
    pub fn add_star(&mut self, person_id: &str, movie_id: &str) -> bool {
        let (Some(person), Some(movie)) = (
            self.people.get_mut(person_id),
            self.movies.get_mut(movie_id),
        ) else {
            return false;
        };
        person.movies.insert(movie_id.to_string());
        movie.stars.insert(person_id.to_string());
        true
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// Case-insensitive lookup into the name index.
    pub fn ids_for_name(&self, name: &str) -> Vec<&PersonId> {
        self.names
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().collect())
            .unwrap_or_default()
    }

    pub fn num_people(&self) -> usize {
        self.people.len()
    }

    pub fn num_movies(&self) -> usize {
        self.movies.len()
    }
}
