//! Name → person id resolution with pluggable disambiguation.

use crate::dataset::{Dataset, PersonId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameResolution {
    NotFound,
    Unique(PersonId),
    Ambiguous(Vec<Candidate>),
}

/// Picks one person when a name matches several.
pub trait Disambiguator {
    fn choose(&mut self, name: &str, candidates: &[Candidate]) -> Option<PersonId>;
}

/// Never picks; ambiguous names resolve to nothing.
pub struct NoDisambiguation;

impl Disambiguator for NoDisambiguation {
    fn choose(&mut self, _name: &str, _candidates: &[Candidate]) -> Option<PersonId> {
        None
    }
}

impl<F> Disambiguator for F
where
    F: FnMut(&str, &[Candidate]) -> Option<PersonId>,
{
    fn choose(&mut self, name: &str, candidates: &[Candidate]) -> Option<PersonId> {
        self(name, candidates)
    }
}

pub fn resolve_name(dataset: &Dataset, name: &str) -> NameResolution {
    let ids = dataset.ids_for_name(name);
    match ids.as_slice() {
        [] => NameResolution::NotFound,
        [id] => NameResolution::Unique((*id).clone()),
        _ => NameResolution::Ambiguous(
            ids.iter()
                .filter_map(|id| dataset.person(id))
                .map(|person| Candidate {
                    id: person.id.clone(),
                    name: person.name.clone(),
                    birth: person.birth.clone(),
                })
                .collect(),
        ),
    }
}

/// Resolves `name` to a single id. A choice outside the candidate list
/// counts as not found.
pub fn person_id_for_name<D: Disambiguator + ?Sized>(
    dataset: &Dataset,
    name: &str,
    disambiguator: &mut D,
) -> Option<PersonId> {
    match resolve_name(dataset, name) {
        NameResolution::NotFound => None,
        NameResolution::Unique(id) => Some(id),
        NameResolution::Ambiguous(candidates) => {
            let chosen = disambiguator.choose(name, &candidates)?;
            candidates
                .iter()
                .any(|candidate| candidate.id == chosen)
                .then_some(chosen)
        }
    }
}
