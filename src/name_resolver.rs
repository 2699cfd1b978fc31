//! Turns a typed name into a person id.
//!
//! Ambiguous names do not prompt here; the caller shows the candidates and
//! passes the picked id back through [`choose`].

use std::fmt;

use crate::graph_store::{GraphStore, PersonId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<u16>,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}, Birth: ", self.id, self.name)?;
        match self.birth {
            Some(year) => write!(f, "{year}"),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    NotFound,
    Unique(PersonId),
    /// Two or more people share the name; sorted by id.
    Ambiguous(Vec<Candidate>),
}

pub fn resolve(store: &GraphStore, name: &str) -> Resolution {
    let Some(ids) = store.ids_for_name(name.trim()) else {
        return Resolution::NotFound;
    };
    let mut ids = ids.iter();
    match (ids.next(), ids.next()) {
        (None, _) => Resolution::NotFound,
        (Some(id), None) => Resolution::Unique(id.clone()),
        _ => Resolution::Ambiguous(candidates(store, name.trim())),
    }
}

fn candidates(store: &GraphStore, name: &str) -> Vec<Candidate> {
    store
        .ids_for_name(name)
        .into_iter()
        .flatten()
        .filter_map(|id| {
            let person = store.person(id)?;
            Some(Candidate {
                id: id.clone(),
                name: person.name.clone(),
                birth: person.birth,
            })
        })
        .collect()
}

/// The candidate whose id matches `input`, if any.
pub fn choose(candidates: &[Candidate], input: &str) -> Option<PersonId> {
    let input = input.trim();
    candidates
        .iter()
        .find(|c| c.id.as_str() == input)
        .map(|c| c.id.clone())
}

/// Non-interactive resolution: an ambiguous name needs `choice` to name one
/// of its candidates.
pub fn resolve_with_choice(
    store: &GraphStore,
    name: &str,
    choice: Option<&str>,
) -> Option<PersonId> {
    match resolve(store, name) {
        Resolution::NotFound => None,
        Resolution::Unique(id) => Some(id),
        Resolution::Ambiguous(candidates) => choose(&candidates, choice?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GraphStore {
        let mut store = GraphStore::new();
        store.add_person("102".into(), "Kevin Bacon", Some(1958));
        store.add_person("200".into(), "Chris Evans", Some(1981));
        store.add_person("201".into(), "Chris Evans", None);
        store
    }

    #[test]
    fn test_unique_name() {
        let store = sample();
        assert_eq!(
            resolve(&store, "kevin bacon"),
            Resolution::Unique("102".into())
        );
        assert_eq!(
            resolve_with_choice(&store, "Kevin Bacon", None),
            Some("102".into())
        );
    }

    #[test]
    fn test_unknown_name() {
        let store = sample();
        assert_eq!(resolve(&store, "Nobody"), Resolution::NotFound);
        assert_eq!(resolve_with_choice(&store, "Nobody", Some("102")), None);
    }

    #[test]
    fn test_ambiguous_name_lists_candidates() {
        let store = sample();
        let Resolution::Ambiguous(candidates) = resolve(&store, "Chris Evans") else {
            panic!("expected an ambiguous resolution");
        };
        let ids: Vec<_> = candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["200", "201"]);
        assert_eq!(
            candidates[0].to_string(),
            "ID: 200, Name: Chris Evans, Birth: 1981"
        );
        assert_eq!(
            candidates[1].to_string(),
            "ID: 201, Name: Chris Evans, Birth: "
        );
    }

    #[test]
    fn test_ambiguous_name_needs_valid_choice() {
        let store = sample();
        let pick = |choice| resolve_with_choice(&store, "chris evans", choice);
        assert_eq!(pick(None), None);
        assert_eq!(pick(Some("102")), None); // not a candidate
        assert_eq!(pick(Some("abc")), None);
        assert_eq!(pick(Some(" 201 ")), Some("201".into()));
    }
}
