//! In-memory person ↔ movie co-starring graph.
//!
//! People and movies are keyed by their dataset ids. Membership is kept on
//! both sides: a person lists the movies they starred in and a movie lists
//! its stars. The store is filled once at load time and only read afterwards.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::Deserialize;

/// Identifier of a person as it appears in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

/// Identifier of a movie as it appears in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

macro_rules! string_id {
    ($ty:ident) => {
        impl $ty {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $ty {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(PersonId);
string_id!(MovieId);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub birth: Option<u16>,
    pub movies: BTreeSet<MovieId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub year: Option<u16>,
    pub stars: BTreeSet<PersonId>,
}

/// The co-starring graph plus a lower-cased name index.
#[derive(Debug, Default)]
pub struct GraphStore {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    names: HashMap<String, BTreeSet<PersonId>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a person with no movies yet. Returns `false` and leaves the
    /// store untouched if the id is already taken.
    pub fn add_person(&mut self, id: PersonId, name: &str, birth: Option<u16>) -> bool {
        if self.people.contains_key(&id) {
            return false;
        }
        self.names
            .entry(name.to_lowercase())
            .or_default()
            .insert(id.clone());
        self.people.insert(
            id,
            Person {
                name: name.to_string(),
                birth,
                movies: BTreeSet::new(),
            },
        );
        true
    }

    /// Registers a movie with no stars yet. First record for an id wins.
    pub fn add_movie(&mut self, id: MovieId, title: &str, year: Option<u16>) -> bool {
        if self.movies.contains_key(&id) {
            return false;
        }
        let movie = Movie {
            title: title.to_string(),
            year,
            stars: BTreeSet::new(),
        };
        self.movies.insert(id, movie);
        true
    }

    /// Links a person to a movie on both sides. Nothing is recorded when
    /// either end is unknown, so the membership relation stays symmetric.
    pub fn add_starring(&mut self, person_id: &PersonId, movie_id: &MovieId) -> bool {
        let (Some(person), Some(movie)) = (
            self.people.get_mut(person_id),
            self.movies.get_mut(movie_id),
        ) else {
            return false;
        };
        person.movies.insert(movie_id.clone());
        movie.stars.insert(person_id.clone());
        true
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn contains_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Movies the person starred in, or `None` for an unknown id.
    pub fn movies_of(&self, id: &PersonId) -> Option<&BTreeSet<MovieId>> {
        self.people.get(id).map(|p| &p.movies)
    }

    /// Stars of the movie, or `None` for an unknown id.
    pub fn stars_of(&self, id: &MovieId) -> Option<&BTreeSet<PersonId>> {
        self.movies.get(id).map(|m| &m.stars)
    }

    /// Every `(movie, co-star)` pair reachable through one shared movie.
    ///
    /// The person themself is included once per movie, since they are one of
    /// its stars. Unknown ids yield an empty set.
    pub fn neighbors(&self, id: &PersonId) -> BTreeSet<(MovieId, PersonId)> {
        let mut neighbors = BTreeSet::new();
        let Some(movie_ids) = self.movies_of(id) else {
            return neighbors;
        };
        for movie_id in movie_ids {
            if let Some(stars) = self.stars_of(movie_id) {
                for star in stars {
                    neighbors.insert((movie_id.clone(), star.clone()));
                }
            }
        }
        neighbors
    }

    /// Ids whose display name matches `name`, ignoring case.
    pub fn ids_for_name(&self, name: &str) -> Option<&BTreeSet<PersonId>> {
        self.names.get(&name.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GraphStore {
        let mut store = GraphStore::new();
        store.add_person("1".into(), "Kevin Bacon", Some(1958));
        store.add_person("2".into(), "Tom Cruise", Some(1962));
        store.add_person("3".into(), "Tom Hanks", None);
        store.add_movie("m1".into(), "A Few Good Men", Some(1992));
        store.add_movie("m2".into(), "Apollo 13", Some(1995));
        store.add_starring(&"1".into(), &"m1".into());
        store.add_starring(&"2".into(), &"m1".into());
        store.add_starring(&"1".into(), &"m2".into());
        store.add_starring(&"3".into(), &"m2".into());
        store
    }

    #[test]
    fn test_membership_is_symmetric() {
        let store = sample();
        for (person_id, movie_id) in [("1", "m1"), ("2", "m1"), ("1", "m2"), ("3", "m2")] {
            let movies = store.movies_of(&person_id.into()).unwrap();
            let stars = store.stars_of(&movie_id.into()).unwrap();
            assert!(movies.contains(&movie_id.into()));
            assert!(stars.contains(&person_id.into()));
        }
    }

    #[test]
    fn test_dangling_starring_is_dropped() {
        let mut store = sample();
        assert!(!store.add_starring(&"99".into(), &"m1".into()));
        assert!(!store.add_starring(&"1".into(), &"m99".into()));
        assert_eq!(store.stars_of(&"m1".into()).unwrap().len(), 2);
        assert_eq!(store.movies_of(&"1".into()).unwrap().len(), 2);
    }

    #[test]
    fn test_neighbors_includes_self() {
        let store = sample();
        let neighbors = store.neighbors(&"1".into());
        assert_eq!(neighbors.len(), 4); // bacon + cruise in m1, bacon + hanks in m2
        assert!(neighbors.contains(&("m1".into(), "1".into())));
        assert!(neighbors.contains(&("m1".into(), "2".into())));
        assert!(neighbors.contains(&("m2".into(), "3".into())));
    }

    #[test]
    fn test_unknown_ids_are_empty() {
        let store = sample();
        assert!(store.neighbors(&"42".into()).is_empty());
        assert!(store.movies_of(&"42".into()).is_none());
        assert!(store.stars_of(&"m42".into()).is_none());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut store = sample();
        assert!(!store.add_person("1".into(), "Someone Else", None));
        assert!(!store.add_movie("m1".into(), "Other", None));
        assert_eq!(store.person(&"1".into()).unwrap().name, "Kevin Bacon");
        assert_eq!(store.movie(&"m1".into()).unwrap().title, "A Few Good Men");
        assert!(store.ids_for_name("someone else").is_none());
    }

    #[test]
    fn test_name_index_ignores_case() {
        let store = sample();
        let ids = store.ids_for_name("KEVIN bacon").unwrap();
        assert_eq!(ids.len(), 1);
        assert!(ids.contains(&"1".into()));
    }
}
