//! Human-readable rendering of a found path.

use crate::graph_store::{GraphStore, MovieId, PersonId};
use crate::path_finder::Path;

pub fn degrees_line(degrees: usize) -> String {
    format!("{degrees} degrees of separation.")
}

/// One numbered line per hop, e.g. `1: Kevin Bacon and Tom Cruise starred in A Few Good Men`.
pub fn hop_lines(store: &GraphStore, source: &PersonId, path: &Path) -> Vec<String> {
    let mut previous = source;
    path.iter()
        .enumerate()
        .map(|(i, (movie_id, person_id))| {
            let line = format!(
                "{}: {} and {} starred in {}",
                i + 1,
                person_name(store, previous),
                person_name(store, person_id),
                movie_title(store, movie_id)
            );
            previous = person_id;
            line
        })
        .collect()
}

// unknown ids render as themselves
fn person_name<'a>(store: &'a GraphStore, id: &'a PersonId) -> &'a str {
    store.person(id).map_or(id.as_str(), |p| p.name.as_str())
}

fn movie_title<'a>(store: &'a GraphStore, id: &'a MovieId) -> &'a str {
    store.movie(id).map_or(id.as_str(), |m| m.title.as_str())
}
