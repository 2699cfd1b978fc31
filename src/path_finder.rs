//! Breadth-first search for the fewest movies linking two people.

use std::collections::HashSet;

use tracing::debug;

use crate::frontier::{Frontier, QueueFrontier};
use crate::graph_store::{GraphStore, MovieId, PersonId};
use crate::node::{Node, SearchTree};

/// Hops from the source to the target. Each hop names the shared movie and
/// the person reached through it; the source itself is not listed.
pub type Path = Vec<(MovieId, PersonId)>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken off the frontier.
    pub explored: usize,
}

/// Shortest path from `source` to `target`, or `None` when they are not
/// connected or either id is unknown. A person reaches themself in zero hops.
pub fn shortest_path(store: &GraphStore, source: &PersonId, target: &PersonId) -> Option<Path> {
    search_with(store, source, target, QueueFrontier::new()).0
}

/// Runs the search loop with any frontier.
///
/// Only a [`QueueFrontier`] guarantees the returned path is a shortest one;
/// other orders still return a valid path when one exists.
pub fn search_with<F: Frontier>(
    store: &GraphStore,
    source: &PersonId,
    target: &PersonId,
    mut frontier: F,
) -> (Option<Path>, SearchStats) {
    let mut stats = SearchStats::default();

    if !store.contains_person(source) {
        return (None, stats);
    }
    let Some(target_movies) = store.movies_of(target) else {
        return (None, stats); // unknown target
    };
    if source == target {
        return (Some(Vec::new()), stats); // zero degrees
    }

    let mut tree = SearchTree::new();
    let mut explored: HashSet<PersonId> = HashSet::new();
    frontier.add(Node::root(source.clone()));

    loop {
        // nothing left to expand means the target is unreachable
        if frontier.is_empty() {
            debug!(explored = stats.explored, %source, %target, "not connected");
            return (None, stats);
        }

        let node = frontier.remove().expect("frontier checked non-empty above");
        stats.explored += 1;
        let state = node.state.clone();
        let id = tree.push(node); // children point back at it by index

        // a movie shared with the target ends the search one layer early
        let mut own_movies = store.movies_of(&state).into_iter().flatten();
        if let Some(movie) = own_movies.find(|movie| target_movies.contains(*movie)) {
            let mut path = tree.trail(id);
            path.push((movie.clone(), target.clone()));
            debug!(explored = stats.explored, hops = path.len(), %source, %target, "path found");
            return (Some(path), stats);
        }

        explored.insert(state.clone());

        // queue co-stars not already waiting or done
        for (movie_id, person_id) in store.neighbors(&state) {
            if !frontier.contains_state(&person_id) && !explored.contains(&person_id) {
                frontier.add(Node::child(person_id, id, movie_id));
            }
        }
    }
}
