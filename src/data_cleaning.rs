//! Loads `people.csv`, `movies.csv` and `stars.csv` into a [`GraphStore`].
//!
//! Bad rows never fail the load: a row that does not deserialize, repeats an
//! id, or stars someone in a movie that is not in the dataset is skipped and
//! counted in [`LoadStats`]. A blank or unreadable birth or release year is
//! kept as `None` and the row still loads.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{DegreesError, Result};
use crate::graph_store::{GraphStore, MovieId, PersonId};

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Deserialize)]
struct PersonRecord {
    id: PersonId,
    name: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    birth: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct MovieRecord {
    id: MovieId,
    title: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    year: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct StarRecord {
    person_id: PersonId,
    movie_id: MovieId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub people: usize,
    pub movies: usize,
    pub stars: usize,
    /// Rows that failed to parse or repeated an id.
    pub skipped_rows: usize,
    /// Star rows naming an unknown person or movie.
    pub dangling_stars: usize,
}

pub fn load_dataset(dir: &Path) -> Result<(GraphStore, LoadStats)> {
    let mut store = GraphStore::new();
    let mut stats = LoadStats::default();

    for row in read_rows::<PersonRecord>(&dir.join(PEOPLE_FILE), &mut stats.skipped_rows)? {
        if store.add_person(row.id, &row.name, row.birth) {
            stats.people += 1;
        } else {
            stats.skipped_rows += 1; // duplicate id, first one wins
        }
    }

    for row in read_rows::<MovieRecord>(&dir.join(MOVIES_FILE), &mut stats.skipped_rows)? {
        if store.add_movie(row.id, &row.title, row.year) {
            stats.movies += 1;
        } else {
            stats.skipped_rows += 1;
        }
    }

    // people and movies must both be loaded before linking them
    for row in read_rows::<StarRecord>(&dir.join(STARS_FILE), &mut stats.skipped_rows)? {
        if store.add_starring(&row.person_id, &row.movie_id) {
            stats.stars += 1;
        } else {
            debug!(person = %row.person_id, movie = %row.movie_id, "dropping dangling star row");
            stats.dangling_stars += 1; // unknown person or movie
        }
    }

    info!(
        people = stats.people,
        movies = stats.movies,
        stars = stats.stars,
        skipped = stats.skipped_rows,
        dangling = stats.dangling_stars,
        dir = %dir.display(),
        "dataset loaded"
    );
    Ok((store, stats))
}

/// Deserializes every well-formed row of a headed CSV file. Only I/O
/// failures abort; malformed rows bump `skipped`.
fn read_rows<T: DeserializeOwned>(path: &Path, skipped: &mut usize) -> Result<Vec<T>> {
    let csv_error = |source| DegreesError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All) // strips spaces around fields and headers
        .from_path(path)
        .map_err(csv_error)?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<T>() {
        match result {
            Ok(row) => rows.push(row),
            Err(err) if err.is_io_error() => return Err(csv_error(err)),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "skipping malformed row");
                *skipped += 1;
            }
        }
    }
    Ok(rows)
}
