//! Reading and writing catalog and change-set documents.
//!
//! Parsing goes straight into the typed model: a record with a missing or
//! mistyped field fails the whole document, while a missing top-level key
//! just yields an empty collection. Parse errors carry the JSON path of the
//! offending record (`users[2]`, `addplaylists[0].song_ids`).

use crate::model::{CatalogDocument, ChangeSet};
use crate::store::CatalogStore;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_path_to_error::Track;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// A JSON error tagged with the path where deserialization stopped.
pub type ParseError = serde_path_to_error::Error<serde_json::Error>;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("opening {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("creating {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("writing {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load the base catalog from `path`.
pub fn load_catalog(path: &Path) -> Result<CatalogDocument, DocumentError> {
    let document: CatalogDocument = read_json(path)?;
    info!(
        path = %path.display(),
        users = document.users.len(),
        playlists = document.playlists.len(),
        songs = document.songs.len(),
        "catalog loaded"
    );
    Ok(document)
}

/// Load a change-set from `path`.
pub fn load_change_set(path: &Path) -> Result<ChangeSet, DocumentError> {
    let changes: ChangeSet = read_json(path)?;
    if changes.is_empty() {
        debug!(path = %path.display(), "change-set is empty");
    }
    info!(
        path = %path.display(),
        remove = changes.remove_playlists.len(),
        add = changes.add_playlists.len(),
        update = changes.update_playlists.len(),
        "change-set loaded"
    );
    Ok(changes)
}

/// Parse a catalog from any reader.
pub fn parse_catalog<R: Read>(reader: R) -> Result<CatalogDocument, ParseError> {
    parse_json(reader)
}

/// Parse a change-set from any reader.
pub fn parse_change_set<R: Read>(reader: R) -> Result<ChangeSet, ParseError> {
    parse_json(reader)
}

/// Serialize the store to `path`, creating or truncating it.
pub fn write_catalog(store: &CatalogStore, path: &Path) -> Result<(), DocumentError> {
    let file = File::create(path).map_err(|source| DocumentError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    render_catalog(store, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        path = %path.display(),
        users = store.user_count(),
        playlists = store.playlist_count(),
        songs = store.song_count(),
        "catalog written"
    );
    Ok(())
}

/// Pretty-print the store as a catalog document with a trailing newline.
pub fn render_catalog<W: Write>(store: &CatalogStore, mut writer: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, &store.to_document())?;
    writer.write_all(b"\n")
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    let file = File::open(path).map_err(|source| DocumentError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(BufReader::new(file)).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json<T: DeserializeOwned, R: Read>(reader: R) -> Result<T, ParseError> {
    let mut deserializer = serde_json::Deserializer::from_reader(reader);
    let mut track = Track::new();
    // Trailing content after the document is rejected, as serde_json::from_reader does.
    T::deserialize(serde_path_to_error::Deserializer::new(&mut deserializer, &mut track))
        .and_then(|value| deserializer.end().map(|()| value))
        .map_err(|err| serde_path_to_error::Error::new(track.path(), err))
}
