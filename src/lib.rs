//! Merge a playlist change-set into a music catalog.
//!
//! The pipeline is load → apply → write: [`document`] parses the two input
//! documents into the typed [`model`], [`store::CatalogStore`] holds the
//! catalog in memory, [`apply::apply_changes`] runs the remove/add/update
//! phases, and [`document::write_catalog`] serializes the result.

pub mod apply;
pub mod document;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;

pub use apply::{ApplyReport, apply_changes};
pub use document::{
    DocumentError, load_catalog, load_change_set, parse_catalog, parse_change_set,
    render_catalog, write_catalog,
};
pub use error::Error;
pub use model::{
    AddPlaylist, CatalogDocument, ChangeSet, Playlist, RemovePlaylist, Song, UpdatePlaylist, User,
};
pub use store::{CatalogStore, StoreError};

use std::path::Path;
use tracing::info;

/// Run the whole pipeline on files. The output is only written when load and
/// apply both succeed.
pub fn process(input: &Path, changes: &Path, output: &Path) -> Result<ApplyReport, Error> {
    let mut store = CatalogStore::from_document(load_catalog(input).map_err(Error::Catalog)?);
    let change_set = load_change_set(changes).map_err(Error::ChangeSet)?;
    let report = apply_changes(&mut store, &change_set).map_err(Error::Apply)?;
    info!(
        removed = report.removed,
        added = report.added.len(),
        updated = report.updated,
        skipped = report.removals_ignored
            + report.adds_unknown_user
            + report.adds_without_songs
            + report.updates_unknown_playlist,
        songs_dropped = report.songs_dropped,
        "change-set applied"
    );
    write_catalog(&store, output).map_err(Error::Output)?;
    Ok(report)
}
