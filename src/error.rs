//! Top-level failure categories and their exit codes.

use crate::document::DocumentError;
use crate::store::StoreError;
use std::path::PathBuf;
use thiserror::Error;

pub const EXIT_USAGE: i32 = 1;
pub const EXIT_CATALOG: i32 = 2;
pub const EXIT_CHANGES: i32 = 3;
pub const EXIT_OUTPUT: i32 = 4;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{label} {{ {} }} does NOT exist", .path.display())]
    MissingFile { label: &'static str, path: PathBuf },
    #[error("loading catalog")]
    Catalog(#[source] DocumentError),
    #[error("loading change-set")]
    ChangeSet(#[source] DocumentError),
    #[error("applying change-set")]
    Apply(#[source] StoreError),
    #[error("writing output")]
    Output(#[source] DocumentError),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingFile { .. } => EXIT_USAGE,
            Error::Catalog(_) => EXIT_CATALOG,
            Error::ChangeSet(_) | Error::Apply(_) => EXIT_CHANGES,
            Error::Output(_) => EXIT_OUTPUT,
        }
    }
}
