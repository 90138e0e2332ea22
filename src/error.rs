//! Error types used by this crate.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::data::GameId;

/// Custom error type returned when something goes wrong while launching, showing or copying a
/// game.
#[derive(Error, Debug)]
pub enum LauncherError {
    /// The requested name is not one of the discovered games
    #[error("Unknown game: {0:?}")]
    UnknownGame(String),

    /// The games directory could not be listed
    #[error("Could not read games directory {path:?}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The script backing a game is missing or unreadable
    #[error("Could not read game file {path:?}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `copy` was asked not to overwrite an existing file
    #[error("File already exists: {0:?}")]
    DestinationExists(PathBuf),

    /// The interpreter for a game could not be started
    #[error("Failed to launch game '{game}'")]
    Launch {
        game: GameId,
        #[source]
        source: io::Error,
    },

    /// Error originating from any other [`io::Error`]
    #[error(transparent)]
    Io(#[from] io::Error),
}
