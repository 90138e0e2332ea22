use std::{
    fmt::{self, Debug, Display, Formatter},
    path::{Path, PathBuf},
    process::ExitStatus,
};

use crate::error::LauncherError;

/// Extension of the script files which back each game
pub const GAME_EXTENSION: &str = "py";

/// File names starting with this prefix are internal to the games package
pub const RESERVED_PREFIX: &str = "__";

/// Shared helpers used by the games, not a game itself
pub const UTILITY_MODULE: &str = "utils.py";

/// Name used to reference a game from the command line, i.e. its file name without the
/// extension
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GameId(String);

impl GameId {
    /// Builds a [`GameId`] from a file name, if that file name represents a game
    ///
    /// e.g. `snake.py` gives `snake`, while `__init__.py`, `utils.py` and `notes.txt` give `None`
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        if file_name.starts_with(RESERVED_PREFIX) || file_name == UTILITY_MODULE {
            return None;
        }

        file_name
            .strip_suffix(GAME_EXTENSION)
            .and_then(|stem| stem.strip_suffix('.'))
            .filter(|stem| !stem.is_empty())
            .map(|stem| Self(stem.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the script backing this game
    pub fn file_name(&self) -> String {
        format!("{}.{GAME_EXTENSION}", self.0)
    }
}

impl Display for GameId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for GameId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl AsRef<str> for GameId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A discovered game, along with the script file it is run from
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Game {
    pub id: GameId,
    pub path_source: PathBuf,
}

impl Game {
    pub fn new(id: GameId, games_dir: &Path) -> Self {
        let path_source = games_dir.join(id.file_name());
        Self { id, path_source }
    }
}

/// Maps a game to something which can actually run it.
///
/// Games are opaque scripts, so rather than importing them by name the launcher hands them to a
/// runner, which is expected to block until the game has finished.
pub trait GameRunner: Debug {
    fn run(&self, game: &Game) -> Result<ExitStatus, LauncherError>;
}
