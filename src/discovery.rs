use std::path::Path;

use itertools::Itertools;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::{data::GameId, error::LauncherError, macros::logs::warn_no_games};

const SCOPE: &str = "discovery";

/// Scans the given directory (non-recursively) for game scripts, returning their identifiers
/// sorted and without duplicates
#[tracing::instrument(level = "trace")]
pub fn discover_games(path_games_dir: &Path) -> Result<Vec<GameId>, LauncherError> {
    let mut games = Vec::new();

    for entry in WalkDir::new(path_games_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            // Only failing to read the directory itself is fatal
            Err(e) if e.depth() == 0 => {
                debug!("{SCOPE} - Error with reading games directory {path_games_dir:?}: {e}");
                let source = e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::other("filesystem loop found in games directory")
                });
                return Err(LauncherError::DirectoryUnreadable {
                    path: path_games_dir.to_owned(),
                    source,
                });
            }
            Err(e) => {
                trace!("{SCOPE} - Skipped unreadable entry: {e}");
                continue;
            }
        };

        let Some(file_name) = entry.file_name().to_str() else {
            trace!("{SCOPE} - Skipped non UTF-8 file name: {:?}", entry.file_name());
            continue;
        };

        if !entry.file_type().is_file() {
            trace!("{SCOPE} - Skipped entry which is not a file: {file_name}");
            continue;
        }

        match GameId::from_file_name(file_name) {
            Some(id) => games.push(id),
            None => trace!("{SCOPE} - Skipped file which is not a game: {file_name}"),
        }
    }

    if games.is_empty() {
        warn_no_games!(path_games_dir);
    }

    Ok(games.into_iter().sorted().dedup().collect())
}
