use std::{ffi::OsString, process::ExitStatus};

use tracing::debug;

use crate::{
    data::{Game, GameRunner},
    error::LauncherError,
    utils::{get_launch_command, some_if_file},
};

const SCOPE: &str = "runner";

/// Runs a game by handing its script to an interpreter, inheriting stdio and the working
/// directory of the launcher
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    interpreter: OsString,
}

impl ScriptRunner {
    pub fn new(interpreter: impl Into<OsString>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

impl GameRunner for ScriptRunner {
    #[tracing::instrument(level = "trace", skip(self))]
    fn run(&self, game: &Game) -> Result<ExitStatus, LauncherError> {
        let Some(path_source) = some_if_file(game.path_source.clone()) else {
            debug!("{SCOPE} - Game file for '{}' is missing", game.id);
            return Err(LauncherError::FileUnreadable {
                path: game.path_source.clone(),
                source: std::io::ErrorKind::NotFound.into(),
            });
        };

        let mut command = get_launch_command(&self.interpreter, [path_source]);
        debug!("{SCOPE} - Launching '{}': {command:?}", game.id);

        let status = command.status().map_err(|source| {
            debug!("{SCOPE} - Failed to start {:?}: {source}", self.interpreter);
            LauncherError::Launch {
                game: game.id.clone(),
                source,
            }
        })?;

        debug!("{SCOPE} - '{}' exited with {status}", game.id);
        Ok(status)
    }
}
