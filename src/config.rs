//! Start-up configuration: where the games live and what runs them.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use cfg_if::cfg_if;

use crate::{
    macros::logs::{debug_fallback, debug_path},
    utils::some_if_dir,
};

const SCOPE: &str = "config";

/// Overrides the directory which is scanned for games
pub const ENV_GAMES_DIR: &str = "FREEGAMES_DIR";

/// Overrides the interpreter used to run games
pub const ENV_INTERPRETER: &str = "FREEGAMES_PYTHON";

cfg_if! {
    if #[cfg(windows)] {
        pub const DEFAULT_INTERPRETER: &str = "python";
    } else {
        pub const DEFAULT_INTERPRETER: &str = "python3";
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path_games_dir: PathBuf,
    pub interpreter: OsString,
    /// Set when no directory was asked for, in which case a missing directory just means no
    /// games have been installed yet
    pub is_default_games_dir: bool,
}

impl Config {
    pub fn new(path_games_dir: impl Into<PathBuf>, interpreter: impl Into<OsString>) -> Self {
        Self {
            path_games_dir: path_games_dir.into(),
            interpreter: interpreter.into(),
            is_default_games_dir: false,
        }
    }

    fn new_default(path_games_dir: PathBuf, interpreter: OsString) -> Self {
        Self {
            is_default_games_dir: true,
            ..Self::new(path_games_dir, interpreter)
        }
    }

    /// Resolves the configuration from the environment of the current process
    pub fn from_env() -> Self {
        let path_exe_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.canonicalize().ok())
            .and_then(|exe| exe.parent().map(Path::to_owned));

        Self::resolve(
            env::var_os(ENV_GAMES_DIR),
            env::var_os(ENV_INTERPRETER),
            path_exe_dir.as_deref(),
            dirs::data_dir().as_deref(),
        )
    }

    /// Picks the first games directory candidate which applies:
    ///
    /// 1. the `FREEGAMES_DIR` override, taken as-is
    /// 2. a `games` directory next to the executable
    /// 3. `freegames/games` in the user's data directory
    fn resolve(
        games_dir_override: Option<OsString>,
        interpreter_override: Option<OsString>,
        path_exe_dir: Option<&Path>,
        path_data_dir: Option<&Path>,
    ) -> Self {
        let interpreter = interpreter_override
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| DEFAULT_INTERPRETER.into());

        if let Some(path_games_dir) = games_dir_override.filter(|d| !d.is_empty()) {
            let path_games_dir = PathBuf::from(path_games_dir);
            debug_path!("overridden games directory", path_games_dir);
            return Self::new(path_games_dir, interpreter);
        }

        let path_beside_exe = path_exe_dir.map(|dir| dir.join("games"));
        if let Some(path_games_dir) = path_beside_exe.and_then(some_if_dir) {
            debug_path!("games directory beside the executable", path_games_dir);
            return Self::new_default(path_games_dir, interpreter);
        }

        debug_fallback!("the user data directory");
        let path_games_dir = path_data_dir
            .map(|dir| dir.join("freegames").join("games"))
            .unwrap_or_else(|| PathBuf::from("games"));
        debug_path!("games directory in user data", path_games_dir);

        Self::new_default(path_games_dir, interpreter)
    }
}
