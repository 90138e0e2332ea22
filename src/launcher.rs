use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
    process::ExitStatus,
};

use tracing::{debug, info};

use crate::{
    config::Config,
    data::{Game, GameId, GameRunner},
    discovery::discover_games,
    error::LauncherError,
    macros::logs::warn_no_games,
    runner::ScriptRunner,
};

const SCOPE: &str = "launcher";

/// Discovers the games in a directory and performs the `list`, `play`, `show` and `copy`
/// actions against them
#[derive(Debug)]
pub struct Launcher {
    path_games_dir: PathBuf,
    games: Vec<GameId>,
    runner: Box<dyn GameRunner>,
}

impl Launcher {
    /// Scans the configured directory for games. The discovered set does not change afterwards.
    ///
    /// A missing default directory gives no games, while a missing directory which was asked
    /// for explicitly is an error.
    pub fn new(config: Config) -> Result<Self, LauncherError> {
        let games = if config.is_default_games_dir && !config.path_games_dir.exists() {
            warn_no_games!(config.path_games_dir);
            Vec::new()
        } else {
            discover_games(&config.path_games_dir)?
        };
        debug!(
            "{SCOPE} - Discovered {} games in {:?}",
            games.len(),
            config.path_games_dir
        );

        Ok(Self {
            path_games_dir: config.path_games_dir,
            games,
            runner: Box::new(ScriptRunner::new(config.interpreter)),
        })
    }

    /// Replaces the runner used by [`Launcher::play`]
    pub fn with_runner(mut self, runner: impl GameRunner + 'static) -> Self {
        self.runner = Box::new(runner);
        self
    }

    pub fn path_games_dir(&self) -> &Path {
        &self.path_games_dir
    }

    /// Discovered game identifiers, sorted and without duplicates
    pub fn games(&self) -> &[GameId] {
        &self.games
    }

    /// Looks up a discovered game by name
    pub fn game(&self, name: &str) -> Result<Game, LauncherError> {
        self.games
            .binary_search_by(|id| id.as_str().cmp(name))
            .map(|idx| Game::new(self.games[idx].clone(), &self.path_games_dir))
            .map_err(|_| LauncherError::UnknownGame(name.to_owned()))
    }

    /// Writes every game identifier on its own line
    pub fn list(&self, out: &mut impl Write) -> Result<(), LauncherError> {
        for id in &self.games {
            writeln!(out, "{id}")?;
        }
        Ok(())
    }

    /// Runs the game, returning once it has exited
    pub fn play(&self, id: &GameId) -> Result<ExitStatus, LauncherError> {
        let game = self.game(id.as_str())?;
        info!("{SCOPE} - Playing '{id}'");
        self.runner.run(&game)
    }

    /// Writes the source of the game exactly as it is on disk
    pub fn show(&self, id: &GameId, out: &mut impl Write) -> Result<(), LauncherError> {
        let source = self.read_source(id)?;
        out.write_all(&source)?;
        out.flush()?;
        Ok(())
    }

    /// Copies the source of the game into the current working directory
    pub fn copy(&self, id: &GameId, force: bool) -> Result<PathBuf, LauncherError> {
        self.copy_to(id, &env::current_dir()?, force)
    }

    /// Copies the source of the game into `path_dest_dir`, under the same file name.
    ///
    /// Unless `force` is set, an existing file is left untouched and
    /// [`LauncherError::DestinationExists`] is returned instead.
    pub fn copy_to(
        &self,
        id: &GameId,
        path_dest_dir: &Path,
        force: bool,
    ) -> Result<PathBuf, LauncherError> {
        let source = self.read_source(id)?;
        let path_dest = path_dest_dir.join(id.file_name());

        if !force && path_dest.exists() {
            debug!("{SCOPE} - Refusing to overwrite {path_dest:?}");
            return Err(LauncherError::DestinationExists(path_dest));
        }

        fs::write(&path_dest, source).inspect_err(|e| {
            debug!("{SCOPE} - Error with writing {path_dest:?}: {e}");
        })?;
        info!("{SCOPE} - Copied '{id}' to {path_dest:?}");

        Ok(path_dest)
    }

    fn read_source(&self, id: &GameId) -> Result<Vec<u8>, LauncherError> {
        let game = self.game(id.as_str())?;

        fs::read(&game.path_source).map_err(|source| {
            debug!(
                "{SCOPE} - Error with reading game file at {:?}: {source}",
                game.path_source
            );
            LauncherError::FileUnreadable {
                path: game.path_source,
                source,
            }
        })
    }
}
