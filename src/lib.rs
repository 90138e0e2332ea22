//! A command-line launcher for a collection of simple educational games.
//!
//! # Description
//!
//! Each game is an independent Python script living in a single games directory. The launcher
//! finds them, then lists them, runs one, prints its source or copies its source into the current
//! directory so it can be modified.
//!
//! Files are treated as games when they end in `.py`, do not start with `__` and are not the
//! shared `utils.py` module.
//!
//! # Usage
//!
//! ```text
//! freegames list
//! freegames play snake
//! freegames show snake
//! freegames copy snake [--force]
//! ```
//!
//! The same operations are available as a library:
//!
//! ```rust,no_run
//! use freegames::{config::Config, launcher::Launcher};
//!
//! let launcher = Launcher::new(Config::from_env())?;
//! for game in launcher.games() {
//!     println!("{game}");
//! }
//! # Ok::<(), freegames::error::LauncherError>(())
//! ```
//!
//! # Configuration
//!
//! - `FREEGAMES_DIR` - directory to look for games in. Defaults to a `games` directory next to
//!   the executable, then `freegames/games` inside the user's data directory
//! - `FREEGAMES_PYTHON` - interpreter used to run games. Defaults to `python3` (`python` on
//!   Windows)
//! - `RUST_LOG` - log filter, logs are written to stderr

pub mod cli;
pub mod config;
pub mod data;
mod discovery;
pub mod error;
pub mod launcher;
mod macros;
pub mod runner;
mod utils;

pub use discovery::discover_games;
