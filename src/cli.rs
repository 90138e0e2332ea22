//! Command line interface. Game names are only known once the games directory has been scanned,
//! so they are attached to the parser at run time rather than in the derive.

use std::{
    env,
    ffi::OsString,
    io::{self, Write},
    path::{Path, PathBuf},
    process::{ExitCode, ExitStatus},
};

use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand, builder::PossibleValuesParser};
use tracing::warn;

use crate::{data::GameId, error::LauncherError, launcher::Launcher};

const SCOPE: &str = "cli";

/// Printed by `copy` when it refuses to overwrite a file
pub const ALREADY_EXISTS_MESSAGE: &str = "ERROR: File already exists. Specify --force to overwrite.";

const EPILOG: &str = "Copyright 2023 Grant Jenks";

/// Sub-commands which take a game name
const GAME_SUBCOMMANDS: [&str; 3] = ["play", "show", "copy"];

#[derive(Parser, Debug)]
#[command(
    name = "freegames",
    about = "Free Python Games",
    after_help = EPILOG
)]
pub struct Cli {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// list games
    List,
    /// play free Python games
    Play(GameArgs),
    /// show game source code
    Show(GameArgs),
    /// copy game source code
    Copy(CopyArgs),
}

#[derive(Args, Debug)]
struct GameArgs {
    /// game name
    game: String,
}

#[derive(Args, Debug)]
struct CopyArgs {
    /// game name
    game: String,
    /// overwrite existing file
    #[arg(long)]
    force: bool,
}

impl Cli {
    /// Parses the process arguments, exiting with a usage message if they are invalid
    pub fn parse_with_games(games: &[GameId]) -> Self {
        Self::try_parse_from_with_games(games, env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parses `args`, only accepting names from `games` wherever a game name is expected
    pub fn try_parse_from_with_games<I, T>(games: &[GameId], args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let names = games.iter().map(GameId::to_string).collect::<Vec<_>>();

        let command = GAME_SUBCOMMANDS
            .into_iter()
            .fold(Self::command(), |command, subcommand| {
                command.mut_subcommand(subcommand, |sub| {
                    sub.mut_arg("game", |arg| {
                        arg.value_parser(PossibleValuesParser::new(names.iter().cloned()))
                    })
                })
            });

        let mut matches = command.try_get_matches_from(args)?;
        Self::from_arg_matches_mut(&mut matches)
    }

    /// Dispatches the parsed sub-command, copying into the current working directory
    pub fn run(self, launcher: &Launcher, out: &mut impl Write) -> Result<ExitCode, LauncherError> {
        self.run_with(launcher, env::current_dir, out)
    }

    /// Dispatches the parsed sub-command, copying into `path_dest_dir`
    pub fn run_in(
        self,
        launcher: &Launcher,
        path_dest_dir: &Path,
        out: &mut impl Write,
    ) -> Result<ExitCode, LauncherError> {
        self.run_with(launcher, || Ok(path_dest_dir.to_owned()), out)
    }

    /// Dispatches the parsed sub-command. `dest_dir` is only resolved by `copy`.
    fn run_with(
        self,
        launcher: &Launcher,
        dest_dir: impl FnOnce() -> io::Result<PathBuf>,
        out: &mut impl Write,
    ) -> Result<ExitCode, LauncherError> {
        match self.action {
            Action::List => launcher.list(out)?,
            Action::Play(GameArgs { game }) => {
                let game = launcher.game(&game)?;
                let status = launcher.play(&game.id)?;
                return Ok(exit_code(status));
            }
            Action::Show(GameArgs { game }) => {
                let game = launcher.game(&game)?;
                launcher.show(&game.id, out)?;
            }
            Action::Copy(CopyArgs { game, force }) => {
                let game = launcher.game(&game)?;
                match launcher.copy_to(&game.id, &dest_dir()?, force) {
                    Ok(_) => {}
                    Err(LauncherError::DestinationExists(path)) => {
                        warn!("{SCOPE} - Not overwriting {path:?}");
                        writeln!(out, "{ALREADY_EXISTS_MESSAGE}")?;
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

/// A game which fails makes the launcher fail with the same code, where one exists
fn exit_code(status: ExitStatus) -> ExitCode {
    if status.success() {
        return ExitCode::SUCCESS;
    }

    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .filter(|code| *code != 0)
        .map_or(ExitCode::FAILURE, ExitCode::from)
}

#[cfg(test)]
mod test {
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn games() -> Vec<GameId> {
        ["pong", "snake"]
            .into_iter()
            .filter_map(|name| GameId::from_file_name(&format!("{name}.py")))
            .collect()
    }

    #[test_case(&["freegames", "list"]; "list")]
    #[test_case(&["freegames", "play", "pong"]; "play")]
    #[test_case(&["freegames", "show", "snake"]; "show")]
    #[test_case(&["freegames", "copy", "snake"]; "copy")]
    #[test_case(&["freegames", "copy", "snake", "--force"]; "copy with force")]
    fn test_parse_valid(args: &[&str]) {
        assert!(Cli::try_parse_from_with_games(&games(), args).is_ok());
    }

    #[test_case(&["freegames", "play", "unknown"], ErrorKind::InvalidValue; "unknown game")]
    #[test_case(&["freegames", "show", "utils"], ErrorKind::InvalidValue; "utility module")]
    #[test_case(&["freegames", "copy", "__init__"], ErrorKind::InvalidValue; "reserved name")]
    #[test_case(&["freegames", "run", "pong"], ErrorKind::InvalidSubcommand; "unknown command")]
    #[test_case(&["freegames", "play"], ErrorKind::MissingRequiredArgument; "missing game")]
    #[test_case(&["freegames", "list", "--force"], ErrorKind::UnknownArgument; "force on list")]
    fn test_parse_invalid(args: &[&str], kind: ErrorKind) {
        let err = Cli::try_parse_from_with_games(&games(), args).unwrap_err();
        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn test_parse_copy_force() {
        let cli = Cli::try_parse_from_with_games(&games(), ["freegames", "copy", "pong", "--force"])
            .unwrap();

        assert!(matches!(
            cli.action,
            Action::Copy(CopyArgs { ref game, force: true }) if game == "pong"
        ));
    }

    #[test]
    fn test_parse_no_games() {
        let err = Cli::try_parse_from_with_games(&[], ["freegames", "play", "pong"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        assert!(Cli::try_parse_from_with_games(&[], ["freegames", "list"]).is_ok());
    }

    #[test]
    fn test_help_has_epilog() {
        let help = Cli::command().render_help().to_string();

        assert!(help.contains("Free Python Games"));
        assert!(help.contains("Copyright 2023 Grant Jenks"));
    }

    fn launcher(dir: &Path) -> Launcher {
        std::fs::write(dir.join("snake.py"), "# snake\n").unwrap();
        Launcher::new(crate::config::Config::new(dir, "python3")).unwrap()
    }

    fn no_dest_dir() -> io::Result<PathBuf> {
        Err(io::ErrorKind::NotFound.into())
    }

    #[test_case(&["freegames", "list"], "snake\n"; "list")]
    #[test_case(&["freegames", "show", "snake"], "# snake\n"; "show")]
    fn test_run_without_dest_dir(args: &[&str], expected: &str) {
        let dir = tempfile::tempdir().unwrap();
        let launcher = launcher(dir.path());
        let cli = Cli::try_parse_from_with_games(launcher.games(), args).unwrap();
        let mut out = Vec::<u8>::new();

        let code = cli.run_with(&launcher, no_dest_dir, &mut out).unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_copy_without_dest_dir() {
        let dir = tempfile::tempdir().unwrap();
        let launcher = launcher(dir.path());
        let cli =
            Cli::try_parse_from_with_games(launcher.games(), ["freegames", "copy", "snake"]).unwrap();

        let result = cli.run_with(&launcher, no_dest_dir, &mut Vec::<u8>::new());

        assert!(matches!(result, Err(LauncherError::Io(_))));
    }

    #[test]
    fn test_command_debug_assert() {
        Cli::command().debug_assert();
    }

    #[cfg(unix)]
    #[test_case(0, ExitCode::SUCCESS; "success")]
    #[test_case(1, ExitCode::FAILURE; "failure")]
    #[test_case(3, ExitCode::from(3); "game specific code")]
    fn test_exit_code(raw: i32, expected: ExitCode) {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait statuses keep the exit code in the second byte
        let status = ExitStatus::from_raw(raw << 8);
        assert_eq!(exit_code(status), expected);
    }
}
