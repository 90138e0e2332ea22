use std::{ffi::OsStr, process::Command};

/// Returns a std::process::Command from a given program and its arguments
pub fn get_launch_command<I, S>(program: impl AsRef<OsStr>, args: I) -> Command
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command.args(args);

    command
}
