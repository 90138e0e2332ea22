mod commands;
mod paths;

pub use commands::*;
pub use paths::*;
