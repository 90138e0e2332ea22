macro_rules! debug_path {
    ($description: expr, $path: ident) => {
        tracing::debug!(
            "{SCOPE} - {} exists at {:?}: {}",
            $description,
            $path,
            $path.exists()
        );
    };
}
pub(crate) use debug_path;

macro_rules! debug_fallback {
    ($description: expr) => {
        tracing::debug!("{SCOPE} - Attempting to fall back to {}", $description);
    };
}
pub(crate) use debug_fallback;

macro_rules! warn_no_games {
    ($path: expr) => {
        tracing::warn!("{SCOPE} - No games found in {:?}", $path);
    };
}
pub(crate) use warn_no_games;
