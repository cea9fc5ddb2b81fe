use std::{fmt, path::PathBuf};

/// Anything that can stop the game from starting, or keep it from running.
///
/// None of these are recoverable; they get logged and the game shuts down.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// The window, its surface, or its event loop failed.
    Platform(mastermind_iosys::Error),
    /// An image couldn't be read or decoded.
    Asset { path: PathBuf, source: image::ImageError },
    /// The board doesn't fit in the window.
    Layout(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Platform(e) => write!(f, "platform error: {}", e),
            Self::Asset { path, source } => write!(f, "unable to load image {}: {}", path.display(), source),
            Self::Layout(msg) => write!(f, "bad layout: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Platform(e) => Some(e),
            Self::Asset { source, .. } => Some(source),
            Self::Layout(_) => None,
        }
    }
}

impl From<mastermind_iosys::Error> for Error {
    fn from(value: mastermind_iosys::Error) -> Self {
        Self::Platform(value)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
