use std::{borrow::Cow, fmt};

#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// An `io::Error` occurred.
    Io(std::io::Error),
    /// The window couldn't be created.
    #[cfg(feature = "gui")]
    Os(winit::error::OsError),
    /// The platform event loop couldn't be created, or died.
    #[cfg(feature = "gui")]
    EventLoop(winit::error::EventLoopError),
    /// Just directly contains an error message.
    Bare(Cow<'static, str>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io error: {}", e),
            #[cfg(feature = "gui")]
            Self::Os(e) => write!(f, "could not create window: {}", e),
            #[cfg(feature = "gui")]
            Self::EventLoop(e) => write!(f, "event loop failure: {}", e),
            Self::Bare(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "gui")]
            Self::Os(e) => Some(e),
            #[cfg(feature = "gui")]
            Self::EventLoop(e) => Some(e),
            Self::Bare(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(feature = "gui")]
impl From<winit::error::OsError> for Error {
    fn from(value: winit::error::OsError) -> Self {
        Self::Os(value)
    }
}

#[cfg(feature = "gui")]
impl From<winit::error::EventLoopError> for Error {
    fn from(value: winit::error::EventLoopError) -> Self {
        Self::EventLoop(value)
    }
}

impl From<&'static str> for Error {
    fn from(value: &'static str) -> Self {
        Self::Bare(Cow::Borrowed(value))
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Bare(Cow::Owned(value))
    }
}

pub type Result<T> = core::result::Result<T, Error>;
