use tcss::TcssError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextualError {
    #[error("Terminal error: {0}")]
    IO(#[from] std::io::Error),

    /// The host can't deliver global keyboard/pointer events.
    ///
    /// Returned by [`GlobalEvents::register`](crate::activity::GlobalEvents::register)
    /// and recovered by the activity monitor; never surfaced by a tracker.
    #[error("Global event APIs unavailable: {0}")]
    EnvironmentUnavailable(String),

    #[error("Element is no longer mounted")]
    Detached,

    #[error("Style error: {0}")]
    Style(#[from] TcssError),

    #[error("Logger already installed")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, TextualError>;
