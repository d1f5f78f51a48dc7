use crate::snake;
use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, io, result};

#[derive(Debug)]
pub enum ErrorType {
    GameError(GameError),
    Io(io::Error),
    Json(serde_json::Error),
    Image(image::ImageError),
    SnakeBuilderError(snake::BuilderError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self(ErrorType::GameError(e), vec![])
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self(ErrorType::Io(e), vec![])
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self(ErrorType::Json(e), vec![])
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Self(ErrorType::Image(e), vec![])
    }
}

impl From<snake::BuilderError> for Error {
    fn from(e: snake::BuilderError) -> Self {
        Self(ErrorType::SnakeBuilderError(e), vec![])
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    /// Whether the underlying cause is a file that does not exist
    pub fn is_not_found(&self) -> bool {
        match &self.0 {
            ErrorType::Io(e) => e.kind() == io::ErrorKind::NotFound,
            ErrorType::Image(image::ImageError::IoError(e)) => e.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_is_reported_innermost_last() {
    let res: Result = Err(Error::from(io::Error::new(io::ErrorKind::NotFound, "gone")));
    let err = res
        .with_trace_step("load_sprite")
        .with_trace_step("SpriteCache::get")
        .unwrap_err();
    assert!(err.is_not_found());
    let text = format!("{}", err);
    let outer = text.find("SpriteCache::get").unwrap();
    let inner = text.find("load_sprite").unwrap();
    assert!(outer < inner);
}
