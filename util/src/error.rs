use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
};

#[derive(Debug)]
pub enum EngineError {
  Internal(String),
  Parse(String),
}

impl Display for EngineError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      EngineError::Internal(msg) => write!(f, "Internal error: {msg}"),
      EngineError::Parse(msg) => write!(f, "Parse error: {msg}"),
    }
  }
}

impl Error for EngineError {}

pub type EngineResult<T = ()> = Result<T, Box<dyn Error>>;
