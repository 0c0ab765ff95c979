//! Error types

use abscissa_core::error::{BoxError, Context};
use std::fmt::{self, Display};
use std::ops::{Deref, DerefMut};
use thiserror::Error;

/// An error, wrapping the kind that produced it together with an optional
/// source error, the way abscissa-generated applications report failures.
#[derive(Debug)]
pub struct Error(Box<Context<ErrorKind>>);

impl Deref for Error {
    type Target = Context<ErrorKind>;

    fn deref(&self) -> &Context<ErrorKind> {
        &self.0
    }
}

impl DerefMut for Error {
    fn deref_mut(&mut self) -> &mut Context<ErrorKind> {
        &mut self.0
    }
}

/// Kinds of errors this application surfaces to the operator.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ErrorKind {
    /// Error in configuration file.
    #[error("configuration error")]
    Config,

    /// Input/output error.
    #[error("I/O error")]
    Io,

    /// Error talking to a NEAR RPC endpoint.
    #[error("RPC error")]
    Rpc,

    /// The light client's on-disk head/producer cache is missing or corrupt.
    #[error("cache error")]
    Cache,

    /// The verification core rejected a head update or an inclusion proof.
    #[error("verification error")]
    Verification,
}

impl ErrorKind {
    /// Create an error context from this error.
    pub fn context(self, source: impl Into<BoxError>) -> Context<ErrorKind> {
        Context::new(self, Some(source.into()))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Context::new(kind, None).into()
    }
}

impl From<Context<ErrorKind>> for Error {
    fn from(context: Context<ErrorKind>) -> Self {
        Self(Box::new(context))
    }
}

impl From<near_light_client::Error> for Error {
    fn from(err: near_light_client::Error) -> Self {
        ErrorKind::Verification.context(err.to_string()).into()
    }
}
