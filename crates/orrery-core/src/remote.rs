//! Remote values that resolve over time
//!
//! A fetch result observed by the view layer is in exactly one of three
//! states; consumers match exhaustively instead of polling flags.

use std::sync::Arc;

use crate::error::Error;

/// A value being fetched from a remote source
#[derive(Debug, Clone)]
pub enum RemoteData<T> {
    /// The fetch is in flight
    Pending,
    /// The fetch failed; the error is shared so snapshots stay cheap
    Failed(Arc<Error>),
    /// The fetch completed
    Ready(T),
}

impl<T> RemoteData<T> {
    /// True while the fetch is in flight
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// True once the fetch completed successfully
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The resolved value, if any
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The fetch error, if the fetch failed
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Borrowing view of the state
    pub fn as_ref(&self) -> RemoteData<&T> {
        match self {
            Self::Pending => RemoteData::Pending,
            Self::Failed(err) => RemoteData::Failed(Arc::clone(err)),
            Self::Ready(value) => RemoteData::Ready(value),
        }
    }

    /// Map the ready value, carrying the other states through
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RemoteData<U> {
        match self {
            Self::Pending => RemoteData::Pending,
            Self::Failed(err) => RemoteData::Failed(err),
            Self::Ready(value) => RemoteData::Ready(f(value)),
        }
    }
}

impl<T> From<crate::error::Result<T>> for RemoteData<T> {
    fn from(result: crate::error::Result<T>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(Arc::new(err)),
        }
    }
}
