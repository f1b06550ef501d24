// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;

/// Errors specific to the input buffer.
///
/// These are lifecycle errors of the [`ReplaySubject`](crate::ReplaySubject)
/// and are distinct from the [`RenderError`](crate::RenderError)s that sources
/// deliver through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The buffer has been closed and cannot accept new values.
    Closed,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "Input buffer is closed"),
        }
    }
}

impl std::error::Error for BufferError {}
