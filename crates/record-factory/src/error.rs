// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error taxonomy for record types and instances.
//!
//! Only [`RecordError::Arity`] can come out of plain construction. Reads
//! (`get`, `dig`, `Index`) never fail; they degrade to `None` / `nil`.
//! The remaining variants belong to the explicit surfaces layered on top:
//! writes, dynamic dispatch, value conversion and global registration.

use thiserror::Error;

/// Errors produced by the factory, registry and record instances.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Construction received the wrong number of values.
    #[error("struct size differs: expected {expected} values, given {given}")]
    Arity { expected: usize, given: usize },

    /// Write addressed a field name that is not in the schema.
    #[error("no member '{0}' in struct")]
    UnknownField(String),

    /// Write addressed a position outside the schema.
    #[error("offset {index} too large for struct (size: {len})")]
    IndexOutOfRange { index: i64, len: usize },

    /// Dynamic dispatch found neither an extension nor a built-in.
    #[error("undefined method '{0}' for struct")]
    NoMethod(String),

    /// Built-in invoked through dynamic dispatch with a bad argument count.
    #[error("wrong number of arguments for '{method}' (given {given}, expected {expected})")]
    Arguments {
        method: String,
        given: usize,
        expected: String,
    },

    /// A [`Value`](crate::Value) did not hold the requested kind.
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    /// Capitalized name is not usable as a global type name.
    #[error("wrong constant name '{0}'")]
    InvalidTypeName(String),

    /// Registry refused to rebind an existing name.
    #[error("type '{0}' is already defined")]
    AlreadyDefined(String),

    /// Raised by extension methods.
    #[error("{0}")]
    Custom(String),
}

impl RecordError {
    /// Error for an extension method to return.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    pub(crate) fn arguments(method: &str, given: usize, expected: impl Into<String>) -> Self {
        Self::Arguments {
            method: method.to_string(),
            given,
            expected: expected.into(),
        }
    }

    pub(crate) fn type_mismatch(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            got: got.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RecordError>;
