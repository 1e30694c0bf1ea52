// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field identifiers and access keys.

use crate::symbol::Symbol;
use crate::{RecordError, Value};
use std::fmt;
use std::sync::Arc;

/// Identifier of a schema field, as passed to the factory.
///
/// A field declared as `"x"` and one declared as `:x` answer to the same
/// name lookups; the declared form is kept so that `members` and `to_h`
/// report exactly what the caller supplied.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum FieldName {
    String(Arc<str>),
    Symbol(Symbol),
}

impl FieldName {
    /// Field name text, whatever the declared form.
    pub fn name(&self) -> Arc<str> {
        match self {
            Self::String(s) => Arc::clone(s),
            Self::Symbol(sym) => sym.as_str(),
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }
}

impl From<&str> for FieldName {
    fn from(name: &str) -> Self {
        Self::String(Arc::from(name))
    }
}

impl From<String> for FieldName {
    fn from(name: String) -> Self {
        Self::String(Arc::from(name))
    }
}

impl From<Symbol> for FieldName {
    fn from(sym: Symbol) -> Self {
        Self::Symbol(sym)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{}", s),
            Self::Symbol(sym) => write!(f, "{}", sym),
        }
    }
}

impl fmt::Debug for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{:?}", s),
            Self::Symbol(sym) => write!(f, "{:?}", sym),
        }
    }
}

/// Address of a field: position, string name or symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// 0-based position; negative values count from the end.
    Index(i64),
    String(String),
    Symbol(Symbol),
}

impl Key {
    /// Resolve a possibly negative index against `len`.
    pub(crate) fn resolve_index(index: i64, len: usize) -> Option<usize> {
        let len = len as i64;
        let pos = if index < 0 { len + index } else { index };
        (0..len).contains(&pos).then_some(pos as usize)
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::String(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::String(name)
    }
}

impl From<Symbol> for Key {
    fn from(sym: Symbol) -> Self {
        Self::Symbol(sym)
    }
}

impl From<&FieldName> for Key {
    fn from(field: &FieldName) -> Self {
        match field {
            FieldName::String(s) => Self::String(s.to_string()),
            FieldName::Symbol(sym) => Self::Symbol(*sym),
        }
    }
}

impl TryFrom<&Value> for Key {
    type Error = RecordError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => Ok(Self::Index(*i)),
            Value::Str(s) => Ok(Self::String(s.clone())),
            Value::Symbol(sym) => Ok(Self::Symbol(*sym)),
            other => Err(RecordError::type_mismatch(
                "integer, string or symbol",
                other.type_name(),
            )),
        }
    }
}
