// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field schema: ordered identifiers plus a name -> position table.

use crate::field::{FieldName, Key};
use std::collections::HashMap;
use std::sync::Arc;

/// Ordered, fixed set of field identifiers for one record type.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Fields in declaration order.
    fields: Vec<FieldName>,
    /// Field text -> position. A repeated name maps to its last position.
    lookup: HashMap<Arc<str>, usize>,
}

impl Schema {
    /// Create a schema from field identifiers, in order.
    pub fn new<I, F>(fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldName>,
    {
        let fields: Vec<FieldName> = fields.into_iter().map(Into::into).collect();
        let mut lookup = HashMap::with_capacity(fields.len());
        for (pos, field) in fields.iter().enumerate() {
            if let Some(prev) = lookup.insert(field.name(), pos) {
                log::warn!(
                    "[Schema::new] duplicate field '{}' at {} shadows position {}",
                    field,
                    pos,
                    prev
                );
            }
        }
        Self { fields, lookup }
    }

    /// Number of fields (the record arity).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field identifiers in declaration order.
    pub fn fields(&self) -> &[FieldName] {
        &self.fields
    }

    /// Position of the field named `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).copied()
    }

    /// Resolve any [`Key`] to a position.
    pub fn position(&self, key: &Key) -> Option<usize> {
        match key {
            Key::Index(i) => Key::resolve_index(*i, self.fields.len()),
            Key::String(name) => self.position_of(name),
            Key::Symbol(sym) => self.position_of(&sym.as_str()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}
