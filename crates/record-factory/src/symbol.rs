// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Interned symbols.
//!
//! A [`Symbol`] is the symbolic addressing mode for record fields (`:x` as
//! opposed to `"x"`). Two symbols with the same text are the same symbol,
//! so comparison and hashing are a single integer operation.

use indexmap::IndexSet;
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Process-wide symbol table. Symbols are never freed.
fn symtab() -> &'static RwLock<IndexSet<Arc<str>>> {
    static SYMTAB: OnceLock<RwLock<IndexSet<Arc<str>>>> = OnceLock::new();
    SYMTAB.get_or_init(|| RwLock::new(IndexSet::new()))
}

/// Interned symbolic name.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(usize);

impl Symbol {
    /// Intern `name`, returning the existing symbol if already present.
    pub fn intern(name: &str) -> Self {
        if let Some(id) = symtab().read().get_index_of(name) {
            return Self(id);
        }

        // Another thread may have interned it between the two locks;
        // insert_full returns the existing index in that case.
        let (id, _) = symtab().write().insert_full(Arc::from(name));
        Self(id)
    }

    /// Text of the symbol.
    pub fn as_str(self) -> Arc<str> {
        let symtab = symtab().read();
        symtab
            .get_index(self.0)
            .cloned()
            .unwrap_or_else(|| Arc::from(""))
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::intern(name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.as_str())
    }
}

impl PartialEq<&'_ str> for Symbol {
    fn eq(&self, rhs: &&str) -> bool {
        self.as_str().as_ref() == *rhs
    }
}
