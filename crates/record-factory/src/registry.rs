// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Global name bindings for record types.
//!
//! # Architecture
//!
//! ```text
//! TypeRegistry::global() (static, OnceLock)
//! +-- types: DashMap<Arc<str>, Arc<RecordType>>
//! +-- config: FactoryConfig (redefinition policy)
//! ```
//!
//! Registration capitalizes the requested name (first character upper,
//! rest lower) and validates the result before binding. The first name a
//! type is bound under becomes its display name.

use crate::config::{FactoryConfig, RedefinePolicy, NAME_SEPARATOR};
use crate::descriptor::RecordType;
use crate::{RecordError, Result};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::{Arc, OnceLock};

/// Name -> record type bindings.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: DashMap<Arc<str>, Arc<RecordType>>,
    config: FactoryConfig,
}

impl TypeRegistry {
    /// Create an empty registry with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FactoryConfig) -> Self {
        Self {
            types: DashMap::new(),
            config,
        }
    }

    /// Process-wide registry.
    pub fn global() -> &'static TypeRegistry {
        static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();
        REGISTRY.get_or_init(TypeRegistry::new)
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Bind `descriptor` under the capitalized form of `name`.
    ///
    /// Returns the name actually bound.
    pub fn register(&self, name: &str, descriptor: &Arc<RecordType>) -> Result<Arc<str>> {
        let constant = capitalize(name);
        if !is_valid_type_name(&constant) {
            return Err(RecordError::InvalidTypeName(constant));
        }
        let constant: Arc<str> = Arc::from(constant);

        match self.types.entry(Arc::clone(&constant)) {
            Entry::Occupied(mut slot) => {
                match self.config.redefine {
                    RedefinePolicy::Reject => {
                        return Err(RecordError::AlreadyDefined(constant.to_string()));
                    }
                    RedefinePolicy::Warn => {
                        log::warn!("[TypeRegistry::register] already initialized type {}", constant);
                    }
                    RedefinePolicy::Replace => {
                        log::debug!("[TypeRegistry::register] rebinding {}", constant);
                    }
                }
                slot.insert(Arc::clone(descriptor));
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::clone(descriptor));
            }
        }

        descriptor.bind_name(&constant);
        log::debug!(
            "[TypeRegistry::register] {} -> {:?}",
            constant,
            descriptor.members()
        );
        Ok(constant)
    }

    /// Look up a bound type by its exact (capitalized) name.
    pub fn get(&self, name: &str) -> Option<Arc<RecordType>> {
        self.types.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Remove a binding. The type stays alive while other handles exist.
    pub fn remove(&self, name: &str) -> Option<Arc<RecordType>> {
        self.types.remove(name).map(|(_, ty)| ty)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Bound names, sorted.
    pub fn names(&self) -> Vec<Arc<str>> {
        let mut names: Vec<Arc<str>> = self.types.iter().map(|e| Arc::clone(e.key())).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// ASCII uppercase initial, then ASCII alphanumerics or `_`.
pub fn is_valid_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == NAME_SEPARATOR)
}
