// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The type factory call surface.
//!
//! Creation is two explicit steps, [`define_type`] and
//! [`TypeRegistry::register`]; [`TypeFactory::create`] composes them for
//! callers that want the named form.

use crate::descriptor::{Extensions, RecordType};
use crate::field::FieldName;
use crate::registry::TypeRegistry;
use crate::Result;
use std::sync::Arc;

/// Synthesize an anonymous record type. No global binding happens.
pub fn define_type<I, F>(fields: I, extensions: Option<Extensions>) -> Arc<RecordType>
where
    I: IntoIterator<Item = F>,
    F: Into<FieldName>,
{
    let mut builder = RecordType::builder().fields(fields);
    if let Some(extensions) = extensions {
        builder = builder.extend(extensions);
    }
    builder.build()
}

/// Factory bound to a registry.
#[derive(Debug, Clone, Copy)]
pub struct TypeFactory<'r> {
    registry: &'r TypeRegistry,
}

impl<'r> TypeFactory<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    /// Synthesize a record type, binding it under `name` when given.
    ///
    /// Only the name can fail; field identifiers are taken as-is.
    pub fn create<I, F>(
        &self,
        name: Option<&str>,
        fields: I,
        extensions: Option<Extensions>,
    ) -> Result<Arc<RecordType>>
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldName>,
    {
        let descriptor = define_type(fields, extensions);
        if let Some(name) = name {
            self.registry.register(name, &descriptor)?;
        }
        Ok(descriptor)
    }
}

impl TypeFactory<'static> {
    /// Factory over [`TypeRegistry::global`].
    pub fn global() -> Self {
        Self::new(TypeRegistry::global())
    }
}

/// [`TypeFactory::create`] against the process-wide registry.
pub fn create<I, F>(
    name: Option<&str>,
    fields: I,
    extensions: Option<Extensions>,
) -> Result<Arc<RecordType>>
where
    I: IntoIterator<Item = F>,
    F: Into<FieldName>,
{
    TypeFactory::global().create(name, fields, extensions)
}
