// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record type descriptors and the builder that synthesizes them.

use crate::field::FieldName;
use crate::record::Record;
use crate::schema::Schema;
use crate::value::Value;
use crate::Result;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Extension method attached to a record type.
///
/// Receives the instance and the call arguments.
pub type Method = Arc<dyn Fn(&Record, &[Value]) -> Result<Value> + Send + Sync>;

/// Named extension methods supplied at creation time.
///
/// Applied after the built-ins, so a method may add behavior or take over
/// a built-in name (including a field reader) in [`Record::call`].
#[derive(Clone, Default)]
pub struct Extensions {
    methods: Vec<(String, Method)>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a method. A later method with the same name replaces the earlier.
    pub fn method<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Record, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.methods.push((name.into(), Arc::new(f)));
        self
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Method names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(|(name, _)| name.as_str())
    }
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// A synthesized record type.
///
/// Identity is the `Arc`: two types built from the same fields are still
/// distinct, and their instances never compare equal.
pub struct RecordType {
    /// Global name, set by the first registration.
    name: OnceLock<Arc<str>>,
    schema: Schema,
    methods: HashMap<String, Method>,
}

impl RecordType {
    /// Start building a record type.
    pub fn builder() -> RecordTypeBuilder {
        RecordTypeBuilder::new()
    }

    /// Global name, if the type was ever registered.
    pub fn name(&self) -> Option<&str> {
        self.name.get().map(AsRef::as_ref)
    }

    /// Bind the global name. The first binding sticks.
    pub(crate) fn bind_name(&self, name: &Arc<str>) {
        if self.name.set(Arc::clone(name)).is_err() {
            log::debug!(
                "[RecordType::bind_name] '{}' keeps its name, also bound as '{}'",
                self.name().unwrap_or_default(),
                name
            );
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Field identifiers in declaration order.
    pub fn members(&self) -> &[FieldName] {
        self.schema.fields()
    }

    /// Record arity.
    pub fn len(&self) -> usize {
        self.schema.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schema.is_empty()
    }

    /// Extension method by name.
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Construct an instance from positional values.
    pub fn instantiate<I, V>(self: &Arc<Self>, values: I) -> Result<Record>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Record::new(self, values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        methods.sort_unstable();
        f.debug_struct("RecordType")
            .field("name", &self.name())
            .field("members", &self.members())
            .field("methods", &methods)
            .finish()
    }
}

/// Builder for [`RecordType`].
#[derive(Debug, Default)]
pub struct RecordTypeBuilder {
    fields: Vec<FieldName>,
    extensions: Extensions,
}

impl RecordTypeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field.
    pub fn field(mut self, field: impl Into<FieldName>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Append several fields, in order.
    pub fn fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldName>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Add an extension method.
    pub fn method<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Record, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.extensions = self.extensions.method(name, f);
        self
    }

    /// Add a prepared set of extension methods.
    pub fn extend(mut self, extensions: Extensions) -> Self {
        self.extensions.methods.extend(extensions.methods);
        self
    }

    /// Build the RecordType.
    pub fn build(self) -> Arc<RecordType> {
        let schema = Schema::new(self.fields);
        let methods: HashMap<String, Method> = self.extensions.methods.into_iter().collect();
        log::debug!(
            "[RecordTypeBuilder::build] members={:?} methods={}",
            schema.fields(),
            methods.len()
        );
        Arc::new(RecordType {
            name: OnceLock::new(),
            schema,
            methods,
        })
    }
}
