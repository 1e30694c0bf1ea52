// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # record-factory
//!
//! Runtime synthesis of record types: give the factory an ordered list of
//! field identifiers (and optionally a set of extension methods) and it
//! produces a new type whose instances hold one value per field.
//!
//! # Features
//!
//! - **RecordType**: synthesized type descriptor (schema + extension methods)
//! - **Record**: instance with index / string / symbol field access
//! - **TypeRegistry**: optional global binding under a capitalized name
//! - **Silent absence**: reads return `Option`, only arity mismatches fail
//!
//! # Example
//!
//! ```rust
//! use record_factory::{Extensions, Symbol, TypeFactory, TypeRegistry, Value};
//!
//! let registry = TypeRegistry::new();
//! let factory = TypeFactory::new(&registry);
//!
//! let point = factory
//!     .create(
//!         Some("point"),
//!         [Symbol::intern("x"), Symbol::intern("y")],
//!         Some(Extensions::new().method("sum", |p, _| {
//!             Ok(Value::Int(p.fetch::<i64>("x")? + p.fetch::<i64>("y")?))
//!         })),
//!     )
//!     .unwrap();
//!
//! let p = registry.get("Point").unwrap().instantiate([1, 2]).unwrap();
//! assert_eq!(p[0], Value::Int(1));
//! assert_eq!(p["y"], Value::Int(2));
//! assert_eq!(p.call("sum", &[]).unwrap(), Value::Int(3));
//! assert_eq!(p.to_string(), "#<struct Point x=1, y=2>");
//! assert!(point.instantiate([1]).is_err());
//! ```

pub mod config;
mod descriptor;
mod error;
mod factory;
mod field;
mod record;
pub mod registry;
mod schema;
mod symbol;
mod value;

pub use config::{FactoryConfig, RedefinePolicy};
pub use descriptor::{Extensions, Method, RecordType, RecordTypeBuilder};
pub use error::{RecordError, Result};
pub use factory::{create, define_type, TypeFactory};
pub use field::{FieldName, Key};
pub use record::Record;
pub use registry::TypeRegistry;
pub use schema::Schema;
pub use symbol::Symbol;
pub use value::{FromValue, Value};
