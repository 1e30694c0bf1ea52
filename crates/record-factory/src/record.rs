// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record instances.
//!
//! A [`Record`] holds exactly one [`Value`] per schema field, in schema
//! order. Reads never fail: unknown names and out-of-range positions come
//! back as `None` (or `nil` through [`Record::call`] and indexing).

use crate::descriptor::RecordType;
use crate::field::{FieldName, Key};
use crate::value::{FromValue, Value};
use crate::{RecordError, Result};
use indexmap::IndexMap;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

static NIL: Value = Value::Nil;

/// Instance of a synthesized record type.
#[derive(Debug, Clone)]
pub struct Record {
    record_type: Arc<RecordType>,
    values: Vec<Value>,
}

impl Record {
    /// Create an instance; `values` must match the schema arity.
    pub fn new(record_type: &Arc<RecordType>, values: Vec<Value>) -> Result<Self> {
        if values.len() != record_type.len() {
            return Err(RecordError::Arity {
                expected: record_type.len(),
                given: values.len(),
            });
        }
        Ok(Self {
            record_type: Arc::clone(record_type),
            values,
        })
    }

    /// Type descriptor of this instance.
    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.record_type
    }

    pub(crate) fn lookup(&self, key: &Key) -> Option<&Value> {
        self.record_type
            .schema()
            .position(key)
            .and_then(|pos| self.values.get(pos))
    }

    /// Read a field by index, string name or symbol.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.lookup(&key.into())
    }

    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        let pos = self.record_type.schema().position(&key.into())?;
        self.values.get_mut(pos)
    }

    /// Read and convert a field; a missing field is an error here.
    pub fn fetch<T: FromValue>(&self, key: impl Into<Key>) -> Result<T> {
        let key = key.into();
        match self.lookup(&key) {
            Some(value) => T::from_value(value),
            None => Err(self.missing(&key)),
        }
    }

    /// Overwrite a field, returning the previous value.
    ///
    /// Writes outside the schema are rejected and leave the record as is.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<Value> {
        let key = key.into();
        match self.record_type.schema().position(&key) {
            Some(pos) => Ok(std::mem::replace(&mut self.values[pos], value.into())),
            None => Err(self.missing(&key)),
        }
    }

    fn missing(&self, key: &Key) -> RecordError {
        match key {
            Key::Index(index) => RecordError::IndexOutOfRange {
                index: *index,
                len: self.len(),
            },
            Key::String(name) => RecordError::UnknownField(name.clone()),
            Key::Symbol(sym) => RecordError::UnknownField(sym.as_str().to_string()),
        }
    }

    /// Visit each value in schema order.
    pub fn each<F: FnMut(&Value)>(&self, f: F) {
        self.values.iter().for_each(f);
    }

    /// Visit each (field, value) pair in schema order.
    pub fn each_pair<F: FnMut(&FieldName, &Value)>(&self, mut f: F) {
        for (field, value) in self.pairs() {
            f(field, value);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&FieldName, &Value)> {
        self.members().iter().zip(self.values.iter())
    }

    /// Follow `path` through nested records, arrays and maps.
    ///
    /// Stops with `None` at the first absent step. An empty path is `None`.
    pub fn dig(&self, path: &[Key]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.lookup(first)?, |current, key| current.index(key))
    }

    /// Schema arity, not the number of values touched since construction.
    pub fn len(&self) -> usize {
        self.record_type.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn members(&self) -> &[FieldName] {
        self.record_type.members()
    }

    pub fn select<P: FnMut(&Value) -> bool>(&self, mut pred: P) -> Vec<&Value> {
        self.values.iter().filter(|v| pred(v)).collect()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn to_a(&self) -> Vec<Value> {
        self.values.clone()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Values at the given positions, in schema order.
    ///
    /// Each position is taken at most once; positions outside the schema
    /// are skipped. Negative positions count from the end.
    pub fn values_at(&self, indices: &[i64]) -> Vec<&Value> {
        let wanted: Vec<usize> = indices
            .iter()
            .filter_map(|&i| Key::resolve_index(i, self.values.len()))
            .collect();
        self.values
            .iter()
            .enumerate()
            .filter(|(pos, _)| wanted.contains(pos))
            .map(|(_, value)| value)
            .collect()
    }

    /// Field -> value map, in schema order.
    pub fn to_h(&self) -> IndexMap<FieldName, Value> {
        self.pairs()
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect()
    }

    /// Same as `==`.
    pub fn eql(&self, other: &Record) -> bool {
        self == other
    }

    /// Whether [`Record::call`] would dispatch `name`.
    pub fn respond_to(&self, name: &str) -> bool {
        self.record_type.has_method(name)
            || BUILTINS.contains(&name)
            || self.record_type.schema().contains(name)
    }

    /// Dynamic dispatch: extension methods first, then built-ins, then
    /// field readers.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        if let Some(method) = self.record_type.method(name) {
            return method(self, args);
        }

        match name {
            "[]" => {
                let [key] = args else {
                    return Err(RecordError::arguments(name, args.len(), "1"));
                };
                let key = Key::try_from(key)?;
                Ok(self.lookup(&key).cloned().unwrap_or_default())
            }
            "size" | "length" => {
                no_args(name, args)?;
                Ok(Value::Int(self.len() as i64))
            }
            "members" => {
                no_args(name, args)?;
                Ok(Value::Array(self.members().iter().map(Value::from).collect()))
            }
            "to_a" | "values" => {
                no_args(name, args)?;
                Ok(Value::Array(self.to_a()))
            }
            "to_h" => {
                no_args(name, args)?;
                Ok(Value::Map(self.to_h()))
            }
            "values_at" => {
                let indices = args
                    .iter()
                    .map(i64::from_value)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Value::Array(
                    self.values_at(&indices).into_iter().cloned().collect(),
                ))
            }
            "dig" => {
                if args.is_empty() {
                    return Err(RecordError::arguments(name, 0, "1+"));
                }
                let path = args
                    .iter()
                    .map(Key::try_from)
                    .collect::<Result<Vec<_>>>()?;
                Ok(self.dig(&path).cloned().unwrap_or_default())
            }
            "==" | "eql?" => {
                let [other] = args else {
                    return Err(RecordError::arguments(name, args.len(), "1"));
                };
                Ok(Value::Bool(
                    matches!(other, Value::Record(other) if other == self),
                ))
            }
            field => match self.record_type.schema().position_of(field) {
                Some(pos) => {
                    no_args(name, args)?;
                    Ok(self.values[pos].clone())
                }
                None => Err(RecordError::NoMethod(name.to_string())),
            },
        }
    }
}

const BUILTINS: &[&str] = &[
    "[]",
    "size",
    "length",
    "members",
    "to_a",
    "values",
    "to_h",
    "values_at",
    "dig",
    "==",
    "eql?",
];

fn no_args(name: &str, args: &[Value]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(RecordError::arguments(name, args.len(), "0"))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.record_type, &other.record_type) && self.values == other.values
    }
}

impl<K: Into<Key>> Index<K> for Record {
    type Output = Value;

    /// Missing fields read as `nil`.
    fn index(&self, key: K) -> &Value {
        self.get(key).unwrap_or(&NIL)
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<struct ")?;
        if let Some(name) = self.record_type.name() {
            write!(f, "{} ", name)?;
        }
        for (i, (field, value)) in self.pairs().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", field, value)?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    fn point() -> Arc<RecordType> {
        RecordType::builder()
            .fields([Symbol::intern("x"), Symbol::intern("y")])
            .build()
    }

    #[test]
    fn test_addressing_modes() {
        let p = point().instantiate([1, 2]).expect("point");
        assert_eq!(p.get(0), Some(&Value::Int(1)));
        assert_eq!(p.get(-1), Some(&Value::Int(2)));
        assert_eq!(p.get("y"), Some(&Value::Int(2)));
        assert_eq!(p.get(Symbol::intern("x")), Some(&Value::Int(1)));
        assert_eq!(p.get("z"), None);
        assert_eq!(p.get(2), None);
        assert_eq!(p[0], Value::Int(1));
        assert!(p["z"].is_nil());
    }

    #[test]
    fn test_set_overwrites() {
        let mut p = point().instantiate([1, 2]).expect("point");
        assert_eq!(p.set("x", 10), Ok(Value::Int(1)));
        assert_eq!(p.set(Symbol::intern("y"), 20), Ok(Value::Int(2)));
        assert_eq!(p.set(-2, 11), Ok(Value::Int(10)));
        assert_eq!(p.to_a(), vec![Value::Int(11), Value::Int(20)]);

        if let Some(v) = p.get_mut("y") {
            *v = Value::from("twenty");
        }
        assert_eq!(p["y"], Value::from("twenty"));
    }

    #[test]
    fn test_set_outside_schema_is_rejected() {
        let mut p = point().instantiate([1, 2]).expect("point");
        assert_eq!(p.set("z", 3), Err(RecordError::UnknownField("z".into())));
        assert_eq!(
            p.set(5, 3),
            Err(RecordError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(p.len(), 2);
        assert_eq!(p.to_h().len(), 2);
    }

    #[test]
    fn test_fetch() {
        let p = point().instantiate([1, 2]).expect("point");
        assert_eq!(p.fetch::<i64>("x"), Ok(1));
        assert_eq!(p.fetch::<f64>(1), Ok(2.0));
        assert_eq!(p.fetch::<i64>("q"), Err(RecordError::UnknownField("q".into())));
        assert!(matches!(
            p.fetch::<String>("x"),
            Err(RecordError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_values_at_is_positional() {
        let ty = RecordType::builder().fields(["a", "b", "c", "d"]).build();
        let r = ty.instantiate([7, 7, 8, 7]).expect("record");
        // Duplicate values must not confuse positions.
        assert_eq!(r.values_at(&[1, 3]), vec![&Value::Int(7), &Value::Int(7)]);
        assert_eq!(r.values_at(&[2]), vec![&Value::Int(8)]);
        // Schema order, each position once, out of range skipped.
        assert_eq!(
            r.values_at(&[3, 0, 0, 9]),
            vec![&Value::Int(7), &Value::Int(7)]
        );
        assert_eq!(r.values_at(&[-2]), vec![&Value::Int(8)]);
        assert!(r.values_at(&[]).is_empty());
    }

    #[test]
    fn test_dig_nested() {
        let inner = RecordType::builder().fields(["street", "zip"]).build();
        let outer = RecordType::builder().fields(["name", "address", "tags"]).build();
        let address = inner.instantiate(["Main St", "12345"]).expect("address");
        let person = outer
            .instantiate(vec![
                Value::from("Ada"),
                Value::from(address),
                Value::from(vec!["x", "y"]),
            ])
            .expect("person");

        assert_eq!(
            person.dig(&[Key::from("address"), Key::from("zip")]),
            Some(&Value::from("12345"))
        );
        assert_eq!(
            person.dig(&[Key::from("tags"), Key::Index(1)]),
            Some(&Value::from("y"))
        );
        assert_eq!(person.dig(&[Key::from("address"), Key::from("city")]), None);
        assert_eq!(person.dig(&[Key::from("name"), Key::Index(0)]), None);
        assert_eq!(person.dig(&[Key::from("nope"), Key::from("zip")]), None);
        assert_eq!(person.dig(&[]), None);
    }

    #[test]
    fn test_traversal() {
        let p = point().instantiate([3, 4]).expect("point");
        let mut seen = Vec::new();
        p.each(|v| seen.push(v.clone()));
        assert_eq!(seen, p.to_a());

        let mut names = Vec::new();
        p.each_pair(|field, _| names.push(field.clone()));
        assert_eq!(names, p.members());

        assert_eq!(p.select(|v| v.as_int() == Some(4)), vec![&Value::Int(4)]);
        assert_eq!((&p).into_iter().count(), p.size());
    }

    #[test]
    fn test_equality_requires_same_type() {
        let a = point().instantiate([1, 2]).expect("a");
        let b = point().instantiate([1, 2]).expect("b");
        // Same fields, different synthesized types.
        assert_ne!(a, b);

        let ty = point();
        let c = ty.instantiate([1, 2]).expect("c");
        let d = ty.instantiate([1.0, 2.0]).expect("d");
        assert_eq!(c, d);
        assert!(c.eql(&d));
        assert_ne!(c, ty.instantiate([2, 1]).expect("e"));
    }

    #[test]
    fn test_call_builtins() {
        let p = point().instantiate([1, 2]).expect("point");
        assert_eq!(p.call("x", &[]), Ok(Value::Int(1)));
        assert_eq!(p.call("size", &[]), Ok(Value::Int(2)));
        assert_eq!(p.call("[]", &[Value::from("y")]), Ok(Value::Int(2)));
        assert_eq!(p.call("[]", &[Value::from("q")]), Ok(Value::Nil));
        assert_eq!(
            p.call("members", &[]),
            Ok(Value::from(vec![Symbol::intern("x"), Symbol::intern("y")]))
        );
        assert_eq!(
            p.call("values_at", &[Value::Int(1)]),
            Ok(Value::from(vec![2]))
        );
        assert_eq!(p.call("dig", &[Value::from("q")]), Ok(Value::Nil));
        assert_eq!(
            p.call("==", &[Value::from(p.clone())]),
            Ok(Value::Bool(true))
        );
        assert_eq!(p.call("eql?", &[Value::Int(1)]), Ok(Value::Bool(false)));
        assert_eq!(p.call("nope", &[]), Err(RecordError::NoMethod("nope".into())));
        assert!(matches!(
            p.call("size", &[Value::Nil]),
            Err(RecordError::Arguments { .. })
        ));
        assert!(matches!(p.call("dig", &[]), Err(RecordError::Arguments { .. })));
        assert!(p.respond_to("to_h"));
        assert!(p.respond_to("y"));
        assert!(!p.respond_to("z"));
    }

    #[test]
    fn test_duplicate_fields_read_last_position() {
        let ty = RecordType::builder().fields(["x", "y", "x"]).build();
        let r = ty.instantiate([1, 2, 3]).expect("r");
        assert_eq!(r.len(), 3);
        assert_eq!(r["x"], Value::Int(3));
        assert_eq!(r[0], Value::Int(1));
        assert_eq!(r.to_a(), vec![Value::Int(1), Value::Int(2), Value::Int(3)]);

        let mut expected = IndexMap::new();
        expected.insert(FieldName::from("x"), Value::Int(3));
        expected.insert(FieldName::from("y"), Value::Int(2));
        assert_eq!(r.to_h(), expected);
    }

    #[test]
    fn test_equality_is_exact_for_large_integers() {
        let ty = RecordType::builder().fields(["n"]).build();
        let a = ty.instantiate([Value::Int(9_007_199_254_740_993)]).expect("a");
        let b = ty.instantiate([Value::Float(9_007_199_254_740_992.0)]).expect("b");
        let c = ty.instantiate([Value::Int(9_007_199_254_740_992)]).expect("c");
        assert_ne!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_display() {
        let ty = RecordType::builder().fields(["id", "label"]).build();
        let r = ty.instantiate(vec![Value::from(1), Value::from("a")]).expect("r");
        assert_eq!(r.to_string(), "#<struct id=1, label=\"a\">");
    }
}
