// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// The process-wide registry behind `record_factory::create`.
//
// Every test binds its own names: the registry is shared by all tests in
// this binary and they run in parallel.

use record_factory::{create, Extensions, RecordError, Symbol, TypeRegistry, Value};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn create_named_binds_globally() {
    let ty = create(
        Some("globalpoint"),
        [Symbol::intern("x"), Symbol::intern("y")],
        None,
    )
    .expect("create");

    let bound = TypeRegistry::global()
        .get("Globalpoint")
        .expect("bound under capitalized name");
    assert!(Arc::ptr_eq(&ty, &bound));

    let p = bound.instantiate([1, 2]).expect("instance");
    assert_eq!(p.to_string(), "#<struct Globalpoint x=1, y=2>");
}

#[test]
fn create_anonymous_does_not_bind() {
    let ty = create(None, ["only_anonymous_field"], None).expect("create");
    assert_eq!(ty.name(), None);
    assert!(!TypeRegistry::global().contains("Only_anonymous_field"));
}

#[test]
fn create_with_extension_through_global_name() {
    create(
        Some("money"),
        ["cents"],
        Some(Extensions::new().method("dollars", |m, _| {
            Ok(Value::Float(m.fetch::<f64>("cents")? / 100.0))
        })),
    )
    .expect("create");

    let money = TypeRegistry::global().get("Money").expect("bound");
    let m = money.instantiate([250]).expect("instance");
    assert_eq!(m.call("dollars", &[]), Ok(Value::Float(2.5)));
}

#[test]
fn invalid_global_name_is_reported() {
    let err = create(Some("bad name"), ["v"], None).unwrap_err();
    assert_eq!(err, RecordError::InvalidTypeName("Bad name".into()));
    assert!(!TypeRegistry::global().contains("Bad name"));
}

#[test]
fn concurrent_registration_keeps_one_binding() {
    let barrier = Arc::new(Barrier::new(8));
    let mut handles = Vec::new();

    for i in 0..8i64 {
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            let ty = create(Some("contended"), ["worker"], None).expect("create");
            let r = ty.instantiate([i]).expect("instance");
            assert_eq!(r["worker"], Value::Int(i));
        }));
    }

    for handle in handles {
        handle.join().expect("thread should succeed");
    }

    let bound = TypeRegistry::global().get("Contended").expect("bound");
    assert_eq!(bound.name(), Some("Contended"));
    assert_eq!(bound.len(), 1);
}
