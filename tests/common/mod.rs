//! Metadata fixtures shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Once};

use declscope::prelude::*;

/// Route `tracing` output of the crate to the test harness. Set `RUST_LOG` to see it.
pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn int32() -> TypeRc {
    Arc::new(TypeReference::primitive(PrimitiveKind::Int32))
}

pub fn string() -> TypeRc {
    Arc::new(TypeReference::primitive(PrimitiveKind::String))
}

/// `Int32 Add(Int32 a, Int32 b)`
pub fn add_method() -> MethodDefinition {
    MethodDefinition::new("Add", int32())
        .with_parameter("a", int32())
        .with_parameter("b", int32())
}

/// `static void Reset()`
pub fn reset_method() -> MethodDefinition {
    MethodDefinition::new("Reset", TypeReference::void()).with_static()
}

/// `Boolean TryParse(String text, out Int32 value)`
pub fn try_parse_method() -> MethodDefinition {
    MethodDefinition::new("TryParse", TypeReference::primitive(PrimitiveKind::Boolean))
        .with_static()
        .with_parameter("text", string())
        .with_parameter("value", TypeReference::primitive(PrimitiveKind::Int32).by_ref())
}

/// `Dictionary<String, List<Int32>> Group(Int32[] values)`
pub fn group_method() -> MethodDefinition {
    let list: TypeRc = Arc::new(TypeReference::generic_instance(
        "System.Collections.Generic",
        "List`1",
        vec![int32()],
    ));
    let dictionary = TypeReference::generic_instance(
        "System.Collections.Generic",
        "Dictionary`2",
        vec![string(), list],
    );
    MethodDefinition::new("Group", dictionary)
        .with_parameter("values", TypeReference::array(int32(), 1))
}

/// `T Max<T>(T a, T b) where T : IComparable<T>`, the constraint refers back to `T`
pub fn self_constrained_max() -> (TypeRegistry, MethodDefinition) {
    let registry = TypeRegistry::new();
    let t = registry.insert(TypeReference::generic_parameter("T", GenericOwner::Method, 0));
    registry.constrain(
        &t,
        TypeReference::generic_instance("System", "IComparable`1", vec![t.clone()]),
    );

    let method = MethodDefinition::new("Max", t.clone())
        .with_generic_params(vec![t.clone()])
        .with_parameter("a", t.clone())
        .with_parameter("b", t);
    (registry, method)
}
