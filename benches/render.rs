//! Benchmarks for declaration rendering.
//!
//! Measures the rendering engine on typical declarations in both built-in languages:
//! - Plain method signatures with primitive parameters
//! - Nested generic instantiations
//! - Batches of methods rendered in parallel

extern crate declscope;

use std::{hint::black_box, sync::Arc};

use criterion::{criterion_group, criterion_main, Criterion};
use declscope::prelude::*;

fn add_method() -> MethodDefinition {
    let int32: TypeRc = Arc::new(TypeReference::primitive(PrimitiveKind::Int32));
    MethodDefinition::new("Add", int32.clone())
        .with_parameter("a", int32.clone())
        .with_parameter("b", int32)
}

/// `Dictionary<String, List<List<Int32>>> Group(Int32[] values)`
fn nested_method() -> MethodDefinition {
    let int32: TypeRc = Arc::new(TypeReference::primitive(PrimitiveKind::Int32));
    let string: TypeRc = Arc::new(TypeReference::primitive(PrimitiveKind::String));
    let inner: TypeRc = Arc::new(TypeReference::generic_instance(
        "System.Collections.Generic",
        "List`1",
        vec![int32.clone()],
    ));
    let outer: TypeRc = Arc::new(TypeReference::generic_instance(
        "System.Collections.Generic",
        "List`1",
        vec![inner],
    ));
    let dictionary = TypeReference::generic_instance(
        "System.Collections.Generic",
        "Dictionary`2",
        vec![string, outer],
    );
    MethodDefinition::new("Group", dictionary)
        .with_parameter("values", TypeReference::array(int32, 1))
}

/// Benchmark a simple method in Visual Basic.
fn bench_vb_method(c: &mut Criterion) {
    let method = add_method();
    let renderer = Renderer::new(&VISUAL_BASIC);

    c.bench_function("render_vb_method", |b| {
        b.iter(|| black_box(renderer.render_method(black_box(&method)).unwrap()));
    });
}

/// Benchmark a simple method in C#.
fn bench_cs_method(c: &mut Criterion) {
    let method = add_method();
    let renderer = Renderer::new(&CSHARP);

    c.bench_function("render_cs_method", |b| {
        b.iter(|| black_box(renderer.render_method(black_box(&method)).unwrap()));
    });
}

/// Benchmark nested generic instantiations.
fn bench_nested_generics(c: &mut Criterion) {
    let method = nested_method();
    let renderer = Renderer::new(&VISUAL_BASIC);

    c.bench_function("render_nested_generics", |b| {
        b.iter(|| black_box(renderer.render_method_signature(black_box(&method)).unwrap()));
    });
}

/// Benchmark a batch of 1000 methods.
fn bench_batch(c: &mut Criterion) {
    let methods: Vec<MethodDefinition> = (0..1000)
        .map(|index| {
            let mut method = nested_method();
            method.name = format!("Group{index}");
            method
        })
        .collect();
    let nodes: Vec<MetadataNode<'_>> = methods.iter().map(MetadataNode::from).collect();
    let renderer = Renderer::new(&CSHARP);

    c.bench_function("render_batch_1000", |b| {
        b.iter(|| black_box(renderer.render_batch(black_box(&nodes))));
    });
}

criterion_group!(
    benches,
    bench_vb_method,
    bench_cs_method,
    bench_nested_generics,
    bench_batch
);
criterion_main!(benches);
