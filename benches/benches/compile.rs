// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tailor_compile::{MarkupOptions, class_source, compile, compile_to_string, generate_markup};
use tailor_state::{Breakpoint, StyleState};

/// A snapshot with every emitting field set.
fn busy_state() -> StyleState {
    serde_json::from_str(
        r##"{
            "elementTag": "section",
            "textContent": "Pricing <beta>",
            "link": "/pricing?plan=pro&trial=1",
            "padding": {"top": "4", "right": "6", "bottom": "4", "left": "6"},
            "margin": {"top": "2", "bottom": "8"},
            "size": {"width": "640", "height": "320", "maxWidth": "960", "maxHeight": "480"},
            "typography": {"fontSize": "18", "fontWeight": "semibold", "letterSpacing": "tight", "lineHeight": "snug", "textAlign": "center"},
            "background": {"color": "rgb(14 165 233 / 0.5)"},
            "border": {"color": "#0f172a", "width": "2", "radius": "12"},
            "transforms": {"translateX": 4, "translateY": -2, "rotate": 3, "scale": 105, "skewX": 1, "skewY": 1},
            "transforms3d": {"rotateX": 10, "rotateY": 20, "rotateZ": 5, "perspective": 8},
            "opacity": 85,
            "blur": 2,
            "backdropBlur": 6,
            "breakpoint": "lg"
        }"##,
    )
    .unwrap_or_default()
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    let cases = [
        ("default", StyleState::default()),
        ("starter", StyleState::starter()),
        ("busy", busy_state()),
    ];
    for (name, state) in &cases {
        group.bench_with_input(BenchmarkId::new("class_list", name), state, |b, state| {
            b.iter(|| black_box(compile(black_box(state))));
        });
        group.bench_with_input(BenchmarkId::new("string", name), state, |b, state| {
            b.iter(|| black_box(compile_to_string(black_box(state))));
        });
    }

    group.finish();
}

fn bench_breakpoints(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/breakpoint");
    let base = busy_state();
    for breakpoint in Breakpoint::ALL {
        let mut state = base.clone();
        state.breakpoint = breakpoint;
        group.bench_with_input(BenchmarkId::from_parameter(breakpoint), &state, |b, state| {
            b.iter(|| black_box(compile_to_string(black_box(state))));
        });
    }
    group.finish();
}

fn bench_markup(c: &mut Criterion) {
    let state = busy_state();
    let classes = compile_to_string(&state);
    let options = [
        ("html", MarkupOptions::default()),
        ("raw", MarkupOptions::RAW),
    ];

    let mut group = c.benchmark_group("markup");
    for (name, options) in &options {
        group.bench_function(*name, |b| {
            b.iter(|| {
                black_box(generate_markup(
                    black_box(&state),
                    class_source(&state, &classes),
                    options,
                ))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compile, bench_breakpoints, bench_markup);
criterion_main!(benches);
