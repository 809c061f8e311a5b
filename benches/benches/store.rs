// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use tailor_inspector::{InspectorConfig, InspectorStore, MemoryStorage};
use tailor_state::{NestedPatch, Side, StylePatch};
use tailor_timing::ManualClock;

fn new_store() -> InspectorStore<MemoryStorage, ManualClock> {
    InspectorStore::new(
        InspectorConfig::default(),
        MemoryStorage::new(),
        ManualClock::new(),
    )
}

fn bench_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    // Edit then read derived output, as an inspector panel does per keystroke.
    group.bench_function("edit_and_read", |b| {
        b.iter_batched(
            new_store,
            |mut store| {
                for i in 0..64_u32 {
                    store.update_nested_state(NestedPatch::padding(Side::Top, i.to_string()));
                    black_box(store.generated_tailwind());
                }
                store
            },
            BatchSize::SmallInput,
        );
    });

    // Edits past the history limit, then unwind.
    group.bench_function("edit_undo_cycle", |b| {
        b.iter_batched(
            new_store,
            |mut store| {
                for i in 0..40 {
                    store.update_state(StylePatch::Opacity(f64::from(i)));
                }
                while store.undo() {
                    black_box(store.generated_code());
                }
                store
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("flush", |b| {
        b.iter_batched(
            || {
                let mut store = new_store();
                store.update_state(StylePatch::TextContent("Benchmark".into()));
                store
            },
            |mut store| {
                black_box(store.flush());
                store
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_edits);
criterion_main!(benches);
