// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{criterion_group, criterion_main, Criterion};
use hearken_core::{Emitter, EmitterConfig, Listener};
use std::hint::black_box;

fn bench_emit(c: &mut Criterion) {
    let args: [u64; 3] = [1, 2, 3];
    let mut group = c.benchmark_group("Emitter");

    for listeners in [1usize, 16, 128] {
        let emitter = Emitter::<u64>::with_config(EmitterConfig::default().with_max_listeners(0));
        for _ in 0..listeners {
            emitter.on(
                "tick",
                Listener::new(|args: &[u64]| {
                    black_box(args);
                    Ok(())
                }),
            );
        }

        group.bench_function(format!("emit to {listeners} listener(s)"), |b| {
            b.iter(|| emitter.emit(black_box("tick"), black_box(&args[..])))
        });
    }

    group.bench_function("once then emit", |b| {
        let emitter = Emitter::<u64>::new();
        let listener = Listener::new(|_: &[u64]| Ok(()));
        b.iter(|| {
            emitter.once("ready", listener.clone());
            emitter.emit("ready", black_box(&args[..0]))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_emit);
criterion_main!(benches);
