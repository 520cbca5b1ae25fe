#[macro_use]
extern crate criterion;

use criterion::Criterion;

use linelog::{Emitter, FixedClock, LogConfig, LogRecord, Severity, WallTime};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let timestamp = WallTime::new(14, 3, 7).unwrap();

    for (name, config) in [
        ("plain", LogConfig::plain()),
        ("colored", LogConfig::colored(false)),
        ("highlighted", LogConfig::colored(true)),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                LogRecord {
                    severity: Severity::Error,
                    function_name: "main",
                    file_name: "main.rs",
                    line_number: 42,
                    timestamp,
                    message: format_args!("Unable to create renderer: {}", "Unsupported renderer flag."),
                }
                .render(&config)
            });
        });
    }
    group.finish();
}

fn bench_emitf(c: &mut Criterion) {
    let emitter = Emitter::builder()
        .clock(FixedClock(WallTime::new(14, 3, 7).unwrap()))
        .sink(std::io::sink())
        .build();

    c.bench_function("emitf_to_sink", |b| {
        b.iter(|| {
            emitter
                .emitf(
                    Severity::Info,
                    "main",
                    "main.rs",
                    42,
                    "Window created (%dx%d) in %.2f ms",
                    &[640.into(), 480.into(), 1.25.into()],
                )
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_render, bench_emitf);
criterion_main!(benches);
