use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fact_values::{
    fact, to_json_string, to_text_string, to_yaml_string, ArrayValue, MapValue, Value,
};

fn interface(i: u32) -> Value {
    let entries = vec![
        ("name".to_string(), Value::from(format!("eth{}", i))),
        ("mtu".to_string(), Value::from(1500)),
        ("up".to_string(), Value::from(i % 2 == 0)),
        ("speed".to_string(), Value::from(f64::from(i) * 2.5)),
        (
            "addresses".to_string(),
            Value::from(vec![
                Value::from(format!("10.0.{}.1", i)),
                Value::from(format!("fe80::{}", i)),
            ]),
        ),
    ];
    Value::from(entries.into_iter().collect::<MapValue>())
}

fn interfaces(size: u32) -> Value {
    Value::from((0..size).map(interface).collect::<ArrayValue>())
}

fn benchmark_render_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_array");

    for size in [10, 50, 100, 500].iter() {
        let value = interfaces(*size);

        group.bench_with_input(BenchmarkId::new("text", size), &value, |b, value| {
            b.iter(|| to_text_string(black_box(value)))
        });
        group.bench_with_input(BenchmarkId::new("json", size), &value, |b, value| {
            b.iter(|| to_json_string(black_box(value)))
        });
        group.bench_with_input(BenchmarkId::new("yaml", size), &value, |b, value| {
            b.iter(|| to_yaml_string(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_render_nested(c: &mut Criterion) {
    let value = fact!({
        "os": {
            "family": "RedHat",
            "release": {"full": "39", "major": "39"},
            "selinux": {"enabled": true, "enforced": false}
        },
        "processors": {"count": 16, "models": ["x86_64", "x86_64"]},
        "load_averages": {"1m": 0.42, "5m": 0.37, "15m": 0.33}
    });

    c.bench_function("render_nested_text", |b| {
        b.iter(|| to_text_string(black_box(&value)))
    });
    c.bench_function("render_nested_json", |b| {
        b.iter(|| to_json_string(black_box(&value)))
    });
    c.bench_function("render_nested_yaml", |b| {
        b.iter(|| to_yaml_string(black_box(&value)))
    });
}

criterion_group!(benches, benchmark_render_array, benchmark_render_nested);
criterion_main!(benches);
