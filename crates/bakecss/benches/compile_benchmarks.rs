use bakecss::normalize::normalize_value;
use bakecss::{CompileOptions, Sheet, StyleDefinition, StyleValue, compile_namespace};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn button() -> StyleDefinition {
    StyleDefinition::new()
        .with("display", "inline-flex")
        .with("paddingInline", "12px 16px")
        .with("margin", 0)
        .with("borderRadius", 6)
        .with(
            "backgroundColor",
            StyleValue::conditional([
                ("default", "#0d6efd"),
                (":hover", "#0b5ed7"),
                (":active", "#0a58ca"),
                ("@media (prefers-color-scheme: dark)", "#3d8bfd"),
            ]),
        )
        .with("position", StyleValue::fallbacks(["sticky", "fixed"]))
        .with("transitionDuration", 150)
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_value");
    let options = CompileOptions::default();

    let cases = [
        ("keyword", "color", "red"),
        ("dimension", "margin-top", "0.50px"),
        ("function", "transform", "translate3d( 0px , -0.5em , 0 ) rotate(0rad)"),
        ("timing", "transition", "opacity 300ms ease, transform 1500ms linear"),
    ];

    for (name, property, value) in cases {
        group.bench_with_input(BenchmarkId::new("value", name), &value, |b, value| {
            b.iter(|| normalize_value(property, black_box(value), &options))
        });
    }
    group.finish();
}

fn bench_compile_namespace(c: &mut Criterion) {
    let definition = button();
    let options = CompileOptions::default();

    c.bench_function("compile_button", |b| {
        b.iter(|| compile_namespace("button", black_box(&definition), &options))
    });
}

fn bench_sheet(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet");
    let options = CompileOptions::default();

    for count in [10, 100, 1000] {
        let rules: Vec<_> = (0..count)
            .flat_map(|i| {
                let definition = button().with("width", i);
                compile_namespace("button", &definition, &options)
                    .map(|compiled| compiled.rules)
                    .unwrap_or_default()
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("flat", count), &rules, |b, rules| {
            b.iter(|| Sheet::new(rules.iter().cloned()).to_css(false))
        });
        group.bench_with_input(BenchmarkId::new("layered", count), &rules, |b, rules| {
            b.iter(|| Sheet::new(rules.iter().cloned()).to_css(true))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_compile_namespace, bench_sheet);
criterion_main!(benches);
