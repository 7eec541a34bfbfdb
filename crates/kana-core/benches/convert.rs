use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kana_core::settings::Settings;
use kana_core::Registry;

static INPUTS: &[(&str, &str)] = &[
    ("short", "きょう"),
    ("medium", "きょうはいいてんきですね"),
    ("long", "わたしはきょうはいいてんきだとおもいます。がっこうでしゅくだいをやります"),
];

static TARGETS: &[&str] = &["katakana", "nihon", "hepburn", "wapuro"];

fn bench_from_hiragana(c: &mut Criterion) {
    let registry = Registry::global();
    for &to in TARGETS {
        let mut group = c.benchmark_group(format!("convert/hiragana-{to}"));
        for &(label, kana) in INPUTS {
            group.bench_with_input(BenchmarkId::new(label, kana.len()), &kana, |b, &kana| {
                b.iter(|| registry.convert(kana, "hiragana", to));
            });
        }
        group.finish();
    }
}

fn bench_mixed(c: &mut Criterion) {
    let registry = Registry::global();
    let text = "kyou wa いいてんき desu ね、トーキョー タワー";
    c.bench_function("convert/mixed-hiragana", |b| {
        b.iter(|| registry.convert(text, "mixed", "hiragana"));
    });
}

fn bench_build(c: &mut Criterion) {
    let settings = Settings::default();
    c.bench_function("registry/build", |b| {
        b.iter(|| Registry::build(&settings));
    });
}

criterion_group!(benches, bench_from_hiragana, bench_mixed, bench_build);
criterion_main!(benches);
