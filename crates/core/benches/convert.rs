use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use feedtext_core::{ConversionMode, CustomRule, ScriptConverter, classify_code, rules_fingerprint};

const SNIPPETS: &[(&str, &str)] = &[
    ("json", r#"{"name": "demo", "items": [1, 2, 3], "nested": {"a": true}}"#),
    ("rust", "use std::collections::HashMap;\nfn main() { let mut m: HashMap<String, u32> = HashMap::new(); }"),
    ("bash", "export PATH=/usr/local/bin:$PATH\ncd /tmp\ngrep -r foo ."),
    ("yaml", "name: demo\nversion: 1\nfeatures:\n  - fast\n  - small"),
    ("prose", "An ordinary paragraph of English prose with no code in it at all."),
];

fn chinese_paragraph() -> String {
    "这里有一段简体中文，用于测试脚本转换的性能表现。头发、干净、面条、皇后。".repeat(8)
}

fn article_html() -> String {
    format!(
        "<article><h1>汉语测试</h1>{}<pre>let mut x = 1; // 汉语</pre></article>",
        format!("<p>{}</p>", chinese_paragraph()).repeat(10)
    )
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for (name, snippet) in SNIPPETS {
        group.bench_with_input(BenchmarkId::from_parameter(name), snippet, |b, code| {
            b.iter(|| classify_code(black_box(code)))
        });
    }

    group.finish();
}

fn bench_convert_text(c: &mut Criterion) {
    let converter = ScriptConverter::new();
    let text = chinese_paragraph();
    // First call pays the dictionary parse; bench the steady state.
    converter.convert_text(&text, ConversionMode::S2t, &[]);

    c.bench_function("convert_text_s2t", |b| {
        b.iter(|| converter.convert_text(black_box(&text), ConversionMode::S2t, &[]))
    });
}

fn bench_convert_html(c: &mut Criterion) {
    let converter = ScriptConverter::new();
    let html = article_html();
    converter.convert_html(&html, ConversionMode::S2tw, &[]);

    c.bench_function("convert_html_s2tw", |b| {
        b.iter(|| converter.convert_html(black_box(&html), ConversionMode::S2tw, &[]))
    });
}

fn bench_fingerprint(c: &mut Criterion) {
    let rules: Vec<CustomRule> = (0..32)
        .map(|i| CustomRule { from: format!("from-{}", i), to: format!("to-{}", i) })
        .collect();

    c.bench_function("rules_fingerprint", |b| b.iter(|| rules_fingerprint(black_box(&rules))));
}

criterion_group!(
    benches,
    bench_classify,
    bench_convert_text,
    bench_convert_html,
    bench_fingerprint
);
criterion_main!(benches);
