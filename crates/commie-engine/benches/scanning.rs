use commie_engine::{GroupExt, Language, scan};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generate_c_source(functions: usize) -> String {
    let base = "/*\n * Adds two numbers.\n */\nint add(int a, int b) {\n    // sum them\n    // and return\n    const char *s = \"/* not a comment */\";\n    return a + b; /* done */\n}\n\n";
    base.repeat(functions)
}

fn generate_shell_source(lines: usize) -> String {
    let base = "# setup\necho \"# not a comment\" # trailing\nx='a # b' \\# escaped\n";
    base.repeat(lines)
}

fn bench_scanners(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanning");
    group.sample_size(20);

    let c_source = generate_c_source(500);
    group.bench_function("bracketed_c", |b| {
        b.iter(|| {
            let count = scan(black_box(&c_source), Language::C).count();
            black_box(count);
        });
    });

    let sh_source = generate_shell_source(500);
    group.bench_function("line_shell", |b| {
        b.iter(|| {
            let count = scan(black_box(&sh_source), Language::Shell).count();
            black_box(count);
        });
    });

    let html_source = "<p>text</p><!-- note -->\n".repeat(2000);
    group.bench_function("html", |b| {
        b.iter(|| {
            let count = scan(black_box(&html_source), Language::Html).count();
            black_box(count);
        });
    });

    group.finish();
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");
    group.sample_size(20);

    let source = generate_c_source(500);
    group.bench_function("group_c", |b| {
        b.iter(|| {
            let groups = scan(black_box(&source), Language::C).grouped().count();
            black_box(groups);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scanners, bench_grouping);
criterion_main!(benches);
