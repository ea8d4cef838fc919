use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use translit_core::{transliterate_direct, transliterate_inverse, Standard, TableStore};

const CYRILLIC: &[(&str, &str)] = &[
    ("short", "Москва"),
    ("medium", "Съешь же ещё этих мягких французских булок да выпей чаю"),
    (
        "long",
        "Широкая электрификация южных губерний даст мощный толчок подъёму сельского хозяйства \
         Эх чужак общий съём цен шляп юфть вдрызг",
    ),
];

fn bench_forward(c: &mut Criterion) {
    let store = TableStore::global();
    let mut group = c.benchmark_group("convert/forward");
    for &(label, line) in CYRILLIC {
        for standard in Standard::ALL {
            group.bench_with_input(
                BenchmarkId::new(format!("{label}/{standard}"), line.chars().count()),
                &line,
                |b, &line| b.iter(|| transliterate_direct(store, line, standard, "ru")),
            );
        }
    }
    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let store = TableStore::global();
    let mut group = c.benchmark_group("convert/reverse");
    for &(label, line) in CYRILLIC {
        for standard in [Standard::Gost, Standard::Icao] {
            let Ok(latin) = transliterate_direct(store, line, standard, "ru") else {
                continue;
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{label}/{standard}"), latin.len()),
                &latin,
                |b, latin| b.iter(|| transliterate_inverse(store, latin, standard, "ru")),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_forward, bench_reverse);
criterion_main!(benches);
