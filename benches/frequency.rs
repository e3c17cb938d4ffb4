// benches/frequency.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use attendance::{frequency, suggest};

fn roster(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Student{i:03}, Given{i:03}")).collect()
}

/// One record per class day; every third student skips each day.
fn records(roster: &[String], days: usize) -> Vec<Vec<String>> {
    (0..days)
        .map(|d| {
            roster
                .iter()
                .enumerate()
                .filter(|(i, _)| (i + d) % 3 != 0)
                .map(|(_, n)| n.clone())
                .collect()
        })
        .collect()
}

fn bench_tally(c: &mut Criterion) {
    let roster = roster(120);
    let records = records(&roster, 45);

    c.bench_function("tally_45_days", |b| {
        b.iter(|| {
            let counts = frequency::tally(black_box(&records).iter().map(Vec::as_slice));
            let rows = frequency::rows_in_roster_order(black_box(&roster), &counts);
            black_box(rows.len())
        })
    });
}

fn bench_suggest(c: &mut Criterion) {
    let roster = roster(120);

    c.bench_function("suggest_typo", |b| {
        b.iter(|| black_box(suggest::suggest(black_box("Studnet042"), &roster, 12).len()))
    });
}

criterion_group!(benches, bench_tally, bench_suggest);
criterion_main!(benches);
