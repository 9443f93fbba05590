// benches/generate.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use thyro_dash::analysis::{correlation_matrix, filter_indices, Correlation, PatientFilter};
use thyro_dash::config::options::{GeneratorOptions, RowMode};
use thyro_dash::csv_io::patients_to_string;
use thyro_dash::generate::generate;
use thyro_dash::specs::hockey_teams::parse_doc;

fn load_fixture() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/hockey_forms.html"))
        .expect("read tests/fixtures/hockey_forms.html")
}

fn bench_generate(c: &mut Criterion) {
    let opts = GeneratorOptions::default();

    c.bench_function("generate_500", |b| {
        b.iter(|| generate(black_box(&opts)).unwrap().len())
    });

    let records = generate(&opts).unwrap();
    c.bench_function("export_csv_500", |b| {
        b.iter(|| patients_to_string(black_box(&records), true, b',').unwrap().len())
    });

    let filter = PatientFilter::spanning(&records);
    let ix = filter_indices(&records, &filter);
    c.bench_function("spearman_500", |b| {
        b.iter(|| correlation_matrix(black_box(&records), black_box(&ix), Correlation::Spearman))
    });
}

fn bench_scrape_parse(c: &mut Criterion) {
    let doc = load_fixture();
    c.bench_function("hockey_parse_fixture", |b| {
        b.iter(|| parse_doc(black_box(&doc), RowMode::PerRow).unwrap().row_count())
    });
}

criterion_group!(benches, bench_generate, bench_scrape_parse);
criterion_main!(benches);
