// tests/analysis.rs
//
// Filtering, headline metrics and chart aggregates over hand-built records.

use thyro_dash::analysis::{
    age_band, age_band_diagnosis_counts, correlation_matrix, filter_indices, gender_diagnosis_counts, pearson, ranks,
    risk_diagnosis_counts, summarize, tsh_histogram, Correlation, PatientFilter,
};
use thyro_dash::model::{Diagnosis, Gender, PatientRecord, RiskLevel, YesNo};

fn rec(id: usize, age: u32, tsh: f64, gender: Gender, risk: RiskLevel) -> PatientRecord {
    PatientRecord {
        patient_id: format!("THY-{id:04}"),
        age,
        tsh,
        t3: 1.0 + tsh / 10.0,
        t4: 9.0,
        t4u: 1.0,
        fti: 20.0 - tsh,
        gender,
        goitre: YesNo::No,
        tumor: YesNo::No,
        hypopituitary: YesNo::No,
        psych: YesNo::No,
        diagnosis: Diagnosis::from_tsh(tsh),
        risk_level: risk,
    }
}

fn sample() -> Vec<PatientRecord> {
    vec![
        rec(1, 25, 0.2, Gender::Female, RiskLevel::Low),
        rec(2, 34, 2.0, Gender::Male, RiskLevel::Low),
        rec(3, 45, 5.0, Gender::Female, RiskLevel::High),
        rec(4, 61, 3.0, Gender::Female, RiskLevel::Medium),
        rec(5, 78, 8.0, Gender::Male, RiskLevel::High),
    ]
}

#[test]
fn spanning_filter_keeps_everything() {
    let rs = sample();
    let f = PatientFilter::spanning(&rs);
    assert_eq!((f.age_min, f.age_max), (25, 78));
    assert_eq!(filter_indices(&rs, &f), vec![0, 1, 2, 3, 4]);
}

#[test]
fn age_bounds_are_inclusive() {
    let rs = sample();
    let f = PatientFilter { age_min: 34, age_max: 61, ..PatientFilter::spanning(&rs) };
    assert_eq!(filter_indices(&rs, &f), vec![1, 2, 3]);
}

#[test]
fn categorical_filters_intersect() {
    let rs = sample();
    let mut f = PatientFilter::spanning(&rs);
    f.genders.remove(&Gender::Male);
    f.risk_levels.remove(&RiskLevel::Low);
    assert_eq!(filter_indices(&rs, &f), vec![2, 3]);

    f.diagnoses.clear();
    assert!(filter_indices(&rs, &f).is_empty());
}

#[test]
fn summary_metrics() {
    let rs = sample();
    let s = summarize(&rs, &[0, 1, 2, 3, 4]);
    assert_eq!(s.total, 5);
    assert!((s.avg_tsh.unwrap() - 3.64).abs() < 1e-9);
    assert_eq!(s.abnormal, 3);
    assert_eq!(s.high_risk, 2);

    let empty = summarize(&rs, &[]);
    assert_eq!(empty.total, 0);
    assert_eq!(empty.avg_tsh, None);
}

#[test]
fn histogram_covers_every_value() {
    let rs = sample();
    let bins = tsh_histogram(&rs, &[0, 1, 2, 3, 4], 4);
    assert_eq!(bins.len(), 4);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 5);
    assert!((bins[0].lo - 0.2).abs() < 1e-12);
    assert!((bins[3].hi - 8.0).abs() < 1e-9);
    // the maximum lands in the closed last bin
    assert_eq!(bins[3].count, 1);
    assert!(tsh_histogram(&rs, &[], 4).is_empty());
}

#[test]
fn correlation_diagonal_and_signs() {
    let rs = sample();
    let ix = [0, 1, 2, 3, 4];
    let m = correlation_matrix(&rs, &ix, Correlation::Pearson);
    assert_eq!(m.len(), 6);
    assert!((m[0][0] - 1.0).abs() < 1e-12);
    // T3 rises with TSH, FTI falls
    assert!((m[0][1] - 1.0).abs() < 1e-9);
    assert!((m[0][4] + 1.0).abs() < 1e-9);
    // T4 is constant
    assert!(m[0][2].is_nan());

    let s = correlation_matrix(&rs, &ix, Correlation::Spearman);
    assert!((s[0][4] + 1.0).abs() < 1e-9);
}

#[test]
fn ranks_average_ties() {
    assert_eq!(ranks(&[10.0, 20.0, 10.0, 30.0]), vec![1.5, 3.0, 1.5, 4.0]);
    assert!(pearson(&[1.0], &[2.0]).is_nan());
}

#[test]
fn cross_tabulations() {
    let rs = sample();
    let ix = [0, 1, 2, 3, 4];

    let risk = risk_diagnosis_counts(&rs, &ix);
    assert_eq!(risk.get(&(RiskLevel::High, Diagnosis::Hypothyroid)), Some(&2));
    assert_eq!(risk.get(&(RiskLevel::Low, Diagnosis::Hyperthyroid)), Some(&1));
    assert_eq!(risk.get(&(RiskLevel::High, Diagnosis::Normal)), None);

    let gender = gender_diagnosis_counts(&rs, &ix);
    assert_eq!(gender.values().sum::<usize>(), 5);
    assert_eq!(gender.get(&(Gender::Male, Diagnosis::Hypothyroid)), Some(&1));

    let bands = age_band_diagnosis_counts(&rs, &ix);
    assert_eq!(bands.get(&(60, Diagnosis::Normal)), Some(&1));
    assert_eq!(bands.get(&(70, Diagnosis::Hypothyroid)), Some(&1));
}

#[test]
fn age_bands_are_decades() {
    assert_eq!(age_band(18), 10);
    assert_eq!(age_band(45), 40);
    assert_eq!(age_band(80), 80);
}
