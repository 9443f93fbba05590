// tests/generator.rs
//
// Synthetic cohort: ranges, ids, derived diagnosis and seed determinism.

use thyro_dash::config::options::GeneratorOptions;
use thyro_dash::csv_io::patients_to_string;
use thyro_dash::error::GenerateError;
use thyro_dash::generate::{generate, patient_id, Categorical, NumericField, Shape};
use thyro_dash::model::{Diagnosis, Gender, YesNo};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn cohort(seed: u64, count: usize) -> Vec<thyro_dash::model::PatientRecord> {
    generate(&GeneratorOptions { seed, count }).unwrap()
}

#[test]
fn values_stay_inside_clamp_bounds() {
    for r in cohort(42, 500) {
        assert!((18..=80).contains(&r.age), "age {}", r.age);
        assert!((0.1..=50.0).contains(&r.tsh), "tsh {}", r.tsh);
        assert!((0.5..=4.0).contains(&r.t3));
        assert!((4.0..=18.0).contains(&r.t4));
        assert!((0.6..=1.5).contains(&r.t4u));
        assert!((4.0..=18.0).contains(&r.fti));
    }
}

#[test]
fn ids_are_sequential_and_padded() {
    let rs = cohort(7, 12);
    assert_eq!(rs[0].patient_id, "THY-0001");
    assert_eq!(rs[11].patient_id, "THY-0012");
    assert_eq!(patient_id(500), "THY-0500");
}

#[test]
fn diagnosis_follows_tsh() {
    for r in cohort(42, 500) {
        assert_eq!(r.diagnosis, Diagnosis::from_tsh(r.tsh));
    }
}

#[test]
fn same_seed_gives_identical_csv() {
    let a = patients_to_string(&cohort(42, 500), true, b',').unwrap();
    let b = patients_to_string(&cohort(42, 500), true, b',').unwrap();
    assert_eq!(a, b);
    assert!(a.starts_with("PatientID,Age,TSH,T3,T4,T4U,FTI,Gender,Goitre,Tumor,Hypopituitary,Psych,Diagnosis,Risk_Level"));
}

#[test]
fn different_seeds_differ() {
    assert_ne!(cohort(1, 50), cohort(2, 50));
}

#[test]
fn zero_count_is_empty() {
    assert!(cohort(42, 0).is_empty());
}

#[test]
fn class_mix_is_roughly_as_weighted() {
    let rs = cohort(42, 2000);
    let female = rs.iter().filter(|r| r.gender == Gender::Female).count() as f64 / rs.len() as f64;
    let goitre = rs.iter().filter(|r| r.goitre == YesNo::Yes).count() as f64 / rs.len() as f64;
    assert!((0.62..0.78).contains(&female), "female share {female}");
    assert!((0.14..0.26).contains(&goitre), "goitre share {goitre}");
}

const BAD_WEIGHTS: Categorical<YesNo> = Categorical {
    name: "Bad",
    classes: &[(YesNo::Yes, 0.5), (YesNo::No, 0.6)],
};

#[test]
fn weights_not_summing_to_one_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    match BAD_WEIGHTS.sample_n(&mut rng, 10) {
        Err(GenerateError::WeightSum { field, .. }) => assert_eq!(field, "Bad"),
        other => panic!("expected WeightSum, got {other:?}"),
    }
}

#[test]
fn negative_spread_is_rejected() {
    let field = NumericField {
        name: "Broken",
        shape: Shape::Normal { mean: 1.0, std_dev: -1.0 },
        lo: 0.0,
        hi: 2.0,
        integral: false,
    };
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(field.sample_n(&mut rng, 3), Err(GenerateError::Distribution { field: "Broken", .. })));
}

#[test]
fn generating_touches_no_files() {
    let dir = std::env::temp_dir().join("thyro_generate_no_files");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::env::set_current_dir(&dir).unwrap();

    cohort(7, 50);
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
}
