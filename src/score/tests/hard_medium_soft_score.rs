use crate::score::{FeasibilityScore, HardMediumSoftScore, ParseableScore, Score, ScoreLevel};

#[test]
fn comparison_priority_order() {
    // Hard dominates medium and soft.
    let broken_hard = HardMediumSoftScore::of(-1, 0, 0);
    let poor_soft = HardMediumSoftScore::of(0, -1000, -1000);
    assert!(poor_soft > broken_hard);

    // Medium dominates soft when hard is equal.
    let s1 = HardMediumSoftScore::of(0, -10, -100);
    let s2 = HardMediumSoftScore::of(0, -5, -200);
    assert!(s2 > s1);

    // Soft decides when hard and medium are equal.
    let s3 = HardMediumSoftScore::of(0, -5, -100);
    assert!(s3 > s2);
}

#[test]
fn feasibility() {
    assert!(HardMediumSoftScore::of(0, -10, -100).is_feasible());
    assert!(!HardMediumSoftScore::of(-1, 10, 100).is_feasible());
}

#[test]
fn arithmetic() {
    let a = HardMediumSoftScore::of(-1, -2, -3);
    let b = HardMediumSoftScore::of(-10, -20, -30);
    assert_eq!(a + b, HardMediumSoftScore::of(-11, -22, -33));
    assert_eq!(b - a, HardMediumSoftScore::of(-9, -18, -27));
    assert_eq!(-a, HardMediumSoftScore::of(1, 2, 3));
}

#[test]
fn level_numbers_and_labels() {
    let score = HardMediumSoftScore::of(-1, -2, -3);
    assert_eq!(score.levels_size(), 3);
    assert_eq!(score.to_level_numbers(), vec![-1, -2, -3]);
    assert_eq!(score.level_label(0), ScoreLevel::Hard);
    assert_eq!(score.level_label(1), ScoreLevel::Medium);
    assert_eq!(score.level_label(2), ScoreLevel::Soft);
}

#[test]
fn parse_and_display() {
    let score = HardMediumSoftScore::parse("0hard/-5medium/-100soft").unwrap();
    assert_eq!(score, HardMediumSoftScore::of(0, -5, -100));
    assert_eq!(format!("{}", score), "0hard/-5medium/-100soft");
    assert!(HardMediumSoftScore::parse("0hard/-100soft").is_err());
}
