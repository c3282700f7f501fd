use crate::score::{InitializingScoreTrend, InitializingScoreTrendLevel};

#[test]
fn uniform_trend() {
    let trend = InitializingScoreTrend::build_uniform(InitializingScoreTrendLevel::OnlyDown, 3);
    assert_eq!(trend.levels_size(), 3);
    assert!(trend.is_only_down());
    assert!(!trend.is_only_up());
    for i in 0..3 {
        assert_eq!(trend.level(i), InitializingScoreTrendLevel::OnlyDown);
    }
}

#[test]
fn mixed_trend() {
    let trend = InitializingScoreTrend::new(vec![
        InitializingScoreTrendLevel::OnlyDown,
        InitializingScoreTrendLevel::Any,
        InitializingScoreTrendLevel::OnlyUp,
    ]);
    assert_eq!(trend.levels_size(), 3);
    assert!(!trend.is_only_down());
    assert!(!trend.is_only_up());
    assert_eq!(trend.level(1), InitializingScoreTrendLevel::Any);
}
