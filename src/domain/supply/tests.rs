use std::collections::HashMap;

use crate::domain::descriptor::VariableDescriptor;
use crate::domain::listener::ListenerLifecycle;
use crate::domain::supply::CollectionInverseVariableSupply;
use crate::error::CoreError;

/// Entities hold one planning variable: the value they are assigned to.
#[derive(Clone)]
struct TestSolution {
    values: Vec<Option<&'static str>>,
}

type TestSupply = CollectionInverseVariableSupply<TestSolution, &'static str>;

fn new_supply() -> TestSupply {
    CollectionInverseVariableSupply::new(
        VariableDescriptor::genuine("value"),
        |s: &TestSolution, i| s.values[i],
        |s: &TestSolution| s.values.len(),
    )
}

fn entities(supply: &TestSupply, value: &'static str) -> Vec<usize> {
    supply.inverse_collection(&value).unwrap().iter().collect()
}

/// Applies one move through the before/mutate/after bracket.
fn move_entity(
    supply: &mut TestSupply,
    solution: &mut TestSolution,
    entity: usize,
    to: Option<&'static str>,
) {
    supply.before_variable_changed(solution, entity).unwrap();
    solution.values[entity] = to;
    supply.after_variable_changed(solution, entity).unwrap();
}

// Entities a=0, b=1 on val1; c=2, d=3 on val3; val2 unassigned.
fn abcd_solution() -> TestSolution {
    TestSolution {
        values: vec![Some("val1"), Some("val1"), Some("val3"), Some("val3")],
    }
}

#[test]
fn normal() {
    let mut supply = new_supply();
    let mut solution = abcd_solution();

    supply.reset_working_solution(&solution).unwrap();

    assert_eq!(entities(&supply, "val1"), vec![0, 1]);
    assert_eq!(entities(&supply, "val2"), Vec::<usize>::new());
    assert_eq!(entities(&supply, "val3"), vec![2, 3]);

    // Move c from val3 to val2.
    move_entity(&mut supply, &mut solution, 2, Some("val2"));

    assert_eq!(entities(&supply, "val1"), vec![0, 1]);
    assert_eq!(entities(&supply, "val2"), vec![2]);
    assert_eq!(entities(&supply, "val3"), vec![3]);

    supply.clear_working_solution().unwrap();
}

#[test]
fn absent_value_yields_empty_collection() {
    let mut supply = new_supply();
    let solution = abcd_solution();
    supply.reset_working_solution(&solution).unwrap();

    let collection = supply.inverse_collection(&"never_seen").unwrap();
    assert!(collection.is_empty());
    assert_eq!(collection.len(), 0);
    assert_eq!(supply.inverse_count(&"never_seen").unwrap(), 0);
}

#[test]
fn unassigned_entities_are_not_tracked() {
    let mut supply = new_supply();
    let solution = TestSolution {
        values: vec![Some("v"), None, Some("v")],
    };
    supply.reset_working_solution(&solution).unwrap();
    assert_eq!(entities(&supply, "v"), vec![0, 2]);
}

#[test]
fn move_to_unassigned_removes_without_readding() {
    let mut supply = new_supply();
    let mut solution = abcd_solution();
    supply.reset_working_solution(&solution).unwrap();

    move_entity(&mut supply, &mut solution, 0, None);

    assert_eq!(entities(&supply, "val1"), vec![1]);
}

#[test]
fn move_from_unassigned_appends() {
    let mut supply = new_supply();
    let mut solution = TestSolution {
        values: vec![None, Some("v")],
    };
    supply.reset_working_solution(&solution).unwrap();

    move_entity(&mut supply, &mut solution, 0, Some("v"));

    assert_eq!(entities(&supply, "v"), vec![1, 0]);
}

#[test]
fn noop_move_keeps_position() {
    let mut supply = new_supply();
    let mut solution = abcd_solution();
    supply.reset_working_solution(&solution).unwrap();

    // "Change" a to the value it already has; its position must not move.
    move_entity(&mut supply, &mut solution, 0, Some("val1"));

    assert_eq!(entities(&supply, "val1"), vec![0, 1]);
}

#[test]
fn insertion_order_survives_removal_in_the_middle() {
    let mut supply = new_supply();
    let mut solution = TestSolution {
        values: vec![Some("v"); 5],
    };
    supply.reset_working_solution(&solution).unwrap();

    move_entity(&mut supply, &mut solution, 2, None);
    assert_eq!(entities(&supply, "v"), vec![0, 1, 3, 4]);

    // Re-adding appends at the end.
    move_entity(&mut supply, &mut solution, 2, Some("v"));
    assert_eq!(entities(&supply, "v"), vec![0, 1, 3, 4, 2]);
}

#[test]
fn heavy_churn_keeps_index_consistent() {
    // Enough entities on one value to trigger slot compaction while
    // entities keep moving away and back.
    let n = 40;
    let mut supply = new_supply();
    let mut solution = TestSolution {
        values: vec![Some("v"); n],
    };
    supply.reset_working_solution(&solution).unwrap();

    // Remove every even entity.
    for entity in (0..n).step_by(2) {
        move_entity(&mut supply, &mut solution, entity, None);
    }
    let expected: Vec<usize> = (1..n).step_by(2).collect();
    assert_eq!(entities(&supply, "v"), expected);
    assert_eq!(supply.inverse_count(&"v").unwrap(), n / 2);

    // Remove the survivors from the middle outward; order must hold.
    for entity in (1..n).step_by(4) {
        move_entity(&mut supply, &mut solution, entity, Some("w"));
    }
    let expected_v: Vec<usize> = (3..n).step_by(4).collect();
    let expected_w: Vec<usize> = (1..n).step_by(4).collect();
    assert_eq!(entities(&supply, "v"), expected_v);
    assert_eq!(entities(&supply, "w"), expected_w);
}

#[test]
fn replay_matches_fresh_rebuild() {
    let mut supply = new_supply();
    let mut solution = abcd_solution();
    supply.reset_working_solution(&solution).unwrap();

    // A sequence of moves, each through its bracket.
    move_entity(&mut supply, &mut solution, 2, Some("val2"));
    move_entity(&mut supply, &mut solution, 0, Some("val3"));
    move_entity(&mut supply, &mut solution, 1, None);
    move_entity(&mut supply, &mut solution, 1, Some("val2"));

    // A fresh supply built from the final solution state must agree on
    // membership for every value.
    let mut fresh = new_supply();
    fresh.reset_working_solution(&solution).unwrap();
    for value in ["val1", "val2", "val3"] {
        let replayed: HashMap<usize, ()> =
            entities(&supply, value).into_iter().map(|e| (e, ())).collect();
        let rebuilt: HashMap<usize, ()> =
            entities(&fresh, value).into_iter().map(|e| (e, ())).collect();
        assert_eq!(replayed, rebuilt, "membership mismatch for {}", value);
    }
}

#[test]
fn read_before_reset_fails() {
    let supply = new_supply();
    let result = supply.inverse_collection(&"v");
    assert!(matches!(result, Err(CoreError::InvalidState(_))));
}

#[test]
fn notification_before_reset_fails() {
    let mut supply = new_supply();
    let solution = abcd_solution();
    let result = supply.before_variable_changed(&solution, 0);
    assert!(matches!(result, Err(CoreError::InvalidState(_))));
}

#[test]
fn read_after_clear_fails() {
    let mut supply = new_supply();
    let solution = abcd_solution();
    supply.reset_working_solution(&solution).unwrap();
    supply.clear_working_solution().unwrap();
    assert_eq!(supply.state(), ListenerLifecycle::Cleared);

    let result = supply.inverse_count(&"val1");
    assert!(matches!(result, Err(CoreError::InvalidState(_))));
}

#[test]
fn reset_after_clear_rebuilds() {
    let mut supply = new_supply();
    let solution = abcd_solution();
    supply.reset_working_solution(&solution).unwrap();
    supply.clear_working_solution().unwrap();
    supply.reset_working_solution(&solution).unwrap();
    assert_eq!(entities(&supply, "val1"), vec![0, 1]);
}

#[test]
fn reset_while_active_fails() {
    let mut supply = new_supply();
    let solution = abcd_solution();
    supply.reset_working_solution(&solution).unwrap();
    let result = supply.reset_working_solution(&solution);
    assert!(matches!(result, Err(CoreError::InvalidState(_))));
}

#[test]
fn after_without_before_fails() {
    let mut supply = new_supply();
    let solution = abcd_solution();
    supply.reset_working_solution(&solution).unwrap();
    let result = supply.after_variable_changed(&solution, 0);
    assert!(matches!(result, Err(CoreError::StateSequence(_))));
}

#[test]
fn mismatched_after_fails_and_keeps_bracket_open() {
    let mut supply = new_supply();
    let mut solution = abcd_solution();
    supply.reset_working_solution(&solution).unwrap();

    supply.before_variable_changed(&solution, 2).unwrap();
    let result = supply.after_variable_changed(&solution, 3);
    assert!(matches!(result, Err(CoreError::StateSequence(_))));

    // The original bracket can still complete.
    solution.values[2] = Some("val2");
    supply.after_variable_changed(&solution, 2).unwrap();
    assert_eq!(entities(&supply, "val2"), vec![2]);
}

#[test]
fn interleaved_brackets_fail() {
    let mut supply = new_supply();
    let solution = abcd_solution();
    supply.reset_working_solution(&solution).unwrap();

    supply.before_variable_changed(&solution, 0).unwrap();
    let result = supply.before_variable_changed(&solution, 1);
    assert!(matches!(result, Err(CoreError::StateSequence(_))));
}

#[test]
fn clear_with_open_bracket_fails() {
    let mut supply = new_supply();
    let solution = abcd_solution();
    supply.reset_working_solution(&solution).unwrap();
    supply.before_variable_changed(&solution, 0).unwrap();

    let result = supply.clear_working_solution();
    assert!(matches!(result, Err(CoreError::StateSequence(_))));
}
