use std::sync::{Arc, Mutex};

use crate::domain::listener::{ListenerLifecycle, VariableListener, VariableListenerSupport};
use crate::error::{CoreError, Result};

#[derive(Clone)]
struct TestSolution {
    rows: Vec<Option<usize>>,
}

/// Records every callback into a shared log, tagged with a listener name.
struct RecordingListener {
    name: &'static str,
    source: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl RecordingListener {
    fn new(name: &'static str, source: &'static str, log: Arc<Mutex<Vec<String>>>) -> Box<Self> {
        Box::new(RecordingListener { name, source, log })
    }

    fn record(&self, event: &str) {
        self.log.lock().unwrap().push(format!("{}.{}", self.name, event));
    }
}

impl VariableListener<TestSolution> for RecordingListener {
    fn source_variable(&self) -> &str {
        self.source
    }

    fn reset_working_solution(&mut self, _solution: &TestSolution) -> Result<()> {
        self.record("reset");
        Ok(())
    }

    fn before_variable_changed(&mut self, _solution: &TestSolution, entity: usize) -> Result<()> {
        self.record(&format!("before({})", entity));
        Ok(())
    }

    fn after_variable_changed(&mut self, _solution: &TestSolution, entity: usize) -> Result<()> {
        self.record(&format!("after({})", entity));
        Ok(())
    }

    fn clear_working_solution(&mut self) -> Result<()> {
        self.record("clear");
        Ok(())
    }
}

fn solution() -> TestSolution {
    TestSolution {
        rows: vec![Some(0), Some(1)],
    }
}

#[test]
fn dispatches_in_registration_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut support = VariableListenerSupport::new();
    support.register(RecordingListener::new("first", "row", log.clone()));
    support.register(RecordingListener::new("second", "row", log.clone()));
    assert_eq!(support.listener_count(), 2);

    let mut solution = solution();
    support.reset_working_solution(&solution).unwrap();
    support.before_variable_changed(&solution, 1, "row").unwrap();
    solution.rows[1] = Some(7);
    support.after_variable_changed(&solution, 1, "row").unwrap();
    support.clear_working_solution().unwrap();

    let log = log.lock().unwrap();
    assert_eq!(
        *log,
        vec![
            "first.reset",
            "second.reset",
            "first.before(1)",
            "second.before(1)",
            "first.after(1)",
            "second.after(1)",
            "first.clear",
            "second.clear",
        ]
    );
}

#[test]
fn only_listeners_of_the_changed_variable_are_notified() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut support = VariableListenerSupport::new();
    support.register(RecordingListener::new("row_listener", "row", log.clone()));
    support.register(RecordingListener::new("col_listener", "col", log.clone()));

    let solution = solution();
    support.reset_working_solution(&solution).unwrap();
    log.lock().unwrap().clear();

    support.before_variable_changed(&solution, 0, "col").unwrap();
    support.after_variable_changed(&solution, 0, "col").unwrap();

    let log = log.lock().unwrap();
    assert_eq!(*log, vec!["col_listener.before(0)", "col_listener.after(0)"]);
}

#[test]
fn lifecycle_transitions() {
    let mut support: VariableListenerSupport<TestSolution> = VariableListenerSupport::new();
    let solution = solution();
    assert_eq!(support.state(), ListenerLifecycle::Uninitialized);

    support.reset_working_solution(&solution).unwrap();
    assert_eq!(support.state(), ListenerLifecycle::Active);

    support.clear_working_solution().unwrap();
    assert_eq!(support.state(), ListenerLifecycle::Cleared);

    // A cleared support can be re-activated.
    support.reset_working_solution(&solution).unwrap();
    assert_eq!(support.state(), ListenerLifecycle::Active);
}

#[test]
fn notification_before_reset_fails() {
    let mut support: VariableListenerSupport<TestSolution> = VariableListenerSupport::new();
    let solution = solution();
    let result = support.before_variable_changed(&solution, 0, "row");
    assert!(matches!(result, Err(CoreError::InvalidState(_))));
}

#[test]
fn reset_while_active_fails() {
    let mut support: VariableListenerSupport<TestSolution> = VariableListenerSupport::new();
    let solution = solution();
    support.reset_working_solution(&solution).unwrap();
    let result = support.reset_working_solution(&solution);
    assert!(matches!(result, Err(CoreError::InvalidState(_))));
}

#[test]
fn after_without_before_fails() {
    let mut support: VariableListenerSupport<TestSolution> = VariableListenerSupport::new();
    let solution = solution();
    support.reset_working_solution(&solution).unwrap();
    let result = support.after_variable_changed(&solution, 0, "row");
    assert!(matches!(result, Err(CoreError::StateSequence(_))));
}

#[test]
fn mismatched_after_fails_and_keeps_bracket_open() {
    let mut support: VariableListenerSupport<TestSolution> = VariableListenerSupport::new();
    let solution = solution();
    support.reset_working_solution(&solution).unwrap();
    support.before_variable_changed(&solution, 0, "row").unwrap();

    let result = support.after_variable_changed(&solution, 1, "row");
    assert!(matches!(result, Err(CoreError::StateSequence(_))));

    // The original bracket can still be closed.
    support.after_variable_changed(&solution, 0, "row").unwrap();
}

#[test]
fn interleaved_brackets_fail() {
    let mut support: VariableListenerSupport<TestSolution> = VariableListenerSupport::new();
    let solution = solution();
    support.reset_working_solution(&solution).unwrap();
    support.before_variable_changed(&solution, 0, "row").unwrap();

    let result = support.before_variable_changed(&solution, 1, "row");
    assert!(matches!(result, Err(CoreError::StateSequence(_))));
}

#[test]
fn clear_with_open_bracket_fails() {
    let mut support: VariableListenerSupport<TestSolution> = VariableListenerSupport::new();
    let solution = solution();
    support.reset_working_solution(&solution).unwrap();
    support.before_variable_changed(&solution, 0, "row").unwrap();

    let result = support.clear_working_solution();
    assert!(matches!(result, Err(CoreError::StateSequence(_))));
}

#[test]
fn notification_after_clear_fails() {
    let mut support: VariableListenerSupport<TestSolution> = VariableListenerSupport::new();
    let solution = solution();
    support.reset_working_solution(&solution).unwrap();
    support.clear_working_solution().unwrap();
    let result = support.before_variable_changed(&solution, 0, "row");
    assert!(matches!(result, Err(CoreError::InvalidState(_))));
}
