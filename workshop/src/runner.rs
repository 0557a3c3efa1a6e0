use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use super::failure::Failure;
use super::test_case::{TestCase, TestResult};
use super::test_group::TestGroup;
use super::workbook::Workbook;

#[derive(Debug)]
pub struct Outcome {
    pub group: String,
    pub case: String,
    pub result: TestResult,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }

    pub fn is_undefined(&self) -> bool {
        match self.result {
            Err(ref failure) => failure.is_undefined(),
            Ok(()) => false,
        }
    }
}

#[derive(Debug)]
pub struct Summary {
    outcomes: Vec<Outcome>,
}

impl Summary {
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.passed()).count()
    }

    pub fn failures(&self) -> Vec<&Outcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed()).collect()
    }

    /// Failures caused by blanks the learner has not filled in yet.
    pub fn undefined(&self) -> Vec<&Outcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_undefined()).collect()
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(Outcome::passed)
    }
}

pub fn run(groups: &[TestGroup], workbook: &dyn Workbook) -> Summary {
    let mut outcomes = Vec::new();
    for group in groups {
        debug!("running group `{}` ({} cases)", group.name(), group.cases().len());
        for test_case in group.cases() {
            let result = execute(test_case.as_ref(), workbook);
            trace!("`{}` finished: {:?}", test_case.name(), result);
            outcomes.push(Outcome {
                group: group.name().to_string(),
                case: test_case.name().to_string(),
                result: result,
            });
        }
    }
    Summary {
        outcomes: outcomes,
    }
}

/// Like `run`, but panics raised by the cases are logged at debug level
/// instead of printed. The previous hook is back in place afterwards.
pub fn run_quietly(groups: &[TestGroup], workbook: &dyn Workbook) -> Summary {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|info| debug!("case panicked: {}", info)));
    let summary = run(groups, workbook);
    panic::set_hook(previous);
    summary
}

/// 2 when no group was selected, 1 when any case failed, 0 otherwise.
pub fn exit_status(groups: &[TestGroup], summary: &Summary) -> i32 {
    if groups.is_empty() {
        2
    } else if summary.is_success() {
        0
    } else {
        1
    }
}

/// Runs one case, turning a panic in its body into a failure.
pub fn execute(test_case: &dyn TestCase, workbook: &dyn Workbook) -> TestResult {
    panic::catch_unwind(AssertUnwindSafe(|| test_case.execute(workbook)))
        .unwrap_or_else(|payload| Err(Failure::Panicked(panic_message(payload))))
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};
#[cfg(test)]
use std::thread;
#[cfg(test)]
use super::collector::collect_test_groups;
#[cfg(test)]
use super::solutions::Solutions;
#[cfg(test)]
use super::workbook::{Answer, Learner};
#[cfg(test)]
use libfunctional::currying::{self, Unary};
#[cfg(test)]
use libfunctional::record::Student;

#[test]
fn test_solutions_pass_every_case() {
    let groups = collect_test_groups(None);
    let summary = run(&groups, &Solutions);
    for failure in summary.failures() {
        panic!("`{}` failed: {:?}", failure.case, failure.result);
    }
    assert!(summary.is_success());
    assert_eq!(summary.passed(), 23);
}

#[test]
fn test_blank_workbook_fails_only_exercises() {
    let groups = collect_test_groups(None);
    let summary = run(&groups, &Learner);
    assert_eq!(summary.outcomes().len(), 23);
    assert_eq!(summary.passed(), 8);
    assert_eq!(summary.failures().len(), 15);
    assert_eq!(summary.undefined().len(), 15);
}

#[test]
fn test_one_failure_does_not_affect_others() {
    struct HalfDone;
    impl Workbook for HalfDone {
        fn sum(&self) -> Answer<Unary<i64, Unary<i64, i64>>> {
            Ok(Box::new(currying::sum))
        }
    }

    let groups = collect_test_groups(Some("Currying"));
    let summary = run(&groups, &HalfDone);
    let passed: Vec<&str> = summary.outcomes().iter()
        .filter(|outcome| outcome.passed())
        .map(|outcome| outcome.case.as_str())
        .collect();
    assert_eq!(passed, vec!["returns the greeting", "returns the sum"]);
    assert_eq!(summary.undefined().len(), 2);
}

#[test]
fn test_wrong_answer_is_a_mismatch() {
    struct Wrong;
    impl Workbook for Wrong {
        fn grades(&self, students: &[Student]) -> Answer<Vec<u32>> {
            Ok(students.iter().map(|student| student.grade + 1).collect())
        }
    }

    let groups = collect_test_groups(Some("map"));
    let summary = run(&groups, &Wrong);
    let grades = summary.outcomes().iter()
        .find(|outcome| outcome.case == "returns the array of the grades")
        .unwrap();
    match grades.result {
        Err(Failure::ElementMismatch { index, .. }) => assert_eq!(index, 0),
        ref other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_panicking_answer_is_caught() {
    struct Panicky;
    impl Workbook for Panicky {
        fn increment(&self, _counter: i64) -> Answer<i64> {
            panic!("not yet")
        }
    }

    let groups = collect_test_groups(Some("pure functions"));
    let summary = run(&groups, &Panicky);
    let increment = summary.outcomes().iter()
        .find(|outcome| outcome.case == "returns the increment")
        .unwrap();
    match increment.result {
        Err(Failure::Panicked(ref message)) => assert_eq!(message, "not yet"),
        ref other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(summary.passed(), 2);
}

#[test]
fn test_exit_status() {
    let groups = collect_test_groups(None);
    assert_eq!(exit_status(&groups, &run(&groups, &Solutions)), 0);
    assert_eq!(exit_status(&groups, &run(&groups, &Learner)), 1);

    let none = collect_test_groups(Some("monads"));
    assert_eq!(exit_status(&none, &run(&none, &Learner)), 2);
}

#[test]
fn test_run_quietly_restores_hook() {
    static SEEN: AtomicUsize = AtomicUsize::new(0);
    struct Panicky;
    impl Workbook for Panicky {
        fn square(&self, _x: i64) -> Answer<i64> {
            panic!("not yet")
        }
    }

    let original = panic::take_hook();
    let this_thread = thread::current().id();
    panic::set_hook(Box::new(move |_| {
        if thread::current().id() == this_thread {
            SEEN.fetch_add(1, Ordering::SeqCst);
        }
    }));

    let groups = collect_test_groups(Some("pure functions"));
    let summary = run_quietly(&groups, &Panicky);
    assert_eq!(SEEN.load(Ordering::SeqCst), 0);
    assert_eq!(summary.failures().len(), 2);

    let _ = panic::catch_unwind(|| panic!("after the run"));
    assert_eq!(SEEN.load(Ordering::SeqCst), 1);

    panic::set_hook(original);
}
