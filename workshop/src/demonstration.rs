use super::test_case::{TestCase, TestResult};
use super::workbook::Workbook;

/// A worked example: the body carries its own implementation.
pub struct Demonstration {
    name: &'static str,
    body: fn() -> TestResult,
}

impl Demonstration {
    pub fn new(name: &'static str, body: fn() -> TestResult) -> Box<dyn TestCase> {
        Box::new(Demonstration {
            name: name,
            body: body,
        })
    }
}

impl TestCase for Demonstration {
    fn name(&self) -> &str {
        self.name
    }

    fn execute(&self, _workbook: &dyn Workbook) -> TestResult {
        (self.body)()
    }
}

#[cfg(test)]
use super::workbook::Learner;

#[test]
fn test_demonstration_ignores_workbook() {
    fn passing() -> TestResult {
        Ok(())
    }
    let demonstration = Demonstration::new("passes", passing);
    assert_eq!(demonstration.name(), "passes");
    assert!(demonstration.execute(&Learner).is_ok());
}
