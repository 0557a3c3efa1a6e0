use super::test_case::TestCase;

pub struct TestGroup {
    name: &'static str,
    cases: Vec<Box<dyn TestCase>>,
}

impl TestGroup {
    pub fn new(name: &'static str) -> Self {
        Self {
            name: name,
            cases: Vec::new(),
        }
    }

    pub fn case(mut self, test_case: Box<dyn TestCase>) -> Self {
        self.cases.push(test_case);
        self
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn cases(&self) -> &[Box<dyn TestCase>] {
        &self.cases
    }
}
