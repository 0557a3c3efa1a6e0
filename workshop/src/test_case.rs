use super::failure::Failure;
use super::workbook::Workbook;

pub type TestResult = Result<(), Failure>;

pub trait TestCase {
    fn name(&self) -> &str;
    fn execute(&self, workbook: &dyn Workbook) -> TestResult;
}
