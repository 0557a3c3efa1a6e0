use libfunctional::filter::select;
use libfunctional::higher_order::{add, filter_grade, mult};
use libfunctional::record::{students, Student};
use super::super::assert::{deep_equal, equal};
use super::super::demonstration::Demonstration;
use super::super::exercise::Exercise;
use super::super::test_case::TestResult;
use super::super::test_group::TestGroup;
use super::super::workbook::Workbook;

pub fn group() -> TestGroup {
    TestGroup::new("Higher Order Functions")
        .case(Demonstration::new("returns the filtered students", filtered_students))
        .case(Exercise::new("returns the calculation", calculation))
}

fn filtered_students() -> TestResult {
    let students = students();

    let filtered_students = select(&students, filter_grade);

    deep_equal(&filtered_students, &[Student::new("Maria", 9)])
}

fn calculation(workbook: &dyn Workbook) -> TestResult {
    equal(workbook.calculate(&add, 10, 2)?, 12)?;
    equal(workbook.calculate(&mult, 10, 2)?, 20)
}
