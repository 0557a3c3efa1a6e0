use libfunctional::record::students;
use super::super::assert::equal;
use super::super::exercise::Exercise;
use super::super::test_case::TestResult;
use super::super::test_group::TestGroup;
use super::super::workbook::Workbook;

pub fn group() -> TestGroup {
    TestGroup::new("Map + Reduce")
        .case(Exercise::new("returns the total sum of the grades", total_of_grades))
}

fn total_of_grades(workbook: &dyn Workbook) -> TestResult {
    let students = students();

    equal(workbook.total_sum_of_the_grades(&students)?, 19)
}
