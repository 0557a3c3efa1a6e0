use libfunctional::record::students;
use super::super::assert::deep_equal;
use super::super::exercise::Exercise;
use super::super::test_case::TestResult;
use super::super::test_group::TestGroup;
use super::super::workbook::Workbook;

pub fn group() -> TestGroup {
    TestGroup::new("Map + Filter")
        .case(Exercise::new(
            "returns the names of the students with the grade bigger than or equal to 6",
            approved_names,
        ))
}

fn approved_names(workbook: &dyn Workbook) -> TestResult {
    let students = students();

    deep_equal(
        &workbook.filter_approved_students_by_name(&students)?,
        &["Anna", "Maria"].map(String::from),
    )
}
