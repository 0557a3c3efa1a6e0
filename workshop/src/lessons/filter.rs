use libfunctional::filter::bigger_than;
use libfunctional::record::{students, Student};
use super::super::assert::deep_equal;
use super::super::demonstration::Demonstration;
use super::super::exercise::Exercise;
use super::super::test_case::TestResult;
use super::super::test_group::TestGroup;
use super::super::workbook::Workbook;

pub fn group() -> TestGroup {
    TestGroup::new("Filter")
        .case(Demonstration::new("returns the numbers bigger than 4", numbers_bigger_than_four))
        .case(Exercise::new(
            "returns the students with the grade bigger than or equal to 6",
            approved_students,
        ))
}

fn numbers_bigger_than_four() -> TestResult {
    let numbers: [i64; 3] = [1, 4, 9];
    let filtered_numbers: Vec<i64> = numbers.iter().cloned().filter(|number| *number > 4).collect();

    deep_equal(&bigger_than(&numbers, 4), &filtered_numbers)?;
    deep_equal(&filtered_numbers, &[9])
}

fn approved_students(workbook: &dyn Workbook) -> TestResult {
    let students = students();

    deep_equal(
        &workbook.filter_approved_students(&students)?,
        &[Student::new("Anna", 6), Student::new("Maria", 9)],
    )
}
