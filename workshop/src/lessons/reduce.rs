use libfunctional::record::students;
use libfunctional::reduce::sum;
use super::super::assert::equal;
use super::super::demonstration::Demonstration;
use super::super::exercise::Exercise;
use super::super::test_case::TestResult;
use super::super::test_group::TestGroup;
use super::super::workbook::Workbook;

pub fn group() -> TestGroup {
    TestGroup::new("Reduce")
        .case(Demonstration::new("returns the total sum", total_sum))
        .case(Exercise::new("returns the combined names", combined_names))
}

fn total_sum() -> TestResult {
    let numbers: [i64; 4] = [1, 2, 3, 4];
    let total = numbers.iter().fold(0, |acc, current| acc + current);

    equal(sum(&numbers), total)?;
    equal(total, 10)
}

fn combined_names(workbook: &dyn Workbook) -> TestResult {
    let students = students();

    equal(workbook.combined_names(&students)?.as_str(), "AnnaJohnMaria")
}
