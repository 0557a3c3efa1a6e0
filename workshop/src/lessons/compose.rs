use libfunctional::compose::{compose, reverse, to_upper_case};
use super::super::assert::equal;
use super::super::demonstration::Demonstration;
use super::super::exercise::Exercise;
use super::super::test_case::TestResult;
use super::super::test_group::TestGroup;
use super::super::workbook::Workbook;

pub fn group() -> TestGroup {
    TestGroup::new("Compose")
        .case(Demonstration::new("returns the capitalized to upper case string", reversed_upper_case))
        .case(Exercise::new("returns the \"angry\" string", angry))
        .case(Exercise::new("returns the number of words", number_of_words))
        .case(Exercise::new("returns the \"angry\" reversed string", angry_reversed))
}

fn reversed_upper_case() -> TestResult {
    let reversed_upper_case = compose(reverse, to_upper_case);

    equal(reversed_upper_case("hello".to_string()).as_str(), "OLLEH")
}

fn angry(workbook: &dyn Workbook) -> TestResult {
    let angry = workbook.angry()?;

    equal(angry("hello".to_string()).as_str(), "HELLO!!!")
}

fn number_of_words(workbook: &dyn Workbook) -> TestResult {
    let number_of_words = workbook.number_of_words()?;

    equal(number_of_words("hello my friend".to_string()), 3)
}

fn angry_reversed(workbook: &dyn Workbook) -> TestResult {
    let angry_reversed = workbook.angry_reversed()?;

    equal(angry_reversed("hello".to_string()).as_str(), "!!!OLLEH")
}
