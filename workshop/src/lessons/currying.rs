use libfunctional::currying::greet;
use libfunctional::record::StudentProfile;
use super::super::assert::equal;
use super::super::demonstration::Demonstration;
use super::super::exercise::Exercise;
use super::super::test_case::TestResult;
use super::super::test_group::TestGroup;
use super::super::workbook::Workbook;

pub fn group() -> TestGroup {
    TestGroup::new("Currying")
        .case(Demonstration::new("returns the greeting", greeting))
        .case(Exercise::new("returns the sum", curried_sum))
        .case(Exercise::new("returns the volume", curried_volume))
        .case(Exercise::new("returns the object", curried_student))
}

fn greeting() -> TestResult {
    let greet_hello = greet("Hello");

    equal(greet_hello("Matheus").as_str(), "Hello Matheus")
}

fn curried_sum(workbook: &dyn Workbook) -> TestResult {
    let sum = workbook.sum()?;

    equal(sum(2)(3), 5)
}

fn curried_volume(workbook: &dyn Workbook) -> TestResult {
    let volume = workbook.volume()?;

    equal(volume(2)(3)(10), 60)
}

fn curried_student(workbook: &dyn Workbook) -> TestResult {
    let student = workbook.student()?;

    equal(
        student("Matheus".to_string())("Lima".to_string())(26),
        StudentProfile::new("Matheus", "Lima", 26),
    )
}
