use libfunctional::map::square_roots;
use libfunctional::record::{animals, students, Named};
use super::super::assert::deep_equal;
use super::super::demonstration::Demonstration;
use super::super::exercise::Exercise;
use super::super::test_case::TestResult;
use super::super::test_group::TestGroup;
use super::super::workbook::Workbook;

pub fn group() -> TestGroup {
    TestGroup::new("Map")
        .case(Demonstration::new("returns the square roots of the numbers", square_roots_of_numbers))
        .case(Exercise::new("returns the array of the grades", array_of_grades))
        .case(Exercise::new("returns the array of the names", array_of_names))
}

fn square_roots_of_numbers() -> TestResult {
    let numbers: [f64; 3] = [1.0, 4.0, 9.0];
    let roots: Vec<f64> = numbers.iter().map(|number| number.sqrt()).collect();

    // or point-free, passing the function itself:
    deep_equal(&square_roots(&numbers), &roots)?;

    deep_equal(&roots, &[1.0, 2.0, 3.0])
}

fn array_of_grades(workbook: &dyn Workbook) -> TestResult {
    let students = students();

    let grades = workbook.grades(&students)?;

    deep_equal(&grades, &[6, 4, 9])
}

fn array_of_names(workbook: &dyn Workbook) -> TestResult {
    let students = students();
    let animals = animals();

    let students: Vec<&dyn Named> = students.iter().map(|s| s as &dyn Named).collect();
    let animals: Vec<&dyn Named> = animals.iter().map(|a| a as &dyn Named).collect();

    deep_equal(&workbook.by_names(&students)?, &["Anna", "John", "Maria"].map(String::from))?;
    deep_equal(&workbook.by_names(&animals)?, &["Panda", "Elephant", "Dog"].map(String::from))
}
