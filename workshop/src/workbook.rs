use libfunctional::currying::Unary;
use libfunctional::record::{Named, Student, StudentProfile};
use super::failure::Failure;

pub type Answer<T> = Result<T, Failure>;

fn blank<T>(binding: &'static str) -> Answer<T> {
    Err(Failure::Undefined(binding))
}

/// Every binding the exercises ask for. Each one starts out undefined;
/// override a method to fill in its blank.
pub trait Workbook {
    fn increment(&self, _counter: i64) -> Answer<i64> {
        blank("increment")
    }

    fn square(&self, _x: i64) -> Answer<i64> {
        blank("square")
    }

    fn grades(&self, _students: &[Student]) -> Answer<Vec<u32>> {
        blank("grades")
    }

    fn by_names(&self, _records: &[&dyn Named]) -> Answer<Vec<String>> {
        blank("byNames")
    }

    fn filter_approved_students(&self, _students: &[Student]) -> Answer<Vec<Student>> {
        blank("filterApprovedStudents")
    }

    fn filter_approved_students_by_name(&self, _students: &[Student]) -> Answer<Vec<String>> {
        blank("filterApprovedStudentsByName")
    }

    fn combined_names(&self, _students: &[Student]) -> Answer<String> {
        blank("combinedNames")
    }

    fn total_sum_of_the_grades(&self, _students: &[Student]) -> Answer<u32> {
        blank("totalSumOfTheGrades")
    }

    fn calculate(&self, _operation: &dyn Fn(i64, i64) -> i64, _x: i64, _y: i64) -> Answer<i64> {
        blank("calculate")
    }

    fn sum(&self) -> Answer<Unary<i64, Unary<i64, i64>>> {
        blank("sum")
    }

    fn volume(&self) -> Answer<Unary<i64, Unary<i64, Unary<i64, i64>>>> {
        blank("volume")
    }

    fn student(&self) -> Answer<Unary<String, Unary<String, Unary<u32, StudentProfile>>>> {
        blank("student")
    }

    fn angry(&self) -> Answer<Unary<String, String>> {
        blank("angry")
    }

    fn number_of_words(&self) -> Answer<Unary<String, usize>> {
        blank("numberOfWords")
    }

    fn angry_reversed(&self) -> Answer<Unary<String, String>> {
        blank("angryReversed")
    }
}

/// The learner's answers.
pub struct Learner;

impl Workbook for Learner {
    // fn grades(&self, students: &[Student]) -> Answer<Vec<u32>> {
    //     Ok(students.iter().map(...).collect())
    // }
}

#[test]
fn test_learner_starts_blank() {
    let learner = Learner;
    assert!(learner.increment(0).unwrap_err().is_undefined());
    assert!(learner.sum().is_err());
    match learner.angry_reversed() {
        Err(Failure::Undefined(binding)) => assert_eq!(binding, "angryReversed"),
        _ => panic!("angryReversed should start undefined"),
    }
}
