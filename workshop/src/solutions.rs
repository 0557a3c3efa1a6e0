use libfunctional::currying::{self, Unary};
use libfunctional::record::{Named, Student, StudentProfile};
use libfunctional::{compose, filter, higher_order, map, pure, reduce};
use super::workbook::{Answer, Workbook};

/// A workbook with every blank filled in from the reference library.
pub struct Solutions;

impl Workbook for Solutions {
    fn increment(&self, counter: i64) -> Answer<i64> {
        Ok(pure::increment(counter))
    }

    fn square(&self, x: i64) -> Answer<i64> {
        Ok(pure::double(x))
    }

    fn grades(&self, students: &[Student]) -> Answer<Vec<u32>> {
        Ok(map::grades(students))
    }

    fn by_names(&self, records: &[&dyn Named]) -> Answer<Vec<String>> {
        Ok(map::names(records))
    }

    fn filter_approved_students(&self, students: &[Student]) -> Answer<Vec<Student>> {
        Ok(filter::approved(students))
    }

    fn filter_approved_students_by_name(&self, students: &[Student]) -> Answer<Vec<String>> {
        Ok(filter::approved_names(students))
    }

    fn combined_names(&self, students: &[Student]) -> Answer<String> {
        Ok(reduce::combined_names(students))
    }

    fn total_sum_of_the_grades(&self, students: &[Student]) -> Answer<u32> {
        Ok(reduce::total_grades(students))
    }

    fn calculate(&self, operation: &dyn Fn(i64, i64) -> i64, x: i64, y: i64) -> Answer<i64> {
        Ok(higher_order::calculate(operation, x, y))
    }

    fn sum(&self) -> Answer<Unary<i64, Unary<i64, i64>>> {
        Ok(Box::new(currying::sum))
    }

    fn volume(&self) -> Answer<Unary<i64, Unary<i64, Unary<i64, i64>>>> {
        Ok(Box::new(currying::volume))
    }

    fn student(&self) -> Answer<Unary<String, Unary<String, Unary<u32, StudentProfile>>>> {
        Ok(Box::new(currying::student))
    }

    fn angry(&self) -> Answer<Unary<String, String>> {
        Ok(Box::new(compose::angry()))
    }

    fn number_of_words(&self) -> Answer<Unary<String, usize>> {
        Ok(Box::new(compose::number_of_words()))
    }

    fn angry_reversed(&self) -> Answer<Unary<String, String>> {
        Ok(Box::new(compose::angry_reversed()))
    }
}

#[test]
fn test_solutions_curried_answers() {
    let sum = Solutions.sum().unwrap();
    assert_eq!(sum(2)(3), 5);
    let volume = Solutions.volume().unwrap();
    assert_eq!(volume(2)(3)(10), 60);
}
