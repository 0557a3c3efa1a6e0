use super::record::Student;

pub const PASSING_GRADE: u32 = 6;

/// Keeps the items matching `predicate`, in their original order.
pub fn select<T, P>(items: &[T], predicate: P) -> Vec<T>
    where T: Clone,
          P: Fn(&T) -> bool
{
    let selected: Vec<T> = items.iter().filter(|item| predicate(*item)).cloned().collect();
    trace!("selected {} of {} items", selected.len(), items.len());
    selected
}

pub fn bigger_than(numbers: &[i64], threshold: i64) -> Vec<i64> {
    select(numbers, |number| *number > threshold)
}

pub fn approved(students: &[Student]) -> Vec<Student> {
    select(students, |student| student.grade >= PASSING_GRADE)
}

pub fn approved_names(students: &[Student]) -> Vec<String> {
    students.iter()
        .filter(|student| student.grade >= PASSING_GRADE)
        .map(|student| student.name.clone())
        .collect()
}

#[cfg(test)]
use super::record::students;

#[test]
fn test_bigger_than() {
    assert_eq!(bigger_than(&[1, 4, 9], 4), vec![9]);
    assert!(bigger_than(&[1, 4], 4).is_empty());
}

#[test]
fn test_approved_keeps_order() {
    assert_eq!(approved(&students()), vec![Student::new("Anna", 6), Student::new("Maria", 9)]);

    let reversed: Vec<Student> = students().into_iter().rev().collect();
    assert_eq!(approved(&reversed), vec![Student::new("Maria", 9), Student::new("Anna", 6)]);
}

#[test]
fn test_approved_boundary() {
    let students = vec![Student::new("Ed", 5), Student::new("Flo", 6)];
    assert_eq!(approved(&students), vec![Student::new("Flo", 6)]);
}

#[test]
fn test_approved_names() {
    assert_eq!(approved_names(&students()), vec!["Anna", "Maria"]);
}
