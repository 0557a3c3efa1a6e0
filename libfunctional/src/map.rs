use super::record::{Named, Student};

pub fn square_roots(numbers: &[f64]) -> Vec<f64> {
    numbers.iter().cloned().map(f64::sqrt).collect()
}

pub fn grades(students: &[Student]) -> Vec<u32> {
    students.iter().map(|student| student.grade).collect()
}

pub fn names<T: Named>(records: &[T]) -> Vec<String> {
    records.iter().map(|record| record.name().to_string()).collect()
}

#[cfg(test)]
use super::record::{animals, students};

#[test]
fn test_square_roots() {
    assert_eq!(square_roots(&[1.0, 4.0, 9.0]), vec![1.0, 2.0, 3.0]);
    let numbers: [f64; 3] = [2.0, 16.0, 0.25];
    for (root, number) in square_roots(&numbers).iter().zip(numbers.iter()) {
        assert_eq!(*root, number.sqrt());
    }
}

#[test]
fn test_grades() {
    assert_eq!(grades(&students()), vec![6, 4, 9]);
    assert!(grades(&[]).is_empty());
}

#[test]
fn test_names() {
    assert_eq!(names(&students()), vec!["Anna", "John", "Maria"]);
    assert_eq!(names(&animals()), vec!["Panda", "Elephant", "Dog"]);

    let animals = animals();
    let borrowed: Vec<&dyn Named> = animals.iter().map(|a| a as &dyn Named).collect();
    assert_eq!(names(&borrowed), vec!["Panda", "Elephant", "Dog"]);
}
