use itertools::Itertools;
use super::record::Student;

pub fn sum(numbers: &[i64]) -> i64 {
    numbers.iter().fold(0, |acc, current| acc + current)
}

pub fn combined_names(students: &[Student]) -> String {
    students.iter().map(|student| student.name.as_str()).join("")
}

pub fn total_grades(students: &[Student]) -> u32 {
    students.iter()
        .map(|student| student.grade)
        .fold(0, |acc, grade| acc + grade)
}

#[cfg(test)]
use super::record::students;

#[test]
fn test_sum() {
    assert_eq!(sum(&[1, 2, 3, 4]), 10);
    assert_eq!(sum(&[]), 0);
}

#[test]
fn test_combined_names() {
    assert_eq!(combined_names(&students()), "AnnaJohnMaria");
    assert_eq!(combined_names(&[]), "");
}

#[test]
fn test_total_grades() {
    assert_eq!(total_grades(&students()), 19);
}
