use super::record::Student;

pub fn calculate<F>(operation: F, x: i64, y: i64) -> i64
    where F: Fn(i64, i64) -> i64
{
    operation(x, y)
}

pub fn add(x: i64, y: i64) -> i64 {
    x + y
}

pub fn mult(x: i64, y: i64) -> i64 {
    x * y
}

pub fn grade_above(threshold: u32) -> impl Fn(&Student) -> bool {
    move |student: &Student| student.grade > threshold
}

pub fn filter_grade(student: &Student) -> bool {
    grade_above(6)(student)
}

#[cfg(test)]
use super::filter::select;
#[cfg(test)]
use super::record::students;

#[test]
fn test_calculate() {
    assert_eq!(calculate(add, 10, 2), 12);
    assert_eq!(calculate(mult, 10, 2), 20);
    assert_eq!(calculate(|x, y| x - y, 10, 2), 8);
}

#[test]
fn test_filter_grade() {
    assert_eq!(select(&students(), filter_grade), vec![Student::new("Maria", 9)]);
    assert_eq!(select(&students(), grade_above(3)).len(), 3);
}
