pub trait Named {
    fn name(&self) -> &str;
}

impl<'a, T> Named for &'a T
    where T: Named + ?Sized
{
    fn name(&self) -> &str {
        (**self).name()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Student {
    pub name: String,
    pub grade: u32,
}

impl Student {
    pub fn new(name: &str, grade: u32) -> Self {
        Self {
            name: name.to_string(),
            grade: grade,
        }
    }
}

impl Named for Student {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Animal {
    pub name: String,
}

impl Animal {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Named for Animal {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Built by the curried `student` constructor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StudentProfile {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
}

impl StudentProfile {
    pub fn new(first_name: &str, last_name: &str, age: u32) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age: age,
        }
    }
}

pub fn students() -> Vec<Student> {
    vec![
        Student::new("Anna", 6),
        Student::new("John", 4),
        Student::new("Maria", 9),
    ]
}

pub fn animals() -> Vec<Animal> {
    vec![
        Animal::new("Panda"),
        Animal::new("Elephant"),
        Animal::new("Dog"),
    ]
}

#[test]
fn test_named_through_reference() {
    let anna = Student::new("Anna", 6);
    let named: &dyn Named = &anna;
    assert_eq!((&named).name(), "Anna");
    assert_eq!(Animal::new("Dog").name(), "Dog");
}

#[test]
fn test_fixtures_are_fresh() {
    let mut first = students();
    first[0].grade = 10;
    assert_eq!(students()[0].grade, 6);
}
