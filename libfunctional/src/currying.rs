use super::higher_order::add;
use super::record::StudentProfile;

/// A boxed single-argument function, the building block of curried chains.
pub type Unary<A, R> = Box<dyn Fn(A) -> R>;

/// Turns a two-argument function into a chain of single-argument ones.
pub fn curry<A, B, R, F>(f: F) -> impl Fn(A) -> Unary<B, R>
    where F: Fn(A, B) -> R + Clone + 'static,
          A: Clone + 'static,
          B: 'static,
          R: 'static
{
    move |a: A| -> Unary<B, R> {
        let f = f.clone();
        Box::new(move |b: B| f(a.clone(), b))
    }
}

pub fn greet(greeting: &str) -> impl Fn(&str) -> String {
    let greeting = greeting.to_string();
    move |name: &str| format!("{} {}", greeting, name)
}

pub fn sum(x: i64) -> Unary<i64, i64> {
    curry(add)(x)
}

pub fn volume(length: i64) -> Unary<i64, Unary<i64, i64>> {
    Box::new(move |width: i64| -> Unary<i64, i64> {
        Box::new(move |height: i64| length * width * height)
    })
}

pub fn student(first_name: String) -> Unary<String, Unary<u32, StudentProfile>> {
    Box::new(move |last_name: String| -> Unary<u32, StudentProfile> {
        let first_name = first_name.clone();
        Box::new(move |age: u32| StudentProfile {
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            age: age,
        })
    })
}

#[test]
fn test_greet() {
    let greet_hello = greet("Hello");
    assert_eq!(greet_hello("Matheus"), "Hello Matheus");
    assert_eq!(greet_hello("Anna"), "Hello Anna");
}

#[test]
fn test_curried_sum() {
    assert_eq!(sum(2)(3), 5);
    let add_two = sum(2);
    assert_eq!(add_two(3), add_two(3));
}

#[test]
fn test_curry_generic() {
    let concat = curry(|a: String, b: &'static str| a + b);
    assert_eq!(concat("foo".to_string())("bar"), "foobar");
}

#[test]
fn test_volume() {
    assert_eq!(volume(2)(3)(10), 60);
}

#[test]
fn test_student() {
    let matheus = student("Matheus".to_string())("Lima".to_string());
    assert_eq!(matheus(26), StudentProfile::new("Matheus", "Lima", 26));
    assert_eq!(matheus(27).age, 27);
}
