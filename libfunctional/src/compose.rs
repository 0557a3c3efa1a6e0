/// `compose(f, g)(x) == f(g(x))`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
    where F: Fn(B) -> C,
          G: Fn(A) -> B
{
    move |x: A| f(g(x))
}

pub fn reverse(text: String) -> String {
    text.chars().rev().collect()
}

pub fn to_upper_case(text: String) -> String {
    text.to_uppercase()
}

pub fn exclaim(text: String) -> String {
    text + "!!!"
}

pub fn words(text: String) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}

pub fn count(words: Vec<String>) -> usize {
    words.len()
}

pub fn angry() -> impl Fn(String) -> String {
    compose(exclaim, to_upper_case)
}

pub fn number_of_words() -> impl Fn(String) -> usize {
    compose(count, words)
}

pub fn angry_reversed() -> impl Fn(String) -> String {
    compose(reverse, angry())
}

#[test]
fn test_compose_applies_right_to_left() {
    let shout_then_exclaim = compose(exclaim, to_upper_case);
    let hello = "hello".to_string();
    assert_eq!(shout_then_exclaim(hello.clone()), exclaim(to_upper_case(hello)));

    let add_one_then_double = compose(|x: i64| x * 2, |x: i64| x + 1);
    assert_eq!(add_one_then_double(3), 8);
}

#[test]
fn test_reversed_upper_case() {
    assert_eq!(compose(reverse, to_upper_case)("hello".to_string()), "OLLEH");
    assert_eq!(compose(to_upper_case, reverse)("hello".to_string()), "OLLEH");
}

#[test]
fn test_string_pipelines() {
    assert_eq!(angry()("hello".to_string()), "HELLO!!!");
    assert_eq!(number_of_words()("hello my friend".to_string()), 3);
    assert_eq!(number_of_words()("  spaced   out ".to_string()), 2);
    assert_eq!(angry_reversed()("hello".to_string()), "!!!OLLEH");
}
