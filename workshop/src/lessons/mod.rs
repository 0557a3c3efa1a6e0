use super::test_group::TestGroup;

mod compose;
mod currying;
mod filter;
mod higher_order;
mod map;
mod map_filter;
mod map_reduce;
mod pure_functions;
mod reduce;

/// Every group of the workshop, in teaching order.
pub fn all() -> Vec<TestGroup> {
    vec![
        pure_functions::group(),
        map::group(),
        filter::group(),
        map_filter::group(),
        reduce::group(),
        map_reduce::group(),
        higher_order::group(),
        currying::group(),
        compose::group(),
    ]
}
