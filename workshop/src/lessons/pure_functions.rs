use libfunctional::pure::{days_in_month, days_this_month, Counter};
use super::super::assert::equal;
use super::super::demonstration::Demonstration;
use super::super::exercise::Exercise;
use super::super::test_case::TestResult;
use super::super::test_group::TestGroup;
use super::super::workbook::Workbook;

pub fn group() -> TestGroup {
    TestGroup::new("Pure Functions")
        .case(Demonstration::new("returns the days in the month", days_in_the_month))
        .case(Demonstration::new("the impure increment depends on hidden state", impure_increment))
        .case(Exercise::new("returns the increment", the_increment))
        .case(Exercise::new("returns the square", the_square))
}

fn days_in_the_month() -> TestResult {
    let (year, month, days) = days_this_month()?;
    equal(days, days_in_month(year, month)?)?;
    equal(days_in_month(2016, 3)?, days_in_month(2016, 3)?)?;
    equal(days_in_month(2016, 3)?, 31)
}

fn impure_increment() -> TestResult {
    let mut counter = Counter::new();
    equal(counter.increment(), 1)?;
    equal(counter.increment(), 2)
}

fn the_increment(workbook: &dyn Workbook) -> TestResult {
    let counter = 0;
    equal(workbook.increment(counter)?, counter + 1)
}

fn the_square(workbook: &dyn Workbook) -> TestResult {
    let x = 10;
    equal(workbook.square(x)?, x * 2)
}
