use chrono::NaiveDate;

pub mod measurement;
pub mod station;

pub trait ExampleData {
    fn example_data() -> Self;
}

/// A window of calendar days. Both bounds are inclusive; an absent `end`
/// leaves the window open towards the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn since(start: NaiveDate) -> Self {
        Self::new(start, None)
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(start, Some(end))
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        *date >= self.start && self.end.map_or(true, |end| *date <= end)
    }

    /// True if no day can ever fall inside the window.
    pub fn is_empty(&self) -> bool {
        self.end.is_some_and(|end| end < self.start)
    }
}
