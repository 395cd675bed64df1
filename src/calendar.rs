use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::search::DateRange;

/// A calendar month shown by the date picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn next(&self) -> Self {
        Self {
            first: self
                .first
                .checked_add_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    pub fn prev(&self) -> Self {
        Self {
            first: self
                .first
                .checked_sub_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// Days of the month padded with `None` to whole Sunday-first weeks.
    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        let lead = self.first.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; lead];
        cells.extend(
            self.first
                .iter_days()
                .take_while(|day| day.month() == self.first.month())
                .map(Some),
        );
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
    }
}

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Which bound the next click on a day sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionPhase {
    #[default]
    Start,
    End,
}

/// Applies a click on `clicked` to the current range.
pub fn apply_click(
    current: DateRange,
    phase: SelectionPhase,
    clicked: NaiveDate,
) -> (DateRange, SelectionPhase) {
    match phase {
        SelectionPhase::Start => (DateRange::single_day(clicked), SelectionPhase::End),
        SelectionPhase::End if clicked < current.start => (
            DateRange::new(clicked, current.start),
            SelectionPhase::Start,
        ),
        SelectionPhase::End => (
            DateRange::new(current.start, clicked),
            SelectionPhase::Start,
        ),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub range: DateRange,
}

/// Quick picks shown beside the two-month calendar. None start before `today`.
pub fn presets(today: NaiveDate) -> Vec<Preset> {
    let after = |days: u64| today.checked_add_days(Days::new(days)).unwrap_or(today);

    let weekend_start = match today.weekday() {
        Weekday::Sat | Weekday::Sun => today,
        other => after(
            (Weekday::Fri.num_days_from_monday() as i64 - other.num_days_from_monday() as i64)
                .rem_euclid(7) as u64,
        ),
    };
    let weekend_end = after(6 - today.weekday().num_days_from_monday() as u64);

    vec![
        Preset {
            label: "Tonight",
            range: DateRange::new(today, after(1)),
        },
        Preset {
            label: "This weekend",
            range: DateRange::new(weekend_start, weekend_end),
        },
        Preset {
            label: "Next 7 days",
            range: DateRange::new(today, after(7)),
        },
        Preset {
            label: "Next 30 days",
            range: DateRange::new(today, after(30)),
        },
    ]
}
