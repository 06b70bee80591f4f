//! Month grid of tasks keyed by due date.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use tally_core::entities::Task;

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// `None` unless `month` is 1 through 12.
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Option<Self> {
        if month >= 1 && month <= 12 {
            Some(Self { year, month })
        } else {
            None
        }
    }

    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    #[must_use]
    pub const fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// First day of the month, if representable.
    #[must_use]
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Last day of the month, if representable.
    #[must_use]
    pub fn last_day(self) -> Option<NaiveDate> {
        self.next().first_day()?.pred_opt()
    }

    /// Display label, e.g. "March 2025".
    #[must_use]
    pub fn label(self) -> String {
        self.first_day()
            .map_or_else(|| self.to_string(), |day| day.format("%B %Y").to_string())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid month '{0}' (expected YYYY-MM)")]
pub struct ParseYearMonthError(String);

impl FromStr for YearMonth {
    type Err = ParseYearMonthError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseYearMonthError(raw.to_string());
        let (year, month) = raw.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One day cell in the grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    /// `false` for leading and trailing days borrowed from adjacent months.
    pub in_month: bool,
    pub is_today: bool,
    pub tasks: Vec<&'a Task>,
}

/// Whole weeks covering one month, with tasks placed on their due dates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid<'a> {
    pub month: YearMonth,
    pub week_start: Weekday,
    pub weeks: Vec<Vec<DayCell<'a>>>,
    /// Tasks with no usable due date.
    pub unscheduled: usize,
}

impl<'a> MonthGrid<'a> {
    /// Lay out `tasks` on the grid for `month`. `None` only for months
    /// outside chrono's date range.
    #[must_use]
    pub fn build(
        month: YearMonth,
        week_start: Weekday,
        today: NaiveDate,
        tasks: &'a [Task],
    ) -> Option<Self> {
        let first = month.first_day()?;
        let last = month.last_day()?;

        let mut by_day: HashMap<NaiveDate, Vec<&'a Task>> = HashMap::new();
        let mut unscheduled = 0;
        for task in tasks {
            match task.due_on() {
                Some(day) => by_day.entry(day).or_default().push(task),
                None => unscheduled += 1,
            }
        }

        let lead =
            (7 + first.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
        let start = first - Duration::days(i64::from(lead));
        let span = lead + last.day();
        let week_count = span.div_ceil(7);

        let mut weeks = Vec::new();
        let mut day = start;
        for _ in 0..week_count {
            let mut week = Vec::with_capacity(7);
            for _ in 0..7 {
                week.push(DayCell {
                    date: day,
                    in_month: day.month() == month.month() && day.year() == month.year(),
                    is_today: day == today,
                    tasks: by_day.remove(&day).unwrap_or_default(),
                });
                day = day.succ_opt()?;
            }
            weeks.push(week);
        }

        Some(Self {
            month,
            week_start,
            weeks,
            unscheduled,
        })
    }

    /// Tasks due on `date`, if it is on the grid.
    #[must_use]
    pub fn tasks_on(&self, date: NaiveDate) -> &[&'a Task] {
        self.weeks
            .iter()
            .flatten()
            .find(|cell| cell.date == date)
            .map_or(&[], |cell| cell.tasks.as_slice())
    }

    /// Weekday header labels in grid order.
    #[must_use]
    pub fn weekday_labels(&self) -> Vec<&'static str> {
        let mut day = self.week_start;
        (0..7)
            .map(|_| {
                let label = short_weekday(day);
                day = day.succ();
                label
            })
            .collect()
    }
}

const fn short_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
