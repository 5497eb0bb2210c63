//! Canned weekly forecast text.
//!
//! The text is fixed; only the week's dates change. The week is the
//! Monday-first week containing the reference date.

use jyoti_time::{CivilDate, Weekday};

/// Weekdays sharing one note.
#[derive(Debug, Clone, Copy)]
pub struct DayNote {
    pub days: &'static [Weekday],
    pub note: &'static str,
}

pub const INTRO: &str = "This week brings a mix of reflection, creativity, and public visibility.";

pub const BEST_DAYS: [DayNote; 2] = [
    DayNote {
        days: &[Weekday::Wednesday, Weekday::Thursday],
        note: "Great for quiet focus, spiritual work, or soft planning.",
    },
    DayNote {
        days: &[Weekday::Sunday],
        note: "Creative expression, design, learning.",
    },
];

pub const CAUTION_DAYS: [DayNote; 2] = [
    DayNote {
        days: &[Weekday::Friday],
        note: "Tense day for finances or sharp words.",
    },
    DayNote {
        days: &[Weekday::Saturday],
        note: "Avoid rushing or making big decisions.",
    },
];

pub const THEMES: [&str; 3] = [
    "Inner alignment",
    "Career or public actions midweek",
    "Strategic silence or research",
];

pub const TIP: &str =
    "Tip: Journal, plan, and act gently. This is a week to plant seeds, not rush outcomes.";

/// Monday..Sunday week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyForecast {
    pub week_start: CivilDate,
    pub week_end: CivilDate,
}

impl WeeklyForecast {
    /// The week containing `today`.
    pub fn for_date(today: CivilDate) -> Self {
        let week_start = today.week_start_monday();
        Self {
            week_start,
            week_end: week_start.add_days(6),
        }
    }

    /// Date of a weekday within this week.
    pub fn date_of(&self, weekday: Weekday) -> CivilDate {
        self.week_start.add_days(weekday.days_since_monday() as i64)
    }

    /// `Weekly Forecast (DD Month – DD Month YYYY)`.
    pub fn heading(&self) -> String {
        format!(
            "Weekly Forecast ({:02} {} – {:02} {} {})",
            self.week_start.day(),
            self.week_start.month_name(),
            self.week_end.day(),
            self.week_end.month_name(),
            self.week_end.year()
        )
    }

    fn note_line(&self, note: &DayNote) -> String {
        let names = note
            .days
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(" & ");
        let dates = note
            .days
            .iter()
            .map(|d| {
                let date = self.date_of(*d);
                format!("{:02} {}", date.day(), date.month_name())
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("    - {names} ({dates}): {}", note.note)
    }

    pub fn render(&self) -> String {
        let mut lines = vec![self.heading(), String::new(), INTRO.to_string(), String::new()];
        lines.push("- Best Days:".to_string());
        lines.extend(BEST_DAYS.iter().map(|n| self.note_line(n)));
        lines.push(String::new());
        lines.push("- Be Cautious:".to_string());
        lines.extend(CAUTION_DAYS.iter().map(|n| self.note_line(n)));
        lines.push(String::new());
        lines.push("- Weekly Themes:".to_string());
        lines.extend(THEMES.iter().map(|t| format!("    - {t}")));
        lines.push(String::new());
        lines.push(TIP.to_string());
        lines.join("\n")
    }
}
