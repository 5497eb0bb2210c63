//! Hora (planetary hour) sequencing.
//!
//! A day is split into 24 one-hour horas starting at a nominal sunrise.
//! Rulers cycle through the Chaldean order (Sun, Venus, Mercury, Moon,
//! Saturn, Jupiter, Mars), starting from the day ruler.
//!
//! Sunrise is a fixed local clock time, not an astronomical sunrise.
//! Weekdays are indexed Sunday = 0 .. Saturday = 6.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use jyoti_time::{CivilDate, TimeOfDay, Weekday};

use crate::error::VedicError;
use crate::graha::Graha;

/// Hora rulers in Chaldean order.
pub const HORA_SEQUENCE: [Graha; 7] = [
    Graha::Surya,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
    Graha::Shani,
    Graha::Guru,
    Graha::Mangal,
];

/// Number of horas in a day.
pub const HORA_COUNT: u8 = 24;

/// Nominal sunrise used when none is configured.
pub const DEFAULT_SUNRISE: TimeOfDay = TimeOfDay::from_hour(6);

/// How the first hora's ruler is chosen for a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayRulerRule {
    /// `HORA_SEQUENCE[weekday_index mod 7]`.
    #[default]
    SequenceIndex,
    /// Traditional lord of the weekday (Sunday → Sun, Monday → Moon, ...).
    WeekdayLord,
}

impl DayRulerRule {
    pub const fn name(self) -> &'static str {
        match self {
            Self::WeekdayLord => "weekday-lord",
            Self::SequenceIndex => "sequence-index",
        }
    }
}

impl Display for DayRulerRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayRulerRule {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "weekday-lord" | "weekday" | "vaar" => Ok(Self::WeekdayLord),
            "sequence-index" | "sequence" => Ok(Self::SequenceIndex),
            _ => Err(VedicError::InvalidInput(
                "day ruler rule must be weekday-lord or sequence-index",
            )),
        }
    }
}

/// Traditional lord of a weekday.
pub const fn vaar_lord(weekday: Weekday) -> Graha {
    match weekday {
        Weekday::Sunday => Graha::Surya,
        Weekday::Monday => Graha::Chandra,
        Weekday::Tuesday => Graha::Mangal,
        Weekday::Wednesday => Graha::Buddh,
        Weekday::Thursday => Graha::Guru,
        Weekday::Friday => Graha::Shukra,
        Weekday::Saturday => Graha::Shani,
    }
}

/// Ruler of the first hora of a weekday under the given rule.
pub const fn day_ruler(weekday: Weekday, rule: DayRulerRule) -> Graha {
    match rule {
        DayRulerRule::WeekdayLord => vaar_lord(weekday),
        DayRulerRule::SequenceIndex => HORA_SEQUENCE[(weekday.index() % 7) as usize],
    }
}

/// Ruler of hora `hour_index` on a day whose first hora is `day_ruler`.
///
/// The sequence repeats every 7 horas. A node as day ruler starts at Sun.
pub fn hora_at(day_ruler: Graha, hour_index: u8) -> Graha {
    let start = HORA_SEQUENCE
        .iter()
        .position(|g| *g == day_ruler)
        .unwrap_or(0);
    HORA_SEQUENCE[(start + hour_index as usize) % HORA_SEQUENCE.len()]
}

/// One planetary hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoraWindow {
    /// 0-based position in the day, 0..=23.
    pub index: u8,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub ruler: Graha,
}

fn window(day_ruler: Graha, sunrise: TimeOfDay, index: u8) -> HoraWindow {
    HoraWindow {
        index,
        start: sunrise.wrapping_add_hours(index as u32),
        end: sunrise.wrapping_add_hours(index as u32 + 1),
        ruler: hora_at(day_ruler, index),
    }
}

/// The 24 horas of a calendar day, in order from sunrise.
pub fn hora_table(date: CivilDate, sunrise: TimeOfDay, rule: DayRulerRule) -> Vec<HoraWindow> {
    let ruler = day_ruler(date.weekday(), rule);
    (0..HORA_COUNT).map(|i| window(ruler, sunrise, i)).collect()
}

/// The hora running at a local clock time.
///
/// Times before sunrise belong to the previous day's horas. Returns that
/// hora's day together with the window.
pub fn hora_at_time(
    date: CivilDate,
    time: TimeOfDay,
    sunrise: TimeOfDay,
    rule: DayRulerRule,
) -> (CivilDate, HoraWindow) {
    let mut elapsed = time.fractional_hours() - sunrise.fractional_hours();
    let mut day = date;
    if elapsed < 0.0 {
        day = date.add_days(-1);
        elapsed += 24.0;
    }
    let index = (elapsed.floor() as u8).min(HORA_COUNT - 1);
    let ruler = day_ruler(day.weekday(), rule);
    (day, window(ruler, sunrise, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moon_day_cycle() {
        assert_eq!(hora_at(Graha::Chandra, 0), Graha::Chandra);
        assert_eq!(hora_at(Graha::Chandra, 7), Graha::Chandra);
        // 23 mod 7 = 2 places after Moon: Saturn, Jupiter
        assert_eq!(hora_at(Graha::Chandra, 23), Graha::Guru);
    }

    #[test]
    fn next_day_follows_chaldean_weekdays() {
        // hora 24 of each day is the first hora of the next weekday
        for w in Weekday::all() {
            let ruler = vaar_lord(*w);
            let next = Weekday::from_index(w.index() as u32 + 1);
            assert_eq!(hora_at(ruler, 24), vaar_lord(next), "{w}");
        }
    }

    #[test]
    fn sequence_index_rule() {
        assert_eq!(day_ruler(Weekday::Sunday, DayRulerRule::SequenceIndex), Graha::Surya);
        assert_eq!(day_ruler(Weekday::Monday, DayRulerRule::SequenceIndex), Graha::Shukra);
        assert_eq!(day_ruler(Weekday::Saturday, DayRulerRule::SequenceIndex), Graha::Mangal);
        assert_eq!(day_ruler(Weekday::Monday, DayRulerRule::WeekdayLord), Graha::Chandra);
    }

    #[test]
    fn default_rule_indexes_the_sequence() {
        assert_eq!(DayRulerRule::default(), DayRulerRule::SequenceIndex);
        // 2024-03-18 is a Monday: HORA_SEQUENCE[1]
        let monday = CivilDate::new(2024, 3, 18).unwrap();
        let table = hora_table(monday, DEFAULT_SUNRISE, DayRulerRule::default());
        assert_eq!(table[0].ruler, Graha::Shukra);
        assert_eq!(table[7].ruler, Graha::Shukra);
    }

    #[test]
    fn table_windows() {
        // 1990-01-01 was a Monday
        let date = CivilDate::new(1990, 1, 1).unwrap();
        let table = hora_table(date, DEFAULT_SUNRISE, DayRulerRule::WeekdayLord);
        assert_eq!(table.len(), 24);
        assert_eq!(table[0].ruler, Graha::Chandra);
        assert_eq!(table[0].start, TimeOfDay::from_hour(6));
        assert_eq!(table[0].end, TimeOfDay::from_hour(7));
        assert_eq!(table[7].ruler, Graha::Chandra);
        assert_eq!(table[23].ruler, Graha::Guru);
        assert_eq!(table[17].start, TimeOfDay::from_hour(23));
        assert_eq!(table[17].end, TimeOfDay::midnight());
        assert_eq!(table[23].end, TimeOfDay::from_hour(6));
    }

    #[test]
    fn before_sunrise_belongs_to_previous_day() {
        let date = CivilDate::new(1990, 1, 2).unwrap(); // Tuesday
        let (day, w) = hora_at_time(
            date,
            TimeOfDay::new(3, 30, 0.0).unwrap(),
            DEFAULT_SUNRISE,
            DayRulerRule::WeekdayLord,
        );
        assert_eq!(day, CivilDate::new(1990, 1, 1).unwrap());
        assert_eq!(w.index, 21);
        assert_eq!(w.ruler, hora_at(Graha::Chandra, 21));

        let (day, w) = hora_at_time(
            date,
            TimeOfDay::new(6, 0, 0.0).unwrap(),
            DEFAULT_SUNRISE,
            DayRulerRule::WeekdayLord,
        );
        assert_eq!(day, date);
        assert_eq!(w.index, 0);
        assert_eq!(w.ruler, Graha::Mangal);
    }

    #[test]
    fn parse_rule() {
        assert_eq!("weekday-lord".parse::<DayRulerRule>().unwrap(), DayRulerRule::WeekdayLord);
        assert_eq!("Sequence_Index".parse::<DayRulerRule>().unwrap(), DayRulerRule::SequenceIndex);
        assert!("random".parse::<DayRulerRule>().is_err());
    }
}
