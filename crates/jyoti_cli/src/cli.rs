use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jyoti_core::GeoLocation;
use jyoti_time::{CivilDate, TimeOfDay};
use jyoti_vedic::{DayRulerRule, Graha, Rashi};

/// Vedic astrology derivations on top of a sidereal engine.
#[derive(Parser)]
#[command(
    name = "jyoti",
    version,
    about = "Vedic astrology derivations: rashi, nakshatra, dasha, transits, hora, muhurta"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file. A missing file means built-in defaults.
    #[arg(short, long, global = true, default_value = "jyoti.toml")]
    pub config: PathBuf,

    /// Write the rendered report to this file instead of stdout.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Julian Date (UT) of a local date and time
    JulianDay {
        #[command(flatten)]
        moment: MomentArgs,
    },
    /// Rashi and DMS of a sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra and pada of a sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Sidereal graha positions at a moment
    Position {
        #[command(flatten)]
        moment: MomentArgs,
        /// Only this graha (Sanskrit or English name)
        #[arg(long)]
        graha: Option<Graha>,
    },
    /// Sidereal ascendant (lagna)
    Ascendant {
        #[command(flatten)]
        moment: MomentArgs,
        #[command(flatten)]
        place: PlaceArgs,
    },
    /// Natal chart: lagna, house cusps and all nine grahas
    Chart {
        #[command(flatten)]
        moment: MomentArgs,
        #[command(flatten)]
        place: PlaceArgs,
    },
    /// Vimshottari dasha from the birth Moon
    Dasha {
        #[command(flatten)]
        moment: MomentArgs,
        #[command(flatten)]
        place: PlaceArgs,
        /// Number of whole-year segments [config: dasha.segments]
        #[arg(long)]
        segments: Option<usize>,
        /// Mahadashas on exact dates, first one shortened by the birth balance
        #[arg(long, conflicts_with = "at")]
        precise: bool,
        /// Running maha/antar/pratyantar periods on this local date
        #[arg(long)]
        at: Option<CivilDate>,
    },
    /// Daily transit houses counted from an ascendant sign
    Transit {
        /// Ascendant sign (Sanskrit or Western name)
        #[arg(long)]
        asc: Rashi,
        /// First day [default: today]
        #[arg(long)]
        start: Option<CivilDate>,
        /// Number of days [config: transit.days]
        #[arg(long)]
        days: Option<u32>,
        /// Local evaluation time [config: transit.time]
        #[arg(long)]
        time: Option<TimeOfDay>,
        /// UTC offset in hours [config: location.utc_offset_hours]
        #[arg(long, allow_negative_numbers = true)]
        tz: Option<f64>,
    },
    /// Hora table for a date, or the hora running at a time
    Hora {
        /// Local date [default: today]
        #[arg(long)]
        date: Option<CivilDate>,
        /// Show only the hora running at this local time
        #[arg(long)]
        time: Option<TimeOfDay>,
        /// Nominal sunrise [config: hora.sunrise]
        #[arg(long)]
        sunrise: Option<TimeOfDay>,
        /// weekday-lord or sequence-index [config: hora.day_ruler]
        #[arg(long)]
        rule: Option<DayRulerRule>,
    },
    /// Favourable dates for an event category
    Muhurta {
        /// Event category, e.g. business, travel, marriage
        category: String,
        /// First date considered [default: today]
        #[arg(long)]
        start: Option<CivilDate>,
        /// Dates after the start also considered [config: muhurta.window_days]
        #[arg(long)]
        window: Option<u32>,
        /// Maximum number of dates [config: muhurta.max_results]
        #[arg(long)]
        max: Option<usize>,
    },
    /// Nakshatra-distance compatibility score
    Milan {
        #[command(flatten)]
        pair: MilanArgs,
        #[command(flatten)]
        places: BirthPlaces,
    },
    /// Canned weekly forecast for the Monday-first week containing a date
    Forecast {
        /// Any date in the week [default: today]
        #[arg(long)]
        today: Option<CivilDate>,
    },
}

/// Local date, clock time and UTC offset.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct MomentArgs {
    /// Local date (YYYY-MM-DD)
    #[arg(long)]
    pub date: CivilDate,

    /// Local clock time (HH:MM[:SS])
    #[arg(long, default_value = "12:00")]
    pub time: TimeOfDay,

    /// UTC offset in hours, east positive [config: location.utc_offset_hours]
    #[arg(long, allow_negative_numbers = true)]
    pub tz: Option<f64>,
}

/// Observer location; each coordinate falls back to the configuration.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct PlaceArgs {
    /// Latitude in degrees, north positive [config: location.latitude]
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees, east positive [config: location.longitude]
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,
}

/// Two Moon nakshatras, given directly or derived from two births.
#[derive(clap::Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct MilanArgs {
    /// Two nakshatra indices (0 = Ashwini)
    #[arg(long, num_args = 2, value_names = ["A", "B"])]
    pub nakshatras: Option<Vec<u8>>,

    /// Two local birth moments (YYYY-MM-DD[THH:MM[:SS][±HH:MM|Z]])
    #[arg(long, num_args = 2, value_names = ["BIRTH_A", "BIRTH_B"], value_parser = parse_birth)]
    pub births: Option<Vec<BirthMoment>>,
}

/// Per-person birth places for `--births`; each falls back to the configuration.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct BirthPlaces {
    /// First person's birth place as LAT,LON [config: location]
    #[arg(long, value_name = "LAT,LON", value_parser = parse_place, allow_hyphen_values = true, requires = "births")]
    pub place_a: Option<GeoLocation>,

    /// Second person's birth place as LAT,LON [config: location]
    #[arg(long, value_name = "LAT,LON", value_parser = parse_place, allow_hyphen_values = true, requires = "births")]
    pub place_b: Option<GeoLocation>,
}

/// A local date and clock time given as one token, with an optional UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthMoment {
    pub date: CivilDate,
    pub time: TimeOfDay,
    /// Offset written in the token; `None` means the configured offset.
    pub utc_offset_hours: Option<f64>,
}

/// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS]` or the same with a space.
///
/// The clock time may carry an offset suffix: `Z`, `±HH`, `±HH:MM` or a
/// decimal `±H.H`. A bare date means local noon.
pub fn parse_birth(s: &str) -> Result<BirthMoment, String> {
    let s = s.trim();
    let (date, time) = match s.split_once(['T', ' ']) {
        Some((d, t)) => (d, Some(t)),
        None => (s, None),
    };
    let date = date.parse::<CivilDate>().map_err(|e| e.to_string())?;
    let (time, utc_offset_hours) = match time {
        Some(t) => {
            let (clock, offset) = split_offset(t)?;
            (clock.parse::<TimeOfDay>().map_err(|e| e.to_string())?, offset)
        }
        None => (TimeOfDay::noon(), None),
    };
    Ok(BirthMoment {
        date,
        time,
        utc_offset_hours,
    })
}

fn split_offset(t: &str) -> Result<(&str, Option<f64>), String> {
    if let Some(clock) = t.strip_suffix(['Z', 'z']) {
        return Ok((clock, Some(0.0)));
    }
    let Some(at) = t.find(['+', '-']) else {
        return Ok((t, None));
    };
    let (clock, offset) = t.split_at(at);
    let sign = if offset.starts_with('-') { -1.0 } else { 1.0 };
    let body = &offset[1..];
    let bad = || format!("invalid UTC offset: {offset}");
    let hours = match body.split_once(':') {
        Some((h, m)) => {
            let h: u32 = h.parse().map_err(|_| bad())?;
            let m: u32 = m.parse().map_err(|_| bad())?;
            if m >= 60 {
                return Err(bad());
            }
            h as f64 + m as f64 / 60.0
        }
        None => body.parse::<f64>().map_err(|_| bad())?,
    };
    Ok((clock, Some(sign * hours)))
}

/// Parse `LAT,LON` in degrees.
pub fn parse_place(s: &str) -> Result<GeoLocation, String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got {s}"))?;
    let lat: f64 = lat.trim().parse().map_err(|_| format!("invalid latitude: {lat}"))?;
    let lon: f64 = lon.trim().parse().map_err(|_| format!("invalid longitude: {lon}"))?;
    GeoLocation::new(lat, lon).map_err(|e| e.to_string())
}
