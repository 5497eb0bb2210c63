use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use jyoti_config::{MAX_DASHA_SEGMENTS, MAX_MUHURTA_WINDOW_DAYS, MAX_TRANSIT_DAYS, Settings};
use jyoti_core::{Engine, GeoLocation};
use jyoti_ephem::AnalyticEphemeris;
use jyoti_time::{CivilDate, Instant, TimeOfDay};
use jyoti_vedic::{
    ALL_GRAHAS, BirthContext, DashaLevel, MuhurtaQuery, find_muhurta_dates, graha_position,
    hora_at_time, hora_table, lagna_for_instant, milan_from_births, milan_score, natal_chart,
    nakshatra_from_longitude, rashi_from_longitude, transit_forecast, vimshottari_snapshot,
};
use tracing::debug;

use crate::cli::{BirthMoment, BirthPlaces, Command, MilanArgs, MomentArgs, PlaceArgs};
use crate::forecast::WeeklyForecast;
use crate::render;

type AnalyticEngine = Engine<AnalyticEphemeris>;

/// Run one subcommand and return its rendered report.
pub fn run(command: Command, settings: &Settings) -> Result<String> {
    let engine = Engine::new(AnalyticEphemeris::new(), settings.sidereal);
    debug!(config = ?settings.sidereal, "engine ready");

    match command {
        Command::JulianDay { moment } => {
            let instant = instant(&moment, settings)?;
            let jd = engine.julian_day(&instant)?;
            Ok(render::julian_day(&instant, jd))
        }

        Command::Rashi { lon } => Ok(render::rashi(lon, &rashi_from_longitude(lon))),

        Command::Nakshatra { lon } => Ok(render::nakshatra(lon, &nakshatra_from_longitude(lon))),

        Command::Position { moment, graha } => {
            let instant = instant(&moment, settings)?;
            let jd = engine.julian_day(&instant)?;
            let grahas = match graha {
                Some(g) => vec![g],
                None => ALL_GRAHAS.to_vec(),
            };
            let positions = grahas
                .into_iter()
                .map(|g| graha_position(&engine, jd, g))
                .collect::<Result<Vec<_>, _>>()
                .context("computing graha positions")?;
            Ok(render::positions(&instant, &positions))
        }

        Command::Ascendant { moment, place } => {
            let instant = instant(&moment, settings)?;
            let location = location(&place, settings)?;
            let info = lagna_for_instant(&engine, &instant, &location)
                .context("computing the ascendant")?;
            Ok(render::lagna(&instant, &info))
        }

        Command::Chart { moment, place } => {
            let ctx = birth(&engine, &moment, &place, settings)?;
            let chart = natal_chart(&engine, &ctx).context("placing grahas")?;
            Ok(render::chart(&ctx, &chart))
        }

        Command::Dasha {
            moment,
            place,
            segments,
            precise,
            at,
        } => {
            let ctx = birth(&engine, &moment, &place, settings)?;
            if let Some(date) = at {
                let query = Instant::new(date, TimeOfDay::noon(), ctx.instant.utc_offset_hours())?;
                let query_jd = engine.julian_day(&query)?;
                let snapshot = vimshottari_snapshot(
                    ctx.jd,
                    ctx.moon.longitude_deg,
                    query_jd,
                    DashaLevel::Pratyantardasha,
                );
                Ok(render::dasha_snapshot(&ctx, date, &snapshot))
            } else if precise {
                Ok(render::mahadashas(&ctx, &ctx.mahadashas()))
            } else {
                let limit = segments.unwrap_or(settings.dasha_segments);
                bounded("--segments", limit, MAX_DASHA_SEGMENTS)?;
                Ok(render::dasha_timeline(&ctx, &ctx.dasha_timeline(limit)))
            }
        }

        Command::Transit {
            asc,
            start,
            days,
            time,
            tz,
        } => {
            let start = match start {
                Some(d) => d,
                None => today(settings)?,
            };
            let days = days.unwrap_or(settings.transit_days);
            bounded("--days", days as usize, MAX_TRANSIT_DAYS as usize)?;
            let days = transit_forecast(
                &engine,
                start,
                days,
                time.unwrap_or(settings.transit_time),
                tz.unwrap_or(settings.utc_offset_hours),
                asc.index(),
            )
            .context("computing transits")?;
            Ok(render::transits(asc, &days))
        }

        Command::Hora {
            date,
            time,
            sunrise,
            rule,
        } => {
            let date = match date {
                Some(d) => d,
                None => today(settings)?,
            };
            let sunrise = sunrise.unwrap_or(settings.sunrise);
            let rule = rule.unwrap_or(settings.day_ruler);
            match time {
                Some(t) => {
                    let (day, window) = hora_at_time(date, t, sunrise, rule);
                    Ok(render::hora_now(day, &window))
                }
                None => Ok(render::hora_table(date, &hora_table(date, sunrise, rule))),
            }
        }

        Command::Muhurta {
            category,
            start,
            window,
            max,
        } => {
            let start = match start {
                Some(d) => d,
                None => today(settings)?,
            };
            if !settings.muhurta_table.contains(&category) {
                let known = settings.muhurta_table.categories().collect::<Vec<_>>();
                debug!(%category, ?known, "unknown muhurta category");
            }
            let window_days = window.unwrap_or(settings.muhurta_window_days);
            if window_days > MAX_MUHURTA_WINDOW_DAYS {
                bail!("--window must be at most {MAX_MUHURTA_WINDOW_DAYS}, got {window_days}");
            }
            let query = MuhurtaQuery {
                category,
                start,
                window_days,
                max_results: max.unwrap_or(settings.muhurta_max_results),
            };
            let dates = find_muhurta_dates(&settings.muhurta_table, &query);
            Ok(render::muhurta(&query.category, &dates))
        }

        Command::Milan { pair, places } => milan(&engine, pair, places, settings),

        Command::Forecast { today: date } => {
            let date = match date {
                Some(d) => d,
                None => today(settings)?,
            };
            Ok(WeeklyForecast::for_date(date).render())
        }
    }
}

fn milan(
    engine: &AnalyticEngine,
    args: MilanArgs,
    places: BirthPlaces,
    settings: &Settings,
) -> Result<String> {
    match (args.nakshatras, args.births) {
        (Some(n), _) => {
            let [a, b] = pair(n)?;
            Ok(render::milan(a, b, &milan_score(a, b)))
        }
        (None, Some(births)) => {
            let [a, b] = pair(births)?;
            let ctx_a = birth_from_moment(engine, a, places.place_a, settings)?;
            let ctx_b = birth_from_moment(engine, b, places.place_b, settings)?;
            Ok(render::milan(
                ctx_a.moon_nakshatra.nakshatra_index,
                ctx_b.moon_nakshatra.nakshatra_index,
                &milan_from_births(&ctx_a, &ctx_b),
            ))
        }
        (None, None) => bail!("milan needs --nakshatras or --births"),
    }
}

/// Reject counts outside `1..=max`.
fn bounded(flag: &str, value: usize, max: usize) -> Result<()> {
    if !(1..=max).contains(&value) {
        bail!("{flag} must be 1..={max}, got {value}");
    }
    Ok(())
}

fn pair<T>(values: Vec<T>) -> Result<[T; 2]> {
    let n = values.len();
    values
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected exactly two values, got {n}"))
}

fn instant(moment: &MomentArgs, settings: &Settings) -> Result<Instant> {
    let tz = moment.tz.unwrap_or(settings.utc_offset_hours);
    Instant::new(moment.date, moment.time, tz).context("invalid local date, time or UTC offset")
}

fn location(place: &PlaceArgs, settings: &Settings) -> Result<GeoLocation> {
    let lat = place.lat.unwrap_or(settings.location.latitude_deg());
    let lon = place.lon.unwrap_or(settings.location.longitude_deg());
    GeoLocation::new(lat, lon).context("invalid location")
}

fn birth(
    engine: &AnalyticEngine,
    moment: &MomentArgs,
    place: &PlaceArgs,
    settings: &Settings,
) -> Result<BirthContext> {
    let instant = instant(moment, settings)?;
    let location = location(place, settings)?;
    BirthContext::derive(engine, instant, location).context("deriving birth context")
}

fn birth_from_moment(
    engine: &AnalyticEngine,
    moment: BirthMoment,
    place: Option<GeoLocation>,
    settings: &Settings,
) -> Result<BirthContext> {
    let tz = moment.utc_offset_hours.unwrap_or(settings.utc_offset_hours);
    let instant = Instant::new(moment.date, moment.time, tz).context("invalid birth moment")?;
    BirthContext::derive(engine, instant, place.unwrap_or(settings.location))
        .with_context(|| format!("deriving birth context for {instant}"))
}

/// Today's local date in the configured UTC offset.
fn today(settings: &Settings) -> Result<CivilDate> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before 1970")?;
    Ok(CivilDate::from_unix_seconds(
        now.as_secs_f64(),
        settings.utc_offset_hours,
    ))
}
