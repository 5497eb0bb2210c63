//! Plain-text reports.
//!
//! Every function returns the full report without a trailing newline.

use jyoti_time::{CivilDate, Instant};
use jyoti_vedic::{
    BirthContext, DashaPeriod, DashaSegment, DashaSnapshot, GrahaPosition, HoraWindow, LagnaInfo,
    MilanScore, NakshatraInfo, NatalChart, Rashi, RashiInfo, TransitDay, deg_to_dms,
};

fn retro_mark(retrograde: bool) -> &'static str {
    if retrograde { " (R)" } else { "" }
}

/// Local calendar date of a UT Julian Date.
fn local_date(jd: f64, utc_offset_hours: f64) -> CivilDate {
    CivilDate::from_jd(jd + utc_offset_hours / 24.0)
}

pub fn julian_day(instant: &Instant, jd: f64) -> String {
    format!("{instant}\nJD (UT): {jd:.6}")
}

pub fn rashi(lon: f64, info: &RashiInfo) -> String {
    format!(
        "{lon:.4}° → {} - {} ({:.4}° in rashi)",
        info.rashi, info.dms, info.degrees_in_rashi
    )
}

pub fn nakshatra(lon: f64, info: &NakshatraInfo) -> String {
    format!(
        "{lon:.4}° → {} (index {}) - Pada {} ({:.4}° in nakshatra, {:.4}° in pada)",
        info.nakshatra,
        info.nakshatra_index,
        info.pada,
        info.degrees_in_nakshatra,
        info.degrees_in_pada
    )
}

pub fn positions(instant: &Instant, positions: &[GrahaPosition]) -> String {
    let mut lines = vec![format!("Sidereal positions at {instant}")];
    for p in positions {
        let r = jyoti_vedic::rashi_from_longitude(p.longitude_deg);
        let n = jyoti_vedic::nakshatra_from_longitude(p.longitude_deg);
        lines.push(format!(
            "  {:<8} {:>9.4}°  {:<10} {}  {:<17} pada {}  {:+.4}°/day{}",
            p.graha.english_name(),
            p.longitude_deg,
            r.rashi.name(),
            r.dms,
            n.nakshatra.name(),
            n.pada,
            p.speed_deg_per_day,
            retro_mark(p.retrograde)
        ));
    }
    lines.join("\n")
}

pub fn lagna(instant: &Instant, info: &LagnaInfo) -> String {
    format!(
        "Lagna at {instant}\n  {:.4}°  {} {}  {} pada {}",
        info.longitude_deg,
        info.rashi.rashi,
        info.rashi.dms,
        info.nakshatra.nakshatra,
        info.nakshatra.pada
    )
}

pub fn chart(ctx: &BirthContext, chart: &NatalChart) -> String {
    let mut lines = vec![
        format!(
            "Natal chart for {} at {:.4}°N, {:.4}°E",
            ctx.instant,
            ctx.location.latitude_deg(),
            ctx.location.longitude_deg()
        ),
        format!("JD (UT): {:.6}", ctx.jd),
        String::new(),
        format!(
            "  {:<8} {:>9.4}°  {:<10} {}  {:<17} pada {}",
            "Lagna",
            chart.lagna.longitude_deg,
            chart.lagna.rashi.rashi.name(),
            chart.lagna.rashi.dms,
            chart.lagna.nakshatra.nakshatra.name(),
            chart.lagna.nakshatra.pada
        ),
    ];
    for p in &chart.placements {
        lines.push(format!(
            "  {:<8} {:>9.4}°  {:<10} {}  {:<17} pada {}  house {:>2}  bhava {:>2}{}",
            p.graha.english_name(),
            p.longitude_deg,
            p.rashi.rashi.name(),
            p.rashi.dms,
            p.nakshatra.nakshatra.name(),
            p.nakshatra.pada,
            p.house,
            p.bhava,
            retro_mark(p.retrograde)
        ));
    }
    lines.push(String::new());
    lines.push("House cusps:".to_string());
    for (i, cusp) in chart.cusps.iter().enumerate() {
        lines.push(format!("  {:>2}  {:>9.4}°  {}", i + 1, cusp, deg_to_dms(*cusp)));
    }
    lines.join("\n")
}

pub fn dasha_timeline(ctx: &BirthContext, segments: &[DashaSegment]) -> String {
    let moon = &ctx.moon_nakshatra;
    let mut lines = vec![format!(
        "Vimshottari dasha (Moon in {}, pada {})",
        moon.nakshatra, moon.pada
    )];
    if segments.is_empty() {
        lines.push("  (no periods)".to_string());
    }
    for s in segments {
        lines.push(format!(
            "  {:<8} {}–{}  ({} years)",
            s.graha.english_name(),
            s.start_year,
            s.end_year,
            s.duration_years()
        ));
    }
    lines.join("\n")
}

pub fn mahadashas(ctx: &BirthContext, periods: &[DashaPeriod]) -> String {
    let tz = ctx.instant.utc_offset_hours();
    let mut lines = vec![format!(
        "Vimshottari mahadashas (Moon in {}, {:.1}% traversed)",
        ctx.moon_nakshatra.nakshatra,
        ctx.moon_nakshatra.elapsed_fraction() * 100.0
    )];
    for p in periods {
        lines.push(format!(
            "  {:<8} {} → {}  ({:.2} years)",
            p.graha.english_name(),
            local_date(p.start_jd, tz),
            local_date(p.end_jd, tz),
            p.duration_days() / jyoti_vedic::DAYS_PER_YEAR
        ));
    }
    lines.join("\n")
}

pub fn dasha_snapshot(ctx: &BirthContext, date: CivilDate, snapshot: &DashaSnapshot) -> String {
    let tz = ctx.instant.utc_offset_hours();
    let mut lines = vec![format!("Running dasha on {date}")];
    if snapshot.periods.is_empty() {
        lines.push("  (outside the 120-year cycle)".to_string());
    }
    for p in &snapshot.periods {
        lines.push(format!(
            "  {:<16} {:<8} {} → {}",
            p.level.name(),
            p.graha.english_name(),
            local_date(p.start_jd, tz),
            local_date(p.end_jd, tz)
        ));
    }
    lines.join("\n")
}

pub fn transits(asc: Rashi, days: &[TransitDay]) -> String {
    let mut lines = vec![format!("Transits for {asc} ascendant")];
    for day in days {
        lines.push(String::new());
        lines.push(format!("{} ({})", day.date, day.date.weekday()));
        for r in &day.records {
            lines.push(format!(
                "  {:<8} {:<10} {:>6.2}°  house {:>2}{}",
                r.graha.english_name(),
                r.rashi.rashi.name(),
                r.degree_in_sign(),
                r.house,
                retro_mark(r.retrograde)
            ));
        }
    }
    lines.join("\n")
}

pub fn hora_table(date: CivilDate, table: &[HoraWindow]) -> String {
    let mut lines = vec![format!("Horas for {date} ({})", date.weekday())];
    for w in table {
        lines.push(format!(
            "  {:>2}  {}–{}  {}",
            w.index + 1,
            w.start,
            w.end,
            w.ruler.english_name()
        ));
    }
    lines.join("\n")
}

pub fn hora_now(day: CivilDate, window: &HoraWindow) -> String {
    format!(
        "Hora: {} (position {} of 24 of {day}, {})\n  Start: {}\n  End:   {}",
        window.ruler.english_name(),
        window.index + 1,
        day.weekday(),
        window.start,
        window.end
    )
}

pub fn muhurta(category: &str, dates: &[CivilDate]) -> String {
    if dates.is_empty() {
        return format!("No favourable dates for {category}");
    }
    let mut lines = vec![format!("Favourable dates for {category}")];
    for d in dates {
        lines.push(format!("  {d} ({})", d.weekday()));
    }
    lines.join("\n")
}

pub fn milan(a: u8, b: u8, score: &MilanScore) -> String {
    format!(
        "Nakshatras {a} and {b}: {:.2} / 36 ({})",
        score.score, score.band
    )
}
