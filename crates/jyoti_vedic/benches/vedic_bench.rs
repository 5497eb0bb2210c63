use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyoti_core::{Engine, GeoLocation, SiderealConfig};
use jyoti_ephem::AnalyticEphemeris;
use jyoti_time::{CivilDate, Instant};
use jyoti_vedic::{
    BirthContext, DayRulerRule, DEFAULT_SUNRISE, MuhurtaQuery, MuhurtaTable, find_muhurta_dates,
    hora_table, milan_score, nakshatra_from_longitude, natal_chart, rashi_from_longitude,
    transit_positions, vimshottari_children, vimshottari_mahadashas, vimshottari_timeline,
};

fn zodiac_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("zodiac");
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(256.647)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(256.647)))
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("dasha");
    group.bench_function("vimshottari_timeline_full", |b| {
        b.iter(|| vimshottari_timeline(black_box(13), black_box(1990), 9))
    });
    group.bench_function("vimshottari_two_levels", |b| {
        b.iter(|| {
            let mds = vimshottari_mahadashas(black_box(2_447_892.7), black_box(187.3));
            mds.iter()
                .enumerate()
                .map(|(i, md)| vimshottari_children(md, i as u32).len())
                .sum::<usize>()
        })
    });
    group.finish();
}

fn calendar_rules_bench(c: &mut Criterion) {
    let date = CivilDate::new(2024, 3, 20).unwrap();
    let table = MuhurtaTable::default();
    let query = MuhurtaQuery::new("marriage", date);

    let mut group = c.benchmark_group("calendar_rules");
    group.bench_function("hora_table", |b| {
        b.iter(|| hora_table(black_box(date), DEFAULT_SUNRISE, DayRulerRule::WeekdayLord))
    });
    group.bench_function("muhurta_marriage", |b| {
        b.iter(|| find_muhurta_dates(&table, black_box(&query)))
    });
    group.bench_function("milan_score", |b| {
        b.iter(|| milan_score(black_box(4), black_box(19)))
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let engine = Engine::new(AnalyticEphemeris::new(), SiderealConfig::default());
    let location = GeoLocation::new(25.45, 81.84).unwrap();
    let instant = Instant::from_fields(1990, 1, 1, 10, 0, 0.0, 5.5).unwrap();
    let ctx = BirthContext::derive(&engine, instant, location).unwrap();

    let mut group = c.benchmark_group("chart");
    group.bench_function("birth_context", |b| {
        b.iter(|| BirthContext::derive(&engine, black_box(instant), location))
    });
    group.bench_function("natal_chart", |b| b.iter(|| natal_chart(&engine, black_box(&ctx))));
    group.bench_function("transit_positions", |b| {
        b.iter(|| transit_positions(&engine, black_box(ctx.jd + 12_000.0), 3))
    });
    group.finish();
}

criterion_group!(
    benches,
    zodiac_bench,
    dasha_bench,
    calendar_rules_bench,
    chart_bench
);
criterion_main!(benches);
