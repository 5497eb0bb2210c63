//! Sign and nakshatra classification properties.

use jyoti_vedic::{
    NAKSHATRA_SPAN, Nakshatra, Rashi, nakshatra_from_longitude, nakshatra_index,
    rashi_from_longitude, rashi_index, vimshottari_lord,
};

#[test]
fn sign_index_mod_360_closure() {
    for i in 0..3600 {
        let x = i as f64 * 0.1 + 0.05;
        assert_eq!(rashi_index(x), rashi_index(x + 360.0), "x = {x}");
        assert_eq!(rashi_index(x), rashi_index(x - 360.0), "x = {x}");
    }
}

#[test]
fn nakshatra_index_in_range_everywhere() {
    for i in -3600..7200 {
        let x = i as f64 * 0.1;
        assert!(nakshatra_index(x) <= 26, "x = {x}");
    }
    assert!(nakshatra_index(360.0 - 1e-13) <= 26);
}

#[test]
fn nakshatra_starts_at_multiples_of_span() {
    for k in 0..27u8 {
        let start = k as f64 * NAKSHATRA_SPAN;
        assert_eq!(nakshatra_index(start + 1e-9), k, "k = {k}");
        assert_eq!(nakshatra_index(start + NAKSHATRA_SPAN / 2.0), k, "k = {k}");
    }
}

#[test]
fn rounded_span_multiples_fall_short_of_the_boundary() {
    // 13.3333 * k lies just below k * 360/27, so it still reads nakshatra k - 1
    assert_eq!(nakshatra_index(0.0), 0);
    for k in 1..27u8 {
        let lon = 13.3333 * k as f64;
        assert!(lon < k as f64 * NAKSHATRA_SPAN, "k = {k}");
        assert_eq!(nakshatra_index(lon), k - 1, "k = {k}");
    }
}

#[test]
fn full_circle_is_mesha_ashwini() {
    let r = rashi_from_longitude(360.0);
    let n = nakshatra_from_longitude(360.0);
    assert_eq!(r.rashi, Rashi::Mesha);
    assert_eq!(n.nakshatra, Nakshatra::Ashwini);
    assert_eq!(n.pada, 1);
}

#[test]
fn sign_and_nakshatra_align_every_nine_padas() {
    // each sign holds exactly 9 padas, so sign starts fall on pada boundaries
    for r in Rashi::all() {
        let n = nakshatra_from_longitude(r.start_deg() + 1e-9);
        assert!(n.degrees_in_pada < 1e-6, "{r}");
    }
}

#[test]
fn every_nakshatra_has_a_lord() {
    for n in Nakshatra::all() {
        assert!(vimshottari_lord(n.index()).is_some(), "{n}");
    }
}
