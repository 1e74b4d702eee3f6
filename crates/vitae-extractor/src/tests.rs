//! Pipeline-level tests for the Extractor

use crate::{extract_token, locate_section, normalize, Extractor, PatternTable};
use proptest::prelude::*;
use vitae_domain::{DaySeparator, EventKind, Locale, Outcome, Rejection, StructuredDate};

fn swedish() -> Extractor {
    Extractor::for_code("sv").unwrap()
}

/// Locate, isolate and normalize without the plausibility filter
fn pipeline(locale: Locale, kind: EventKind, text: &str) -> Option<StructuredDate> {
    let table = PatternTable::new(locale).unwrap();
    let section = locate_section(&table, kind, text)?;
    let token = extract_token(&table, section.text)?;
    normalize(locale, token.text).ok()
}

fn render_long(locale: Locale, kind: EventKind, year: i32, month: u8, day: u8) -> String {
    let separator = match locale.profile().day_separator {
        DaySeparator::Space => "",
        DaySeparator::Period => ".",
    };
    format!(
        "{} {}{} {} {}",
        locale.marker(kind),
        day,
        separator,
        locale.month_name(month).unwrap(),
        year
    )
}

#[test]
fn test_short_form_accepted() {
    let outcome = swedish().extract(EventKind::Birth, "Karl Andersson, född 1923, var en svensk målare.");
    assert_eq!(outcome, Outcome::Accepted(StructuredDate::Year(1923)));
}

#[test]
fn test_long_form_wins_over_earlier_year() {
    let text = "Karl Andersson (1923) var en svensk målare, född 5 januari 1923 i Uppsala.";
    let outcome = swedish().extract(EventKind::Birth, text);
    assert_eq!(
        outcome,
        Outcome::Accepted(StructuredDate::year_month_day(1923, 1, 5).unwrap())
    );
}

#[test]
fn test_long_form_wins_over_earlier_short_mention() {
    let text = "Enligt kyrkboken född 1922, men i själva verket född 5 januari 1923.";
    let outcome = swedish().extract(EventKind::Birth, text);
    assert_eq!(
        outcome,
        Outcome::Accepted(StructuredDate::year_month_day(1923, 1, 5).unwrap())
    );
}

#[test]
fn test_abbreviated_month_rejected() {
    let outcome = swedish().extract(EventKind::Birth, "Karl Andersson, född 12 jan 1923 i Uppsala.");
    assert!(matches!(outcome, Outcome::Rejected(Rejection::Malformed { .. })));
}

#[test]
fn test_early_year_rejected() {
    let outcome = swedish().extract(EventKind::Birth, "Olof Rudbeck, född 1650.");
    assert_eq!(
        outcome,
        Outcome::Rejected(Rejection::Implausible {
            date: StructuredDate::Year(1650),
            min_year: 1800,
        })
    );
}

#[test]
fn test_early_year_rejected_for_death_too() {
    let outcome = swedish().extract(EventKind::Death, "död 14 september 1702");
    assert!(matches!(outcome, Outcome::Rejected(Rejection::Implausible { .. })));
}

#[test]
fn test_no_marker_not_found() {
    let outcome = swedish().extract(EventKind::Birth, "Karl Andersson var en svensk målare verksam 1923.");
    assert_eq!(outcome, Outcome::NotFound);
}

#[test]
fn test_kinds_are_independent() {
    let text = "Olof, född 1650, död 12 maj 1812.";
    let extraction = swedish().extract_all(text);

    assert!(matches!(
        extraction.outcome(EventKind::Birth),
        Outcome::Rejected(Rejection::Implausible { .. })
    ));
    assert_eq!(
        extraction.outcome(EventKind::Death),
        &Outcome::Accepted(StructuredDate::year_month_day(1812, 5, 12).unwrap())
    );
}

#[test]
fn test_every_locale_birth_and_death() {
    let cases = [
        ("sv", "född 18 september 1905 i Stockholm, död 15 april 1990"),
        ("no", "født 17. mai 1905 i Oslo, død 3. desember 1990"),
        ("da", "født 18. september 1905 i Aarhus, død 15. april 1990"),
        ("pl", "(ur. 18 września 1905 w Krakowie, zm. 15 kwietnia 1990)"),
    ];

    for (code, text) in cases {
        let extraction = Extractor::for_code(code).unwrap().extract_all(text);
        assert_eq!(
            extraction.outcome(EventKind::Birth).accepted().map(StructuredDate::year),
            Some(1905),
            "{}: birth was {:?}",
            code,
            extraction.birth.outcome
        );
        assert_eq!(
            extraction.outcome(EventKind::Death).accepted().map(StructuredDate::year),
            Some(1990),
            "{}: death",
            code
        );
    }
}

#[test]
fn test_period_locale_requires_period() {
    // Norwegian writes "17. mai"; without the period only a short form could match
    let extractor = Extractor::for_code("no").unwrap();
    assert_eq!(extractor.extract(EventKind::Birth, "født 17 mai 1905"), Outcome::NotFound);
}

proptest! {
    /// Property: a long-form mention in any locale recovers the exact date
    #[test]
    fn test_long_form_round_trip(
        locale_index in 0usize..4,
        death in any::<bool>(),
        year in 1000i32..=9999,
        month in 1u8..=12,
        day in 1u8..=31,
    ) {
        let locale = Locale::ALL[locale_index];
        let kind = if death { EventKind::Death } else { EventKind::Birth };
        let text = format!("Lorem ipsum ({}) dolor sit amet.", render_long(locale, kind, year, month, day));

        let expected = StructuredDate::year_month_day(year, month, day).unwrap();
        prop_assert_eq!(pipeline(locale, kind, &text), Some(expected));
    }

    /// Property: a short-form mention recovers the bare year
    #[test]
    fn test_short_form_round_trip(locale_index in 0usize..4, death in any::<bool>(), year in 1000i32..=9999) {
        let locale = Locale::ALL[locale_index];
        let kind = if death { EventKind::Death } else { EventKind::Birth };
        let text = format!("Lorem ipsum, {} {}, dolor.", locale.marker(kind), year);

        prop_assert_eq!(pipeline(locale, kind, &text), Some(StructuredDate::Year(year)));
    }

    /// Property: long form is preferred wherever the short mention sits
    #[test]
    fn test_long_preferred_regardless_of_position(
        short_year in 1000i32..=9999,
        year in 1000i32..=9999,
        month in 1u8..=12,
        day in 1u8..=31,
        short_first in any::<bool>(),
    ) {
        let locale = Locale::Swedish;
        let long = render_long(locale, EventKind::Birth, year, month, day);
        let short = format!("född {}", short_year);
        let text = if short_first {
            format!("{}. {}.", short, long)
        } else {
            format!("{}. {}.", long, short)
        };

        let expected = StructuredDate::year_month_day(year, month, day).unwrap();
        prop_assert_eq!(pipeline(locale, EventKind::Birth, &text), Some(expected));
    }

    /// Property: years before 1800 are never accepted
    #[test]
    fn test_early_years_never_accepted(year in 1000i32..1800, death in any::<bool>()) {
        let kind = if death { EventKind::Death } else { EventKind::Birth };
        let text = format!("{} {}", Locale::Swedish.marker(kind), year);
        let outcome = swedish().extract(kind, &text);
        prop_assert!(
            matches!(outcome, Outcome::Rejected(Rejection::Implausible { .. })),
            "unexpected outcome {:?}",
            outcome
        );
    }

    /// Property: arbitrary text never panics and never yields an invalid date
    #[test]
    fn test_arbitrary_text_is_safe(text in ".{0,200}") {
        let extraction = swedish().extract_all(&text);
        for kind in EventKind::ALL {
            if let Some(StructuredDate::YearMonthDay { month, day, .. }) = extraction.outcome(kind).accepted() {
                prop_assert!((1..=12).contains(month));
                prop_assert!((1..=31).contains(day));
            }
        }
    }
}
