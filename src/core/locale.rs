//! Locale detection and date formatting
//!
//! Two locales are supported: Latin-script (English labels, `May 01, 2019`)
//! and CJK (Japanese labels, era-based `令和元年5月1日`).

use crate::core::models::{Event, Person, Tree};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Label locale for a whole render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Latin-script names, horizontal labels, Western dates
    Latin,
    /// CJK names, vertical labels, Japanese era dates
    Cjk,
}

impl Locale {
    /// Short language tag (`en` or `ja`)
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Latin => "en",
            Self::Cjk => "ja",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "latin" => Ok(Self::Latin),
            "ja" | "cjk" => Ok(Self::Cjk),
            _ => Err(format!("Unknown locale: {s}")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Japanese eras, newest first, with the first day of each
const ERAS: [(i32, u32, u32, &str); 5] = [
    (2019, 5, 1, "令和"),
    (1989, 1, 8, "平成"),
    (1926, 12, 25, "昭和"),
    (1912, 7, 30, "大正"),
    (1868, 1, 25, "明治"),
];

/// Classify text by script
///
/// The first ASCII letter makes the text Latin, even inside a CJK name.
/// Empty text, or text without any ASCII letter, is CJK.
#[must_use]
pub fn detect_locale(text: &str) -> Locale {
    if text.chars().any(|c| c.is_ascii_alphabetic()) {
        Locale::Latin
    } else {
        Locale::Cjk
    }
}

/// Locale for a whole document: Latin as soon as any person's name is Latin
///
/// Undescribed people (`null` entries) are skipped; a document without people
/// is CJK.
#[must_use]
pub fn derive_document_locale(tree: &Tree) -> Locale {
    let any_latin = tree
        .people
        .values()
        .flatten()
        .filter_map(Person::stated_name)
        .any(|name| detect_locale(name) == Locale::Latin);

    if any_latin {
        Locale::Latin
    } else {
        Locale::Cjk
    }
}

/// Replace a dated event by its display text; other events pass through
#[must_use]
pub fn format_date(event: &Event, locale: Locale) -> Event {
    match event {
        Event::On(date) => Event::Text(format_naive_date(*date, locale)),
        other => other.clone(),
    }
}

/// Display text of a dated or described event, `None` for the other states
#[must_use]
pub fn date_text(event: &Event, locale: Locale) -> Option<String> {
    match format_date(event, locale) {
        Event::Text(text) => Some(text),
        _ => None,
    }
}

/// Display text of a calendar date in the given locale
#[must_use]
pub fn format_naive_date(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::Latin => date.format("%b %d, %Y").to_string(),
        Locale::Cjk => to_wareki(date),
    }
}

/// Japanese era date, e.g. `昭和64年1月7日`; the first year of an era is `元`
///
/// Dates before the Meiji era fall back to plain Gregorian `1850年1月1日`.
#[must_use]
pub fn to_wareki(date: NaiveDate) -> String {
    for (year, month, day, era) in ERAS {
        let Some(start) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        if date >= start {
            let era_year = date.year() - start.year() + 1;
            let year_text = if era_year == 1 {
                "元".to_string()
            } else {
                era_year.to_string()
            };
            return format!("{era}{year_text}年{}月{}日", date.month(), date.day());
        }
    }

    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_detect_locale() {
        assert_eq!(detect_locale("Smith, John"), Locale::Latin);
        assert_eq!(detect_locale("山田太郎"), Locale::Cjk);
        assert_eq!(detect_locale("山田A子"), Locale::Latin);
        assert_eq!(detect_locale(""), Locale::Cjk);
        assert_eq!(detect_locale("１２３"), Locale::Cjk);
        assert_eq!(detect_locale("Émile"), Locale::Latin);
    }

    #[test]
    fn test_detect_ignores_non_ascii_letters() {
        assert_eq!(detect_locale("Ééé"), Locale::Cjk);
    }

    #[test]
    fn test_derive_skips_empty_fullname() {
        let tree = Tree::from_yaml_str("people:\n  p1:\n    fullname: ''\n    name: Ann\n").unwrap();
        assert_eq!(derive_document_locale(&tree), Locale::Latin);
    }

    #[test]
    fn test_derive_document_locale() {
        let mut tree = Tree::new();
        assert_eq!(derive_document_locale(&tree), Locale::Cjk);

        let mut taro = Person::new("taro".to_string());
        taro.fullname = Some("山田太郎".to_string());
        tree.add_person(taro);
        assert_eq!(derive_document_locale(&tree), Locale::Cjk);

        let mut john = Person::new("john".to_string());
        john.name = Some("John".to_string());
        tree.add_person(john);
        assert_eq!(derive_document_locale(&tree), Locale::Latin);
    }

    #[test]
    fn test_wareki_era_boundaries() {
        assert_eq!(to_wareki(date(2019, 5, 1)), "令和元年5月1日");
        assert_eq!(to_wareki(date(2019, 4, 30)), "平成31年4月30日");
        assert_eq!(to_wareki(date(1989, 1, 7)), "昭和64年1月7日");
        assert_eq!(to_wareki(date(1989, 1, 8)), "平成元年1月8日");
        assert_eq!(to_wareki(date(1926, 12, 25)), "昭和元年12月25日");
        assert_eq!(to_wareki(date(1912, 7, 30)), "大正元年7月30日");
        assert_eq!(to_wareki(date(1868, 1, 25)), "明治元年1月25日");
        assert_eq!(to_wareki(date(1850, 1, 1)), "1850年1月1日");
    }

    #[test]
    fn test_latin_format() {
        assert_eq!(format_naive_date(date(2019, 5, 1), Locale::Latin), "May 01, 2019");
        assert_eq!(format_naive_date(date(1926, 12, 25), Locale::Latin), "Dec 25, 1926");
    }

    #[test]
    fn test_format_date_passes_non_dates_through() {
        for event in [
            Event::Absent,
            Event::Happened,
            Event::DidNotHappen,
            Event::Text("circa 1890".to_string()),
        ] {
            assert_eq!(format_date(&event, Locale::Cjk), event);
            assert_eq!(format_date(&event, Locale::Latin), event);
        }

        let formatted = format_date(&Event::On(date(1989, 1, 8)), Locale::Cjk);
        assert_eq!(formatted, Event::Text("平成元年1月8日".to_string()));
        assert_eq!(format_date(&formatted, Locale::Cjk), formatted);
    }

    #[test]
    fn test_date_text() {
        assert_eq!(date_text(&Event::Happened, Locale::Latin), None);
        assert_eq!(date_text(&Event::Absent, Locale::Cjk), None);
        assert_eq!(
            date_text(&Event::On(date(2019, 5, 1)), Locale::Cjk).as_deref(),
            Some("令和元年5月1日")
        );
        assert_eq!(
            date_text(&Event::Text("1890?".to_string()), Locale::Latin).as_deref(),
            Some("1890?")
        );
    }

    #[test]
    fn test_locale_parse_and_display() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::Latin));
        assert_eq!("JA".parse::<Locale>(), Ok(Locale::Cjk));
        assert_eq!("cjk".parse::<Locale>(), Ok(Locale::Cjk));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::Latin.to_string(), "en");
    }
}
