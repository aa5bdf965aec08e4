//! CSV export of a content schedule — one row per day, in schedule order.
//!
//! Quoting follows RFC 4180: a cell is quoted (and inner quotes doubled) only
//! when it contains a comma, a double quote, or a line break.
//!
//! Talking points and hooks are joined with [`LIST_SEPARATOR`] inside a single
//! cell. Consumers re-split on it, so it must not change.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use thiserror::Error;

use crate::models::schedule::{ContentSchedule, Day};

pub const CSV_HEADER: [&str; 7] = [
    "Week",
    "Day",
    "Content Idea",
    "Content Type",
    "Talking Points",
    "Hooks",
    "Additional Notes",
];

/// Separator between items of a multi-valued cell.
pub const LIST_SEPARATOR: &str = "\n";

pub const CSV_CONTENT_TYPE: &str = "text/csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV flush failed: {0}")]
    Flush(#[from] std::io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encodes the whole schedule as a CSV document with a fixed header row.
///
/// The error arm only covers internal writer failures; every well-formed
/// schedule encodes successfully.
pub fn encode_csv(schedule: &ContentSchedule) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b',')
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;

    for week in &schedule.weeks {
        let week_number = week.week_number.to_string();
        for day in &week.days {
            writer.write_record(day_record(&week_number, day))?;
        }
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn day_record(week_number: &str, day: &Day) -> [String; 7] {
    [
        week_number.to_string(),
        day.day.clone(),
        day.overall_idea.clone(),
        day.content_type.clone(),
        day.talking_points.join(LIST_SEPARATOR),
        day.hooks.join(LIST_SEPARATOR),
        day.additional_notes.clone(),
    ]
}

/// Download name: niche lowercased, each whitespace run replaced by one `-`.
pub fn csv_file_name(niche: &str) -> String {
    let mut slug = String::with_capacity(niche.len());
    let mut in_whitespace = false;

    for c in niche.chars() {
        if is_name_whitespace(c) {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }

    format!("{slug}-content-calendar.csv")
}

/// Whitespace as the landing page's `\s` sees it: Unicode `White_Space`
/// without NEL (U+0085), plus the byte-order mark (U+FEFF).
fn is_name_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule::Week;

    const HEADER_LINE: &str =
        "Week,Day,Content Idea,Content Type,Talking Points,Hooks,Additional Notes";

    fn day(label: &str, idea: &str, content_type: &str) -> Day {
        Day {
            day: label.to_string(),
            overall_idea: idea.to_string(),
            content_type: content_type.to_string(),
            ..Default::default()
        }
    }

    fn scenario() -> ContentSchedule {
        ContentSchedule {
            niche: "Urban Gardening".to_string(),
            weeks: vec![
                Week {
                    week_number: 1,
                    days: vec![
                        day("Monday", "Soil basics", "Educational"),
                        day("Thursday", "Watering hacks", "Tips & Tricks"),
                    ],
                },
                Week {
                    week_number: 2,
                    days: vec![day("Monday", "Composting", "Educational")],
                },
            ],
        }
    }

    fn parse(csv_text: &str) -> Vec<csv::StringRecord> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(csv_text.as_bytes())
            .records()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_empty_schedule_is_header_only() {
        let out = encode_csv(&ContentSchedule::default()).unwrap();
        assert_eq!(out, format!("{HEADER_LINE}\n"));
    }

    #[test]
    fn test_header_always_first() {
        let out = encode_csv(&scenario()).unwrap();
        assert!(out.starts_with(&format!("{HEADER_LINE}\n")));
    }

    #[test]
    fn test_one_row_per_day_in_schedule_order() {
        let records = parse(&encode_csv(&scenario()).unwrap());
        assert_eq!(records.len(), 1 + scenario().day_count());

        let rows: Vec<(&str, &str)> = records[1..]
            .iter()
            .map(|r| (&r[0], &r[2]))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("1", "Soil basics"),
                ("1", "Watering hacks"),
                ("2", "Composting")
            ]
        );
    }

    #[test]
    fn test_plain_values_are_not_quoted() {
        let out = encode_csv(&scenario()).unwrap();
        let second_line = out.lines().nth(1).unwrap();
        assert_eq!(second_line, "1,Monday,Soil basics,Educational,,,");
    }

    #[test]
    fn test_ampersand_does_not_trigger_quoting() {
        let out = encode_csv(&scenario()).unwrap();
        assert!(out.contains(",Tips & Tricks,"));
    }

    #[test]
    fn test_quote_comma_and_newline_round_trip() {
        let idea = "Say \"hi\", now\nrepeat";
        let schedule = ContentSchedule {
            niche: String::new(),
            weeks: vec![Week {
                week_number: 1,
                days: vec![day("Mon", idea, "Educational")],
            }],
        };

        let out = encode_csv(&schedule).unwrap();
        assert!(out.contains("\"Say \"\"hi\"\", now\nrepeat\""));

        let records = parse(&out);
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][2], idea);
    }

    #[test]
    fn test_carriage_return_is_quoted() {
        let schedule = ContentSchedule {
            niche: String::new(),
            weeks: vec![Week {
                week_number: 1,
                days: vec![day("Mon", "line\rbreak", "Educational")],
            }],
        };
        let out = encode_csv(&schedule).unwrap();
        assert!(out.contains("\"line\rbreak\""));
    }

    #[test]
    fn test_multi_valued_cells_split_back_on_separator() {
        let mut d = day("Mon", "Idea", "Educational");
        d.talking_points = vec!["First, with comma".to_string(), "Second".to_string()];
        d.hooks = vec!["Only hook".to_string()];
        let schedule = ContentSchedule {
            niche: String::new(),
            weeks: vec![Week {
                week_number: 4,
                days: vec![d],
            }],
        };

        let records = parse(&encode_csv(&schedule).unwrap());
        let points: Vec<&str> = records[1][4].split(LIST_SEPARATOR).collect();
        assert_eq!(points, vec!["First, with comma", "Second"]);
        assert_eq!(&records[1][5], "Only hook");
        assert_eq!(&records[1][0], "4");
    }

    #[test]
    fn test_every_row_has_seven_columns() {
        let records = parse(&encode_csv(&scenario()).unwrap());
        assert!(records.iter().all(|r| r.len() == CSV_HEADER.len()));
    }

    #[test]
    fn test_file_name_collapses_whitespace() {
        assert_eq!(
            csv_file_name("Urban   Gardening\tTips"),
            "urban-gardening-tips-content-calendar.csv"
        );
        assert_eq!(csv_file_name("SaaS"), "saas-content-calendar.csv");
    }

    #[test]
    fn test_file_name_whitespace_set() {
        assert_eq!(
            csv_file_name("Yoga\u{FEFF}Studio"),
            "yoga-studio-content-calendar.csv"
        );
        assert_eq!(
            csv_file_name("Yoga\u{00A0}\u{3000}Studio"),
            "yoga-studio-content-calendar.csv"
        );
        assert_eq!(
            csv_file_name("Yoga\u{0085}Studio"),
            "yoga\u{0085}studio-content-calendar.csv"
        );
    }
}
