//! # ICS Export
//!
//! Renders a generated schedule into the iCalendar (RFC 5545) exchange
//! format: one `VEVENT` per occurrence, all-day when the occurrence has no
//! computed time and a floating local time otherwise. Output uses CRLF line
//! endings, escapes TEXT values, and folds lines longer than 75 octets.

use anyhow::{Context, Result};
use log::info;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::food_model::{Food, Occurrence};

/// RFC 5545 content lines should not exceed 75 octets before folding
const MAX_LINE_OCTETS: usize = 75;

/// Render a full calendar for a set of foods and their occurrences
///
/// Foods are looked up by name to fill event descriptions and categories;
/// occurrences without a matching food still render with their own fields.
pub fn render_calendar(foods: &[Food], occurrences: &[Occurrence]) -> String {
    let by_name: HashMap<&str, &Food> = foods.iter().map(|f| (f.name.as_str(), f)).collect();

    let mut output = String::new();
    push_line(&mut output, "BEGIN:VCALENDAR");
    push_line(&mut output, "VERSION:2.0");
    push_line(&mut output, "PRODID:-//foodcal//Food Schedule//EN");
    push_line(&mut output, "CALSCALE:GREGORIAN");

    for occurrence in occurrences {
        let food = by_name.get(occurrence.food_name.as_str()).copied();
        render_event(&mut output, food, occurrence);
    }

    push_line(&mut output, "END:VCALENDAR");
    output
}

/// Write rendered calendar content to a file
pub fn write_calendar(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write calendar file {}", path.display()))?;
    info!("Wrote calendar file {}", path.display());
    Ok(())
}

fn render_event(output: &mut String, food: Option<&Food>, occurrence: &Occurrence) {
    let date_stamp = occurrence.date.format("%Y%m%d");

    push_line(output, "BEGIN:VEVENT");
    push_line(
        output,
        &format!("UID:{}-{}@foodcal", slug(&occurrence.food_name), date_stamp),
    );

    // A computed time makes the event a floating local-time one; anything
    // else (including an unparsed passthrough time) renders all-day
    match occurrence.calculated_time.as_deref().and_then(clock_parts) {
        Some((hours, minutes)) => push_line(
            output,
            &format!("DTSTART:{}T{:02}{:02}00", date_stamp, hours, minutes),
        ),
        None => push_line(output, &format!("DTSTART;VALUE=DATE:{}", date_stamp)),
    }

    let summary = match &occurrence.calculated_amount {
        Some(amount) => format!("{} ({})", occurrence.food_name, amount),
        None => occurrence.food_name.clone(),
    };
    push_line(output, &format!("SUMMARY:{}", escape_text(&summary)));

    if let Some(food) = food {
        if let Some(instructions) = &food.instructions {
            push_line(
                output,
                &format!("DESCRIPTION:{}", escape_text(instructions)),
            );
        }
        if let Some(category) = &food.category {
            push_line(
                output,
                &format!("CATEGORIES:{}", escape_text(category.label())),
            );
        }
    }

    push_line(output, "END:VEVENT");
}

/// Escape a TEXT value per RFC 5545 section 3.3.11
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(ch),
        }
    }

    escaped
}

/// Append a content line, folding at the octet limit with CRLF plus a space
fn push_line(output: &mut String, line: &str) {
    let mut octets = 0;

    for ch in line.chars() {
        let ch_octets = ch.len_utf8();
        if octets + ch_octets > MAX_LINE_OCTETS {
            output.push_str("\r\n ");
            octets = 1;
        }
        output.push(ch);
        octets += ch_octets;
    }

    output.push_str("\r\n");
}

fn clock_parts(time: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = time.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;

    if hours < 24 && minutes < 60 {
        Some((hours, minutes))
    } else {
        None
    }
}

fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}
