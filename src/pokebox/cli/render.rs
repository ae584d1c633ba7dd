//! # Rendering Module
//!
//! Turns `CmdResult` data into terminal text. Layout (column widths,
//! truncation, padding) is computed on plain strings first and colour is
//! applied afterwards, so ANSI codes never skew the alignment.

use colored::*;
use pokebox::api::{CmdMessage, DisplayRecord, MessageLevel};
use pokebox::model::{ID, METHOD, NAME};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns of the list view.
pub const LIST_COLUMNS: [&str; 7] = [ID, NAME, "Game", "Level", "Nature", "Ability", METHOD];

/// Field order of the detail view.
pub const DETAIL_ORDER: [&str; 21] = [
    ID,
    NAME,
    "Game",
    "Level",
    "Nature",
    "Ability",
    METHOD,
    "isShiny",
    "Save",
    "Evolution",
    "Gender",
    "Forme majeur",
    "Forme mineur",
    "PID",
    "Ball",
    "IVs",
    "EVs",
    "Date",
    "Location",
    "Note",
    "Sprite",
];

const MAX_COLUMN_WIDTH: usize = 24;
const COLUMN_GAP: &str = "  ";
const SPRITE_MARKER: &str = "◆";

pub fn render_record_list(records: &[DisplayRecord]) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut headers = vec!["#".to_string()];
    headers.extend(LIST_COLUMNS.iter().map(|c| c.to_string()));

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|dr| {
            let mut row = vec![dr.position.to_string()];
            row.extend(
                LIST_COLUMNS
                    .iter()
                    .map(|c| truncate_to_width(dr.record.get(c), MAX_COLUMN_WIDTH)),
            );
            row
        })
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            rows.iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(headers[i].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut output = String::new();
    let header_line = join_padded(&headers, &widths);
    output.push_str(&format!("  {}\n", header_line.trim_end().bold()));

    for (dr, row) in records.iter().zip(&rows) {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, &width))| {
                let padded = pad_to_width(cell, width);
                match i {
                    0 => padded.dimmed().to_string(),
                    1 => padded.yellow().to_string(),
                    _ => padded,
                }
            })
            .collect();
        let marker = if dr.sprite.is_some() {
            SPRITE_MARKER.cyan().to_string()
        } else {
            " ".to_string()
        };
        output.push_str(&format!(
            "{} {}\n",
            marker,
            cells.join(COLUMN_GAP).trim_end()
        ));
    }

    output
}

pub fn render_record_details(records: &[DisplayRecord]) -> String {
    let label_width = DETAIL_ORDER.iter().map(|f| f.width()).max().unwrap_or(0);
    let mut output = String::new();

    for (i, dr) in records.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let title = format!("#{} {} {}", dr.position, dr.record.id(), dr.record.name());
        output.push_str(&format!("{}\n", title.trim_end().bold()));
        output.push_str(&format!("{}\n", "-".repeat(32).dimmed()));

        for field in DETAIL_ORDER {
            let label = pad_to_width(field, label_width);
            output.push_str(&format!(
                "{}  {}\n",
                label.dimmed(),
                dr.record.get(field)
            ));
        }
        for (field, value) in dr.record.fields().filter(|(f, _)| !DETAIL_ORDER.contains(f)) {
            output.push_str(&format!(
                "{}  {}\n",
                pad_to_width(field, label_width).dimmed(),
                value
            ));
        }

        let sprite = match &dr.sprite {
            Some(path) => path.display().to_string(),
            None => "none".dimmed().to_string(),
        };
        output.push_str(&format!(
            "{}  {}\n",
            pad_to_width("Sprite file", label_width).dimmed(),
            sprite
        ));
    }

    output
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad_to_width(cell, width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokebox::model::Record;
    use std::path::PathBuf;

    fn display(position: usize, id: &str, name: &str, sprite: bool) -> DisplayRecord {
        let mut record = Record::new()
            .with(ID, id)
            .with(NAME, name)
            .with("Level", "5");
        record.fill_schema();
        DisplayRecord {
            position,
            record,
            sprite: sprite.then(|| PathBuf::from(format!("sprites/{}.png", id))),
        }
    }

    #[test]
    fn empty_list_message() {
        colored::control::set_override(false);
        assert_eq!(render_record_list(&[]), "No records found.\n");
    }

    #[test]
    fn list_aligns_columns() {
        colored::control::set_override(false);
        let output = render_record_list(&[
            display(1, "025", "Pikachu", true),
            display(2, "133", "Eevee", false),
        ]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("ID") && lines[0].contains("Method"));
        assert!(lines[1].starts_with(SPRITE_MARKER));
        assert!(lines[2].starts_with("  2"));
        let name_col = lines[1].find("Pikachu").unwrap();
        assert_eq!(lines[2].find("Eevee").unwrap(), name_col);
    }

    #[test]
    fn long_values_are_truncated() {
        let long = "x".repeat(40);
        let cut = truncate_to_width(&long, MAX_COLUMN_WIDTH);
        assert_eq!(cut.width(), MAX_COLUMN_WIDTH);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_to_width("short", MAX_COLUMN_WIDTH), "short");
    }

    #[test]
    fn details_show_every_field_and_sprite() {
        colored::control::set_override(false);
        let output = render_record_details(&[display(3, "025", "Pikachu", true)]);

        assert!(output.starts_with("#3 025 Pikachu\n"));
        for field in DETAIL_ORDER {
            assert!(output.contains(field), "missing {}", field);
        }
        assert!(output.contains("sprites/025.png"));
    }

    #[test]
    fn text_list_falls_back_to_message() {
        assert_eq!(render_text_list(&[], "Nothing."), "Nothing.\n");
        assert_eq!(
            render_text_list(&["a".to_string(), "b".to_string()], ""),
            "a\nb\n"
        );
    }
}
