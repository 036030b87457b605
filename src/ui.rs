//! Console rendering: bordered grid tables and bijective base-26 column
//! labels.

use crate::grid::{Cell, Coord, Grid};

/// Single-character glyph for one cell state. Ship cells draw as blanks
/// unless `reveal` is set, so the same renderer serves both the player's own
/// board and the view shown to an opponent.
fn glyph(cell: Cell, reveal: bool) -> &'static str {
    match cell {
        Cell::Empty => " ",
        Cell::Ship => {
            if reveal {
                "■"
            } else {
                " "
            }
        }
        Cell::Hit => "X",
        Cell::Miss => "•",
        Cell::SunkShip => "□",
    }
}

/// Bijective base-26 column label: 0 -> "A", 25 -> "Z", 26 -> "AA". There is
/// no digit for zero, so the scheme never emits a leading "A" as padding.
pub fn column_label(mut idx: usize) -> String {
    let mut label = String::new();
    loop {
        label.insert(0, (b'A' + (idx % 26) as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }
    label
}

/// Parse a bijective base-26 label back to its column index. Returns `None`
/// for an empty string or any non-letter character.
pub fn parse_column_label(s: &str) -> Option<usize> {
    if s.is_empty() {
        return None;
    }
    let mut n: usize = 0;
    for c in s.chars() {
        let c = c.to_ascii_uppercase();
        if !c.is_ascii_uppercase() {
            return None;
        }
        n = n * 26 + (c as usize - 'A' as usize + 1);
    }
    Some(n - 1)
}

/// Human-readable position, e.g. "E5" for row 4, column 4.
pub fn coord_label(at: Coord) -> String {
    format!("{}{}", column_label(at.col), at.row + 1)
}

/// Render a grid snapshot as a fixed-width bordered table with lettered
/// column headers and 1-based row numbers.
///
/// ```text
/// ╔═══╦═══╤═══╤═══╗
/// ║   ║ A │ B │ C ║
/// ╠═══╬═══╪═══╪═══╣
/// ║ 1 ║   │ X │ ■ ║
/// ╟───╫───┼───┼───╢
/// ║ 2 ║ • │   │ □ ║
/// ╚═══╩═══╧═══╧═══╝
/// ```
pub fn render_grid(grid: &Grid, reveal: bool) -> String {
    let w = grid.width();
    let h = grid.height();
    let mut out = String::new();
    push_rule(&mut out, w, "╔", "═", "╦", "╤", "╗");
    out.push_str("║   ║");
    for c in 0..w {
        out.push_str(&pad3(&column_label(c)));
        out.push_str(if c + 1 == w { "║" } else { "│" });
    }
    out.push('\n');
    push_rule(&mut out, w, "╠", "═", "╬", "╪", "╣");
    for (r, row) in grid.rows().enumerate() {
        out.push('║');
        out.push_str(&pad3(&(r + 1).to_string()));
        out.push('║');
        for (c, &cell) in row.iter().enumerate() {
            out.push_str(&pad3(glyph(cell, reveal)));
            out.push_str(if c + 1 == w { "║" } else { "│" });
        }
        out.push('\n');
        if r + 1 == h {
            push_rule(&mut out, w, "╚", "═", "╩", "╧", "╝");
        } else {
            push_rule(&mut out, w, "╟", "─", "╫", "┼", "╢");
        }
    }
    out
}

fn push_rule(out: &mut String, w: usize, left: &str, fill: &str, head: &str, mid: &str, right: &str) {
    out.push_str(left);
    out.push_str(&fill.repeat(3));
    out.push_str(head);
    for c in 0..w {
        out.push_str(&fill.repeat(3));
        out.push_str(if c + 1 == w { right } else { mid });
    }
    out.push('\n');
}

/// Centre `s` in a three-character cell; labels of three or more characters
/// are emitted as-is so rows never shrink below the border width.
fn pad3(s: &str) -> String {
    match s.chars().count() {
        0 => "   ".to_string(),
        1 => format!(" {} ", s),
        2 => format!(" {}", s),
        _ => s.to_string(),
    }
}
