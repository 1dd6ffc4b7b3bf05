use nodeip_application::ports::TableRenderer;

/// Box-drawn table with centred cells:
///
/// ```text
/// +----------+--------------+
/// | hostname |      ip      |
/// +----------+--------------+
/// |  node-a  | 198.51.100.5 |
/// +----------+--------------+
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiTableRenderer;

impl AsciiTableRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TableRenderer for AsciiTableRenderer {
    fn render(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(display_width(cell));
            }
        }

        let rule = horizontal_rule(&widths);
        let mut lines = Vec::with_capacity(rows.len() + 4);
        lines.push(rule.clone());
        lines.push(format_row(&widths, headers.iter().copied()));
        lines.push(rule.clone());
        for row in rows {
            lines.push(format_row(&widths, row.iter().map(String::as_str)));
        }
        lines.push(rule);

        lines.join("\n")
    }
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn horizontal_rule(widths: &[usize]) -> String {
    let mut rule = String::from("+");
    for width in widths {
        rule.push_str(&"-".repeat(width + 2));
        rule.push('+');
    }
    rule
}

// Missing trailing cells render blank; extra cells are dropped.
fn format_row<'a>(widths: &[usize], mut cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::from("|");
    for width in widths {
        let cell = cells.next().unwrap_or("");
        line.push(' ');
        line.push_str(&center(cell, *width));
        line.push_str(" |");
    }
    line
}

// Odd padding goes right of odd-length text and left of even-length text.
fn center(text: &str, width: usize) -> String {
    let len = display_width(text);
    let padding = width.saturating_sub(len);
    let left = if padding % 2 == 1 && len % 2 == 0 {
        padding / 2 + 1
    } else {
        padding / 2
    };
    let right = padding - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
