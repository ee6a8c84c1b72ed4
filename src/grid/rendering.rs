//! Text rendering of the grid.

use super::model::Model;
use super::style::{ELLIPSIS, FILTER_MARKER, SEPARATOR};
use super::types::Row;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const EMPTY_TEXT: &str = "No results.";

/// Cuts `s` to at most `width` display columns, ending in an ellipsis when cut.
pub(super) fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let budget = width - ELLIPSIS.width();
    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let w = g.width();
        if used + w > budget {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

/// Truncates or right-pads `s` to exactly `width` display columns.
pub(super) fn fit(s: &str, width: usize) -> String {
    let mut out = truncate(s, width);
    let w = out.width();
    if w < width {
        out.push_str(&" ".repeat(width - w));
    }
    out
}

impl<R: Row> Model<R> {
    fn header_label(&self, key: &str, header: &str) -> String {
        let mut label = header.to_string();
        if let Some(direction) = self.sort_direction(key) {
            label.push(' ');
            label.push_str(direction.arrow());
        }
        if self.column_filter(key).is_some() {
            label.push_str(FILTER_MARKER);
        }
        label
    }

    /// Renders the header, the current page and the footer.
    pub fn view(&self) -> String {
        let headers = self.headers();
        let rows = self.visible_rows();

        let labels: Vec<String> = headers
            .iter()
            .map(|h| self.header_label(&h.key, &h.header))
            .collect();
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .map(|h| self.cell_text(row, &h.key))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let fixed = self.column(&h.key).and_then(|c| c.width);
                fixed.unwrap_or_else(|| {
                    cells
                        .iter()
                        .map(|r| r[i].width())
                        .chain(std::iter::once(labels[i].width()))
                        .max()
                        .unwrap_or(0)
                })
            })
            .collect();

        let separator = self.styles.border.clone().render(SEPARATOR);
        let mut lines = Vec::new();

        let header_line: Vec<String> = headers
            .iter()
            .zip(&labels)
            .zip(&widths)
            .map(|((h, label), width)| {
                let style = if h.selected {
                    &self.styles.selected_header
                } else {
                    &self.styles.header
                };
                style.clone().render(&fit(label, *width))
            })
            .collect();
        lines.push(header_line.join(&separator));

        let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        lines.push(self.styles.border.clone().render(&rule.join("─┼─")));

        if cells.is_empty() {
            lines.push(self.styles.empty.clone().render(EMPTY_TEXT));
        }
        for row in &cells {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| self.styles.cell.clone().render(&fit(cell, *width)))
                .collect();
            lines.push(line.join(&separator));
        }

        let count = self.filtered_len();
        let noun = if count == 1 { "row" } else { "rows" };
        let footer = format!("{} · {} {}", self.paginator.view(), count, noun);
        lines.push(self.styles.footer.clone().render(&footer));

        lines.join("\n")
    }
}
