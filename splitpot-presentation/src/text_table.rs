use std::{borrow::Cow, fmt::Write};

const COLUMN_SEPARATOR: &str = " | ";

#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    /// Renders a pipe table; missing cells render empty, extra cells are dropped.
    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| text_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().enumerate().take(col_count) {
                col_widths[i] = col_widths[i].max(text_width(cell));
            }
        }

        let alignment_at = |i: usize| self.alignments.get(i).copied().unwrap_or_default();

        let mut out = String::with_capacity(256);
        write_line(&mut out, self.headers, &col_widths, &alignment_at);

        out.push('|');
        for (i, width) in col_widths.iter().enumerate() {
            let dashes = "-".repeat(*width);
            let rule = match alignment_at(i) {
                Alignment::Left => format!("-{dashes}-"),
                Alignment::Center => format!(":{dashes}:"),
                Alignment::Right => format!("-{dashes}:"),
            };
            out.push_str(&rule);
            out.push('|');
        }
        out.push('\n');

        for row in &self.rows {
            write_line(&mut out, row.as_ref(), &col_widths, &alignment_at);
        }

        out
    }
}

fn write_line(
    out: &mut String,
    cells: &[Cow<'_, str>],
    col_widths: &[usize],
    alignment_at: &dyn Fn(usize) -> Alignment,
) {
    let rendered: Vec<String> = col_widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map(|c| c.as_ref()).unwrap_or("");
            pad(cell, *width, alignment_at(i))
        })
        .collect();
    let _ = writeln!(out, "| {} |", rendered.join(COLUMN_SEPARATOR));
}

fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    let fill = width.saturating_sub(text_width(text));
    match alignment {
        Alignment::Left => format!("{text}{}", " ".repeat(fill)),
        Alignment::Right => format!("{}{text}", " ".repeat(fill)),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
        }
    }
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}
