//! Text content laid out on a character grid.

use super::detector::ContentNode;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Child text of an expandable, word-wrapped to a width.
///
/// A width of zero means the content has not been laid out, and measuring it
/// yields nothing.
#[derive(Debug, Clone, Default)]
pub struct TextContent {
    text: String,
    width: usize,
    rows: Vec<String>,
}

impl TextContent {
    /// Wraps `text` to `width` columns.
    pub fn new(text: impl Into<String>, width: usize) -> Self {
        let mut content = Self {
            text: text.into(),
            width,
            rows: Vec::new(),
        };
        content.relayout();
        content
    }

    /// Replaces the text and lays it out again.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.relayout();
    }

    /// Changes the layout width.
    pub fn set_width(&mut self, width: usize) {
        if width != self.width {
            self.width = width;
            self.relayout();
        }
    }

    /// Raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Layout width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Laid out rows.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Whether the content has a layout.
    pub fn is_laid_out(&self) -> bool {
        self.width > 0
    }

    fn relayout(&mut self) {
        self.rows = if self.width == 0 {
            Vec::new()
        } else {
            wrap(&self.text, self.width)
        };
    }
}

impl ContentNode for TextContent {
    fn natural_height(&self, row_height_px: f64) -> Option<f64> {
        if !self.is_laid_out() {
            return None;
        }
        Some(self.rows.len() as f64 * row_height_px)
    }
}

/// Word-wraps every paragraph of `text` to `width` display columns.
///
/// Words longer than a row are broken by grapheme. Trailing whitespace at a
/// wrap point is dropped, and a single trailing newline ends the last row
/// rather than opening an empty one.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let mut rows = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, width, &mut rows);
    }
    rows
}

fn wrap_paragraph(paragraph: &str, width: usize, rows: &mut Vec<String>) {
    let mut row = String::new();
    let mut row_width = 0;

    for word in paragraph.split_word_bounds() {
        let word_width = display_width(word);
        let is_space = word.trim().is_empty();

        if row_width + word_width <= width {
            row.push_str(word);
            row_width += word_width;
            continue;
        }
        if is_space {
            // The break swallows the space.
            rows.push(std::mem::take(&mut row).trim_end().to_string());
            row_width = 0;
            continue;
        }
        if row_width > 0 {
            rows.push(std::mem::take(&mut row).trim_end().to_string());
            row_width = 0;
        }
        if word_width <= width {
            row.push_str(word);
            row_width = word_width;
            continue;
        }
        for grapheme in word.graphemes(true) {
            let g_width = grapheme.width();
            if row_width + g_width > width && row_width > 0 {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push_str(grapheme);
            row_width += g_width;
        }
    }

    if !row.is_empty() || rows.is_empty() || paragraph.is_empty() {
        rows.push(row.trim_end().to_string());
    }
}

fn display_width(s: &str) -> usize {
    if s.contains('\u{1b}') {
        strip_ansi_escapes::strip_str(s).width()
    } else {
        s.width()
    }
}
