use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Widget};

use crate::model::Post;
use crate::ui::theme::{BODY_TEXT, CARD_BORDER, HEADER_TEXT};

/// Borders plus one column of padding on each side.
const HORIZONTAL_CHROME: u16 = 4;
const VERTICAL_CHROME: u16 = 2;

/// One post rendered as a bordered card: title on top, body below.
#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    title: String,
    body: String,
}

impl PostCard {
    pub fn new(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            body: post.body.clone(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Rows needed to show the whole card at `width` columns.
    pub fn height(&self, width: u16) -> u16 {
        let inner = inner_width(width);
        let rows = wrap_words(&self.title, inner).len() + wrap_words(&self.body, inner).len();
        u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_add(VERTICAL_CHROME)
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let inner = inner_width(width);
        let title_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        let body_style = Style::default().fg(BODY_TEXT).add_modifier(Modifier::DIM);

        let mut lines: Vec<Line<'static>> = wrap_words(&self.title, inner)
            .into_iter()
            .map(|line| Line::styled(line, title_style))
            .collect();
        lines.extend(
            wrap_words(&self.body, inner)
                .into_iter()
                .map(|line| Line::styled(line, body_style)),
        );
        lines
    }
}

impl Widget for PostCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(CARD_BORDER))
            .padding(Padding::horizontal(1));
        Paragraph::new(self.lines(area.width))
            .block(block)
            .render(area, buf);
    }
}

fn inner_width(width: u16) -> usize {
    usize::from(width.saturating_sub(HORIZONTAL_CHROME)).max(1)
}

/// Greedy word wrap by character count.
///
/// Words longer than `width` are split hard. Explicit newlines start a new
/// line. Always returns at least one line, possibly empty.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in paragraph.split_whitespace() {
            let mut word = word;
            let mut word_len = word.chars().count();

            if current_len > 0 && current_len + 1 + word_len > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }

            while word_len > width {
                let split = word
                    .char_indices()
                    .nth(width)
                    .map(|(idx, _)| idx)
                    .unwrap_or(word.len());
                lines.push(word[..split].to_string());
                word = &word[split..];
                word_len -= width;
            }

            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
        }

        lines.push(current);
    }

    lines
}
