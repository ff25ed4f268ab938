use crate::ui::posts::PostListState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_PENDING};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: load status and which data service is injected.
pub struct Header<'a> {
    source: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    pub fn widget(&self, state: &PostListState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, marker_style) = match state {
            PostListState::AwaitingFirstResult => {
                ("Loading".to_string(), Style::default().fg(STATUS_PENDING))
            }
            PostListState::Populated { posts } => (
                format!("{} posts", posts.len()),
                Style::default().fg(STATUS_OK),
            ),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", marker_style),
            Span::styled("  ", text_style),
            Span::styled(status, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.source.to_string(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
