use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::sync::Arc;
use tokio::sync::watch;

use crate::service::DataService;
use crate::ui::posts::card::PostCard;
use crate::ui::posts::state::PostListState;
use crate::ui::posts::view_model::PostListViewModel;
use crate::ui::theme::ACCENT;

pub const HEADING: &str = "List of posts";

/// Cards never stretch wider than this, matching a phone-width column.
const CARD_MAX_WIDTH: u16 = 72;
const CARD_SPACING: u16 = 1;
const HEADING_HEIGHT: u16 = 2;

/// Scrollable list of post cards under a static heading.
///
/// The view owns its view model and a receiver on the view model's slot.
/// It renders whatever the slot holds at draw time; [`PostListView::changed`]
/// tells the caller when a redraw is due.
pub struct PostListView {
    view_model: PostListViewModel,
    updates: watch::Receiver<PostListState>,
    scroll_offset: usize,
}

impl PostListView {
    pub fn new(service: Arc<dyn DataService>) -> Self {
        let view_model = PostListViewModel::new(service);
        let updates = view_model.subscribe();
        Self {
            view_model,
            updates,
            scroll_offset: 0,
        }
    }

    pub fn view_model_mut(&mut self) -> &mut PostListViewModel {
        &mut self.view_model
    }

    pub fn state(&self) -> PostListState {
        self.updates.borrow().clone()
    }

    /// Card models in display order.
    pub fn cards(&self) -> Vec<PostCard> {
        self.updates.borrow().posts().iter().map(PostCard::new).collect()
    }

    /// Resolves once the observable slot holds a new value.
    pub async fn changed(&mut self) {
        if self.updates.changed().await.is_err() {
            // Slot owner is gone; nothing will ever change again.
            std::future::pending::<()>().await;
        }
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn scroll_down(&mut self) {
        let count = self.updates.borrow().posts().len();
        if self.scroll_offset + 1 < count {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let [heading_area, list_area] =
            Layout::vertical([Constraint::Length(HEADING_HEIGHT), Constraint::Min(0)])
                .areas(area);

        let heading_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        frame.render_widget(
            Paragraph::new(Line::styled(HEADING, heading_style)),
            heading_area,
        );

        let width = list_area.width.min(CARD_MAX_WIDTH);
        let bottom = list_area.bottom();
        let mut y = list_area.y;

        for card in self.cards().into_iter().skip(self.scroll_offset) {
            if y >= bottom {
                break;
            }
            let height = card.height(width).min(bottom - y);
            let card_area = Rect {
                x: list_area.x,
                y,
                width,
                height,
            };
            frame.render_widget(card, card_area);
            y = y.saturating_add(height).saturating_add(CARD_SPACING);
        }
    }
}
