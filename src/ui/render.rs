use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{content_rect, layout_regions};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let state = app.posts().state();
    frame.render_widget(Header::new(app.source()).widget(&state), header);
    frame.render_widget(Clear, body);
    app.posts().render(frame, content_rect(area));
    frame.render_widget(Footer::new().widget(footer), footer);
}
