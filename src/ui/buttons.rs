use crate::app::state::{AppState, Button};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, button: Button) {
    let focused = state.focus == button;
    let (border_style, border_type, label_style) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::button_label_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::button_label())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let line = Line::from(vec![
        Span::styled(format!("{} ", button.hotkey()), Theme::hotkey()),
        Span::styled(button.label(), label_style),
    ]);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
