use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let amount_style = if state.balance.is_negative() {
        Theme::balance_negative()
    } else {
        Theme::balance_positive()
    };
    let line = Line::from(vec![
        Span::styled("Account: ", Theme::title()),
        Span::styled(state.balance.to_string(), amount_style),
    ]);

    // Vertically center the single line
    let rows = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(inner);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), rows[0]);
}
