use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub const BUTTON_WIDTH: u16 = 16;
pub const BUTTON_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub title_bar: Rect,
    pub balance: Rect,
    pub deposit_button: Rect,
    pub withdraw_button: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Vertical: title | balance | buttons | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title bar
            Constraint::Min(3),                // Balance panel
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    let title_bar = main_chunks[0];
    let balance = main_chunks[1];
    let button_row = main_chunks[2];
    let status_bar = main_chunks[3];

    // Two buttons centered side by side
    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .spacing(2)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(button_row);

    AppLayout {
        title_bar,
        balance,
        deposit_button: button_chunks[0],
        withdraw_button: button_chunks[1],
        status_bar,
    }
}
