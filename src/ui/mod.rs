mod balance;
mod buttons;
pub mod layout;
mod status_bar;
mod theme;
mod title_bar;

use crate::app::state::{AppState, Button};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());

    title_bar::render(frame, app_layout.title_bar, state);
    balance::render(frame, app_layout.balance, state);
    buttons::render(frame, app_layout.deposit_button, state, Button::Deposit);
    buttons::render(frame, app_layout.withdraw_button, state, Button::Withdraw);
    status_bar::render(frame, app_layout.status_bar, state);
}
