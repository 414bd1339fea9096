use crate::config::AppConfig;
use crate::store::account::{deposit_money, withdraw_money, AccountAction, Balance};
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Deposit,
    Withdraw,
}

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Deposit => "Deposit",
            Button::Withdraw => "Withdraw",
        }
    }

    pub fn hotkey(self) -> char {
        match self {
            Button::Deposit => 'd',
            Button::Withdraw => 'w',
        }
    }

    pub fn other(self) -> Button {
        match self {
            Button::Deposit => Button::Withdraw,
            Button::Withdraw => Button::Deposit,
        }
    }
}

/// Everything the view needs to draw a frame. The balance here is the
/// view's copy, refreshed from the store subscription.
pub struct AppState {
    pub config: AppConfig,
    pub balance: Balance,
    pub focus: Button,
    /// Last known terminal area, used to hit-test mouse clicks.
    pub viewport: Rect,
    pub status_message: Option<String>,
    pub status_ticks_left: u32,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, balance: Balance) -> Self {
        Self {
            config,
            balance,
            focus: Button::Deposit,
            viewport: Rect::default(),
            status_message: None,
            status_ticks_left: 0,
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn set_balance(&mut self, balance: Balance) {
        if self.balance != balance {
            self.balance = balance;
            self.dirty = true;
        }
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
        self.dirty = true;
    }

    pub fn set_focus(&mut self, button: Button) {
        if self.focus != button {
            self.focus = button;
            self.dirty = true;
        }
    }

    pub fn cycle_focus(&mut self) {
        self.set_focus(self.focus.other());
    }

    /// The command a button press dispatches, with the configured amount.
    pub fn action_for(&self, button: Button) -> AccountAction {
        match button {
            Button::Deposit => deposit_money(self.config.ui.deposit_amount),
            Button::Withdraw => withdraw_money(self.config.ui.withdraw_amount),
        }
    }

    pub fn set_status(&mut self, text: String) {
        self.status_message = Some(text);
        self.status_ticks_left = self.config.ui.status_timeout_ticks;
        self.dirty = true;
    }

    /// Count down the status message; clears it when the timeout runs out.
    pub fn expire_status(&mut self) {
        if self.status_message.is_none() {
            return;
        }
        self.status_ticks_left = self.status_ticks_left.saturating_sub(1);
        if self.status_ticks_left == 0 {
            self.status_message = None;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        format!(
            "{} deposit | {} withdraw | Tab switch | Enter press | q quit",
            Button::Deposit.hotkey(),
            Button::Withdraw.hotkey()
        )
    }
}
