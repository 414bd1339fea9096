use crate::store::account::Balance;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The store committed a new balance
    BalanceChanged { balance: Balance },

    /// Tick for UI refresh
    Tick,
}
