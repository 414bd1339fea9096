use crate::store::account::AccountAction;

/// Side effects requested by the event handler, carried out by the main loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Dispatch(AccountAction),
    Quit,
}
