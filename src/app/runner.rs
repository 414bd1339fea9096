use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::store::AppStore;
use tracing::info;

/// Run one event through the handler and carry out the resulting actions.
/// Returns `true` when the app should quit.
///
/// The view's balance is read back from the store before returning, so the
/// next frame never pairs a new status message with the old balance.
pub fn process_event(store: &mut AppStore, state: &mut AppState, event: AppEvent) -> bool {
    let actions = handler::handle_event(state, event);

    for action in actions {
        match action {
            Action::Dispatch(command) => {
                store.dispatch(command);
                info!(
                    ?command,
                    balance = %store.state().account,
                    "dispatched"
                );
            }
            Action::Quit => {
                state.should_quit = true;
            }
        }
    }

    state.set_balance(store.state().account);
    state.should_quit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::store::account::Balance;
    use crate::store::{create_store, RootState};
    use crate::ui;
    use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tokio::sync::mpsc;

    fn key(c: char) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
    }

    fn screen(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
        terminal.draw(|f| ui::render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_press_then_draw_shows_new_balance() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut store = create_store(Balance::ZERO);
        store.subscribe(move |root: &RootState| {
            let _ = tx.send(AppEvent::BalanceChanged {
                balance: root.account,
            });
        });
        let mut state = AppState::new(AppConfig::default(), store.state().account);

        assert!(!process_event(&mut store, &mut state, key('d')));
        assert_eq!(store.state().account, Balance(1000));

        // drawn before the subscription's event is handled
        let frame = screen(&state);
        assert!(frame.contains("Deposited 1000"));
        assert!(frame.contains("Account: 1000"));
        assert!(!frame.contains("Account: 0"));

        // the queued notification agrees and changes nothing
        let queued = rx.try_recv().unwrap();
        state.dirty = false;
        assert!(!process_event(&mut store, &mut state, queued));
        assert_eq!(state.balance, Balance(1000));
        assert!(!state.dirty);
    }

    #[test]
    fn test_sequence_of_presses() {
        let mut store = create_store(Balance::ZERO);
        let mut state = AppState::new(AppConfig::default(), Balance::ZERO);
        for c in ['d', 'd', 'w'] {
            process_event(&mut store, &mut state, key(c));
        }
        assert_eq!(store.state().account, Balance(1000));
        assert!(screen(&state).contains("Account: 1000"));

        process_event(&mut store, &mut state, key('w'));
        process_event(&mut store, &mut state, key('w'));
        assert!(screen(&state).contains("Account: -1000"));
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut store = create_store(Balance::ZERO);
        let mut state = AppState::new(AppConfig::default(), Balance::ZERO);
        assert!(!process_event(&mut store, &mut state, AppEvent::Tick));
        assert!(process_event(&mut store, &mut state, key('q')));
        assert_eq!(store.state().account, Balance::ZERO);
    }
}
