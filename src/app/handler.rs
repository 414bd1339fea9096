use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::BalanceChanged { balance } => {
            debug!(%balance, "view picked up new balance");
            state.set_balance(balance);
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            state.expire_status();
            // title colors shift every tick
            state.dirty = true;
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.set_viewport(Rect::new(0, 0, width, height));
            vec![]
        }
        _ => vec![],
    }
}

fn press(state: &mut AppState, button: Button) -> Vec<Action> {
    state.set_focus(button);
    let action = state.action_for(button);
    state.set_status(action.describe());
    vec![Action::Dispatch(action)]
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Hotkeys are bare letters; Ctrl-D / Alt-W etc. are not presses
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return vec![];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char(c) if c == Button::Deposit.hotkey() => press(state, Button::Deposit),
        KeyCode::Char(c) if c == Button::Withdraw.hotkey() => press(state, Button::Withdraw),
        KeyCode::Tab | KeyCode::BackTab => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::Left => {
            state.set_focus(Button::Deposit);
            vec![]
        }
        KeyCode::Right => {
            state.set_focus(Button::Withdraw);
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let focused = state.focus;
            press(state, focused)
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let pos = Position::new(mouse.column, mouse.row);
    let app_layout = layout::compute_layout(state.viewport);
    if app_layout.deposit_button.contains(pos) {
        press(state, Button::Deposit)
    } else if app_layout.withdraw_button.contains(pos) {
        press(state, Button::Withdraw)
    } else {
        vec![]
    }
}
