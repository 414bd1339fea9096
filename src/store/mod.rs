//! Global state container.
//!
//! A [`Store`] owns one state value and a pure reducer. Every dispatched
//! action replaces the state with `reducer(&state, &action)` and then calls
//! each subscriber with the new state, in the order they subscribed.

pub mod account;

use tracing::debug;

use account::{account_reducer, AccountAction, Balance};

pub type SubscriptionId = usize;

type Listener<S> = Box<dyn FnMut(&S)>;

pub struct Store<S, A> {
    state: S,
    reducer: fn(&S, &A) -> S,
    listeners: Vec<(SubscriptionId, Listener<S>)>,
    next_subscription_id: SubscriptionId,
}

impl<S, A> Store<S, A> {
    pub fn new(initial: S, reducer: fn(&S, &A) -> S) -> Self {
        Self {
            state: initial,
            reducer,
            listeners: Vec::new(),
            next_subscription_id: 0,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn dispatch(&mut self, action: A) {
        self.state = (self.reducer)(&self.state, &action);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&S) + 'static,
    {
        let id = self.next_subscription_id;
        self.next_subscription_id += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(subscription = id, "store subscriber added");
        id
    }

    /// Returns `false` if `id` was never issued or is already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Application-wide state. Each field is one reducer's slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootState {
    pub account: Balance,
}

pub fn root_reducer(state: &RootState, action: &AccountAction) -> RootState {
    RootState {
        account: account_reducer(state.account, action),
    }
}

pub type AppStore = Store<RootState, AccountAction>;

pub fn create_store(initial_balance: Balance) -> AppStore {
    Store::new(
        RootState {
            account: initial_balance,
        },
        root_reducer,
    )
}

#[cfg(test)]
mod tests {
    use super::account::{deposit_money, withdraw_money};
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_updates_state() {
        let mut store = create_store(Balance::ZERO);
        store.dispatch(deposit_money(1000));
        assert_eq!(store.state().account, Balance(1000));
        store.dispatch(withdraw_money(1000));
        assert_eq!(store.state().account, Balance::ZERO);
        store.dispatch(withdraw_money(1000));
        assert_eq!(store.state().account, Balance(-1000));
    }

    #[test]
    fn test_initial_balance_is_kept() {
        let store = create_store(Balance(250));
        assert_eq!(store.state().account, Balance(250));
    }

    #[test]
    fn test_subscribers_see_every_state_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = create_store(Balance::ZERO);

        let first = Rc::clone(&seen);
        store.subscribe(move |s: &RootState| first.borrow_mut().push(("a", s.account.0)));
        let second = Rc::clone(&seen);
        store.subscribe(move |s: &RootState| second.borrow_mut().push(("b", s.account.0)));

        store.dispatch(deposit_money(1000));
        store.dispatch(deposit_money(1000));
        store.dispatch(withdraw_money(1000));

        assert_eq!(
            *seen.borrow(),
            vec![
                ("a", 1000),
                ("b", 1000),
                ("a", 2000),
                ("b", 2000),
                ("a", 1000),
                ("b", 1000),
            ]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = create_store(Balance::ZERO);
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_: &RootState| *counter.borrow_mut() += 1);
        assert_eq!(store.subscriber_count(), 1);

        store.dispatch(deposit_money(1));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(deposit_money(1));

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
        assert_eq!(store.state().account, Balance(2));
    }

    #[test]
    fn test_subscription_ids_are_not_reused() {
        let mut store = create_store(Balance::ZERO);
        let a = store.subscribe(|_: &RootState| {});
        store.unsubscribe(a);
        let b = store.subscribe(|_: &RootState| {});
        assert_ne!(a, b);
    }
}
