use serde::{Deserialize, Serialize};

// the persisted theme flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeState {
    pub is_dark_mode: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        ThemeState { is_dark_mode: true }
    }
}

impl ThemeState {
    // class placed on the document root, which the stylesheet keys off
    pub fn scope_class(&self) -> &'static str {
        if self.is_dark_mode { "dark" } else { "light" }
    }
}

// where the theme lives between sessions
//
// persistence is best-effort: a failed load yields None and the store falls back to the
// default, a failed save is the implementation's problem to log
pub trait ThemePersistence {
    fn load(&self) -> Option<ThemeState>;

    fn save(&self, state: &ThemeState);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&ThemeState)>;

pub struct ThemeStore<P: ThemePersistence> {
    state: ThemeState,
    persistence: P,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<P: ThemePersistence> ThemeStore<P> {
    pub fn new(persistence: P) -> Self {
        let state = persistence.load().unwrap_or_default();

        ThemeStore {
            state,
            persistence,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    // flip, persist, then notify, so that listeners always observe a saved state
    pub fn toggle(&mut self) {
        self.state.is_dark_mode = !self.state.is_dark_mode;
        self.persistence.save(&self.state);

        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }

    // the listener is called once immediately with the current state
    pub fn subscribe(&mut self, listener: impl Fn(&ThemeState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        listener(&self.state);
        self.listeners.push((id, Box::new(listener)));

        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(other, _)| *other != id);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Clone, Default)]
    struct MemoryPersistence {
        saved: Rc<RefCell<Option<ThemeState>>>,
    }

    impl ThemePersistence for MemoryPersistence {
        fn load(&self) -> Option<ThemeState> {
            *self.saved.borrow()
        }

        fn save(&self, state: &ThemeState) {
            *self.saved.borrow_mut() = Some(*state);
        }
    }

    #[test]
    fn defaults_to_dark() {
        let store = ThemeStore::new(MemoryPersistence::default());

        assert!(store.state().is_dark_mode);
        assert_eq!(store.state().scope_class(), "dark");
    }

    #[test]
    fn restores_saved_state() {
        let persistence = MemoryPersistence::default();
        persistence.save(&ThemeState {
            is_dark_mode: false,
        });

        let store = ThemeStore::new(persistence);

        assert!(!store.state().is_dark_mode);
    }

    #[test]
    fn double_toggle_round_trips_and_persists() {
        let persistence = MemoryPersistence::default();
        let mut store = ThemeStore::new(persistence.clone());
        let original = store.state();

        store.toggle();
        assert_ne!(store.state(), original);
        assert_eq!(*persistence.saved.borrow(), Some(store.state()));

        store.toggle();
        assert_eq!(store.state(), original);
        assert_eq!(*persistence.saved.borrow(), Some(store.state()));
    }

    #[test]
    fn subscribers_are_notified_until_removed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ThemeStore::new(MemoryPersistence::default());

        let id = store.subscribe({
            let seen = seen.clone();
            move |state: &ThemeState| seen.borrow_mut().push(state.is_dark_mode)
        });

        store.toggle();
        store.unsubscribe(id);
        store.toggle();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn serialized_form() {
        let json = serde_json::to_string(&ThemeState::default()).unwrap();

        assert_eq!(json, r#"{"isDarkMode":true}"#);
    }
}
