//! One-shot fetch lifecycle
//!
//! `Idle → Loading → Loaded | Failed`. Both end states are terminal: a
//! second result for the same fetch is ignored and there is no retry.

/// Progress of a single request made on mount
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    /// Move to `Loading`; returns false if the fetch already started
    pub fn start(&mut self) -> bool {
        if matches!(self, FetchState::Idle) {
            *self = FetchState::Loading;
            true
        } else {
            false
        }
    }

    /// Record the outcome of the request
    pub fn resolve(&mut self, result: Result<T, String>) {
        if !matches!(self, FetchState::Loading) {
            return;
        }

        *self = match result {
            Ok(value) => FetchState::Loaded(value),
            Err(message) => FetchState::Failed(message),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut state: FetchState<Vec<u8>> = FetchState::default();
        assert!(state.start());
        assert!(state.is_loading());

        state.resolve(Ok(vec![1, 2]));
        assert_eq!(state.value(), Some(&vec![1, 2]));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failure_is_terminal() {
        let mut state: FetchState<Vec<u8>> = FetchState::default();
        state.start();
        state.resolve(Err("Could not fetch places".to_string()));

        assert_eq!(state.error(), Some("Could not fetch places"));
        assert_eq!(state.value(), None);

        assert!(!state.start());
        state.resolve(Ok(vec![1]));
        assert_eq!(state.error(), Some("Could not fetch places"));
    }

    #[test]
    fn test_resolve_without_start_is_ignored() {
        let mut state: FetchState<u8> = FetchState::default();
        state.resolve(Ok(1));
        assert_eq!(state, FetchState::Idle);
    }
}
