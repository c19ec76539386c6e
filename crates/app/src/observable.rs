//! Observable values.
//!
//! An [`Observable`] is a holder that notifies registered watchers when its
//! contents change. View-models expose their state through observables;
//! screens (or tests) register watchers and react to published values.
//!
//! Built on [`tokio::sync::watch`]: one writer, any number of watchers,
//! watchers only ever see the latest value.

use tokio::sync::watch;

/// A value holder that notifies watchers on change.
///
/// Cloning the observable clones the *handle*; all clones publish to the
/// same watchers.
#[derive(Debug, Clone)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Observable<T> {
    /// Create an observable holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// A clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Publish a new value, waking every watcher.
    ///
    /// Publishing succeeds even when nobody is watching.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Register a watcher.
    ///
    /// The watcher starts out having seen the current value; only
    /// subsequent publishes wake it.
    #[must_use]
    pub fn watch(&self) -> Watcher<T> {
        Watcher {
            rx: self.tx.subscribe(),
        }
    }
}

impl<T: Clone + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// A registered watcher of an [`Observable`].
#[derive(Debug)]
pub struct Watcher<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> Watcher<T> {
    /// A clone of the latest value, marking it as seen.
    #[must_use]
    pub fn current(&mut self) -> T {
        self.rx.borrow_and_update().clone()
    }

    /// Wait for the next publish and return the new value.
    ///
    /// Returns `None` once the observable has been dropped.
    pub async fn changed(&mut self) -> Option<T> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_returns_initial_value() {
        let observable = Observable::new(5);
        assert_eq!(observable.get(), 5);
    }

    #[tokio::test]
    async fn test_set_notifies_watcher() {
        let observable = Observable::new(0);
        let mut watcher = observable.watch();

        observable.set(7);
        assert_eq!(watcher.changed().await, Some(7));
    }

    #[tokio::test]
    async fn test_watcher_sees_only_latest_value() {
        let observable = Observable::new(0);
        let mut watcher = observable.watch();

        observable.set(1);
        observable.set(2);
        assert_eq!(watcher.changed().await, Some(2));
    }

    #[tokio::test]
    async fn test_multiple_watchers() {
        let observable = Observable::new(String::new());
        let mut first = observable.watch();
        let mut second = observable.watch();

        observable.set("hello".to_owned());
        assert_eq!(first.changed().await.as_deref(), Some("hello"));
        assert_eq!(second.changed().await.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_changed_after_drop() {
        let observable = Observable::new(1);
        let mut watcher = observable.watch();
        drop(observable);
        assert_eq!(watcher.changed().await, None);
    }

    #[tokio::test]
    async fn test_set_without_watchers_does_not_panic() {
        let observable = Observable::new(1);
        observable.set(2);
        assert_eq!(observable.get(), 2);
    }
}
