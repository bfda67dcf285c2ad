//! Observable market quotes.
//!
//! A [`SimpleQuote`] is a shared handle: clones refer to the same value, so the
//! caller can keep one copy and hand others to rate helpers. Every update bumps
//! a version counter and notifies subscribers synchronously. Nothing rebuilds
//! automatically; consumers compare versions to detect staleness.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Identifier returned by [`SimpleQuote::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Arc<dyn Fn(Option<f64>) + Send + Sync>;

#[derive(Default)]
struct QuoteState {
    value: Option<f64>,
    version: u64,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

/// A mutable, observable numeric market value.
///
/// # Example
///
/// ```rust
/// use tenor_core::quote::SimpleQuote;
///
/// let quote = SimpleQuote::new(0.02);
/// let shared = quote.clone();
/// quote.set_value(0.025);
/// assert_eq!(shared.value(), Some(0.025));
/// assert_eq!(shared.version(), 1);
/// ```
#[derive(Clone, Default)]
pub struct SimpleQuote {
    inner: Arc<RwLock<QuoteState>>,
}

impl SimpleQuote {
    /// Creates a quote holding `value`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(QuoteState {
                value: Some(value),
                ..QuoteState::default()
            })),
        }
    }

    /// Creates a quote with no value yet.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Current value, `None` if unset or not finite.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.inner.read().value.filter(|v| v.is_finite())
    }

    /// True if the quote holds a finite value.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.value().is_some()
    }

    /// Number of updates applied since creation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.read().version
    }

    /// Sets a new value and notifies subscribers.
    ///
    /// Returns the previous value.
    pub fn set_value(&self, value: f64) -> Option<f64> {
        self.update(Some(value))
    }

    /// Clears the value and notifies subscribers.
    pub fn reset(&self) -> Option<f64> {
        self.update(None)
    }

    fn update(&self, value: Option<f64>) -> Option<f64> {
        let (previous, callbacks) = {
            let mut state = self.inner.write();
            let previous = std::mem::replace(&mut state.value, value);
            state.version += 1;
            let callbacks: Vec<Callback> =
                state.subscribers.iter().map(|(_, cb)| Arc::clone(cb)).collect();
            (previous, callbacks)
        };

        // Lock released: callbacks may read the quote.
        for callback in callbacks {
            callback(value);
        }
        previous
    }

    /// Registers a callback invoked with the new value after every update.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<f64>) + Send + Sync + 'static,
    {
        let mut state = self.inner.write();
        let id = SubscriptionId(state.next_id);
        state.next_id += 1;
        state.subscribers.push((id, Arc::new(callback)));
        id
    }

    /// Removes a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.inner.write();
        let before = state.subscribers.len();
        state.subscribers.retain(|(sid, _)| *sid != id);
        state.subscribers.len() != before
    }

    /// True if both handles refer to the same quote.
    #[must_use]
    pub fn ptr_eq(&self, other: &SimpleQuote) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SimpleQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.read();
        f.debug_struct("SimpleQuote")
            .field("value", &state.value)
            .field("version", &state.version)
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}

impl From<f64> for SimpleQuote {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
