//! Append-only registry of transit callbacks.

use crate::index::RoutingIndex;
use crate::RoutingError;

/// Arc cost between two routing indices.
///
/// Non-negative by contract. A negative value marks an absent arc: the
/// route builder skips such candidates and the evaluator rejects orders
/// that traverse them. Overflow across large sums is a caller concern.
pub type Cost = i64;

/// Borrowed form of an arc cost function.
///
/// Must be a pure mapping from an index pair to a cost so that repeated
/// solves stay deterministic.
pub type TransitFn = dyn Fn(RoutingIndex, RoutingIndex) -> Cost + Send + Sync;

/// A registered arc cost function, owned by the registry.
pub type TransitCallback = Box<TransitFn>;

/// Opaque reference to a registered transit callback.
///
/// Only values returned by [`TransitCallbackRegistry::register`] (or
/// [`RoutingModel::register_transit_callback`](crate::model::RoutingModel::register_transit_callback))
/// resolve against the registry that minted them; anything else is reported
/// as [`RoutingError::UnregisteredCallback`] when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackHandle {
    index: usize,
}

impl CallbackHandle {
    /// Reconstructs a handle from its raw value.
    ///
    /// Useful for wire formats that carry handles as plain integers; the
    /// value is validated the first time the handle is used.
    pub fn from_value(value: usize) -> Self {
        Self { index: value }
    }

    /// Raw value of this handle.
    pub fn value(&self) -> usize {
        self.index
    }
}

/// Append-only store of transit callbacks for one routing model.
///
/// Callbacks may be registered at any time before solving; none can be
/// removed for the lifetime of the model.
///
/// # Examples
///
/// ```
/// use routefirst::transit::TransitCallbackRegistry;
///
/// let mut registry = TransitCallbackRegistry::new();
/// let handle = registry.register(Box::new(|from, to| {
///     (to as i64 - from as i64).abs()
/// }));
/// let transit = registry.get(handle).unwrap();
/// assert_eq!(transit(0, 4), 4);
/// ```
#[derive(Default)]
pub struct TransitCallbackRegistry {
    callbacks: Vec<TransitCallback>,
}

impl TransitCallbackRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Registers a callback and returns its handle.
    ///
    /// Handles are assigned in registration order.
    pub fn register(&mut self, callback: TransitCallback) -> CallbackHandle {
        let handle = CallbackHandle {
            index: self.callbacks.len(),
        };
        self.callbacks.push(callback);
        handle
    }

    /// Resolves a handle to its callback.
    ///
    /// Returns [`RoutingError::UnregisteredCallback`] for handles never
    /// returned by [`register`](Self::register) on this registry.
    pub fn get(&self, handle: CallbackHandle) -> Result<&TransitCallback, RoutingError> {
        self.callbacks
            .get(handle.index)
            .ok_or(RoutingError::UnregisteredCallback {
                handle: handle.index,
            })
    }

    /// Returns `true` if the handle resolves on this registry.
    pub fn contains(&self, handle: CallbackHandle) -> bool {
        handle.index < self.callbacks.len()
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Returns `true` if no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl std::fmt::Debug for TransitCallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitCallbackRegistry")
            .field("len", &self.callbacks.len())
            .finish()
    }
}
