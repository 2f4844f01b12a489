mod channel;

pub use channel::{Channel, EventEmitter, EventObserver, SubscriptionId, Unsubscriber};

/// Implemented by components holding subscriptions whose closures keep the
/// component itself alive; the reference cycle is only broken by `destroy`.
pub trait Destroyable {
    fn destroy(&mut self);
}
