pub mod rng;
pub mod state;
pub mod time;

pub use rng::Rng;
pub use state::{AtomState, ParticleCounts, SubscriptionId};
pub use time::AnimationClock;
