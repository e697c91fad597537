//! Port traits - boundaries between the gateway and the outside world.

pub mod outbound;
