//! # `latest` module
//!
//! Keeps track of the chain head once an endpoint passed the probe. Followers
//! report the current head right away and then every new block, either as a
//! plain number or as a normalized header, over a `watch` channel.

pub mod follow;
