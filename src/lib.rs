//! Fewest-stop and fastest routes over a multi-line metro network.
//!
//! A [`network::MetroNetwork`] is built once, usually through a
//! [`network::adapters::NetworkAdapter`], and then queried read-only with
//! [`routing::fewest_edges_route`], [`routing::fastest_route`] and
//! [`routing::route_duration`].

pub mod error;
pub mod logging;
pub mod network;
pub mod report;
pub mod routing;
