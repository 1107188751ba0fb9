//! Fugle market data REST source.

pub mod client;

pub use client::FugleClient;
