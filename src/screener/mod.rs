//! Watchlist screening across many symbols.

pub mod scanner;
pub mod watchlist;

pub use scanner::WatchlistScanner;
pub use watchlist::parse_watchlist;
