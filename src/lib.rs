/// Account record: stable identifier plus a mutex-guarded balance.
/// The identifier doubles as the lock acquisition order for transfers.
pub mod account;

/// Parses raw boundary rows into typed ledger operations.
pub mod command;

/// Fire-and-forget notification of completed transfers.
pub mod notify;

/// Service facade: account creation, lookup and transfer over a shared
/// store, plus the top-level error type callers match on.
pub mod service;

/// Concurrent account store, keyed by identifier. Creation and lookup are
/// safe alongside in-flight transfers.
pub mod store;

/// The transfer engine: request validation and the ordered dual-lock
/// balance update.
pub mod transfer;

/// Ideally, this module should exist on its own crate, as a way to
/// bootstrap core logic. However, I want to use it for integration test
/// so I put it here.
pub mod bin_utils;
