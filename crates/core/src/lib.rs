//! Core library for Labdash — the contracts behind the sample-tracking
//! dashboard: configuration, worksheet search autocomplete, status badges,
//! the samples table, and confirmation modals.
//!
//! Everything here is pure, synchronous logic. Network access lives in
//! `labdash-client`; rendering lives in the desktop app.

pub mod badge;
pub mod config;
pub mod modal;
pub mod page;
pub mod suggest;
pub mod table;
