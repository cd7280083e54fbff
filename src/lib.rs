//! # folio
//!
//! Leptos + WASM frontend for a static personal portfolio site.
//!
//! This crate contains the page, its components, per-concern UI state, the
//! contact relay client, browser utilities (theme, smooth scroll, lazy
//! images, section reveal), and build-time configuration. Project filtering
//! lives in the `catalog` crate; the components here only feed it clicks
//! and display what it produces.
//!
//! Browser-only code sits behind the `csr` feature. Without it every browser
//! helper is a no-op, which keeps native builds and tests deterministic.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
