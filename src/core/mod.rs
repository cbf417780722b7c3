//! # Core Application Logic
//!
//! This module contains the lost & found business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Store (listings)     │
//!                    │  • Query (filters)      │
//!                    │  • State + Action       │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │ list (CLI) │      │  Backend   │
//!     │  Adapter   │      │  command   │      │  (future)  │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`]: The `Item` record and its enums
//! - [`store`]: `ItemProvider` trait and the seeded in-memory store
//! - [`query`]: Search and filter functions over item lists
//! - [`form`]: Post-item form fields and validation
//! - [`navigation`]: Tabs and the detail route
//! - [`screen`]: Per-screen search/filter state and notices
//! - [`contact`]: `mailto:`/`tel:` hand-off to the OS
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod contact;
pub mod form;
pub mod item;
pub mod navigation;
pub mod query;
pub mod screen;
pub mod state;
pub mod store;
