//! Dukkan Engine - state, storage, and view synchronization.
//!
//! This crate is the headless core of the Dukkan inventory tracker. It keeps
//! three things consistent under every user action:
//!
//! 1. the in-memory product/user state ([`catalog`], [`session`]),
//! 2. the persisted key-value storage ([`store`]),
//! 3. the projected, render-ready view ([`view`]).
//!
//! Front ends drive it through [`app::App`]: build an `App` over a storage
//! backend and a [`prompt::Prompter`], feed it [`app::Intent`]s, and draw the
//! [`view::ProductView`] it returns. There is no other surface - no CLI and
//! no network API.
//!
//! # Modules
//!
//! - [`store`] - Typed repository over a pluggable string key-value backend
//! - [`models`] - Persisted record types (products, users, settings, package)
//! - [`catalog`] - In-memory product list and selection pointer
//! - [`session`] - Signup/login/logout and account updates
//! - [`avatar`] - Placeholder generation and file-to-data-URL reads
//! - [`view`] - Filtered rows, aggregate stats, critical ranking
//! - [`i18n`] - Localized user-facing text
//! - [`prompt`] - Injected confirmation/notification capability
//! - [`app`] - Application state object and intent dispatcher

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod avatar;
pub mod catalog;
pub mod i18n;
pub mod models;
pub mod prompt;
pub mod session;
pub mod store;
pub mod view;

pub use app::{App, Intent};
pub use catalog::{Catalog, ProductDraft};
pub use i18n::{Language, translate};
pub use models::{CATEGORIES, Package, PendingAction, Product, Settings, Theme, User};
pub use prompt::{AutoConfirm, Prompter};
pub use session::{AccountUpdate, LoginOutcome, SessionError, SessionService, SignupRequest};
pub use store::{FileBackend, MemoryBackend, StorageBackend, Store, StoreError};
pub use view::{CatalogStats, CriticalRow, ProductRow, ProductView, ViewQuery, project};
