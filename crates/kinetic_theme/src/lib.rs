//! Kinetic Theme System
//!
//! Tri-state theme preference (`light` / `dark` / `system`) resolved to a
//! binary scheme, with persistence and live system-scheme tracking.
//!
//! # Overview
//!
//! - **Resolution**: `light` and `dark` resolve to themselves; `system`
//!   tracks the operating system's color-scheme signal. The resolved value
//!   is always concrete, never `system`.
//! - **Persistence**: concrete choices are stored under a fixed `theme` key;
//!   choosing `system` clears the stored override. Missing or unreadable
//!   storage means `system`, never an error.
//! - **Lifecycle**: the manager is an owned object with explicit
//!   init/shutdown. Handles read the resolved scheme; reading through a
//!   handle after shutdown is a wiring defect and panics.
//!
//! # Quick Start
//!
//! ```rust
//! use kinetic_theme::{MemoryStore, SystemSchemeSource, ThemeChoice, ThemeManager};
//!
//! let mut manager = ThemeManager::init(
//!     Box::new(MemoryStore::default()),
//!     Box::new(SystemSchemeSource),
//! );
//!
//! let handle = manager.handle();
//! manager.set_choice(ThemeChoice::Dark);
//! assert_eq!(handle.resolved_attr(), "dark");
//! ```

pub mod manager;
pub mod scheme;
pub mod source;
pub mod store;
pub mod watcher;

pub use manager::{ThemeHandle, ThemeManager};
pub use scheme::{ColorScheme, ThemeChoice};
pub use source::{detect_system_color_scheme, SchemeSource, SharedSchemeSource, SystemSchemeSource};
pub use store::{FilePreferenceStore, MemoryStore, NullStore, PreferenceStore, StoreError};
pub use watcher::{SystemSchemeWatcher, WatcherConfig};
