//! Flutter (Dart) template catalogs.
//!
//! `shared` keeps all bodies that are identical across state-management
//! variants; only their imports vary, which is what the
//! [`PathProfile`](featforge_core::domain::PathProfile) parameter spells
//! out. Each state-management submodule adds only its own state-container
//! and screen bodies.

pub mod bloc;
pub mod cubit;
pub mod provider;
pub mod riverpod;
pub mod shared;
