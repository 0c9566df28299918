//! Namespace registry boundary and permission-gated path resolution.
//!
//! The registry itself is owned by the host runtime. This crate only describes
//! what it must expose ([`RegistryClient`]) and walks slash-delimited paths
//! through it ([`PathResolver`]).
//!
//! # Resolution rules
//!
//! * Every non-terminal segment must name a group the caller can read.
//! * The terminal segment must name a group; its permissions are not checked,
//!   enumeration of the group filters per item on the registry side.
//! * Permission denial and absence both surface as [`ResolveError::PathNotFound`]
//!   so unauthorized callers cannot probe for namespace existence.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod path;
pub mod resolve;

pub use client::{GroupHandle, ItemKind, Node, Permission, RegistryClient, RegistryItem};
pub use error::{ResolveError, Result};
pub use path::NamespacePath;
pub use resolve::PathResolver;
