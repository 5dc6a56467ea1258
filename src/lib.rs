//! Line-containment file check for configuration-management engines.
//!
//! This crate adds one custom check to a configuration-management system:
//! ensure that a target file contains every line of a rendered template,
//! appending only the lines that are missing. Membership is order-independent
//! and byte-exact; the target's existing lines are never reordered or
//! rewritten, and missing lines are appended at the end in template order.
//!
//! Two operations make up the public surface:
//!
//! - [`get_template_texts`]: render an ordered list of template sources
//!   through the engine's [`RenderService`] and collect one text blob per
//!   source.
//! - [`contains`]: render a single source, diff its lines against a target
//!   file, append the missing ones, and report a unified diff of the
//!   mutation.
//!
//! Both return a [`CheckOutcome`] record in the shape the calling engine
//! consumes: `{name, changes, result, comment, data}`.
//!
//! # Example
//!
//! ```no_run
//! use ensure_lines::{contains, RenderRequest, RenderService, Result, TemplateOptions};
//! use std::path::{Path, PathBuf};
//!
//! struct Engine;
//!
//! impl RenderService for Engine {
//!     fn get_template(&self, _request: &RenderRequest<'_>) -> Result<Option<PathBuf>> {
//!         // Hand the source to the real rendering pipeline here.
//!         Ok(Some(PathBuf::from("/tmp/rendered")))
//!     }
//! }
//!
//! let outcome = contains(
//!     &Engine,
//!     Path::new("/etc/motd"),
//!     "salt://motd.tmpl",
//!     &TemplateOptions::default(),
//! )?;
//! assert!(outcome.result);
//! # Ok::<(), ensure_lines::EnsureError>(())
//! ```
//!
//! # Limitations
//!
//! Writes are not atomic and there is no file locking: two simultaneous
//! checks against the same target can race. Appended-line order is template
//! order and is not configurable.

pub mod contains;
mod diff;
pub mod error;
pub mod outcome;
pub mod render;

#[cfg(test)]
mod test_support;

pub use contains::contains;
pub use error::{EnsureError, Result};
pub use outcome::CheckOutcome;
pub use render::{RenderRequest, RenderService, SourceRef, TemplateOptions, get_template_texts};
