//! Template rendering through the engine's external render service.
//!
//! The configuration-management engine owns the actual template pipeline;
//! this crate only drives it. Callers inject the pipeline as a
//! [`RenderService`] (an explicit dependency, rather than a process-global
//! callable), and [`get_template_texts`] iterates a list of sources,
//! renders each one, and reads the rendered scratch file back into a text
//! blob.
//!
//! Failure reporting follows the engine's conventions: expected failures
//! (empty source list, a source the service cannot load, an empty rendered
//! file) come back as a failed [`CheckOutcome`]; only service and I/O
//! breakage surfaces as `Err`.

use crate::error::{EnsureError, Result};
use crate::outcome::CheckOutcome;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;


/// Identifies one template to render: a source identifier plus an optional
/// content hash for sources the engine verifies on fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Source identifier (e.g. an engine-scheme URL).
    pub source: String,
    /// Expected content hash, if the caller wants fetch verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

impl SourceRef {
    /// Reference a source with no content hash.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            source_hash: None,
        }
    }
}

/// Options passed through to the render service.
#[derive(Debug, Clone)]
pub struct TemplateOptions {
    /// Template engine identifier (e.g. "jinja").
    pub engine: String,
    /// Environment/namespace the source is resolved in.
    pub env: String,
    /// Default variable bindings.
    pub defaults: Option<BTreeMap<String, Value>>,
    /// Override context; wins over `defaults` on key collision.
    pub context: Option<BTreeMap<String, Value>>,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            engine: "jinja".to_string(),
            env: "base".to_string(),
            defaults: None,
            context: None,
        }
    }
}

impl TemplateOptions {
    /// Merge defaults and overrides into the context handed to the service.
    pub(crate) fn merged_context(&self) -> BTreeMap<String, Value> {
        let mut merged = self.defaults.clone().unwrap_or_default();
        if let Some(overrides) = &self.context {
            for (key, value) in overrides {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}

/// One render request handed to the service.
#[derive(Debug)]
pub struct RenderRequest<'a> {
    /// Source identifier to render.
    pub source: &'a str,
    /// Destination hint; empty when the service should pick a scratch path.
    pub dest: &'a str,
    /// Template engine identifier.
    pub engine: &'a str,
    /// Environment/namespace identifier.
    pub env: &'a str,
    /// Merged variable context.
    pub context: &'a BTreeMap<String, Value>,
}

/// The external rendering service the engine injects.
pub trait RenderService {
    /// Render `request.source`, returning the path of the rendered output
    /// file, or `None` when the service could not produce one (missing
    /// source, engine rejection). `Err` is reserved for service breakage.
    fn get_template(&self, request: &RenderRequest<'_>) -> Result<Option<PathBuf>>;
}

/// Render each source in `sources` and collect one text blob per source,
/// in input order, under the outcome's `data`.
///
/// Any failure short-circuits: remaining sources are not rendered and
/// partial blobs are discarded. On a per-source failure the outcome's
/// `name` is set to the failing source.
pub fn get_template_texts(
    service: &dyn RenderService,
    sources: &[SourceRef],
    options: &TemplateOptions,
) -> Result<CheckOutcome> {
    let mut ret = CheckOutcome::new("get_template_texts");

    if sources.is_empty() {
        return Ok(ret.fail("get_template_texts called with an empty source list"));
    }

    let context = options.merged_context();
    let mut blobs = Vec::with_capacity(sources.len());

    for source_ref in sources {
        let request = RenderRequest {
            source: &source_ref.source,
            dest: "",
            engine: &options.engine,
            env: &options.env,
            context: &context,
        };
        let rendered = service.get_template(&request)?;
        debug!(source = %source_ref.source, rendered = ?rendered, "get_template returned");

        let Some(path) = rendered else {
            ret.name = source_ref.source.clone();
            return Ok(ret.fail(format!(
                "failed to load template file {}",
                source_ref.source
            )));
        };

        let bytes = std::fs::read(&path).map_err(|io| EnsureError::RenderedRead {
            path: path.clone(),
            io,
        })?;
        if bytes.is_empty() {
            ret.name = source_ref.source.clone();
            return Ok(ret.fail(format!(
                "failed to read rendered template file {} ({})",
                path.display(),
                source_ref.source
            )));
        }
        blobs.push(String::from_utf8_lossy(&bytes).into_owned());
    }

    ret.data = Some(blobs);
    Ok(ret)
}
