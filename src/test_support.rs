//! Test fixtures shared across module tests.

use crate::error::Result;
use crate::render::{RenderRequest, RenderService};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tempfile::TempDir;

/// In-memory render service double.
///
/// Maps source identifiers to template bodies, substitutes `{key}`
/// placeholders from the request context, and writes the result into a held
/// temp dir, mimicking the real service's scratch files. Sources registered
/// as failing return `Ok(None)` the way the real service reports a template
/// it cannot load.
pub(crate) struct StaticRenderService {
    dir: TempDir,
    templates: BTreeMap<String, String>,
    failing: Vec<String>,
}

impl StaticRenderService {
    pub(crate) fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            templates: BTreeMap::new(),
            failing: Vec::new(),
        }
    }

    pub(crate) fn with_template(mut self, source: &str, body: &str) -> Self {
        self.templates.insert(source.to_string(), body.to_string());
        self
    }

    pub(crate) fn with_failing(mut self, source: &str) -> Self {
        self.failing.push(source.to_string());
        self
    }
}

fn substitute(body: &str, context: &BTreeMap<String, Value>) -> String {
    let mut out = body.to_string();
    for (key, value) in context {
        let placeholder = format!("{{{key}}}");
        let replacement = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        out = out.replace(&placeholder, &replacement);
    }
    out
}

impl RenderService for StaticRenderService {
    fn get_template(&self, request: &RenderRequest<'_>) -> Result<Option<PathBuf>> {
        if self.failing.iter().any(|s| s == request.source) {
            return Ok(None);
        }
        let Some(body) = self.templates.get(request.source) else {
            return Ok(None);
        };
        let rendered = substitute(body, request.context);
        let path = self
            .dir
            .path()
            .join(format!("{}.rendered", request.source.replace('/', "_")));
        std::fs::write(&path, rendered).unwrap();
        Ok(Some(path))
    }
}
