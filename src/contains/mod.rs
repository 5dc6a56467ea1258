//! The line-containment check.
//!
//! Renders one template source and ensures every rendered line is present,
//! verbatim, in the target file. Lines already present (in any order) are
//! left alone; missing lines are appended at the end, in template order.
//! The target's existing lines are never rewritten or reordered.

mod lines;


use crate::diff::unified_diff;
use crate::error::{EnsureError, Result};
use crate::outcome::CheckOutcome;
use crate::render::{RenderService, SourceRef, TemplateOptions, get_template_texts};
use lines::{required_lines, split_file_lines};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Ensure the target file `name` contains every line of the rendered
/// `source` template, appending only the missing ones.
///
/// Membership is an exact byte match against the target's existing lines;
/// no whitespace or line-ending normalization is applied. When the check
/// mutates the target, a unified diff of the mutation is stored under
/// `changes["diff"]`.
///
/// A render failure is returned as the renderer's failed outcome without
/// touching the target. An unreadable or unwritable target surfaces as
/// `Err`.
///
/// Writes are not atomic: a crash mid-append leaves the lines written so
/// far in place. Concurrent checks against the same target can race.
pub fn contains(
    service: &dyn RenderService,
    name: &Path,
    source: &str,
    options: &TemplateOptions,
) -> Result<CheckOutcome> {
    let sources = [SourceRef::new(source)];
    let rendered = get_template_texts(service, &sources, options)?;
    if !rendered.result {
        // A failed render must not degrade into a no-op check.
        return Ok(rendered);
    }

    let mut ret = CheckOutcome::new(name.display().to_string());

    let Some(blob) = rendered.data.as_ref().and_then(|chunks| chunks.first()) else {
        return Ok(ret.fail(format!("render produced no output for source {source}")));
    };

    let before = std::fs::read(name).map_err(|io| EnsureError::TargetIo {
        action: "read",
        path: name.to_path_buf(),
        io,
    })?;
    let existing = split_file_lines(&before);

    let required = required_lines(blob);
    if required.is_empty() {
        ret.comment = "template rendered no required lines".to_string();
        return Ok(ret);
    }

    let mut to_append: Vec<&[u8]> = Vec::new();
    for line in &required {
        if !existing.contains(line) {
            to_append.push(line);
        }
    }

    if !to_append.is_empty() {
        let mut file =
            OpenOptions::new()
                .append(true)
                .open(name)
                .map_err(|io| EnsureError::TargetIo {
                    action: "append to",
                    path: name.to_path_buf(),
                    io,
                })?;
        for line in &to_append {
            file.write_all(line).map_err(|io| EnsureError::TargetIo {
                action: "append to",
                path: name.to_path_buf(),
                io,
            })?;
        }
    }

    let after = std::fs::read(name).map_err(|io| EnsureError::TargetIo {
        action: "re-read",
        path: name.to_path_buf(),
        io,
    })?;
    if before != after {
        ret.changes
            .insert("diff".to_string(), unified_diff(&before, &after, &ret.name));
        ret.comment = format!("appended {} missing line(s)", to_append.len());
    } else {
        ret.comment = "all required lines already present".to_string();
    }
    debug!(
        target = %name.display(),
        appended = to_append.len(),
        "containment check complete"
    );

    Ok(ret)
}
