//! Unified-diff rendering over raw file content.

use similar::TextDiff;

/// Render a unified diff between two byte buffers, line by line.
///
/// Content is compared as raw bytes so the diff matches exactly what was
/// read from and written to the target file; non-UTF-8 lines render
/// lossily in the output text.
pub(crate) fn unified_diff(old: &[u8], new: &[u8], label: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .header(label, label)
        .to_string()
}
