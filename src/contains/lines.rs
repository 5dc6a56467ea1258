//! Newline-preserving line splitting for the containment check.

/// Split rendered template text into the lines the target must contain.
///
/// Every line keeps its trailing `\n` except the final one, mirroring a
/// sequence that ends without a trailing newline. A blob that ends with a
/// newline contributes no empty final line, so a target that already holds
/// every template line triggers zero writes.
pub(super) fn required_lines(blob: &str) -> Vec<Vec<u8>> {
    let mut parts: Vec<&str> = blob.split('\n').collect();
    // split always yields at least one element
    let last = parts.pop().unwrap_or("");

    let mut lines: Vec<Vec<u8>> = parts
        .into_iter()
        .map(|part| {
            let mut line = part.as_bytes().to_vec();
            line.push(b'\n');
            line
        })
        .collect();
    if !last.is_empty() {
        lines.push(last.as_bytes().to_vec());
    }
    lines
}

/// Split file content into physical lines, keeping each trailing newline.
pub(super) fn split_file_lines(content: &[u8]) -> Vec<Vec<u8>> {
    content
        .split_inclusive(|&byte| byte == b'\n')
        .map(<[u8]>::to_vec)
        .collect()
}
