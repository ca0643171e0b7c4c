//! Body line segmentation

/// Split a record body into candidate declaration lines.
///
/// Lines are trimmed; blank lines and lines starting with `#` are dropped. Source order is kept.
pub fn body_lines(body: &str) -> Vec<&str> {
    body.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}
