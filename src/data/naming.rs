//! Sample file names follow `<prefix>.<id>.<index>.<ext>`, the `<id>` part
//! is the identity label the recognizer is trained with.

/// extracts the identity label from a file name, `None` if the name does not follow the scheme
pub fn parse_label(filename: &str) -> Option<i32> {
    let parts: Vec<&str> = filename.split('.').collect();
    if parts.len() < 4 {
        return None;
    }
    let id = parts[1];
    if id.is_empty() || !id.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    // all digits but too large for a recognizer label
    id.parse::<i32>().ok()
}

pub fn sample_filename(prefix: &str, label: i32, index: usize, extension: &str) -> String {
    format!("{}.{}.{}.{}", prefix, label, index, extension)
}
