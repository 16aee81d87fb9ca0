use std::path::Path;

pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub fn get_filename(filepath: &Path) -> &str {
    match filepath.file_name() {
        Some(os_str) => os_str.to_str().unwrap_or(""),
        None => "",
    }
}

/// case-insensitive check against `ACCEPTED_EXTENSIONS`
pub fn has_accepted_extension(filepath: &Path) -> bool {
    match filepath.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => ACCEPTED_EXTENSIONS
            .iter()
            .any(|accepted| ext.eq_ignore_ascii_case(accepted)),
        None => false,
    }
}
