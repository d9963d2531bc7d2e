//! File I/O utilities for reading JSONL history files and ensuring directories.
//!
//! ## Compressed File Support
//!
//! The `read_text_auto` function automatically detects and decompresses .zst
//! (Zstandard) compressed files based on the file extension, so run histories
//! can be archived compressed and analyzed in place.

/// Read text file with automatic .zst decompression detection.
///
/// If the path ends with ".zst", the file is decompressed with Zstandard
/// before decoding. A UTF-8 BOM (Byte Order Mark) is stripped if present.
///
/// # Arguments
///
/// * `path` - File path to read (supports .zst compressed files)
///
/// # Returns
///
/// * `Ok(String)` - File contents as UTF-8 string
/// * `Err(String)` - I/O error, decompression error, or UTF-8 conversion error
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        // Read entire compressed file then decompress; more portable across platforms
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::bulk::decompress(&comp, 8 * 1024 * 1024).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Ensure parent directory exists for given path, creating if needed.
///
/// # Arguments
///
/// * `path` - File path whose parent directory should exist
///
/// # Returns
///
/// * `Ok(())` - Parent directory exists or was created successfully
/// * `Err(String)` - Failed to create directory with error message
pub fn ensure_parent_dir(path: &std::path::Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
        }
    }
    Ok(())
}

/// Strip UTF-8 BOM (U+FEFF) from the beginning of a string if present.
fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
