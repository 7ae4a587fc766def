//! Input reading for the report commands.
//!
//! - Reading text files with automatic .zst decompression
//! - Reading a whole stream (stdin) as text
//!
//! Both strip a leading UTF-8 BOM. Errors are converted to `String` for easy
//! integration with command error handling.

use std::io::Read;

/// Path value that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Read text file with automatic .zst decompression detection.
///
/// If the path ends with ".zst", the file is decompressed using Zstandard.
/// UTF-8 BOM (Byte Order Mark) is stripped if present.
///
/// # Example
///
/// ```rust,no_run
/// # use handsort_cli::io_utils::read_text_auto;
///
/// let content = read_text_auto("hands.txt").unwrap();
/// let compressed = read_text_auto("hands.txt.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| format!("{}: {}", path, e))?;
        let dec = zstd::bulk::decompress(&comp, 8 * 1024 * 1024)
            .map_err(|e| format!("{}: {}", path, e))?;
        String::from_utf8(dec).map_err(|e| format!("{}: {}", path, e))?
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Read `reader` to the end as UTF-8 text.
pub fn read_all(reader: &mut dyn Read) -> Result<String, String> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| format!("stdin: {}", e))?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Read `path`, or `stdin` when the path is [`STDIN_PATH`].
pub fn read_input(path: &str, stdin: &mut dyn Read) -> Result<String, String> {
    if path == STDIN_PATH {
        read_all(stdin)
    } else {
        read_text_auto(path)
    }
}

/// Strip UTF-8 BOM (U+FEFF) from the beginning of a string if present.
fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
