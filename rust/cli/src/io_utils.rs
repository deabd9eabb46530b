//! File and stdin helpers.
//!
//! - Reading one trimmed line of interactive input
//! - Reading word lists, with automatic .zst decompression and BOM stripping

use std::io::{self, BufRead};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line, or `Ok(None)` on EOF. Read errors are passed
/// through so callers can tell a closed input from a broken one.
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use bingo_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_stdin_line(&mut handle)? {
///     println!("You entered: {}", line);
/// }
/// # Ok::<(), io::Error>(())
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    match stdin.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line.trim().to_string())),
    }
}

/// Read a text file, decompressing it first when the path ends in ".zst".
/// A leading UTF-8 BOM is removed.
///
/// # Example
///
/// ```rust,no_run
/// # use bingo_cli::io_utils::read_text_auto;
/// let words = read_text_auto("words.txt").unwrap();
/// let packed = read_text_auto("words.txt.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| format!("{}: {}", path, e))?;
        let dec = zstd::bulk::decompress(&comp, 8 * 1024 * 1024).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
