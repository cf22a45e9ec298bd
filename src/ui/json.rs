//! NDJSON output helpers

use std::io::{self, Write};

use serde::Serialize;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event<T: Serialize>(out: &mut impl Write, event: &T) -> io::Result<()> {
    let line =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Emit a value as one NDJSON line on stdout.
pub fn emit<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

/// Emit a value as pretty-printed JSON on stdout.
pub fn emit_document<T: Serialize>(value: &T) -> io::Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut out = io::stdout().lock();
    writeln!(out, "{text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_newline_delimited() {
        let mut out = Vec::new();
        write_event(&mut out, &serde_json::json!({"event": "frame", "text": "a"})).unwrap();
        write_event(&mut out, &serde_json::json!({"event": "frame", "text": "ab"})).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with("}\n"));
    }
}
