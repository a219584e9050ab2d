//! Success notification.

use std::io::Write;

/// Rings the terminal bell.
///
/// Errors writing to stdout are ignored: the cue is best effort.
pub fn ring_bell() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}
