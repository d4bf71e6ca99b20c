//! 24-bit ANSI terminal preview of a frame.

use std::io::{self, Write};

use crate::top_down::Frame;

const RESET: &str = "\x1b[0m";

/// Draw `frame` with one upper-half block per character cell, so each text row
/// shows two pixel rows (foreground = upper pixel, background = lower pixel).
pub fn write_ansi<W: Write>(frame: &Frame, out: &mut W) -> io::Result<()> {
    let rows: Vec<_> = frame.rows().collect();
    for pair in rows.chunks(2) {
        let upper = pair[0];
        let lower = pair.get(1).copied();
        for (x, top) in upper.iter().enumerate() {
            write!(out, "\x1b[38;2;{};{};{}m", top.r, top.g, top.b)?;
            match lower.and_then(|row| row.get(x)) {
                Some(bottom) => write!(out, "\x1b[48;2;{};{};{}m▀", bottom.r, bottom.g, bottom.b)?,
                None => write!(out, "\x1b[49m▀")?,
            }
        }
        writeln!(out, "{}", RESET)?;
    }
    out.flush()
}
