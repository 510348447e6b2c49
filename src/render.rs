// ringlist/src/render.rs
//! Turns the filtered file list into a paste-ready JS array literal.
//!
//! Output shape:
//!
//! ```text
//!
//! --- COPY THE CODE BELOW ---
//!
//! const ringImageFiles = [
//!     'images/a.png',
//! ];
//!
//! ---------------------------
//!
//! ```

use std::{
    fmt::Write as _,
    io::{self, Write},
};
use crate::config::{
    BANNER_END,
    BANNER_START,
    LIST_VAR_NAME,
    PATH_PREFIX
};

/// Render the full snippet, banners included. Pure; names are inserted verbatim.
pub fn render_snippet<S: AsRef<str>>(files: &[S]) -> String {
    let mut out = String::with_capacity(128 + files.len() * 48);
    // writing into a String cannot fail
    let _ = writeln!(out, "\n{BANNER_START}\n");
    let _ = writeln!(out, "const {LIST_VAR_NAME} = [");
    for f in files {
        let _ = writeln!(out, "    '{PATH_PREFIX}{}',", f.as_ref());
    }
    out.push_str("];\n");
    let _ = writeln!(out, "\n{BANNER_END}\n");
    out
}

pub fn write_snippet<W: Write, S: AsRef<str>>(out: &mut W, files: &[S]) -> io::Result<()> {
    out.write_all(render_snippet(files).as_bytes())?;
    out.flush()
}
