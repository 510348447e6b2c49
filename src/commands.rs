// ringlist/src/commands.rs

use anyhow::{
    Context,
    Result
};
use std::{
    env,
    io::{
        self,
        Write
    },
    path::Path
};
use crate::{
    config::IMAGE_DIR,
    error::ScanError,
    render,
    scan
};

pub fn run_cli() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("list");

    match cmd {
        "list"  => {
            let stdout = io::stdout();
            run(Path::new(IMAGE_DIR), &mut stdout.lock())?
        }
        "help" | "-h" | "--help" | _ => print_help(),
    }
    Ok(())
}

/// List `dir` and write the snippet to `out`.
///
/// A missing folder is reported on `out` and is not an error; anything else
/// the scan hits is returned.
pub fn run<W: Write>(dir: &Path, out: &mut W) -> Result<()> {
    match scan::list_images(dir) {
        Ok(files) => render::write_snippet(out, &files).context("writing snippet to stdout"),
        Err(e @ ScanError::DirectoryNotFound(_)) => {
            log::debug!("{e}");
            writeln!(out, "Error: {e}").context("writing to stdout")
        }
        Err(e) => Err(e).with_context(|| format!("listing images in {}", dir.display())),
    }
}

fn print_help() {
    println!(
r#"
ringlist: print a JS array of the images in ./{IMAGE_DIR}

USAGE:
    ringlist              # Scan ./{IMAGE_DIR} and print `const ringImageFiles = [...]`
    ringlist help         # Show this message

Set RUST_LOG=debug to see which entries were skipped (stderr).
"#    );
}
