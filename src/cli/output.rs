//! Handles all user-facing output for the CLI.
//!
//! Errors are rendered as `miette` reports on stderr; the `check` summary is
//! colorized with `termcolor`.

use std::io::Write;
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::ast::File;
use crate::JsgoError;

/// Renders `error` with its labeled document snippet.
pub fn print_error(error: JsgoError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}

pub fn print_ast(file: &File) {
    println!("{file:#?}");
}

/// Prints one `check` line: a mark, the path, and the statement count on success.
pub fn print_check_line(path: &Path, statements: Option<usize>) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    match statements {
        Some(count) => {
            let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
            let _ = write!(stdout, "ok");
            let _ = stdout.reset();
            let _ = writeln!(stdout, "   {} ({} statements)", path.display(), count);
        }
        None => {
            let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
            let _ = write!(stdout, "fail");
            let _ = stdout.reset();
            let _ = writeln!(stdout, " {}", path.display());
        }
    }
}

pub fn print_check_summary(passed: usize, failed: usize) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_bold(true));
    let _ = writeln!(stdout, "\n{} checked, {} ok, {} failed", passed + failed, passed, failed);
    let _ = stdout.reset();
}
