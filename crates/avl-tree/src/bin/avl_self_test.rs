//! `avl-self-test` — run the built-in demonstration scenarios.
//!
//! Usage:
//!   avl-self-test
//!
//! Scenario output goes to stdout. Diagnostics go to stderr and are filtered
//! with `RUST_LOG` (default `warn`).

use algs_avl::{run_with_banner, self_tests};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for mut test in self_tests() {
        if let Err(e) = run_with_banner(test.as_mut(), &mut out) {
            eprintln!("{}: {e}", test.name());
            std::process::exit(1);
        }
    }
    if let Err(e) = out.flush() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
