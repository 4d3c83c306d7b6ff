//! Structured logging to stderr via `tracing`.
//!
//! `RUST_LOG`, when set, replaces the default directives. `-d` always turns
//! on debug output for ghstatus itself, on top of whichever directives apply.

use std::io::IsTerminal;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "ghstatus=info,octocrab=warn";
const DEBUG_DIRECTIVE: &str = "ghstatus=debug";

pub fn init_logging(debug: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter_layer = build_filter(debug, env.as_deref());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

fn build_filter(debug: bool, env: Option<&str>) -> EnvFilter {
    let filter = env
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES));

    if !debug {
        return filter;
    }
    match DEBUG_DIRECTIVE.parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}
