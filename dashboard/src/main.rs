//! Dash Dashboard – console host for the range picker.
//!
//! This binary:
//! 1. Reads configuration from `dashboard.conf`
//! 2. Builds a range picker over the initial range (the last N days)
//! 3. Routes console commands to the picker as page activations, and
//!    turns each completed selection into refresh requests for the
//!    charts and the best-sellers table.

mod console;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use dash_common::config::{self, Config};
use dash_common::protocol::{RangeSelectedEvent, RefreshRequest};
use dash_picker::visibility::{ActivationHooks, PickerId};
use dash_picker::{render, RangePicker, SelectOutcome, SelectedRange};

use console::Command;

const CHART_SERIES: [&str; 3] = ["orders", "sales", "customers"];

/// Document click routing of the console host.
struct ConsoleHooks;

impl ActivationHooks for ConsoleHooks {
    fn subscribe(&mut self, picker: PickerId) {
        tracing::debug!("Routing document activations to {picker}");
    }

    fn unsubscribe(&mut self, picker: PickerId) {
        tracing::debug!("Stopped routing document activations to {picker}");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    // ── load config ──────────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => config::load(&PathBuf::from(&path)).context("Config load failed")?,
        None => config::load_or_default(&PathBuf::from(Config::default_path()))
            .context("Config load failed")?,
    };

    // ── ctrl-c ───────────────────────────────────────────────────────
    ctrlc::set_handler(move || {
        info!("Shutdown signal received");
        std::process::exit(0);
    })
    .context("Cannot set Ctrl-C handler")?;

    // ── picker ───────────────────────────────────────────────────────
    let today = chrono::Local::now().date_naive();
    let (from, to) = config.initial_range(today);
    let mut picker = RangePicker::with_hooks(SelectedRange::new(from, to), ConsoleHooks);

    let backend_url = config.backend_url.clone();
    let limit = config.bestsellers_limit;
    picker.on_range_selected(move |range| {
        let event = RangeSelectedEvent {
            from: range.from,
            to: range.to,
        };
        for request in refresh_requests(&backend_url, limit, &event) {
            match serde_json::to_string(&request) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::warn!("Cannot encode refresh request: {e}"),
            }
        }
    });

    info!(
        "Dashboard starting ({} – backend={})",
        picker.label(),
        config.backend_url
    );
    println!("{}", console::HELP);

    // ── command loop ─────────────────────────────────────────────────
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("Cannot read stdin")?;
        let cmd = match console::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        if cmd == Command::Quit {
            break;
        }
        execute(&mut picker, cmd);
        stdout.flush().ok();
    }

    info!("Dashboard stopped");
    Ok(())
}

fn execute(picker: &mut RangePicker, cmd: Command) {
    match cmd {
        Command::Toggle => {
            let v = picker.activate_toggle();
            println!("[{}] aria-expanded={}", picker.label(), v.expanded());
            show(picker);
        }
        Command::Open => {
            picker.open();
            show(picker);
        }
        Command::Close => picker.close(),
        Command::Pick(value) => match picker.select_cell(&value) {
            SelectOutcome::Ignored => println!("no selectable cell `{value}`"),
            SelectOutcome::Started(date) => {
                println!("from {date}, pick the end date");
                show(picker);
            }
            SelectOutcome::Completed(range) => println!("selected {range}"),
        },
        Command::Navigate(direction) => {
            picker.navigate(direction);
            show(picker);
        }
        Command::Outside => picker.on_document_activation(None),
        Command::Show => show(picker),
        Command::Range => {
            let range = picker.current_range();
            println!(
                "from={} to={} ({:?}, {:?})",
                range.from.map(|d| d.to_string()).unwrap_or_default(),
                range.to.map(|d| d.to_string()).unwrap_or_default(),
                picker.phase(),
                picker.visibility(),
            );
        }
        Command::Help => println!("{}", console::HELP),
        Command::Quit => {}
    }
}

fn show(picker: &RangePicker) {
    if !picker.visibility().is_open() {
        println!("[{}] (closed)", picker.label());
        return;
    }
    if let Some(months) = picker.months() {
        print!("{}", render::render_months(months));
    }
}

/// One refetch per chart series plus the best-sellers table.
fn refresh_requests(backend_url: &str, limit: u32, event: &RangeSelectedEvent) -> Vec<RefreshRequest> {
    CHART_SERIES
        .iter()
        .map(|series| RefreshRequest::chart(backend_url, series, event))
        .chain(std::iter::once(RefreshRequest::bestsellers(backend_url, limit, event)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_refresh_requests_cover_all_collaborators() {
        let event = RangeSelectedEvent {
            from: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            to: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        };
        let requests = refresh_requests("http://api/", 20, &event);
        let names: Vec<_> = requests.iter().map(|r| r.collaborator.as_str()).collect();
        assert_eq!(
            names,
            vec!["orders-chart", "sales-chart", "customers-chart", "bestsellers-table"]
        );
        assert!(requests.iter().all(|r| r.url.ends_with("from=2024-01-03&to=2024-01-05")));
    }
}
