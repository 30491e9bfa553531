//! Crawl statistics rendering
//!
//! Turns a [`CrawlReport`] into the human-readable block printed with
//! `--stats`.

use crate::crawler::CrawlReport;
use crate::state::PageState;
use std::fmt::Write;

/// Formats crawl statistics as a multi-line string
pub fn format_statistics(report: &CrawlReport) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = write_statistics(&mut out, report);
    out
}

fn write_statistics(out: &mut String, report: &CrawlReport) -> std::fmt::Result {
    writeln!(out, "=== Crawl Statistics ===\n")?;

    writeln!(out, "Overview:")?;
    writeln!(out, "  Seed: {}", report.seed)?;
    writeln!(out, "  Scope: {}", report.scope)?;
    writeln!(out, "  Pages fetched: {}", report.pages_fetched)?;
    writeln!(out, "  Pages indexed: {}", report.pages_indexed())?;
    writeln!(out, "  Internal links: {}", report.internal_links)?;
    writeln!(
        out,
        "  External links skipped: {}",
        report.external_links_skipped
    )?;
    writeln!(out, "  Already visited: {}", report.already_visited)?;
    if report.unresolvable_links > 0 {
        writeln!(out, "  Unresolvable links: {}", report.unresolvable_links)?;
    }
    let duration = report.duration();
    writeln!(
        out,
        "  Duration: {}.{:03}s",
        duration.num_seconds(),
        duration.num_milliseconds() % 1000
    )?;
    if report.truncated {
        writeln!(out, "  Stopped early: page limit reached")?;
    }
    writeln!(out)?;

    writeln!(out, "Pages by State:")?;
    for state in PageState::all_states() {
        let count = report.count(state);
        if count == 0 {
            continue;
        }
        writeln!(
            out,
            "  {}: {} ({:.1}%)",
            state,
            count,
            percentage(count, report.pages_fetched)
        )?;
    }
    writeln!(out)?;

    if report.pages_failed() > 0 {
        writeln!(out, "Failures:")?;
        writeln!(out, "  Transport: {}", report.transport_failures())?;
        writeln!(
            out,
            "  Content: {}",
            report.pages_failed() - report.transport_failures()
        )?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "Success Rate: {:.1}% ({} / {} pages successfully indexed)",
        percentage(report.pages_indexed(), report.pages_fetched),
        report.pages_indexed(),
        report.pages_fetched
    )
}

fn percentage(count: u64, total: u64) -> f64 {
    if total > 0 {
        (count as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(report: &CrawlReport) {
    print!("{}", format_statistics(report));
}
