use std::io::{self, Write};

/// Header printed before a non-empty result list
const RESULTS_HEADER: &str = "Search results:";

/// Line printed when a search matched nothing
const NO_RESULTS: &str = "No results found.";

/// Writes search results to `out`
///
/// A non-empty list renders as `Search results:` followed by one `- <url>`
/// line per result; an empty list renders as `No results found.`.
pub fn write_results<W: Write>(out: &mut W, results: &[String]) -> io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "{}", NO_RESULTS);
    }

    writeln!(out, "{}", RESULTS_HEADER)?;
    for result in results {
        writeln!(out, "- {}", result)?;
    }
    Ok(())
}

/// Formats search results as a string, one line per row
pub fn format_results(results: &[String]) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_results(&mut buffer, results);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Prints search results to stdout
pub fn print_results(results: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_results(&mut handle, results)
}
