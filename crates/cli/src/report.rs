//! Console rendering of a sequential lookup session.

use ferrous_lookup_domain::QueryResult;
use std::io::{self, Write};
use std::time::Duration;

/// Writes each result as soon as it arrives: records to `out`, failures and
/// slow-response warnings to `err`.
pub struct ConsoleReport<O: Write, E: Write> {
    out: O,
    err: E,
    slow_query_threshold: Duration,
}

impl ConsoleReport<io::Stdout, io::Stderr> {
    pub fn stdio(slow_query_threshold: Duration) -> Self {
        Self::new(io::stdout(), io::stderr(), slow_query_threshold)
    }
}

impl<O: Write, E: Write> ConsoleReport<O, E> {
    pub fn new(out: O, err: E, slow_query_threshold: Duration) -> Self {
        Self {
            out,
            err,
            slow_query_threshold,
        }
    }

    pub fn header(&mut self, domain: &str) -> io::Result<()> {
        writeln!(self.out, "\n🔍 Querying DNS records for: {}", domain)
    }

    pub fn result(&mut self, domain: &str, result: &QueryResult) -> io::Result<()> {
        match result {
            QueryResult::Success { record_type, records, .. } => {
                writeln!(self.out, "\n📌 {} Record(s) for {}:", record_type, domain)?;
                for record in records {
                    writeln!(self.out, "  {}", record)?;
                }
                let elapsed_ms = result.elapsed_ms().unwrap_or_default();
                writeln!(self.out, "⏱️  Response Time: {} ms", elapsed_ms)?;

                if result.is_slow(self.slow_query_threshold) {
                    writeln!(
                        self.err,
                        "⚠️ Slow response for {} record: {} ms",
                        record_type, elapsed_ms
                    )?;
                }
            }
            QueryResult::Failure { record_type, error } => {
                writeln!(
                    self.err,
                    "❌ Error fetching {} for {}: {}",
                    record_type, domain, error
                )?;
            }
        }

        Ok(())
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
