use crate::application::dto::CheckResponse;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// TextReportFormatter adapter producing the human-readable report
///
/// Layout:
/// ```text
/// ❌ Found 1 circular dependency chain(s):
///
/// Chain 1 (3 nodes):
///   example.com/a → example.com/b → example.com/a
///
/// cache miss (expired) · 2 modules, 2 internal edges, 1 external edge ignored
/// ```
pub struct TextReportFormatter {
    colored: bool,
}

impl TextReportFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn verdict(&self, response: &CheckResponse) -> String {
        let count = response.outcome.cycle_count();
        match (response.has_cycles(), self.colored) {
            (false, false) => "✅ No circular dependencies found".to_string(),
            (false, true) => format!("✅ {}", "No circular dependencies found".green().bold()),
            (true, false) => format!("❌ Found {} circular dependency chain(s):", count),
            (true, true) => format!(
                "❌ {}",
                format!("Found {} circular dependency chain(s):", count).red().bold()
            ),
        }
    }

    fn footer(&self, response: &CheckResponse) -> String {
        let mut footer = response.cache_status.to_string();
        if let Some(summary) = &response.summary {
            let _ = write!(
                footer,
                " · {} modules, {} internal edges, {} external {} ignored",
                summary.module_count,
                summary.internal_edge_count,
                summary.external_edge_count,
                if summary.external_edge_count == 1 { "edge" } else { "edges" }
            );
        }
        if self.colored {
            footer.dimmed().to_string()
        } else {
            footer
        }
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, response: &CheckResponse) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "{}", self.verdict(response))?;

        for (index, cycle) in response.outcome.cycles().iter().enumerate() {
            writeln!(out)?;
            writeln!(out, "Chain {} ({} nodes):", index + 1, cycle.len())?;
            writeln!(out, "  {}", cycle.render())?;
        }

        writeln!(out)?;
        writeln!(out, "{}", self.footer(response))?;
        Ok(out)
    }
}
