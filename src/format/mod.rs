//! Output formatting for price summaries (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::ebay::models::SearchQuery;
use crate::summary::PriceSummary;

/// Formats a price summary for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats the summary of a search.
    pub fn format_summary(&self, query: &SearchQuery, summary: &PriceSummary) -> String {
        match self.format {
            OutputFormat::Json => self.json(summary),
            OutputFormat::Table => self.table(query, summary),
            OutputFormat::Markdown => self.markdown(query, summary),
            OutputFormat::Csv => self.csv(summary),
        }
    }

    fn json(&self, summary: &PriceSummary) -> String {
        serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
    }

    fn table(&self, query: &SearchQuery, summary: &PriceSummary) -> String {
        let lines = [
            format!("Item:      {}", query.item),
            format!("Condition: {}", query.condition),
            format!("Site:      {}", query.country.domain()),
            format!("Price:     {:.2}", summary.price),
            format!("Shipping:  {:.2}", summary.shipping),
            format!("Total:     {:.2}", summary.total),
        ];
        lines.join("\n")
    }

    fn markdown(&self, query: &SearchQuery, summary: &PriceSummary) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {} ({}, {})", query.item, query.condition, query.country.domain()));
        lines.push(String::new());
        lines.push("| Price | Shipping | Total |".to_string());
        lines.push("|------:|---------:|------:|".to_string());
        lines.push(format!(
            "| {:.2} | {:.2} | {:.2} |",
            summary.price, summary.shipping, summary.total
        ));

        lines.join("\n")
    }

    fn csv(&self, summary: &PriceSummary) -> String {
        format!(
            "price,shipping,total\n{:.2},{:.2},{:.2}",
            summary.price, summary.shipping, summary.total
        )
    }
}
