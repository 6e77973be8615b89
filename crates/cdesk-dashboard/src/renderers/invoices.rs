use cdesk_paging::{PageMeta, Panel, Record, SectionKind, SectionRenderer};

use super::cell;

/// Invoice rows with two-decimal amounts; overdue invoices are flagged.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoicesRenderer;

impl SectionRenderer for InvoicesRenderer {
    fn section(&self) -> SectionKind {
        SectionKind::Invoices
    }

    fn paint(&self, panel: &mut Panel, items: &[&Record], _meta: &PageMeta) {
        for record in items {
            let amount = record["amount"]
                .as_f64()
                .map_or_else(|| cell(record, "amount"), |a| format!("{a:.2}"));
            let status = cell(record, "status");
            let flag = if status.eq_ignore_ascii_case("overdue") {
                " !"
            } else {
                ""
            };
            panel.push_row(format!(
                "{} | {} | {} | {}{}",
                cell(record, "number"),
                cell(record, "patient"),
                amount,
                status,
                flag
            ));
        }
    }

    fn empty_message(&self) -> &str {
        "No invoices yet."
    }
}
