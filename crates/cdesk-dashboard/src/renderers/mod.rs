//! Per-section renderers.
//!
//! Sections with plain tabular data share [`ColumnsRenderer`]; the rest get a
//! dedicated renderer that formats their values.

mod appointments;
mod columns;
mod inventory;
mod invoices;

pub use appointments::AppointmentsRenderer;
pub use columns::ColumnsRenderer;
pub use inventory::InventoryRenderer;
pub use invoices::InvoicesRenderer;

use cdesk_paging::{Record, RenderDispatcher, SectionKind, field_text};

/// Placeholder for absent fields.
const MISSING: &str = "-";

/// Dispatcher with a renderer for every section.
pub fn default_dispatcher(window_radius: usize) -> RenderDispatcher {
    let mut dispatcher = RenderDispatcher::new(window_radius);
    dispatcher.register_renderer(Box::new(ColumnsRenderer::new(
        SectionKind::Users,
        &["name", "email", "role"],
    )));
    dispatcher.register_renderer(Box::new(AppointmentsRenderer));
    dispatcher.register_renderer(Box::new(InvoicesRenderer));
    dispatcher.register_renderer(Box::new(
        ColumnsRenderer::new(SectionKind::Faqs, &["question", "category"])
            .with_empty_message("No FAQs published."),
    ));
    dispatcher.register_renderer(Box::new(ColumnsRenderer::new(
        SectionKind::Evaluations,
        &["clinician", "score", "comment"],
    )));
    dispatcher.register_renderer(Box::new(InventoryRenderer));
    dispatcher.register_renderer(Box::new(ColumnsRenderer::new(
        SectionKind::Sites,
        &["name", "city"],
    )));
    dispatcher.register_renderer(Box::new(ColumnsRenderer::new(
        SectionKind::Categories,
        &["name"],
    )));
    dispatcher.register_renderer(Box::new(ColumnsRenderer::new(
        SectionKind::Suppliers,
        &["name", "contact"],
    )));
    dispatcher
}

fn cell(record: &Record, field: &str) -> String {
    field_text(record, field).unwrap_or_else(|| MISSING.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_a_renderer() {
        let dispatcher = default_dispatcher(2);
        for section in SectionKind::ALL {
            assert!(dispatcher.has_renderer(section), "{section}");
        }
        assert_eq!(dispatcher.window_radius(), 2);
    }
}
