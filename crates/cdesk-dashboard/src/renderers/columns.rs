use cdesk_paging::{PageMeta, Panel, Record, SectionKind, SectionRenderer};

use super::cell;

/// Renders each record as selected fields joined by `" | "`.
#[derive(Debug, Clone)]
pub struct ColumnsRenderer {
    section: SectionKind,
    columns: &'static [&'static str],
    empty_message: &'static str,
}

impl ColumnsRenderer {
    pub fn new(section: SectionKind, columns: &'static [&'static str]) -> Self {
        Self {
            section,
            columns,
            empty_message: "No records to display.",
        }
    }

    #[must_use]
    pub fn with_empty_message(mut self, message: &'static str) -> Self {
        self.empty_message = message;
        self
    }
}

impl SectionRenderer for ColumnsRenderer {
    fn section(&self) -> SectionKind {
        self.section
    }

    fn paint(&self, panel: &mut Panel, items: &[&Record], _meta: &PageMeta) {
        for record in items {
            let row: Vec<String> = self.columns.iter().map(|c| cell(record, c)).collect();
            panel.push_row(row.join(" | "));
        }
    }

    fn empty_message(&self) -> &str {
        self.empty_message
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn meta() -> PageMeta {
        PageMeta {
            section: SectionKind::Sites,
            current_page: 1,
            total_pages: 1,
            total_items: 1,
            start_index: 0,
            end_index: 1,
        }
    }

    #[test]
    fn test_missing_fields_show_placeholder() {
        let renderer = ColumnsRenderer::new(SectionKind::Sites, &["name", "city"]);
        let record = json!({"name": "Central Clinic"});
        let mut panel = Panel::new("Sites");
        renderer.paint(&mut panel, &[&record], &meta());
        assert_eq!(panel.rows(), ["Central Clinic | -"]);
    }
}
