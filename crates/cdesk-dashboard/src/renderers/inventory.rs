use cdesk_paging::{PageMeta, Panel, Record, SectionKind, SectionRenderer};

use super::cell;

/// Stock rows; items at or below their reorder level are marked `LOW`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryRenderer;

impl SectionRenderer for InventoryRenderer {
    fn section(&self) -> SectionKind {
        SectionKind::Inventory
    }

    fn paint(&self, panel: &mut Panel, items: &[&Record], _meta: &PageMeta) {
        for record in items {
            let low = match (record["quantity"].as_u64(), record["reorder_level"].as_u64()) {
                (Some(quantity), Some(level)) => quantity <= level,
                _ => false,
            };
            panel.push_row(format!(
                "{} | {} | {}{}",
                cell(record, "sku"),
                cell(record, "name"),
                cell(record, "quantity"),
                if low { " LOW" } else { "" }
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_marks_low_stock() {
        let low = json!({"sku": "A", "name": "Gloves", "quantity": 5, "reorder_level": 10});
        let fine = json!({"sku": "B", "name": "Gauze", "quantity": 50, "reorder_level": 10});
        let meta = PageMeta {
            section: SectionKind::Inventory,
            current_page: 1,
            total_pages: 1,
            total_items: 2,
            start_index: 0,
            end_index: 2,
        };
        let mut panel = Panel::new("Inventory");
        InventoryRenderer.paint(&mut panel, &[&low, &fine], &meta);
        assert_eq!(panel.rows(), ["A | Gloves | 5 LOW", "B | Gauze | 50"]);
    }
}
