//! Sample records shown when a section has no live data.

use cdesk_paging::{Record, SectionKind};
use serde_json::json;

/// Sample dataset for `section`.
pub fn sample_records(section: SectionKind) -> Vec<Record> {
    match section {
        SectionKind::Users => vec![
            json!({"id": 1, "name": "Amira Haddad", "email": "amira@clinic.test", "role": "admin"}),
            json!({"id": 2, "name": "Jonas Berg", "email": "jonas@clinic.test", "role": "clinician"}),
            json!({"id": 3, "name": "Priya Nair", "email": "priya@clinic.test", "role": "clinician"}),
            json!({"id": 4, "name": "Tomás Ruiz", "email": "tomas@clinic.test", "role": "reception"}),
            json!({"id": 5, "name": "Lea Vogel", "email": "lea@clinic.test", "role": "clinician"}),
        ],
        SectionKind::Appointments => vec![
            json!({"id": 1, "patient": "R. Okafor", "starts_at": "2026-03-02T09:00:00Z", "status": "confirmed"}),
            json!({"id": 2, "patient": "M. Lindqvist", "starts_at": "2026-03-02T10:30:00Z", "status": "pending"}),
            json!({"id": 3, "patient": "S. Moreau", "starts_at": "2026-03-03T14:15:00Z", "status": "cancelled"}),
            json!({"id": 4, "patient": "K. Tanaka", "starts_at": "2026-03-04T08:45:00Z", "status": "confirmed"}),
        ],
        SectionKind::Invoices => vec![
            json!({"number": "INV-1001", "patient": "R. Okafor", "amount": 120.0, "status": "paid"}),
            json!({"number": "INV-1002", "patient": "M. Lindqvist", "amount": 85.5, "status": "overdue"}),
            json!({"number": "INV-1003", "patient": "S. Moreau", "amount": 240.0, "status": "open"}),
        ],
        SectionKind::Faqs => vec![
            json!({"id": 1, "question": "How do I reschedule an appointment?", "category": "appointments"}),
            json!({"id": 2, "question": "Which insurers do you accept?", "category": "billing"}),
            json!({"id": 3, "question": "Where can I park?", "category": "visits"}),
        ],
        SectionKind::Evaluations => vec![
            json!({"id": 1, "clinician": "Jonas Berg", "score": 5, "comment": "Very thorough"}),
            json!({"id": 2, "clinician": "Priya Nair", "score": 4, "comment": "Kind and quick"}),
        ],
        SectionKind::Inventory => vec![
            json!({"sku": "GLV-M", "name": "Nitrile gloves (M)", "quantity": 40, "reorder_level": 50}),
            json!({"sku": "SYR-5", "name": "Syringe 5ml", "quantity": 300, "reorder_level": 100}),
            json!({"sku": "GAU-10", "name": "Gauze 10cm", "quantity": 12, "reorder_level": 20}),
        ],
        SectionKind::Sites => vec![
            json!({"id": 1, "name": "Central Clinic", "city": "Utrecht"}),
            json!({"id": 2, "name": "Harbour Practice", "city": "Rotterdam"}),
        ],
        SectionKind::Categories => vec![
            json!({"id": 1, "name": "Consumables"}),
            json!({"id": 2, "name": "Equipment"}),
            json!({"id": 3, "name": "Medication"}),
        ],
        SectionKind::Suppliers => vec![
            json!({"id": 1, "name": "MedSupply BV", "contact": "orders@medsupply.test"}),
            json!({"id": 2, "name": "CareLine GmbH", "contact": "sales@careline.test"}),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_samples() {
        for section in SectionKind::ALL {
            assert!(!sample_records(section).is_empty(), "{section}");
        }
    }
}
