use cdesk_paging::{PageMeta, Panel, Record, SectionKind, SectionRenderer};
use chrono::DateTime;

use super::cell;

/// Appointment rows: start time, patient, status.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppointmentsRenderer;

impl AppointmentsRenderer {
    /// Format an RFC 3339 timestamp for display; unparseable values pass through.
    fn when(raw: &str) -> String {
        DateTime::parse_from_rfc3339(raw)
            .map(|at| at.format("%a %d %b %H:%M").to_string())
            .unwrap_or_else(|_| raw.to_string())
    }
}

impl SectionRenderer for AppointmentsRenderer {
    fn section(&self) -> SectionKind {
        SectionKind::Appointments
    }

    fn paint(&self, panel: &mut Panel, items: &[&Record], _meta: &PageMeta) {
        for record in items {
            panel.push_row(format!(
                "{} | {} | {}",
                Self::when(&cell(record, "starts_at")),
                cell(record, "patient"),
                cell(record, "status"),
            ));
        }
    }

    fn empty_message(&self) -> &str {
        "No appointments scheduled."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_timestamps() {
        assert_eq!(
            AppointmentsRenderer::when("2026-03-02T09:00:00Z"),
            "Mon 02 Mar 09:00"
        );
        assert_eq!(AppointmentsRenderer::when("tomorrow"), "tomorrow");
    }
}
