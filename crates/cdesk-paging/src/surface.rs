//! Render targets.
//!
//! A [`RenderSurface`] hands out the panel a section paints into. Sections
//! whose panel is not mounted are simply not painted.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::math::PageLink;
use crate::section::SectionKind;

/// Pagination controls painted under a section's rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationControls {
    /// Page-number strip.
    pub window: Vec<PageLink>,
    /// Current page (highlighted in the strip).
    pub current_page: usize,
    /// Whether "previous" is clickable.
    pub previous_enabled: bool,
    /// Whether "next" is clickable.
    pub next_enabled: bool,
    /// Item-count summary, e.g. `Showing 11-20 of 23`.
    pub summary: String,
    /// Active page size.
    pub page_size: usize,
}

impl PaginationControls {
    /// One-line text form: `(Prev) *1* 2 3 [Next]`.
    pub fn strip(&self) -> String {
        let mut line = String::from(if self.previous_enabled { "[Prev]" } else { "(Prev)" });
        for link in &self.window {
            line.push(' ');
            match link {
                PageLink::Page(page) if *page == self.current_page => {
                    let _ = write!(line, "*{page}*");
                }
                PageLink::Page(page) => {
                    let _ = write!(line, "{page}");
                }
                PageLink::Ellipsis => line.push('…'),
            }
        }
        line.push_str(if self.next_enabled { " [Next]" } else { " (Next)" });
        line
    }
}

/// Painted content of one section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    title: String,
    rows: Vec<String>,
    controls: Option<PaginationControls>,
}

impl Panel {
    /// Create an empty panel with a heading.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Drop painted rows and controls, keeping the title.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.controls = None;
    }

    pub fn push_row(&mut self, row: impl Into<String>) {
        self.rows.push(row.into());
    }

    pub fn set_controls(&mut self, controls: PaginationControls) {
        self.controls = Some(controls);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn controls(&self) -> Option<&PaginationControls> {
        self.controls.as_ref()
    }

    /// Plain-text rendering of the panel.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        for row in &self.rows {
            let _ = writeln!(out, "  {row}");
        }
        if let Some(controls) = &self.controls {
            let _ = writeln!(out, "{}", controls.strip());
            let _ = writeln!(out, "{} ({} per page)", controls.summary, controls.page_size);
        }
        out
    }
}

/// Anything sections can be painted into.
pub trait RenderSurface {
    /// The panel for `section`, if one is mounted.
    fn panel_mut(&mut self, section: SectionKind) -> Option<&mut Panel>;
}

/// In-memory surface holding one panel per mounted section.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    panels: BTreeMap<SectionKind, Panel>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a panel for `section`. Returns `false` if it was already mounted.
    pub fn mount(&mut self, section: SectionKind) -> bool {
        if self.panels.contains_key(&section) {
            return false;
        }
        self.panels.insert(section, Panel::new(section.label()));
        true
    }

    /// Remove a section's panel.
    pub fn unmount(&mut self, section: SectionKind) -> Option<Panel> {
        self.panels.remove(&section)
    }

    /// Remove every panel.
    pub fn unmount_all(&mut self) {
        self.panels.clear();
    }

    pub fn panel(&self, section: SectionKind) -> Option<&Panel> {
        self.panels.get(&section)
    }

    pub fn is_mounted(&self, section: SectionKind) -> bool {
        self.panels.contains_key(&section)
    }

    /// Mounted sections in order.
    pub fn mounted(&self) -> impl Iterator<Item = SectionKind> + '_ {
        self.panels.keys().copied()
    }
}

impl RenderSurface for Screen {
    fn panel_mut(&mut self, section: SectionKind) -> Option<&mut Panel> {
        self.panels.get_mut(&section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_marks_current_and_boundaries() {
        let controls = PaginationControls {
            window: vec![PageLink::Page(1), PageLink::Page(2), PageLink::Ellipsis, PageLink::Page(9)],
            current_page: 1,
            previous_enabled: false,
            next_enabled: true,
            summary: "Showing 1-10 of 90".to_string(),
            page_size: 10,
        };
        assert_eq!(controls.strip(), "(Prev) *1* 2 … 9 [Next]");
    }

    #[test]
    fn test_mount_is_idempotent() {
        let mut screen = Screen::new();
        assert!(screen.mount(SectionKind::Users));
        screen.panel_mut(SectionKind::Users).unwrap().push_row("Ana");
        assert!(!screen.mount(SectionKind::Users));
        assert_eq!(screen.panel(SectionKind::Users).unwrap().rows(), ["Ana"]);
    }

    #[test]
    fn test_unmounted_panel_is_absent() {
        let mut screen = Screen::new();
        assert!(screen.panel_mut(SectionKind::Sites).is_none());
    }
}
