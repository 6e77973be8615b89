//! The paging engine: registry, dispatcher and render surface in one
//! explicitly owned container.
//!
//! Every operation is synchronous. Navigation and filter changes repaint the
//! section; applied claims repaint it; skipped claims leave the panel alone.

use tracing::debug;

use crate::error::Result;
use crate::filter::RecordFilter;
use crate::load::{self, ClaimOutcome};
use crate::record::{LoadPayload, Record};
use crate::registry::SectionRegistry;
use crate::render::RenderDispatcher;
use crate::section::SectionKind;
use crate::state::{PageDefaults, PageMeta};
use crate::surface::RenderSurface;

/// Owner of all paging state for a session.
#[derive(Debug)]
pub struct PagingEngine<S> {
    registry: SectionRegistry,
    dispatcher: RenderDispatcher,
    surface: S,
}

impl<S: RenderSurface> PagingEngine<S> {
    /// Create an engine with no sections registered.
    pub fn new(dispatcher: RenderDispatcher, surface: S) -> Self {
        Self {
            registry: SectionRegistry::new(),
            dispatcher,
            surface,
        }
    }

    /// Register a section (no-op if already registered).
    pub fn register_section(&mut self, section: SectionKind, defaults: PageDefaults) -> bool {
        self.registry.register(section, defaults)
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn dispatcher(&self) -> &RenderDispatcher {
        &self.dispatcher
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Repaint one section.
    pub fn render(&mut self, section: SectionKind) -> Result<Option<PageMeta>> {
        self.dispatcher
            .render(&self.registry, &mut self.surface, section)
    }

    /// Repaint every registered section, stopping at the first error.
    pub fn render_all(&mut self) -> Result<Vec<PageMeta>> {
        let sections: Vec<SectionKind> = self.registry.sections().collect();
        let mut painted = Vec::with_capacity(sections.len());
        for section in sections {
            if let Some(meta) = self.render(section)? {
                painted.push(meta);
            }
        }
        Ok(painted)
    }

    /// Jump to `page`, clamped into range.
    pub fn go_to_page(&mut self, section: SectionKind, page: usize) -> Result<Option<PageMeta>> {
        let landed = self.registry.get_mut(section)?.set_current_page(page);
        if landed != page {
            debug!(section = %section, requested = page, landed, "page clamped");
        }
        self.render(section)
    }

    /// Change the page size and return to page 1. A size of zero is rejected
    /// and the previous state is kept.
    pub fn change_page_size(
        &mut self,
        section: SectionKind,
        size: usize,
    ) -> Result<Option<PageMeta>> {
        self.registry.get_mut(section)?.set_items_per_page(size)?;
        debug!(section = %section, size, "page size changed");
        self.render(section)
    }

    /// Advance one page (stays on the last page).
    pub fn next(&mut self, section: SectionKind) -> Result<Option<PageMeta>> {
        let page = self.registry.get(section)?.current_page();
        self.go_to_page(section, page.saturating_add(1))
    }

    /// Go back one page (stays on page 1).
    pub fn previous(&mut self, section: SectionKind) -> Result<Option<PageMeta>> {
        let page = self.registry.get(section)?.current_page();
        self.go_to_page(section, page.saturating_sub(1))
    }

    /// Show only records matching `criteria`, starting from page 1.
    pub fn apply_filter(
        &mut self,
        section: SectionKind,
        criteria: RecordFilter,
    ) -> Result<Option<PageMeta>> {
        self.registry.get_mut(section)?.set_filter(Some(criteria));
        self.render(section)
    }

    /// Drop the section's filter, returning to page 1.
    pub fn clear_filter(&mut self, section: SectionKind) -> Result<Option<PageMeta>> {
        self.registry.get_mut(section)?.set_filter(None);
        self.render(section)
    }

    /// Install live data and repaint.
    pub fn claim_real(
        &mut self,
        section: SectionKind,
        payload: impl Into<LoadPayload>,
    ) -> Result<ClaimOutcome> {
        let outcome = load::claim_real(&mut self.registry, section, payload)?;
        self.render(section)?;
        Ok(outcome)
    }

    /// Install sample data if the section is still unowned and empty, and
    /// repaint when it was.
    pub fn claim_fallback<F>(&mut self, section: SectionKind, factory: F) -> Result<ClaimOutcome>
    where
        F: FnOnce() -> Vec<Record>,
    {
        let outcome = load::claim_fallback(&mut self.registry, section, factory)?;
        if outcome.is_applied() {
            self.render(section)?;
        }
        Ok(outcome)
    }

    /// Restore a section's defaults and repaint it empty.
    pub fn reset(&mut self, section: SectionKind) -> Result<Option<PageMeta>> {
        self.registry.reset(section)?;
        self.render(section)
    }

    /// Restore every section's defaults without repainting.
    pub fn reset_all(&mut self) {
        self.registry.reset_all();
    }
}
