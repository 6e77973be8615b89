//! Render dispatch.
//!
//! Each section is painted by exactly one [`SectionRenderer`], registered at
//! startup. The dispatcher computes the page, clears the section's panel and
//! repaints it from scratch, so rendering is idempotent and safe to repeat
//! from any callback.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{PagingError, Result};
use crate::math::{DEFAULT_WINDOW_RADIUS, page_window, slice};
use crate::record::Record;
use crate::registry::SectionRegistry;
use crate::section::SectionKind;
use crate::state::{PageMeta, PageState};
use crate::surface::{PaginationControls, Panel, RenderSurface};

/// Paints one section's page of records.
pub trait SectionRenderer: Send {
    /// Section this renderer paints.
    fn section(&self) -> SectionKind;

    /// Paint `items` into `panel`. The panel is already cleared.
    fn paint(&self, panel: &mut Panel, items: &[&Record], meta: &PageMeta);

    /// Row shown when the view is empty.
    fn empty_message(&self) -> &str {
        "No records to display."
    }
}

/// Routes render requests to the registered renderer of each section.
pub struct RenderDispatcher {
    renderers: BTreeMap<SectionKind, Box<dyn SectionRenderer>>,
    window_radius: usize,
}

impl Default for RenderDispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_RADIUS)
    }
}

impl std::fmt::Debug for RenderDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderDispatcher")
            .field("sections", &self.renderers.keys().collect::<Vec<_>>())
            .field("window_radius", &self.window_radius)
            .finish()
    }
}

impl RenderDispatcher {
    /// Create a dispatcher with the given page-window radius.
    pub fn new(window_radius: usize) -> Self {
        Self {
            renderers: BTreeMap::new(),
            window_radius,
        }
    }

    /// Register the renderer for its section, returning any renderer it replaced.
    pub fn register_renderer(
        &mut self,
        renderer: Box<dyn SectionRenderer>,
    ) -> Option<Box<dyn SectionRenderer>> {
        let section = renderer.section();
        let replaced = self.renderers.insert(section, renderer);
        if replaced.is_some() {
            debug!(section = %section, "renderer replaced");
        }
        replaced
    }

    pub fn has_renderer(&self, section: SectionKind) -> bool {
        self.renderers.contains_key(&section)
    }

    pub fn window_radius(&self) -> usize {
        self.window_radius
    }

    /// Repaint `section` from its current state.
    ///
    /// Returns `Ok(None)` when the surface has no panel for the section.
    pub fn render<S>(
        &self,
        registry: &SectionRegistry,
        surface: &mut S,
        section: SectionKind,
    ) -> Result<Option<PageMeta>>
    where
        S: RenderSurface + ?Sized,
    {
        let state = registry.get(section)?;
        let Some(panel) = surface.panel_mut(section) else {
            warn!(section = %section, "render target missing, skipping paint");
            return Ok(None);
        };
        let renderer = self
            .renderers
            .get(&section)
            .ok_or(PagingError::NoRenderer { section })?;

        let view = state.view();
        let meta = state.meta_of(&view);
        let page = slice(&view, meta.current_page, state.items_per_page());

        panel.clear();
        if page.is_empty() {
            panel.push_row(renderer.empty_message());
        } else {
            renderer.paint(panel, page.items, &meta);
        }
        panel.set_controls(self.controls(state, &meta));

        debug!(
            section = %section,
            page = meta.current_page,
            total_pages = meta.total_pages,
            items = page.len(),
            "section rendered"
        );
        Ok(Some(meta))
    }

    fn controls(&self, state: &PageState, meta: &PageMeta) -> PaginationControls {
        let mut summary = if meta.total_items == 0 {
            "Showing 0 of 0".to_string()
        } else {
            format!(
                "Showing {}-{} of {}",
                meta.start_index + 1,
                meta.end_index,
                meta.total_items
            )
        };
        if state.filter().is_some() {
            summary.push_str(&format!(" (filtered from {})", state.total_items()));
        }
        PaginationControls {
            window: page_window(meta.current_page, meta.total_pages, self.window_radius),
            current_page: meta.current_page,
            previous_enabled: meta.has_previous(),
            next_enabled: meta.has_next(),
            summary,
            page_size: state.items_per_page(),
        }
    }
}
