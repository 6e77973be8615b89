//! Section pagination and load reconciliation for the Clinic Desk dashboard.
//!
//! The dashboard pages roughly a dozen unrelated data domains on the client.
//! Each section has its own paging state, is filled by an asynchronous load
//! that may finish in any order, and can also be filled with sample data by a
//! generic auto-initializer that races the real load. This crate owns that
//! state and the rules that keep sample data from clobbering live data.
//!
//! # Architecture
//!
//! - `section.rs` / `record.rs` - section identifiers, opaque records, load payloads
//! - `state.rs` - per-section [`PageState`]
//! - `math.rs` - pure page math (total pages, clamp, slice, page window)
//! - `filter.rs` - transient filtered views
//! - `registry.rs` - [`SectionRegistry`], the source of truth
//! - `surface.rs` / `render.rs` - render targets and [`RenderDispatcher`]
//! - `load.rs` - ownership rules for real vs. sample data
//! - `polling.rs` - [`PollingSupervisor`] for timers
//! - `engine.rs` - [`PagingEngine`], the container handed to callers
//!
//! # Example
//!
//! ```ignore
//! use cdesk_paging::{PagingEngine, PageDefaults, RenderDispatcher, Screen, SectionKind};
//!
//! let mut engine = PagingEngine::new(dispatcher, Screen::new());
//! engine.register_section(SectionKind::Invoices, PageDefaults::default());
//! engine.surface_mut().mount(SectionKind::Invoices);
//! engine.claim_real(SectionKind::Invoices, records)?;
//! engine.go_to_page(SectionKind::Invoices, 2)?;
//! ```

mod engine;
mod error;
mod filter;
mod load;
mod math;
mod polling;
mod record;
mod registry;
mod render;
mod section;
mod state;
mod surface;

pub use engine::PagingEngine;
pub use error::{LoadError, PagingError, Result};
pub use filter::{FieldMatch, RecordFilter, filter};
pub use load::{ClaimOutcome, SkipReason, claim_fallback, claim_real};
pub use math::{
    DEFAULT_WINDOW_RADIUS, PageLink, PageSlice, clamp_page, compute_total_pages, page_window,
    slice,
};
pub use polling::{PollingSupervisor, Schedule, TaskId};
pub use record::{LoadPayload, Record, field_text};
pub use registry::SectionRegistry;
pub use render::{RenderDispatcher, SectionRenderer};
pub use section::SectionKind;
pub use state::{DEFAULT_ITEMS_PER_PAGE, Ownership, PageDefaults, PageMeta, PageState};
pub use surface::{PaginationControls, Panel, RenderSurface, Screen};
