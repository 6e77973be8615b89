//! The dashboard event loop.
//!
//! [`Dashboard`] owns the paging engine and every background task. Tasks
//! post [`Message`]s to the channel returned by [`Dashboard::new`]; the
//! caller feeds them back through [`Dashboard::update`], which is the only
//! place section state changes in response to asynchronous work.

use std::sync::Arc;
use std::time::Duration;

use cdesk_paging::{
    ClaimOutcome, Ownership, PageMeta, PagingEngine, Panel, PollingSupervisor, RecordFilter,
    Schedule, Screen, SectionKind, TaskId,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, trace, warn};

use crate::error::{DashboardError, Result};
use crate::message::{Generation, Message};
use crate::notice::{NoticeBoard, NoticeId, NoticeLevel};
use crate::renderers::default_dispatcher;
use crate::samples::sample_records;
use crate::settings::DashboardSettings;
use crate::source::DataSource;

const LOAD_TASK: &str = "load";
const AUTO_INIT_TASK: &str = "auto-init";
const REFRESH_TASK: &str = "refresh";

/// Section glue for one operator session.
pub struct Dashboard<D: DataSource> {
    engine: PagingEngine<Screen>,
    supervisor: PollingSupervisor,
    source: Arc<D>,
    settings: DashboardSettings,
    notices: NoticeBoard,
    sender: UnboundedSender<Message>,
    generation: Generation,
}

impl<D: DataSource> Dashboard<D> {
    /// Build a dashboard with every section registered and no panel mounted.
    pub fn new(settings: DashboardSettings, source: D) -> (Self, UnboundedReceiver<Message>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let dispatcher = default_dispatcher(settings.paging.window_radius);
        let mut engine = PagingEngine::new(dispatcher, Screen::new());
        for section in SectionKind::ALL {
            engine.register_section(section, settings.page_defaults(section));
        }

        let dashboard = Self {
            engine,
            supervisor: PollingSupervisor::new(),
            source: Arc::new(source),
            settings,
            notices: NoticeBoard::new(),
            sender,
            generation: 0,
        };
        (dashboard, receiver)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn engine(&self) -> &PagingEngine<Screen> {
        &self.engine
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Current session generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Painted panel of a mounted section.
    pub fn panel(&self, section: SectionKind) -> Option<&Panel> {
        self.engine.surface().panel(section)
    }

    /// Number of background tasks still running.
    pub fn active_tasks(&mut self) -> usize {
        self.supervisor.active_count()
    }

    // =========================================================================
    // SECTION LIFECYCLE
    // =========================================================================

    /// Mount a section, paint its current state and start its tasks.
    ///
    /// Must be called from within a tokio runtime.
    pub fn enter_section(&mut self, section: SectionKind) -> Result<Option<PageMeta>> {
        self.engine.surface_mut().mount(section);
        let meta = self.engine.render(section)?;

        self.schedule_load(section)?;

        let sender = self.sender.clone();
        let generation = self.generation;
        self.supervisor.schedule(
            TaskId::section(section, AUTO_INIT_TASK),
            Schedule::After(self.settings.fallback_delay()),
            move || {
                let sender = sender.clone();
                async move { post(&sender, Message::AutoInitialize { section, generation }) }
            },
        )?;

        if let Some(period) = self.settings.refresh_interval(section) {
            let sender = self.sender.clone();
            self.supervisor.schedule(
                TaskId::section(section, REFRESH_TASK),
                Schedule::Every(period),
                move || {
                    let sender = sender.clone();
                    async move { post(&sender, Message::Refresh { section, generation }) }
                },
            )?;
        }

        info!(section = %section, generation, "section entered");
        Ok(meta)
    }

    /// Stop a section's tasks and unmount its panel. State is kept.
    pub fn leave_section(&mut self, section: SectionKind) -> usize {
        let cancelled = self.supervisor.cancel_section(section);
        self.engine.surface_mut().unmount(section);
        debug!(section = %section, cancelled, "section left");
        cancelled
    }

    /// End the session: stop every task, then reset all state.
    ///
    /// Messages already queued carry the old generation and are dropped by
    /// [`update`](Self::update).
    pub fn logout(&mut self) {
        let cancelled = self.supervisor.cancel_all();
        self.generation += 1;
        self.engine.reset_all();
        self.engine.surface_mut().unmount_all();
        self.notices.clear();
        info!(cancelled, generation = self.generation, "session closed");
    }

    // =========================================================================
    // MESSAGES
    // =========================================================================

    /// Apply one message. Returns the page metadata when a panel was
    /// repainted.
    pub fn update(&mut self, message: Message) -> Result<Option<PageMeta>> {
        if message.generation() != self.generation {
            debug!(
                stale = message.generation(),
                current = self.generation,
                "dropping message from a closed session"
            );
            return Ok(None);
        }

        match message {
            Message::Loaded {
                section,
                result: Ok(payload),
                ..
            } => {
                self.supervisor
                    .cancel(&TaskId::section(section, AUTO_INIT_TASK));
                let outcome = self.engine.claim_real(section, payload)?;
                self.repainted(section, &outcome)
            }

            Message::Loaded {
                section,
                result: Err(err),
                ..
            } => {
                warn!(section = %section, error = %err, "load failed");
                let outcome = self.engine.claim_fallback(section, || sample_records(section))?;
                let text = match self.engine.registry().get(section)?.ownership() {
                    Ownership::Real => format!(
                        "Could not refresh {}. Showing the last loaded data.",
                        section.label()
                    ),
                    Ownership::Fallback | Ownership::Unset => err.user_message(),
                };
                let id = self.notices.push(NoticeLevel::Warning, Some(section), text);
                self.schedule_dismiss(id)?;
                self.repainted(section, &outcome)
            }

            Message::AutoInitialize { section, .. } => {
                let outcome = self.engine.claim_fallback(section, || sample_records(section))?;
                debug!(section = %section, ?outcome, "auto-initialize fired");
                self.repainted(section, &outcome)
            }

            Message::Refresh { section, .. } => {
                if self.supervisor.is_scheduled(&TaskId::section(section, LOAD_TASK)) {
                    debug!(section = %section, "refresh skipped: load still in flight");
                    return Ok(None);
                }
                trace!(section = %section, "refresh tick");
                self.schedule_load(section)?;
                Ok(None)
            }

            Message::DismissNotice { id, .. } => {
                self.notices.dismiss(id);
                self.supervisor.cancel(&TaskId::global(id.to_string()));
                Ok(None)
            }
        }
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    pub fn go_to_page(&mut self, section: SectionKind, page: usize) -> Result<Option<PageMeta>> {
        Ok(self.engine.go_to_page(section, page)?)
    }

    pub fn change_page_size(
        &mut self,
        section: SectionKind,
        size: usize,
    ) -> Result<Option<PageMeta>> {
        let options = &self.settings.paging.page_size_options;
        let default = self.engine.registry().get(section)?.defaults().items_per_page();
        if !options.is_empty() && !options.contains(&size) && size != default {
            return Err(DashboardError::UnsupportedPageSize {
                size,
                options: options.clone(),
            });
        }
        Ok(self.engine.change_page_size(section, size)?)
    }

    /// Sizes offered by the page-size selector.
    pub fn page_size_options(&self) -> &[usize] {
        &self.settings.paging.page_size_options
    }

    pub fn next_page(&mut self, section: SectionKind) -> Result<Option<PageMeta>> {
        Ok(self.engine.next(section)?)
    }

    pub fn previous_page(&mut self, section: SectionKind) -> Result<Option<PageMeta>> {
        Ok(self.engine.previous(section)?)
    }

    pub fn apply_filter(
        &mut self,
        section: SectionKind,
        criteria: RecordFilter,
    ) -> Result<Option<PageMeta>> {
        Ok(self.engine.apply_filter(section, criteria)?)
    }

    pub fn clear_filter(&mut self, section: SectionKind) -> Result<Option<PageMeta>> {
        Ok(self.engine.clear_filter(section)?)
    }

    // =========================================================================
    // TASKS
    // =========================================================================

    /// Start (or restart) the real load of `section`.
    fn schedule_load(&mut self, section: SectionKind) -> Result<()> {
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();
        let generation = self.generation;
        self.supervisor.schedule(
            TaskId::section(section, LOAD_TASK),
            Schedule::After(Duration::ZERO),
            move || {
                let source = Arc::clone(&source);
                let sender = sender.clone();
                async move {
                    let result = source.fetch(section).await;
                    post(
                        &sender,
                        Message::Loaded {
                            section,
                            generation,
                            result,
                        },
                    );
                }
            },
        )?;
        Ok(())
    }

    fn schedule_dismiss(&mut self, id: NoticeId) -> Result<()> {
        let sender = self.sender.clone();
        let generation = self.generation;
        self.supervisor.schedule(
            TaskId::global(id.to_string()),
            Schedule::After(self.settings.notice_dismiss_after()),
            move || {
                let sender = sender.clone();
                async move { post(&sender, Message::DismissNotice { id, generation }) }
            },
        )?;
        Ok(())
    }

    fn repainted(
        &self,
        section: SectionKind,
        outcome: &ClaimOutcome,
    ) -> Result<Option<PageMeta>> {
        if !outcome.is_applied() || !self.engine.surface().is_mounted(section) {
            return Ok(None);
        }
        Ok(Some(self.engine.registry().get(section)?.meta()))
    }
}

fn post(sender: &UnboundedSender<Message>, message: Message) {
    if sender.send(message).is_err() {
        trace!("message channel closed");
    }
}
