//! Clinic Desk dashboard glue.
//!
//! Wires the nine dashboard sections to the `cdesk-paging` engine: renderers,
//! sample data, the asynchronous data source, notices, settings and logging.
//!
//! # Architecture
//!
//! - `app.rs` - [`Dashboard`], the message-driven event loop
//! - `message.rs` - [`Message`]s posted by background tasks
//! - `source.rs` - [`DataSource`] trait and [`JsonDirSource`]
//! - `renderers/` - one renderer per section
//! - `samples.rs` - fallback records per section
//! - `notice.rs` - auto-dismissed notices
//! - `settings.rs` / `logging.rs` - ambient configuration

pub mod app;
pub mod error;
pub mod logging;
pub mod message;
pub mod notice;
pub mod renderers;
pub mod samples;
pub mod settings;
pub mod source;

pub use app::Dashboard;
pub use error::{DashboardError, Result};
pub use message::{Generation, Message};
pub use notice::{Notice, NoticeBoard, NoticeId, NoticeLevel};
pub use settings::DashboardSettings;
pub use source::{DataSource, JsonDirSource};
