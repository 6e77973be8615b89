//! Clinic Desk - terminal front end for the admin dashboard sections.

use anyhow::{Context, Result};
use cdesk_dashboard::logging::{LogConfig, init_logging};
use cdesk_dashboard::{Dashboard, DashboardSettings, JsonDirSource, NoticeId};
use cdesk_paging::SectionKind;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let settings = DashboardSettings::load();
    init_logging(&LogConfig::from_settings(&settings.logging))
        .context("failed to initialize logging")?;

    let source = JsonDirSource::new(settings.loading.data_dir.clone());
    info!(data_dir = %source.root().display(), "starting clinic desk");

    let (mut dashboard, mut messages) = Dashboard::new(settings, source);
    for section in SectionKind::ALL {
        dashboard
            .enter_section(section)
            .with_context(|| format!("failed to open section {section}"))?;
    }

    let mut last_shown: Option<NoticeId> = None;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            Some(message) = messages.recv() => match dashboard.update(message) {
                Ok(Some(meta)) => {
                    if let Some(panel) = dashboard.panel(meta.section) {
                        println!("{}", panel.to_text());
                    }
                }
                Ok(None) => {}
                Err(err) => error!(error = %err, "update failed"),
            },
        }
        for notice in dashboard.notices().list() {
            if last_shown.is_none_or(|shown| notice.id > shown) {
                eprintln!("[{}] {}", notice.raised_at.format("%H:%M:%S"), notice.message);
                last_shown = Some(notice.id);
            }
        }
    }

    dashboard.logout();
    Ok(())
}
