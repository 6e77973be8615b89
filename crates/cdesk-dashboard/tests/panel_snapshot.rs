use cdesk_dashboard::settings::SectionSettings;
use cdesk_dashboard::{Dashboard, DashboardSettings, Message};
use cdesk_paging::{LoadError, LoadPayload, SectionKind};

struct Offline;

impl cdesk_dashboard::DataSource for Offline {
    async fn fetch(&self, section: SectionKind) -> Result<LoadPayload, LoadError> {
        Err(LoadError::unavailable(section, "offline"))
    }
}

#[tokio::test(start_paused = true)]
async fn invoice_panel_first_page() {
    let mut settings = DashboardSettings::default();
    settings.sections.insert(
        "invoices".to_string(),
        SectionSettings {
            page_size: Some(2),
            refresh_interval_secs: None,
        },
    );
    let (mut dashboard, _messages) = Dashboard::new(settings, Offline);
    dashboard.enter_section(SectionKind::Invoices).unwrap();
    dashboard
        .update(Message::AutoInitialize {
            section: SectionKind::Invoices,
            generation: 0,
        })
        .unwrap();

    let text = dashboard.panel(SectionKind::Invoices).unwrap().to_text();
    insta::assert_snapshot!(text.trim_end());
}
