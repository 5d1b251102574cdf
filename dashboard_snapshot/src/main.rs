mod configuration;

use anyhow::Context;
use configuration::Settings;
use entities::hazards::RiskArea;
use in_memory_store::{InMemoryStore, SeedData};
use serde::Serialize;
use use_cases::alerts::AlertCard;
use use_cases::dashboard::DashboardStats;
use use_cases::shelters::list_shelters::{ShelterCard, ShelterListQuery};
use use_cases::{App, AppImpl};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    shelters: Vec<ShelterCard>,
    dashboard: DashboardStats,
    alerts: Vec<AlertCard>,
    risk_areas: Vec<RiskArea>,
}

fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry("dashboard_snapshot");
    let settings = Settings::parse()?;
    let store = InMemoryStore::new(SeedData::load(settings.seed.path.as_deref())?)
        .context("Failed to seed the shelter store")?;
    let snapshot = snapshot(&AppImpl::new(store), settings.list)?;
    tracing::info!(
        shelters = snapshot.shelters.len(),
        alerts = snapshot.alerts.len(),
        "snapshot taken"
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn snapshot(app: &dyn App, query: ShelterListQuery) -> anyhow::Result<Snapshot> {
    Ok(Snapshot {
        shelters: app.shelter_list().list(query)?,
        dashboard: app.dashboard().stats()?,
        alerts: app.alerts().active_alerts()?,
        risk_areas: app.alerts().risk_areas()?,
    })
}
