use entities::display::ColorToken;
use entities::hazards::{Alert, RiskArea, Severity};
#[cfg(test)]
use mockall::automock;
use serde::Serialize;
use std::sync::Arc;

#[cfg_attr(test, automock)]
pub trait AlertsRepo: Send + Sync {
    fn alerts(&self) -> anyhow::Result<Vec<Alert>>;

    fn risk_areas(&self) -> anyhow::Result<Vec<RiskArea>>;
}

/// Most severe first. Alerts of equal severity keep their issue order.
pub fn order_by_severity(alerts: &[Alert]) -> Vec<Alert> {
    let mut ordered = alerts.to_vec();
    ordered.sort_by(|a, b| b.severity.cmp(&a.severity));
    ordered
}

pub fn highest_severity(alerts: &[Alert]) -> Option<Severity> {
    alerts.iter().map(|alert| alert.severity).max()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertCard {
    #[serde(flatten)]
    pub alert: Alert,
    pub color: ColorToken,
    pub color_hex: &'static str,
}

impl From<Alert> for AlertCard {
    fn from(alert: Alert) -> Self {
        let color = alert.severity.color();
        AlertCard {
            alert,
            color,
            color_hex: color.hex(),
        }
    }
}

pub trait AlertsInteractor: Send + Sync {
    fn active_alerts(&self) -> anyhow::Result<Vec<AlertCard>>;

    fn risk_areas(&self) -> anyhow::Result<Vec<RiskArea>>;
}

pub struct AlertsInteractorImpl {
    repo: Arc<dyn AlertsRepo>,
}

impl AlertsInteractorImpl {
    pub fn new(repo: Arc<dyn AlertsRepo>) -> Self {
        Self { repo }
    }
}

impl AlertsInteractor for AlertsInteractorImpl {
    #[tracing::instrument(err, skip(self), level = "info")]
    fn active_alerts(&self) -> anyhow::Result<Vec<AlertCard>> {
        let alerts = self.repo.alerts()?;
        Ok(order_by_severity(&alerts)
            .into_iter()
            .map(AlertCard::from)
            .collect())
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    fn risk_areas(&self) -> anyhow::Result<Vec<RiskArea>> {
        self.repo.risk_areas()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::alert;
    use super::{
        highest_severity, order_by_severity, AlertsInteractor, AlertsInteractorImpl,
        MockAlertsRepo,
    };
    use entities::display::ColorToken;
    use entities::hazards::{HazardKind, RiskArea, Severity};
    use std::sync::Arc;

    #[test]
    fn test_alerts_are_ordered_by_severity_keeping_issue_order() {
        let alerts = vec![
            alert(1, HazardKind::Wind, Severity::Low),
            alert(2, HazardKind::Flood, Severity::High),
            alert(3, HazardKind::Landslide, Severity::Medium),
            alert(4, HazardKind::Storm, Severity::High),
        ];

        let ordered = order_by_severity(&alerts)
            .into_iter()
            .map(|alert| alert.id.inner())
            .collect::<Vec<_>>();

        assert_eq!(ordered, vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_highest_severity() {
        assert_eq!(highest_severity(&[]), None);
        let alerts = vec![
            alert(1, HazardKind::Wind, Severity::Low),
            alert(2, HazardKind::Landslide, Severity::Medium),
        ];
        assert_eq!(highest_severity(&alerts), Some(Severity::Medium));
    }

    #[test]
    fn test_interactor_reads_from_the_repo() {
        let mut repo = MockAlertsRepo::new();
        repo.expect_alerts().returning(|| {
            Ok(vec![
                alert(3, HazardKind::Wind, Severity::Low),
                alert(1, HazardKind::Flood, Severity::High),
            ])
        });
        repo.expect_risk_areas().returning(|| {
            Ok(vec![RiskArea {
                name: "Rua das Palmeiras".to_string(),
                risk: HazardKind::Flood,
                level: Severity::High,
            }])
        });
        let interactor = AlertsInteractorImpl::new(Arc::new(repo));

        let alerts = interactor.active_alerts().unwrap();
        assert_eq!(alerts[0].alert.severity, Severity::High);
        assert_eq!(alerts[0].color, ColorToken::Red);
        assert_eq!(alerts[1].color_hex, "#F59E0B");
        assert_eq!(interactor.risk_areas().unwrap().len(), 1);
    }
}
