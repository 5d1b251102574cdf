use crate::display::ColorToken;
use serde::{Deserialize, Serialize};
use shared_kernel::integer_key;

integer_key!(AlertId);

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardKind {
    Flood,
    Landslide,
    Wind,
    Fire,
    Storm,
}

/// Ordered from least to most severe.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn color(&self) -> ColorToken {
        match self {
            Severity::Low => ColorToken::Yellow,
            Severity::Medium => ColorToken::Orange,
            Severity::High => ColorToken::Red,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub kind: HazardKind,
    pub severity: Severity,
    pub title: String,
    pub location: String,
    /// Display time as reported by the issuer, e.g. `"15:30"`.
    pub time: String,
    pub description: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RiskArea {
    pub name: String,
    pub risk: HazardKind,
    pub level: Severity,
}

#[cfg(test)]
mod tests {
    use super::{Alert, AlertId, HazardKind, Severity};
    use crate::display::ColorToken;

    #[test]
    fn test_severity_order() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
        assert_eq!(Severity::High.color(), ColorToken::Red);
        assert_eq!(Severity::Low.color().hex(), "#F59E0B");
    }

    #[test]
    fn test_alert_is_read_from_json() {
        let alert: Alert = serde_json::from_str(
            r#"{
                "id": 2,
                "kind": "landslide",
                "severity": "medium",
                "title": "Alerta de Deslizamento",
                "location": "Região da Serra Verde",
                "time": "14:45",
                "description": "Solo saturado após chuvas contínuas."
            }"#,
        )
        .unwrap();

        assert_eq!(alert.id, AlertId::new(2));
        assert_eq!(alert.kind, HazardKind::Landslide);
        assert_eq!(alert.severity, Severity::Medium);
    }
}
