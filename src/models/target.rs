//! Catalog target entries as supplied by the surrounding application.

use serde::{Deserialize, Serialize};

use crate::api::TargetId;
use crate::models::EquatorialCoordinate;

/// One target from the external catalog, paired with its progress state.
///
/// `deficit_hours` is the shortfall between accumulated exposure and the
/// configured goal, pre-computed by the progress-tracking collaborator.
/// `narrowband` may be set explicitly by the caller; when absent, the
/// planner resolves it from `type_label` via the configured keyword
/// classifier. `framing` is opaque to the engine and passed through to the
/// sequence export unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetEntry {
    pub id: TargetId,
    pub name: String,
    pub coord: EquatorialCoordinate,
    /// Free-text object type ("Emission Neb", "Galaxy", ...).
    #[serde(default)]
    pub type_label: String,
    /// Explicit narrowband tag; overrides keyword classification when set.
    #[serde(default)]
    pub narrowband: Option<bool>,
    #[serde(default)]
    pub deficit_hours: f64,
    #[serde(default)]
    pub framing: Option<serde_json::Value>,
}

impl TargetEntry {
    pub fn new(id: i64, name: impl Into<String>, ra_hours: f64, dec_deg: f64) -> Self {
        Self {
            id: TargetId::new(id),
            name: name.into(),
            coord: EquatorialCoordinate::new(ra_hours, dec_deg),
            type_label: String::new(),
            narrowband: None,
            deficit_hours: 0.0,
            framing: None,
        }
    }

    pub fn with_type(mut self, type_label: impl Into<String>) -> Self {
        self.type_label = type_label.into();
        self
    }

    pub fn with_deficit(mut self, deficit_hours: f64) -> Self {
        self.deficit_hours = deficit_hours;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_helpers() {
        let t = TargetEntry::new(1, "M42", 5.59, -5.39)
            .with_type("Emission Neb")
            .with_deficit(3.5);
        assert_eq!(t.id.value(), 1);
        assert_eq!(t.type_label, "Emission Neb");
        assert_eq!(t.deficit_hours, 3.5);
        assert!(t.narrowband.is_none());
    }

    #[test]
    fn test_deserialize_minimal() {
        let t: TargetEntry = serde_json::from_str(
            r#"{"id": 3, "name": "M31", "coord": {"ra_hours": 0.712, "dec_deg": 41.27}}"#,
        )
        .unwrap();
        assert_eq!(t.id.value(), 3);
        assert_eq!(t.deficit_hours, 0.0);
        assert!(t.framing.is_none());
    }
}
