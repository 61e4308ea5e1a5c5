use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Profile keys the backend needs before it can compute maintenance calories.
pub const REQUIRED_PROFILE_FIELDS: [&str; 4] = ["weight", "height", "age", "gender"];

/// Largest gap between target and consumed calories that still counts as on track.
const ON_TRACK_MARGIN: i64 = 100;

/// Biometric inputs as entered by the user.
///
/// Values are passed through verbatim; the backend does all coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile {
    fields: BTreeMap<String, String>,
}

impl UserProfile {
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// A field counts as present only when it holds a non-empty value.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Calories consumed on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Calories consumed (kcal)
    pub consumed: u32,
    /// Calorie target for the day (kcal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
}

impl DailyRecord {
    /// Target minus consumed. Positive means a deficit.
    pub fn deficit(&self) -> Option<i64> {
        self.target.map(|t| i64::from(t) - i64::from(self.consumed))
    }

    pub fn is_on_track(&self) -> bool {
        self.deficit().is_some_and(|d| d.abs() <= ON_TRACK_MARGIN)
    }
}

/// A recurring exercise in the weekly plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub name: String,
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    #[serde(rename = "frequency")]
    pub frequency_per_week: u32,
}

/// One selectable exercise from the server catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseCatalogItem {
    pub name: String,
}

/// Body of `POST /api/projection`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionRequest<'a> {
    #[serde(rename = "userData")]
    pub user_data: &'a UserProfile,
    #[serde(rename = "dailyRecords")]
    pub daily_records: &'a [DailyRecord],
    pub exercises: &'a [ExerciseEntry],
    pub days: u32,
}

/// Projected weight series returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub days: Vec<i64>,
    /// Weight in kg, parallel to `days`
    pub weights: Vec<f64>,
    #[serde(default)]
    pub months_to_target: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MaintenanceResponse {
    pub maintenance_calories: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(consumed: u32, target: Option<u32>) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            consumed,
            target,
        }
    }

    #[test]
    fn profile_serializes_flat() {
        let mut profile = UserProfile::default();
        profile.set("weight", "82");
        profile.set("gender", "male");
        assert_eq!(
            serde_json::to_value(&profile).unwrap(),
            json!({"weight": "82", "gender": "male"})
        );
    }

    #[test]
    fn empty_value_is_not_present() {
        let mut profile = UserProfile::default();
        profile.set("age", "");
        assert!(!profile.has("age"));
        assert_eq!(profile.get("age"), Some(""));
    }

    #[test]
    fn record_without_target_omits_it() {
        let value = serde_json::to_value(record(1800, None)).unwrap();
        assert_eq!(value, json!({"date": "2024-03-01", "consumed": 1800}));
    }

    #[test]
    fn deficit_and_on_track() {
        assert_eq!(record(1800, Some(2000)).deficit(), Some(200));
        assert!(!record(1800, Some(2000)).is_on_track());
        assert!(record(1950, Some(2000)).is_on_track());
        assert!(record(2100, Some(2000)).is_on_track());
        assert!(!record(1950, None).is_on_track());
    }

    #[test]
    fn deficit_spans_full_calorie_range() {
        assert_eq!(record(0, Some(u32::MAX)).deficit(), Some(i64::from(u32::MAX)));
        assert_eq!(record(u32::MAX, Some(0)).deficit(), Some(-i64::from(u32::MAX)));
        assert!(!record(u32::MAX, Some(0)).is_on_track());
    }

    #[test]
    fn exercise_uses_backend_field_names() {
        let entry = ExerciseEntry {
            name: "Ciclismo".to_string(),
            duration_minutes: 30,
            frequency_per_week: 3,
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"name": "Ciclismo", "duration": 30, "frequency": 3})
        );
    }

    #[test]
    fn projection_accepts_null_months() {
        let result: ProjectionResult = serde_json::from_value(json!({
            "days": [0, 30],
            "weights": [90.0, 88.5],
            "months_to_target": null
        }))
        .unwrap();
        assert_eq!(result.months_to_target, None);

        let result: ProjectionResult =
            serde_json::from_value(json!({"days": [0], "weights": [90]})).unwrap();
        assert_eq!(result.weights, vec![90.0]);
        assert_eq!(result.months_to_target, None);
    }
}
