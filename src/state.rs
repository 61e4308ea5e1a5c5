use chrono::{Local, NaiveDate};

use crate::error::ValidationError;
use crate::models::*;

/// Everything the user has entered during this session.
///
/// Records and exercises are append-only; the profile is overwritten per key.
/// Nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    profile: UserProfile,
    daily_records: Vec<DailyRecord>,
    exercises: Vec<ExerciseEntry>,
    catalog: Vec<ExerciseCatalogItem>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn daily_records(&self) -> &[DailyRecord] {
        &self.daily_records
    }

    pub fn exercises(&self) -> &[ExerciseEntry] {
        &self.exercises
    }

    pub fn catalog(&self) -> &[ExerciseCatalogItem] {
        &self.catalog
    }

    pub fn set_profile_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.profile.set(key, value);
    }

    /// Record today's consumption, dated with the local calendar date.
    pub fn record_daily_entry(
        &mut self,
        consumed: &str,
        target: Option<&str>,
    ) -> Result<&DailyRecord, ValidationError> {
        self.record_daily_entry_on(Local::now().date_naive(), consumed, target)
    }

    pub fn record_daily_entry_on(
        &mut self,
        date: NaiveDate,
        consumed: &str,
        target: Option<&str>,
    ) -> Result<&DailyRecord, ValidationError> {
        if consumed.trim().is_empty() {
            return Err(ValidationError::EmptyConsumed);
        }
        let consumed = parse_int::<u32>("consumed calories", consumed)?;
        let target = match target.map(str::trim).filter(|t| !t.is_empty()) {
            Some(t) => Some(parse_int::<u32>("target calories", t)?),
            None => None,
        };

        self.daily_records.push(DailyRecord {
            date,
            consumed,
            target,
        });
        Ok(&self.daily_records[self.daily_records.len() - 1])
    }

    pub fn record_exercise(
        &mut self,
        name: &str,
        duration_minutes: &str,
        frequency_per_week: &str,
    ) -> Result<&ExerciseEntry, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingExerciseField("name"));
        }
        if duration_minutes.trim().is_empty() {
            return Err(ValidationError::MissingExerciseField("duration"));
        }
        if frequency_per_week.trim().is_empty() {
            return Err(ValidationError::MissingExerciseField("frequency"));
        }

        let entry = ExerciseEntry {
            name: name.to_string(),
            duration_minutes: parse_int("duration", duration_minutes)?,
            frequency_per_week: parse_int("frequency", frequency_per_week)?,
        };
        self.exercises.push(entry);
        Ok(&self.exercises[self.exercises.len() - 1])
    }

    /// Required profile fields that are absent or empty, in canonical order.
    pub fn missing_profile_fields(&self) -> Vec<&'static str> {
        REQUIRED_PROFILE_FIELDS
            .into_iter()
            .filter(|key| !self.profile.has(key))
            .collect()
    }

    pub fn projection_request(&self, days: u32) -> ProjectionRequest<'_> {
        ProjectionRequest {
            user_data: &self.profile,
            daily_records: &self.daily_records,
            exercises: &self.exercises,
            days,
        }
    }

    pub fn set_catalog(&mut self, catalog: Vec<ExerciseCatalogItem>) {
        self.catalog = catalog;
    }

    /// Number of most recent records in a row that are on track.
    pub fn streak_days(&self) -> usize {
        self.daily_records
            .iter()
            .rev()
            .take_while(|r| r.is_on_track())
            .count()
    }

    /// Mean deficit over the last `last_n` records that carry a target.
    pub fn average_deficit(&self, last_n: usize) -> Option<f64> {
        let start = self.daily_records.len().saturating_sub(last_n);
        let deficits: Vec<f64> = self.daily_records[start..]
            .iter()
            .filter_map(DailyRecord::deficit)
            .map(|d| d as f64)
            .collect();
        if deficits.is_empty() {
            return None;
        }
        Some(deficits.iter().sum::<f64>() / deficits.len() as f64)
    }
}

fn parse_int<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidInteger {
            field,
            value: raw.to_string(),
        })
}
