use crate::client::TrackerClient;
use crate::config::TrackerConfig;
use crate::error::ValidationError;
use crate::models::ProjectionResult;
use crate::state::AppState;
use crate::view::{CalorieTarget, Notice, ProjectionView};

/// A user action coming from the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetProfileField { key: String, value: String },
    RecordDailyEntry { consumed: String, target: Option<String> },
    RecordExercise { name: String, duration: String, frequency: String },
    CalculateMaintenance,
    Project { days: u32 },
    LoadCatalog,
}

/// What the presentation layer should show after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    ProfileUpdated,
    Notice(Notice),
    CalorieTarget(CalorieTarget),
    Projection(ProjectionView),
    CatalogLoaded(usize),
    Rejected(ValidationError),
    /// A backend request failed; it has been logged and nothing changed.
    NoResult,
}

/// One tracking session: the entered data plus the backend it syncs with.
pub struct Tracker {
    state: AppState,
    client: TrackerClient,
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_client(TrackerClient::new(config))
    }

    pub fn with_client(client: TrackerClient) -> Self {
        Self {
            state: AppState::new(),
            client,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn client(&self) -> &TrackerClient {
        &self.client
    }

    /// Compute maintenance calories for the current profile.
    ///
    /// Returns an error without touching the network when weight, height, age
    /// or gender is missing. A failed request is logged and yields `Ok(None)`.
    pub async fn request_maintenance_calories(
        &self,
    ) -> Result<Option<CalorieTarget>, ValidationError> {
        let missing = self.state.missing_profile_fields();
        if !missing.is_empty() {
            tracing::debug!(?missing, "Skipping maintenance calculation");
            return Err(ValidationError::MissingProfileFields(missing));
        }

        match self
            .client
            .calculate_maintenance_calories(self.state.profile())
            .await
        {
            Ok(calories) => Ok(Some(CalorieTarget::from_raw(calories))),
            Err(e) => {
                tracing::error!(error = %e, "Error calculating maintenance calories");
                Ok(None)
            }
        }
    }

    /// Project weight over `days`. A failed request is logged and yields `None`.
    pub async fn request_projection(&self, days: u32) -> Option<ProjectionResult> {
        let request = self.state.projection_request(days);
        tracing::debug!(
            days,
            records = request.daily_records.len(),
            exercises = request.exercises.len(),
            "Requesting projection"
        );

        match self.client.get_projection(&request).await {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::error!(error = %e, "Error updating projection");
                None
            }
        }
    }

    /// Fetch the exercise catalog. On failure the current catalog is kept.
    pub async fn load_exercise_catalog(&mut self) -> Option<usize> {
        match self.client.get_exercises().await {
            Ok(catalog) => {
                let count = catalog.len();
                self.state.set_catalog(catalog);
                tracing::debug!(count, "Loaded exercise catalog");
                Some(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading exercises");
                None
            }
        }
    }

    pub async fn dispatch(&mut self, command: Command) -> Outcome {
        match command {
            Command::SetProfileField { key, value } => {
                self.state.set_profile_field(key, value);
                Outcome::ProfileUpdated
            }
            Command::RecordDailyEntry { consumed, target } => {
                match self.state.record_daily_entry(&consumed, target.as_deref()) {
                    Ok(_) => Outcome::Notice(Notice::RecordAdded),
                    Err(e) => Outcome::Rejected(e),
                }
            }
            Command::RecordExercise {
                name,
                duration,
                frequency,
            } => match self.state.record_exercise(&name, &duration, &frequency) {
                Ok(_) => Outcome::Notice(Notice::ExerciseAdded),
                Err(e) => Outcome::Rejected(e),
            },
            Command::CalculateMaintenance => match self.request_maintenance_calories().await {
                Ok(Some(target)) => Outcome::CalorieTarget(target),
                Ok(None) => Outcome::NoResult,
                Err(e) => Outcome::Rejected(e),
            },
            Command::Project { days } => match self.request_projection(days).await {
                Some(result) => Outcome::Projection(ProjectionView::from(&result)),
                None => Outcome::NoResult,
            },
            Command::LoadCatalog => match self.load_exercise_catalog().await {
                Some(count) => Outcome::CatalogLoaded(count),
                None => Outcome::NoResult,
            },
        }
    }
}
