//! Shapes handed to the presentation layer.
//!
//! Nothing here renders; these are the values a chart widget, a modal and a
//! toast area need.

use std::fmt;

use crate::models::ProjectionResult;

/// Horizons, in days, the projection controls offer.
pub const PROJECTION_HORIZONS: [u32; 4] = [30, 90, 180, 365];

pub const DEFAULT_PROJECTION_DAYS: u32 = 365;

/// Maintenance calories rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalorieTarget(pub i64);

impl CalorieTarget {
    pub fn from_raw(calories: f64) -> Self {
        Self(calories.round() as i64)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CalorieTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Your target calories are: {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeToTarget {
    Reaches { months: f64 },
    NotReached,
}

impl TimeToTarget {
    /// Any non-zero month count reaches the target; zero counts as absent.
    pub fn from_months(months: Option<f64>) -> Self {
        match months {
            Some(months) if months != 0.0 && !months.is_nan() => {
                TimeToTarget::Reaches { months }
            }
            _ => TimeToTarget::NotReached,
        }
    }

    pub fn message(&self) -> String {
        match self {
            TimeToTarget::Reaches { months } => format!(
                "At this pace you would reach your target weight in about {} months.",
                months
            ),
            TimeToTarget::NotReached => {
                "With the current data you are not on track to reach your target weight. Keep going!"
                    .to_string()
            }
        }
    }
}

/// Line-chart data for a projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// (day, weight in kg)
    pub points: Vec<(i64, f64)>,
}

impl ChartSeries {
    pub fn from_projection(result: &ProjectionResult) -> Self {
        if result.days.len() != result.weights.len() {
            tracing::warn!(
                days = result.days.len(),
                weights = result.weights.len(),
                "Projection series lengths differ, truncating"
            );
        }

        Self {
            title: "Weight projection",
            x_label: "Days",
            y_label: "Weight (kg)",
            points: result
                .days
                .iter()
                .copied()
                .zip(result.weights.iter().copied())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionView {
    pub chart: ChartSeries,
    pub time_to_target: TimeToTarget,
}

impl From<&ProjectionResult> for ProjectionView {
    fn from(result: &ProjectionResult) -> Self {
        Self {
            chart: ChartSeries::from_projection(result),
            time_to_target: TimeToTarget::from_months(result.months_to_target),
        }
    }
}

/// Short transient messages shown after a successful entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    RecordAdded,
    ExerciseAdded,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::RecordAdded => write!(f, "Record added successfully!"),
            Notice::ExerciseAdded => write!(f, "Exercise added successfully!"),
        }
    }
}
