pub mod filter;
pub mod stats;

pub use filter::{apply_filters, FilterCriteria};
pub use stats::Statistics;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Dataset shipped with the binary, used when no `--data` file is given.
const SEED_JSON: &str = include_str!("seed.json");

/// Stable identifier of a plant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(pub u32);

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A manufacturing facility shown as a map marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub city: String,
    pub foundation_year: u16,
    pub projects_count: u32,
    pub lat: f64,
    pub lon: f64,
}

/// A work item attached to exactly one plant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub plant_id: PlantId,
    pub plant_name: String,
    pub direction: String,
    pub status: ProjectStatus,
    pub status_text: String,
    pub initiator: String,
    pub leader: String,
    pub goals: String,
    pub description: String,
    pub budget: String,
    pub created_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Planned,
    Suspended,
}

impl ProjectStatus {
    /// Fallback label when a project carries an empty `status_text`
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Planned => "Planned",
            Self::Suspended => "Suspended",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Active => "Work in progress",
            Self::Completed => "Goals reached, project closed",
            Self::Planned => "Approved, not started yet",
            Self::Suspended => "On hold",
        }
    }

    /// Iterator over all status variants in display order
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::Active,
            Self::Planned,
            Self::Suspended,
            Self::Completed,
        ]
        .into_iter()
    }
}

impl Project {
    /// Label shown on cards: the dataset's own text, or the status name.
    pub fn status_label(&self) -> &str {
        if self.status_text.trim().is_empty() {
            self.status.label()
        } else {
            &self.status_text
        }
    }
}

/// The immutable plant and project lists for one session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub plants: Vec<Plant>,
    pub projects: Vec<Project>,
}

impl Dataset {
    /// Parse the embedded seed dataset.
    pub fn builtin() -> Result<Self> {
        serde_json::from_str(SEED_JSON).context("Failed to parse built-in dataset")
    }

    /// Load a dataset from a JSON file with the same shape as the seed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset from {}", path.display()))?;

        let dataset: Dataset = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse dataset from {}", path.display()))?;

        tracing::info!(
            plants = dataset.plants.len(),
            projects = dataset.projects.len(),
            "Loaded dataset from {}",
            path.display()
        );
        Ok(dataset)
    }

    /// Explicit path wins, otherwise the built-in seed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::builtin(),
        }
    }

    pub fn plant(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Distinct directions in first-seen order (populates the direction selector)
    pub fn directions(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut directions = Vec::new();
        for project in &self.projects {
            if seen.insert(project.direction.as_str()) {
                directions.push(project.direction.clone());
            }
        }
        directions
    }
}
