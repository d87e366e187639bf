use super::{Project, ProjectStatus};
use std::collections::HashSet;

/// Summary figures shown in the statistics bar.
///
/// Always computed over the full project list, never the filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total_projects: usize,
    /// Distinct plants referenced by at least one project
    pub active_plants: usize,
    pub completed: usize,
    pub in_progress: usize,
}

impl Statistics {
    pub fn compute(projects: &[Project]) -> Self {
        let active_plants = projects
            .iter()
            .map(|p| p.plant_id)
            .collect::<HashSet<_>>()
            .len();

        Self {
            total_projects: projects.len(),
            active_plants,
            completed: count_status(projects, ProjectStatus::Completed),
            in_progress: count_status(projects, ProjectStatus::Active),
        }
    }
}

fn count_status(projects: &[Project], status: ProjectStatus) -> usize {
    projects.iter().filter(|p| p.status == status).count()
}
