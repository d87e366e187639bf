//! Project filtering by plant, direction and free text.
//!
//! Pure derivation: nothing here touches the UI or mutates the source list.

use super::{PlantId, Project};

/// The user-selected constraints narrowing the project list.
///
/// `None` / empty means "no constraint" for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub plant_id: Option<PlantId>,
    pub direction: Option<String>,
    pub search_text: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.plant_id.is_none() && self.direction.is_none() && self.search_text.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check one project against every active constraint.
    pub fn matches(&self, project: &Project) -> bool {
        // Plant filter (None = all plants)
        if let Some(plant_id) = self.plant_id {
            if project.plant_id != plant_id {
                return false;
            }
        }

        // Direction filter (None = all directions)
        if let Some(direction) = &self.direction {
            if project.direction != *direction {
                return false;
            }
        }

        if self.search_text.is_empty() {
            return true;
        }

        let needle = self.search_text.to_lowercase();
        [
            &project.name,
            &project.initiator,
            &project.leader,
            &project.goals,
        ]
        .iter()
        .any(|field| contains_ignore_case(field, &needle))
    }
}

/// Case-insensitive substring test. `needle` must already be lowercase.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Indices of the projects matching `criteria`, in source order.
pub fn apply_filters(projects: &[Project], criteria: &FilterCriteria) -> Vec<usize> {
    projects
        .iter()
        .enumerate()
        .filter(|(_, project)| criteria.matches(project))
        .map(|(idx, _)| idx)
        .collect()
}

/// Byte ranges of case-insensitive occurrences of `query` in `text`.
///
/// Used to highlight search hits on project cards. Ranges always fall on
/// char boundaries of `text`.
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle: Vec<char> = query.to_lowercase().chars().collect();
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut ranges = Vec::new();
    let mut i = 0;

    while i + needle.len() <= chars.len() {
        let hit = needle
            .iter()
            .zip(&chars[i..i + needle.len()])
            .all(|(n, (_, c))| c.to_lowercase().eq(std::iter::once(*n)));
        if hit {
            let start = chars[i].0;
            let end = chars
                .get(i + needle.len())
                .map(|(pos, _)| *pos)
                .unwrap_or(text.len());
            ranges.push((start, end));
            i += needle.len();
        } else {
            i += 1;
        }
    }

    ranges
}
