//! Tests for project filtering.
//!
//! These tests verify:
//! 1. apply_filters combines plant, direction and text criteria with AND
//! 2. Text search is a case-insensitive substring match over name, initiator, leader, goals
//! 3. Results keep source order and unknown plants yield an empty list
//! 4. The dashboard re-derives the view on every criteria change

mod test_utils;

use plantmap::data::{apply_filters, Dataset, FilterCriteria, PlantId, ProjectStatus};
use plantmap::tui::{Dashboard, Message};
use pretty_assertions::assert_eq;
use test_utils::{
    builtin_dataset, make_plant, make_project, shown_ids, test_config, test_dashboard,
    RecordingMap,
};

// ============================================================================
// apply_filters
// ============================================================================

#[test]
fn test_empty_criteria_returns_everything_in_order() {
    let dataset = builtin_dataset();
    let indices = apply_filters(&dataset.projects, &FilterCriteria::default());
    assert_eq!(indices, (0..dataset.projects.len()).collect::<Vec<_>>());
}

#[test]
fn test_plant_filter() {
    let dataset = builtin_dataset();
    let criteria = FilterCriteria {
        plant_id: Some(PlantId(5)),
        ..Default::default()
    };
    let ids: Vec<u32> = apply_filters(&dataset.projects, &criteria)
        .into_iter()
        .map(|i| dataset.projects[i].id.0)
        .collect();
    assert_eq!(ids, vec![501, 502, 503]);
}

#[test]
fn test_plant_without_projects_is_empty() {
    let dataset = builtin_dataset();
    let criteria = FilterCriteria {
        plant_id: Some(PlantId(2)),
        ..Default::default()
    };
    assert!(apply_filters(&dataset.projects, &criteria).is_empty());
}

#[test]
fn test_unknown_plant_is_empty_not_error() {
    let dataset = builtin_dataset();
    let criteria = FilterCriteria {
        plant_id: Some(PlantId(999)),
        ..Default::default()
    };
    assert!(apply_filters(&dataset.projects, &criteria).is_empty());
}

#[test]
fn test_search_is_case_insensitive_across_people() {
    let dataset = builtin_dataset();
    let criteria = FilterCriteria {
        search_text: "иванов".to_string(),
        ..Default::default()
    };
    let ids: Vec<u32> = apply_filters(&dataset.projects, &criteria)
        .into_iter()
        .map(|i| dataset.projects[i].id.0)
        .collect();
    // Initiator of 101, leader of 501 (upper case)
    assert_eq!(ids, vec![101, 501]);
}

#[test]
fn test_search_matches_goals() {
    let dataset = builtin_dataset();
    let criteria = FilterCriteria {
        search_text: "клинкера на 45".to_string(),
        ..Default::default()
    };
    let indices = apply_filters(&dataset.projects, &criteria);
    assert_eq!(indices.len(), 1);
    assert_eq!(dataset.projects[indices[0]].id.0, 503);
}

#[test]
fn test_search_ignores_direction_and_description() {
    let mut project = make_project(1, 1, "Экология", ProjectStatus::Active);
    project.description = "уникальное слово".to_string();
    let criteria = FilterCriteria {
        search_text: "уникальное".to_string(),
        ..Default::default()
    };
    assert!(apply_filters(&[project.clone()], &criteria).is_empty());

    let criteria = FilterCriteria {
        search_text: "Экология".to_string(),
        ..Default::default()
    };
    assert!(apply_filters(&[project], &criteria).is_empty());
}

#[test]
fn test_criteria_combine_with_and() {
    let dataset = builtin_dataset();
    let criteria = FilterCriteria {
        plant_id: Some(PlantId(1)),
        direction: Some("Экология".to_string()),
        search_text: String::new(),
    };
    let ids: Vec<u32> = apply_filters(&dataset.projects, &criteria)
        .into_iter()
        .map(|i| dataset.projects[i].id.0)
        .collect();
    assert_eq!(ids, vec![102]);

    let criteria = FilterCriteria {
        plant_id: Some(PlantId(1)),
        direction: Some("Экология".to_string()),
        search_text: "печь".to_string(),
    };
    assert!(apply_filters(&dataset.projects, &criteria).is_empty());
}

#[test]
fn test_filtering_is_idempotent_and_a_subset() {
    let dataset = builtin_dataset();
    let criteria = FilterCriteria {
        plant_id: None,
        direction: Some("Цифровизация".to_string()),
        search_text: "ц".to_string(),
    };
    let first = apply_filters(&dataset.projects, &criteria);
    let second = apply_filters(&dataset.projects, &criteria);
    assert_eq!(first, second);
    assert!(first.windows(2).all(|w| w[0] < w[1]));
    assert!(first
        .iter()
        .all(|&i| criteria.matches(&dataset.projects[i])));
}

#[test]
fn test_direction_filter_is_exact() {
    let dataset = builtin_dataset();
    let criteria = FilterCriteria {
        direction: Some("экология".to_string()),
        ..Default::default()
    };
    assert!(apply_filters(&dataset.projects, &criteria).is_empty());
}

// ============================================================================
// Dashboard filter flow
// ============================================================================

#[test]
fn test_live_search_refilters_on_each_keystroke() {
    let mut dashboard = test_dashboard();
    dashboard.update(Message::EnterSearch);
    assert!(dashboard.search_mode);

    for c in "иван".chars() {
        dashboard.update(Message::SearchInput(c));
    }
    // "обслуживание" in 502 matches too
    assert_eq!(shown_ids(&dashboard), vec![101, 501, 502]);

    dashboard.update(Message::SearchInput('о'));
    dashboard.update(Message::SearchInput('в'));
    assert_eq!(shown_ids(&dashboard), vec![101, 501]);

    dashboard.update(Message::SearchInput(' '));
    dashboard.update(Message::SearchInput('А'));
    assert_eq!(shown_ids(&dashboard), vec![101]);

    dashboard.update(Message::SearchBackspace);
    assert_eq!(shown_ids(&dashboard), vec![101, 501]);
}

#[test]
fn test_confirm_search_keeps_text_and_exit_clears_it() {
    let mut dashboard = test_dashboard();
    dashboard.update(Message::EnterSearch);
    for c in "RDF".chars() {
        dashboard.update(Message::SearchInput(c));
    }
    dashboard.update(Message::ConfirmSearch);
    assert!(!dashboard.search_mode);
    assert_eq!(dashboard.criteria.search_text, "RDF");
    assert_eq!(shown_ids(&dashboard), vec![501]);

    dashboard.update(Message::EnterSearch);
    dashboard.update(Message::ExitSearch);
    assert!(dashboard.criteria.search_text.is_empty());
    assert_eq!(shown_ids(&dashboard).len(), 16);
}

#[test]
fn test_filter_menu_selects_plant_and_direction() {
    let mut dashboard = test_dashboard();
    dashboard.update(Message::ToggleFilterMenu);
    assert!(dashboard.show_filter_menu());

    // p5 = fifth plant in the list (id 5)
    dashboard.update(Message::SelectPlantFilter(5));
    assert_eq!(dashboard.criteria.plant_id, Some(PlantId(5)));
    assert_eq!(shown_ids(&dashboard), vec![501, 502, 503]);

    // d2 = second direction seen in the data
    dashboard.update(Message::SelectDirectionFilter(2));
    assert_eq!(dashboard.criteria.direction.as_deref(), Some("Экология"));
    assert_eq!(shown_ids(&dashboard), vec![501]);

    // p0 / d0 clear
    dashboard.update(Message::SelectPlantFilter(0));
    dashboard.update(Message::SelectDirectionFilter(0));
    assert!(dashboard.criteria.is_empty());
    assert_eq!(shown_ids(&dashboard).len(), 16);
}

#[test]
fn test_filter_menu_ignores_out_of_range_entries() {
    let mut dashboard = test_dashboard();
    dashboard.update(Message::SelectPlantFilter(3));
    dashboard.update(Message::SelectPlantFilter(9));
    dashboard.update(Message::SelectDirectionFilter(9));
    assert_eq!(dashboard.criteria.plant_id, Some(PlantId(3)));
    assert_eq!(dashboard.criteria.direction, None);
}

#[test]
fn test_direction_stepping_wraps_through_all() {
    let mut dashboard = test_dashboard();

    dashboard.update(Message::NextDirectionFilter);
    assert_eq!(dashboard.criteria.direction.as_deref(), Some("Энергоэффективность"));

    for _ in 0..4 {
        dashboard.update(Message::NextDirectionFilter);
    }
    assert_eq!(dashboard.criteria.direction.as_deref(), Some("Производительность"));

    // Past the last direction back to all
    dashboard.update(Message::NextDirectionFilter);
    assert_eq!(dashboard.criteria.direction, None);
    assert_eq!(shown_ids(&dashboard).len(), 16);

    dashboard.update(Message::PrevDirectionFilter);
    assert_eq!(dashboard.criteria.direction.as_deref(), Some("Производительность"));
    dashboard.update(Message::SelectDirectionFilter(1));
    dashboard.update(Message::PrevDirectionFilter);
    assert_eq!(dashboard.criteria.direction, None);
}

#[test]
fn test_directions_past_the_ninth_are_reachable() {
    let dataset = Dataset {
        plants: vec![make_plant(1, "Plant", "City")],
        projects: (1..=12)
            .map(|i| make_project(i, 1, &format!("Direction {i}"), ProjectStatus::Active))
            .collect(),
    };
    let mut dashboard = Dashboard::new(test_config(), dataset, RecordingMap::new());
    assert_eq!(dashboard.directions().len(), 12);

    dashboard.update(Message::SelectDirectionFilter(9));
    assert_eq!(dashboard.criteria.direction.as_deref(), Some("Direction 9"));

    for _ in 0..3 {
        dashboard.update(Message::NextDirectionFilter);
    }
    assert_eq!(dashboard.criteria.direction.as_deref(), Some("Direction 12"));
    assert_eq!(shown_ids(&dashboard), vec![12]);
}

#[test]
fn test_selection_is_clamped_when_list_shrinks() {
    let mut dashboard = test_dashboard();
    dashboard.update(Message::GotoBottom);
    assert_eq!(dashboard.selected, 15);

    dashboard.set_plant_filter(Some(PlantId(1)));
    assert_eq!(dashboard.selected, 2);

    dashboard.set_plant_filter(Some(PlantId(2)));
    assert_eq!(dashboard.selected, 0);
    assert!(dashboard.selected_project().is_none());
}

#[test]
fn test_reset_filters_restores_full_list() {
    let mut dashboard = test_dashboard();
    dashboard.set_plant_filter(Some(PlantId(7)));
    dashboard.set_direction_filter(Some("Охрана труда".to_string()));
    dashboard.set_search_text("тренаж".to_string());
    assert_eq!(shown_ids(&dashboard), vec![701]);
    assert!(dashboard.has_active_filters());

    dashboard.update(Message::ResetFilters);
    assert!(!dashboard.has_active_filters());
    assert_eq!(shown_ids(&dashboard).len(), 16);
}
