//! Tests for loading plant/project datasets.

use plantmap::data::{Dataset, PlantId, ProjectId, ProjectStatus};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const SMALL: &str = r#"{
  "plants": [
    {"id": 10, "name": "Test Plant", "city": "Testville", "foundation_year": 1990,
     "projects_count": 1, "lat": 51.5, "lon": 46.0}
  ],
  "projects": [
    {"id": 1001, "name": "Kiln upgrade", "plant_id": 10, "plant_name": "Test Plant",
     "direction": "Энергоэффективность", "status": "suspended", "status_text": "",
     "initiator": "A", "leader": "B", "goals": "Less gas", "description": "",
     "budget": "5 млн ₽", "created_date": "2023-03-01"}
  ]
}"#;

#[test]
fn test_builtin_dataset_shape() {
    let dataset = Dataset::load(None).unwrap();
    assert_eq!(dataset.plants.len(), 8);
    assert_eq!(dataset.projects.len(), 16);
    assert_eq!(
        dataset.directions(),
        vec![
            "Энергоэффективность",
            "Экология",
            "Цифровизация",
            "Охрана труда",
            "Производительность",
        ]
    );
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plants.json");
    fs::write(&path, SMALL).unwrap();

    let dataset = Dataset::load(Some(&path)).unwrap();
    assert_eq!(dataset.plants.len(), 1);
    assert_eq!(dataset.plant(PlantId(10)).map(|p| p.city.as_str()), Some("Testville"));

    let project = dataset.project(ProjectId(1001)).unwrap();
    assert_eq!(project.status, ProjectStatus::Suspended);
    assert_eq!(project.status_label(), "Suspended");
    assert_eq!(project.created_date.to_string(), "2023-03-01");
}

#[test]
fn test_lookup_of_unknown_ids() {
    let dataset = Dataset::load(None).unwrap();
    assert!(dataset.plant(PlantId(999)).is_none());
    assert!(dataset.project(ProjectId(999)).is_none());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = Dataset::load(Some(&dir.path().join("absent.json"))).unwrap_err();
    assert!(err.to_string().contains("Failed to read dataset"), "{}", err);
}

#[test]
fn test_unknown_status_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plants.json");
    fs::write(&path, SMALL.replace("suspended", "cancelled")).unwrap();

    let err = Dataset::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Failed to parse dataset"), "{}", err);
}
