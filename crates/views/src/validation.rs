//! Client-side field validation for the project edit dialog.
//!
//! Pure functions; an empty map means "valid". Keys are the wire field
//! names so the rendering layer can attach messages to inputs directly.

use std::collections::BTreeMap;

use models::project::{UpdateProject, UpdateProjectTranslation};

pub type FieldErrors = BTreeMap<&'static str, &'static str>;

pub fn validate_project(data: &UpdateProject) -> FieldErrors {
    let mut errors = FieldErrors::new();
    match data.region.as_deref().map(str::trim) {
        Some(region) if !region.is_empty() => {}
        _ => {
            errors.insert("region", "Region is required");
        }
    }
    if data.status.is_none() {
        errors.insert("status", "Status is required");
    }
    errors
}

pub fn validate_translation(data: &UpdateProjectTranslation) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let Some(max_mileage) = data.max_mileage {
        if !(0..=100).contains(&max_mileage) {
            errors.insert("MaxMileage", "Mileage must be between 0 and 100");
        }
    }
    if data.analyst.as_ref().is_some_and(|a| a.chars().count() > 30) {
        errors.insert("Analyst", "Analyst name must be 30 characters or less");
    }
    if data.pm.as_ref().is_some_and(|pm| pm.chars().count() > 30) {
        errors.insert("PM", "Project Manager name must be 30 characters or less");
    }
    errors
}

#[cfg(test)]
mod tests {
    use models::project::ProjectStatus;

    use super::*;

    fn valid_project() -> UpdateProject {
        UpdateProject {
            region: Some("West".to_string()),
            status: Some(ProjectStatus::Active),
        }
    }

    #[test]
    fn missing_region_is_reported() {
        let mut data = valid_project();
        data.region = None;
        assert_eq!(
            validate_project(&data).get("region"),
            Some(&"Region is required")
        );
    }

    #[test]
    fn blank_region_is_reported_after_trimming() {
        let mut data = valid_project();
        data.region = Some("   ".to_string());
        assert!(validate_project(&data).contains_key("region"));
    }

    #[test]
    fn missing_status_is_reported() {
        let mut data = valid_project();
        data.status = None;
        assert_eq!(
            validate_project(&data).get("status"),
            Some(&"Status is required")
        );
    }

    #[test]
    fn valid_project_yields_empty_map() {
        assert!(validate_project(&valid_project()).is_empty());
    }

    #[test]
    fn mileage_outside_range_is_reported() {
        for out_of_range in [-1, 101, 150] {
            let data = UpdateProjectTranslation {
                max_mileage: Some(out_of_range),
                ..Default::default()
            };
            assert_eq!(
                validate_translation(&data).get("MaxMileage"),
                Some(&"Mileage must be between 0 and 100"),
                "MaxMileage = {out_of_range}"
            );
        }
    }

    #[test]
    fn mileage_bounds_are_inclusive() {
        for in_range in [0, 50, 100] {
            let data = UpdateProjectTranslation {
                max_mileage: Some(in_range),
                ..Default::default()
            };
            assert!(
                validate_translation(&data).is_empty(),
                "MaxMileage = {in_range}"
            );
        }
    }

    #[test]
    fn name_length_limits_are_exactly_thirty() {
        let at_limit = UpdateProjectTranslation {
            analyst: Some("a".repeat(30)),
            pm: Some("p".repeat(30)),
            ..Default::default()
        };
        assert!(validate_translation(&at_limit).is_empty());

        let over_limit = UpdateProjectTranslation {
            analyst: Some("a".repeat(31)),
            pm: Some("p".repeat(31)),
            ..Default::default()
        };
        let errors = validate_translation(&over_limit);
        assert_eq!(
            errors.get("Analyst"),
            Some(&"Analyst name must be 30 characters or less")
        );
        assert_eq!(
            errors.get("PM"),
            Some(&"Project Manager name must be 30 characters or less")
        );
    }

    #[test]
    fn unset_translation_fields_are_not_checked() {
        assert!(validate_translation(&UpdateProjectTranslation::default()).is_empty());
    }
}
