//! Field validation rules for points of interest.

use validator::Validate;

use crate::domain::entities::{PointOfInterestFields, ValidFields};
use crate::shared::error::FieldError;
use crate::shared::validation::field_errors;

/// Proposed field values a rule inspects.
#[derive(Debug, Clone, Copy)]
pub struct ProposedFields<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// A cross-field rule. Appends its violations, never stops the others.
pub type Rule = fn(&ProposedFields<'_>, &mut Vec<FieldError>);

/// Cross-field rules, applied in order.
pub const RULES: &[Rule] = &[description_differs_from_name];

/// Message attached to `description` when it repeats the name.
pub const DESCRIPTION_EQUALS_NAME: &str =
    "The provided description should be different from the name.";

fn description_differs_from_name(fields: &ProposedFields<'_>, violations: &mut Vec<FieldError>) {
    if fields.name == fields.description {
        violations.push(FieldError::new("description", DESCRIPTION_EQUALS_NAME));
    }
}

/// Run every cross-field rule against the proposed values.
pub fn validate(name: Option<&str>, description: Option<&str>) -> Vec<FieldError> {
    let proposed = ProposedFields { name, description };
    let mut violations = Vec::new();
    for rule in RULES {
        rule(&proposed, &mut violations);
    }
    violations
}

/// Full validation of a field set: declared shape constraints plus every
/// cross-field rule. Returns the complete list, sorted by field.
pub fn validate_fields(fields: &PointOfInterestFields) -> Vec<FieldError> {
    let mut violations = match fields.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => field_errors(&errors),
    };
    violations.extend(validate(
        fields.name.as_deref(),
        fields.description.as_deref(),
    ));
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

/// Validate `fields` and, when clean, promote them to [`ValidFields`].
pub fn into_valid(fields: PointOfInterestFields) -> Result<ValidFields, Vec<FieldError>> {
    let violations = validate_fields(&fields);
    match (fields.name, violations.is_empty()) {
        (Some(name), true) => Ok(ValidFields {
            name,
            description: fields.description,
        }),
        _ => Err(violations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_equal_name_and_description_is_rejected() {
        let violations = validate(Some("Tower"), Some("Tower"));

        assert_eq!(
            violations,
            vec![FieldError::new("description", DESCRIPTION_EQUALS_NAME)]
        );
    }

    #[test_case(Some("Tower"), Some("Tall") ; "different values")]
    #[test_case(Some("Tower"), None ; "missing description")]
    #[test_case(Some("Tower"), Some("tower") ; "comparison is case sensitive")]
    fn test_distinct_values_pass(name: Option<&str>, description: Option<&str>) {
        assert!(validate(name, description).is_empty());
    }

    #[test]
    fn test_valid_fields_have_no_violations() {
        let fields = PointOfInterestFields::new("Pier", Some("Old pier"));
        assert!(validate_fields(&fields).is_empty());
    }

    #[test]
    fn test_missing_name_is_reported() {
        let fields = PointOfInterestFields {
            name: None,
            description: Some("Somewhere".into()),
        };

        let violations = validate_fields(&fields);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
    }

    #[test]
    fn test_all_violations_are_collected() {
        let fields = PointOfInterestFields {
            name: Some("x".repeat(51)),
            description: Some("x".repeat(51)),
        };

        let violations = validate_fields(&fields);
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["description", "name"]);
    }

    #[test_case("", "name" ; "empty name")]
    #[test_case(&"n".repeat(51), "name" ; "name too long")]
    fn test_name_shape(name: &str, field: &str) {
        let fields = PointOfInterestFields::new(name, Some("Description"));
        let violations = validate_fields(&fields);
        assert!(violations.iter().any(|v| v.field == field));
    }

    #[test]
    fn test_description_too_long() {
        let fields = PointOfInterestFields::new("Name", Some(&"d".repeat(201)));
        let violations = validate_fields(&fields);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "description");
    }

    #[test]
    fn test_into_valid_promotes_clean_fields() {
        let valid = into_valid(PointOfInterestFields::new("Pier", Some("Old pier"))).unwrap();
        assert_eq!(valid.name, "Pier");
        assert_eq!(valid.description.as_deref(), Some("Old pier"));
    }

    #[test]
    fn test_into_valid_returns_every_violation() {
        let violations = into_valid(PointOfInterestFields::default()).unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["description", "name"]);
    }
}
