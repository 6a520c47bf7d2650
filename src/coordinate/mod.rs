//! Artifact coordinate parsing
//!
//! A coordinate is a colon-delimited token of 3 to 5 fields:
//! `groupId:artifactId:version[:type[:classifier]]`.
//!
//! The version field may be left empty only when a project context supplies a
//! default version. The type defaults to a configured default type (falling
//! back to "jar"). The classifier is defaulted from configuration only when
//! exactly 4 fields are given; an explicitly empty fifth field stays
//! "no classifier".

use std::fmt;

use crate::error::{Result, invalid_coordinate, missing_version};

/// Fallback artifact type when neither the token nor configuration names one
pub const DEFAULT_TYPE: &str = "jar";

/// An artifact coordinate identifying one package unit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub artifact_type: String,
    pub classifier: Option<String>,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.version, self.artifact_type
        )?;
        if let Some(ref classifier) = self.classifier {
            write!(f, ":{}", classifier)?;
        }
        Ok(())
    }
}

/// Fill-in values applied when a coordinate token omits fields
#[derive(Debug, Clone, Default)]
pub struct CoordinateDefaults {
    /// Version used when the version field is empty (from the project context)
    pub version: Option<String>,
    /// Type used when the type field is omitted or empty
    pub artifact_type: Option<String>,
    /// Classifier used only when exactly 4 fields are given
    pub classifier: Option<String>,
}

/// Parse a coordinate token, applying defaults for legitimately omitted fields
///
/// Splits on `:` keeping empty fields, so `org.example:foo::jar` is a 4-field
/// token with an empty version.
pub fn parse(token: &str, defaults: &CoordinateDefaults) -> Result<Coordinate> {
    let fields: Vec<&str> = token.split(':').collect();

    if fields.len() < 3 || fields.len() > 5 {
        return Err(invalid_coordinate(token));
    }

    let group_id = fields[0].trim();
    let artifact_id = fields[1].trim();
    if group_id.is_empty() || artifact_id.is_empty() {
        return Err(invalid_coordinate(token));
    }

    let version = match fields[2].trim() {
        "" => match defaults.version {
            Some(ref v) => v.clone(),
            None => return Err(missing_version(token)),
        },
        v => v.to_string(),
    };

    let default_type = defaults
        .artifact_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TYPE);
    let artifact_type = match fields.get(3).map(|t| t.trim()) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => default_type.to_string(),
    };

    let classifier = match fields.len() {
        // An explicit fifth field is taken verbatim; empty stays "no classifier"
        5 => match fields[4].trim() {
            "" => None,
            c => Some(c.to_string()),
        },
        4 => defaults
            .classifier
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|c| c.to_string()),
        _ => None,
    };

    Ok(Coordinate {
        group_id: group_id.to_string(),
        artifact_id: artifact_id.to_string(),
        version,
        artifact_type,
        classifier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArtcpError;

    fn no_defaults() -> CoordinateDefaults {
        CoordinateDefaults::default()
    }

    #[test]
    fn test_parse_three_fields() {
        let c = parse("org.example:foo:1.0", &no_defaults()).unwrap();
        assert_eq!(c.group_id, "org.example");
        assert_eq!(c.artifact_id, "foo");
        assert_eq!(c.version, "1.0");
        assert_eq!(c.artifact_type, "jar");
        assert_eq!(c.classifier, None);
    }

    #[test]
    fn test_parse_four_fields() {
        let c = parse("org.example:foo:1.0:zip", &no_defaults()).unwrap();
        assert_eq!(c.artifact_type, "zip");
        assert_eq!(c.classifier, None);
    }

    #[test]
    fn test_parse_five_fields() {
        let c = parse("org.example:foo:1.0:jar:sources", &no_defaults()).unwrap();
        assert_eq!(c.artifact_type, "jar");
        assert_eq!(c.classifier, Some("sources".to_string()));
    }

    #[test]
    fn test_parse_too_few_fields() {
        let err = parse("org.example:foo", &no_defaults()).unwrap_err();
        assert!(matches!(err, ArtcpError::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_parse_too_many_fields() {
        let err = parse("a:b:c:d:e:f", &no_defaults()).unwrap_err();
        assert!(matches!(err, ArtcpError::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_parse_empty_group_or_artifact() {
        assert!(parse(":foo:1.0", &no_defaults()).is_err());
        assert!(parse("org.example::1.0", &no_defaults()).is_err());
    }

    #[test]
    fn test_empty_version_without_project_fails() {
        let err = parse("org.example:foo:", &no_defaults()).unwrap_err();
        assert!(matches!(err, ArtcpError::MissingVersion { .. }));
    }

    #[test]
    fn test_empty_version_uses_project_default() {
        let defaults = CoordinateDefaults {
            version: Some("2.1".to_string()),
            ..Default::default()
        };
        let c = parse("org.example:foo:", &defaults).unwrap();
        assert_eq!(c.version, "2.1");
    }

    #[test]
    fn test_default_type_applied_for_three_fields() {
        let defaults = CoordinateDefaults {
            artifact_type: Some("zip".to_string()),
            ..Default::default()
        };
        let c = parse("org.example:foo:1.0", &defaults).unwrap();
        assert_eq!(c.artifact_type, "zip");
    }

    #[test]
    fn test_empty_type_field_uses_default() {
        let defaults = CoordinateDefaults {
            artifact_type: Some("war".to_string()),
            ..Default::default()
        };
        let c = parse("org.example:foo:1.0::sources", &defaults).unwrap();
        assert_eq!(c.artifact_type, "war");
        assert_eq!(c.classifier, Some("sources".to_string()));
    }

    #[test]
    fn test_default_classifier_only_for_four_fields() {
        let defaults = CoordinateDefaults {
            classifier: Some("linux".to_string()),
            ..Default::default()
        };
        let four = parse("org.example:foo:1.0:jar", &defaults).unwrap();
        assert_eq!(four.classifier, Some("linux".to_string()));

        // Three fields never receive the default classifier
        let three = parse("org.example:foo:1.0", &defaults).unwrap();
        assert_eq!(three.classifier, None);
    }

    #[test]
    fn test_explicit_empty_classifier_preserved() {
        let defaults = CoordinateDefaults {
            classifier: Some("linux".to_string()),
            ..Default::default()
        };
        // Five fields with an empty classifier means "no classifier", not the default
        let c = parse("org.example:foo:1.0:jar:", &defaults).unwrap();
        assert_eq!(c.classifier, None);
    }

    #[test]
    fn test_round_trip_of_explicit_fields() {
        let c = parse("org.example:foo:1.0:zip:sources", &no_defaults()).unwrap();
        assert_eq!(c.to_string(), "org.example:foo:1.0:zip:sources");
    }

    #[test]
    fn test_display_without_classifier() {
        let c = parse("org.example:foo:1.0", &no_defaults()).unwrap();
        assert_eq!(c.to_string(), "org.example:foo:1.0:jar");
    }
}
