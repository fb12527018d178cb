//! Per-shader collision scanning.
//!
//! Every declared parameter is scanned together with a synthesized `_map`
//! variant (the host binds texture and material inputs through the variant,
//! which needs a key of its own). Within one shader, no two scanned names
//! may share a derived key, and no key may land on a slot already recorded
//! as a legacy numeric ID.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::error::KeyResult;
use crate::key::{derive_key, ParamKey};
use crate::source::ShaderSource;

/// Suffix of the synthesized map-input variant of each parameter name.
pub const MAP_SUFFIX: &str = "_map";

/// A single finding from a shader scan.
///
/// Collisions are findings, not failures: the scanner records them and
/// keeps going, and the caller decides whether any of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collision {
    /// A declared parameter name repeats an earlier entry of the expanded
    /// list, either literally or by clashing with a synthesized `_map`
    /// variant.
    DuplicateName {
        /// Shader the parameter belongs to.
        shader: String,
        /// The repeated parameter name.
        param: String,
    },
    /// A derived key was already taken within this shader's scan.
    DuplicateKey {
        /// Shader the parameter belongs to.
        shader: String,
        /// The parameter whose key collided.
        param: String,
        /// The colliding key.
        key: ParamKey,
    },
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { shader, param } => {
                write!(f, "Name collision: shader {}, parameter {}", shader, param)
            }
            Self::DuplicateKey { shader, param, key } => {
                write!(
                    f,
                    "Key collision: shader {}, parameter {}, key {}",
                    shader, param, key
                )
            }
        }
    }
}

/// Result of scanning every shader from a metadata source.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Shader name mapped to its expanded parameter list (declared names
    /// plus their `_map` variants, in declaration order).
    pub manifest: BTreeMap<String, Vec<String>>,
    /// Every collision found, across all shaders.
    pub collisions: Vec<Collision>,
}

/// Expand a shader's declared parameters into the list the key pass scans.
///
/// Declared names are checked against the expanded-so-far list; the
/// synthesized variants are appended unchecked.
fn expand_params(
    shader: &str,
    params: &[String],
    collisions: &mut Vec<Collision>,
) -> Vec<String> {
    let mut expanded = Vec::with_capacity(params.len() * 2);
    for pname in params {
        if expanded.iter().any(|entry| entry == pname) {
            collisions.push(Collision::DuplicateName {
                shader: shader.to_owned(),
                param: pname.clone(),
            });
        }
        expanded.push(pname.clone());
        expanded.push(format!("{}{}", pname, MAP_SUFFIX));
    }
    expanded
}

/// Walk the expanded list and record every key that was already taken.
///
/// The guard set holds both derived keys and list positions: each slot
/// index doubles as a legacy numeric ID that later keys must not land on.
/// A colliding entry reserves neither its key nor its slot.
fn scan_keys(
    shader: &str,
    expanded: &[String],
    collisions: &mut Vec<Collision>,
) -> KeyResult<()> {
    let mut seen: HashSet<u32> = HashSet::with_capacity(expanded.len() * 2);
    for (i, pname) in expanded.iter().enumerate() {
        let key = derive_key(pname)?;
        if seen.contains(&u32::from(key)) {
            collisions.push(Collision::DuplicateKey {
                shader: shader.to_owned(),
                param: pname.clone(),
                key,
            });
        } else {
            seen.insert(i as u32);
            seen.insert(u32::from(key));
        }
    }
    Ok(())
}

/// Scan one shader's declared parameter names.
///
/// The scanned list is exactly twice the declared list: each name is
/// followed by its `_map` variant, in declaration order. The returned
/// report lists every collision in scan order; the first occurrence of a
/// key is never reported, only the entries that land on a taken key.
///
/// # Errors
///
/// Returns [`KeyError::EmptyParameterName`](crate::KeyError::EmptyParameterName)
/// if any scanned name is empty. Collisions never produce an error.
pub fn scan_shader(shader: &str, params: &[String]) -> KeyResult<Vec<Collision>> {
    let mut collisions = Vec::new();
    let expanded = expand_params(shader, params, &mut collisions);
    scan_keys(shader, &expanded, &mut collisions)?;
    Ok(collisions)
}

/// Scan every shader from a metadata source.
///
/// Each shader is scanned independently; keys only have to be unique within
/// one shader's parameter set. The outcome carries the accumulated
/// collision report and the expanded manifest for persistence.
pub fn scan_all(source: &mut dyn ShaderSource) -> KeyResult<ScanOutcome> {
    let mut outcome = ScanOutcome::default();
    for shader in source.shaders()? {
        let expanded = expand_params(&shader.name, &shader.params, &mut outcome.collisions);
        scan_keys(&shader.name, &expanded, &mut outcome.collisions)?;
        outcome.manifest.insert(shader.name, expanded);
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeyError;
    use crate::source::ShaderParams;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_expansion_order_and_length() {
        let mut collisions = Vec::new();
        let expanded = expand_params("test_shader", &names(&["color", "roughness"]), &mut collisions);
        assert!(collisions.is_empty());
        assert_eq!(
            expanded,
            names(&["color", "color_map", "roughness", "roughness_map"])
        );
    }

    #[test]
    fn test_distinct_keys_produce_no_collisions() {
        let report = scan_shader("test_shader", &names(&["color", "roughness"])).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_second_occurrence_of_a_key_is_reported() {
        // "disp_offset" and "top_angle" hash to the same key while their
        // "_map" variants do not.
        let report = scan_shader("test_shader", &names(&["disp_offset", "top_angle"])).unwrap();
        assert_eq!(
            report,
            vec![Collision::DuplicateKey {
                shader: "test_shader".to_string(),
                param: "top_angle".to_string(),
                key: 14803,
            }]
        );
    }

    #[test]
    fn test_duplicate_declared_name() {
        let report = scan_shader("test_shader", &names(&["color", "color"])).unwrap();
        assert_eq!(
            report,
            vec![
                Collision::DuplicateName {
                    shader: "test_shader".to_string(),
                    param: "color".to_string(),
                },
                Collision::DuplicateKey {
                    shader: "test_shader".to_string(),
                    param: "color".to_string(),
                    key: 16037,
                },
                Collision::DuplicateKey {
                    shader: "test_shader".to_string(),
                    param: "color_map".to_string(),
                    key: 11839,
                },
            ]
        );
    }

    #[test]
    fn test_declared_name_clashes_with_map_variant() {
        // A shader that declares "color_map" itself collides with the
        // variant synthesized for "color".
        let report = scan_shader("test_shader", &names(&["color", "color_map"])).unwrap();
        assert_eq!(
            report,
            vec![
                Collision::DuplicateName {
                    shader: "test_shader".to_string(),
                    param: "color_map".to_string(),
                },
                Collision::DuplicateKey {
                    shader: "test_shader".to_string(),
                    param: "color_map".to_string(),
                    key: 11839,
                },
            ]
        );
    }

    #[test]
    fn test_reserved_slot_guard_flags_low_key() {
        // 108 fillers with distinct keys occupy slots 0..=215; "agu"
        // derives key 215 at position 216 and lands on a taken slot even
        // though no other name shares its key.
        let mut params: Vec<String> = (0..108).map(|i| format!("slot{:03}", i)).collect();
        params.push("agu".to_string());
        let report = scan_shader("layered", &params).unwrap();
        assert_eq!(
            report,
            vec![Collision::DuplicateKey {
                shader: "layered".to_string(),
                param: "agu".to_string(),
                key: 215,
            }]
        );
    }

    #[test]
    fn test_empty_name_aborts_the_scan() {
        let err = scan_shader("test_shader", &names(&["color", ""])).unwrap_err();
        assert_eq!(err, KeyError::EmptyParameterName);
    }

    struct FixtureSource(Vec<ShaderParams>);

    impl ShaderSource for FixtureSource {
        fn shaders(&mut self) -> KeyResult<Vec<ShaderParams>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenSource;

    impl ShaderSource for BrokenSource {
        fn shaders(&mut self) -> KeyResult<Vec<ShaderParams>> {
            Err(KeyError::MetadataError("introspection failed".to_string()))
        }
    }

    #[test]
    fn test_scan_all_builds_expanded_manifest() {
        let mut source = FixtureSource(vec![
            ShaderParams::new("as_matte", names(&["color", "roughness"])),
            ShaderParams::new("as_glass", names(&["ior"])),
        ]);
        let outcome = scan_all(&mut source).unwrap();
        assert!(outcome.collisions.is_empty());
        assert_eq!(
            outcome.manifest["as_matte"],
            names(&["color", "color_map", "roughness", "roughness_map"])
        );
        assert_eq!(outcome.manifest["as_glass"], names(&["ior", "ior_map"]));
    }

    #[test]
    fn test_scan_all_tags_collisions_with_their_shader() {
        // The same colliding pair in two shaders is reported once per
        // shader; scans share no state.
        let mut source = FixtureSource(vec![
            ShaderParams::new("first", names(&["disp_offset", "top_angle"])),
            ShaderParams::new("second", names(&["disp_offset", "top_angle"])),
        ]);
        let outcome = scan_all(&mut source).unwrap();
        assert_eq!(outcome.collisions.len(), 2);
        let shaders: Vec<&str> = outcome
            .collisions
            .iter()
            .map(|c| match c {
                Collision::DuplicateKey { shader, .. } => shader.as_str(),
                Collision::DuplicateName { shader, .. } => shader.as_str(),
            })
            .collect();
        assert_eq!(shaders, vec!["first", "second"]);
    }

    #[test]
    fn test_scan_all_propagates_source_errors() {
        let err = scan_all(&mut BrokenSource).unwrap_err();
        assert!(matches!(err, KeyError::MetadataError(_)));
    }

    #[test]
    fn test_collision_display() {
        let collision = Collision::DuplicateKey {
            shader: "as_matte".to_string(),
            param: "color".to_string(),
            key: 16037,
        };
        assert_eq!(
            collision.to_string(),
            "Key collision: shader as_matte, parameter color, key 16037"
        );
    }
}
