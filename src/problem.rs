//! Problem definition: spring constants, masses and the anchoring they imply.

use std::fmt;
use std::path::Path;

use log::info;
use nalgebra::DVector;
use serde::Deserialize;

use crate::errors::InputError;

/// Location read when the caller does not supply an input path.
pub const DEFAULT_INPUT_PATH: &str = "./input.json";

/// How the chain is anchored to its surroundings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryCondition {
    /// Both ends of the chain are anchored; there is one more spring than masses.
    FixedFixed,
    /// The top of the chain is anchored and the bottom mass hangs free.
    FixedOpen,
}

impl BoundaryCondition {
    /// Classify a chain from its spring and mass counts.
    ///
    /// Equal non-zero counts describe a fixed-open chain and one extra spring
    /// describes a fixed-fixed chain. Every other combination is rejected,
    /// including the empty chain.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnsupportedBoundaryCondition`] for any other pair of counts.
    ///
    /// # Examples
    /// ```
    /// use springchain::BoundaryCondition;
    ///
    /// assert_eq!(
    ///     BoundaryCondition::classify(3, 2).unwrap(),
    ///     BoundaryCondition::FixedFixed
    /// );
    /// assert!(BoundaryCondition::classify(0, 0).is_err());
    /// ```
    pub fn classify(springs: usize, masses: usize) -> Result<Self, InputError> {
        if springs == masses && springs > 0 {
            Ok(Self::FixedOpen)
        } else if springs == masses + 1 {
            Ok(Self::FixedFixed)
        } else {
            Err(InputError::UnsupportedBoundaryCondition { springs, masses })
        }
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedFixed => f.write_str("fixed-fixed"),
            Self::FixedOpen => f.write_str("fixed-open"),
        }
    }
}

/// Raw input record as stored on disk.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProblemRecord {
    /// Stiffness of each spring, top to bottom.
    #[serde(rename = "Spring Constant(s) Vector")]
    pub spring_constants: Vec<f64>,
    /// Mass of each node, top to bottom.
    #[serde(rename = "Mass Vector")]
    pub masses: Vec<f64>,
}

/// A validated, classified spring chain.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    /// Stiffness of each spring.
    spring_constants: DVector<f64>,
    /// Mass of each node.
    masses: DVector<f64>,
    /// Anchoring derived from the vector lengths.
    boundary: BoundaryCondition,
}

impl Problem {
    /// Classify and validate a chain.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnsupportedBoundaryCondition`] when the lengths cannot be
    /// classified and [`InputError::NonPositiveValue`] when an entry is not a positive
    /// finite number.
    ///
    /// # Examples
    /// ```
    /// use springchain::{BoundaryCondition, Problem};
    ///
    /// let problem = Problem::new(vec![2.0, 2.0], vec![1.0, 1.0]).unwrap();
    /// assert_eq!(problem.boundary(), BoundaryCondition::FixedOpen);
    /// ```
    pub fn new(spring_constants: Vec<f64>, masses: Vec<f64>) -> Result<Self, InputError> {
        let boundary = BoundaryCondition::classify(spring_constants.len(), masses.len())?;
        ensure_positive("spring constant", &spring_constants)?;
        ensure_positive("mass", &masses)?;
        info!(
            "classified {} spring(s) and {} mass(es) as {boundary}",
            spring_constants.len(),
            masses.len()
        );
        Ok(Self {
            spring_constants: DVector::from_vec(spring_constants),
            masses: DVector::from_vec(masses),
            boundary,
        })
    }

    /// Build a problem from a deserialized record.
    ///
    /// # Errors
    ///
    /// See [`Problem::new`].
    pub fn from_record(record: ProblemRecord) -> Result<Self, InputError> {
        Self::new(record.spring_constants, record.masses)
    }

    /// Parse a problem from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Parse`] when the text is not a valid record, otherwise
    /// see [`Problem::new`].
    pub fn from_json_str(text: &str) -> Result<Self, InputError> {
        let record: ProblemRecord = serde_json::from_str(text)?;
        Self::from_record(record)
    }

    /// Read a problem from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Read`] when the file cannot be read, otherwise see
    /// [`Problem::from_json_str`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Spring constants, top to bottom.
    #[must_use]
    pub fn spring_constants(&self) -> &DVector<f64> {
        &self.spring_constants
    }

    /// Node masses, top to bottom.
    #[must_use]
    pub fn masses(&self) -> &DVector<f64> {
        &self.masses
    }

    /// Anchoring of the chain.
    #[must_use]
    pub fn boundary(&self) -> BoundaryCondition {
        self.boundary
    }

    /// Number of springs.
    #[must_use]
    pub fn spring_count(&self) -> usize {
        self.spring_constants.len()
    }

    /// Number of masses.
    #[must_use]
    pub fn mass_count(&self) -> usize {
        self.masses.len()
    }
}

/// Reject the first entry that is not a positive finite number.
fn ensure_positive(field: &'static str, values: &[f64]) -> Result<(), InputError> {
    match values
        .iter()
        .enumerate()
        .find(|(_, value)| !(value.is_finite() && **value > 0.0))
    {
        Some((index, &value)) => Err(InputError::NonPositiveValue {
            field,
            index,
            value,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_supported_counts() {
        assert_eq!(
            BoundaryCondition::classify(3, 3).expect("fixed-open"),
            BoundaryCondition::FixedOpen
        );
        assert_eq!(
            BoundaryCondition::classify(3, 2).expect("fixed-fixed"),
            BoundaryCondition::FixedFixed
        );
    }

    #[test]
    fn empty_chain_is_not_fixed_open() {
        let error = BoundaryCondition::classify(0, 0).expect_err("empty chain rejected");
        assert!(matches!(
            error,
            InputError::UnsupportedBoundaryCondition {
                springs: 0,
                masses: 0
            }
        ));
    }

    #[test]
    fn rejects_unsupported_counts() {
        for (springs, masses) in [(5, 2), (2, 3), (0, 1)] {
            let error = BoundaryCondition::classify(springs, masses)
                .expect_err("unsupported counts rejected");
            assert!(matches!(
                error,
                InputError::UnsupportedBoundaryCondition { .. }
            ));
        }
    }

    #[test]
    fn boundary_condition_display() {
        assert_eq!(BoundaryCondition::FixedFixed.to_string(), "fixed-fixed");
        assert_eq!(BoundaryCondition::FixedOpen.to_string(), "fixed-open");
    }

    #[test]
    fn parses_record_field_names() {
        let problem = Problem::from_json_str(
            r#"{"Spring Constant(s) Vector": [1, 2.5, 3], "Mass Vector": [4, 5]}"#,
        )
        .expect("valid record");
        assert_eq!(problem.boundary(), BoundaryCondition::FixedFixed);
        assert_eq!(problem.spring_count(), 3);
        assert_eq!(problem.mass_count(), 2);
        assert_eq!(problem.spring_constants()[1], 2.5);
        assert_eq!(problem.masses()[0], 4.0);
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let error = Problem::from_json_str(r#"{"Mass Vector": [1.0]}"#)
            .expect_err("missing spring constants");
        assert!(matches!(error, InputError::Parse(_)));
    }

    #[test]
    fn non_positive_entries_are_rejected() {
        let error = Problem::new(vec![1.0, 0.0], vec![1.0, 1.0]).expect_err("zero spring");
        assert!(matches!(
            error,
            InputError::NonPositiveValue {
                field: "spring constant",
                index: 1,
                ..
            }
        ));

        let error = Problem::new(vec![1.0, 1.0], vec![1.0, f64::NAN]).expect_err("nan mass");
        assert!(matches!(
            error,
            InputError::NonPositiveValue {
                field: "mass",
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("springchain-missing-input.json");
        let error = Problem::from_path(&path).expect_err("missing file");
        match error {
            InputError::Read { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reads_problem_from_file() {
        let path = std::env::temp_dir().join(format!(
            "springchain-input-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"Spring Constant(s) Vector": [2, 2], "Mass Vector": [1, 1]}"#,
        )
        .expect("temp file written");
        let problem = Problem::from_path(&path).expect("file parses");
        std::fs::remove_file(&path).expect("temp file removed");
        assert_eq!(problem.boundary(), BoundaryCondition::FixedOpen);
    }
}
