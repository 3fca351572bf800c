//! Classification of records left over after a stalled resolution.
//!
//! The queue-based resolver only knows that some records never found their
//! parent. Walking each leftover record's parent chain over the whole record
//! set separates the three situations a user has to fix differently:
//!
//! - the record names a parent that is not in the set,
//! - the record is part of a parent cycle,
//! - the record is fine itself but inherits from one of the above.

use std::collections::HashMap;
use std::fmt;

use super::Record;

/// Why a record could not be attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cause {
    /// The named parent does not exist in the record set.
    MissingParent { parent: String },
    /// The record is on a parent cycle. `members` starts at the record and
    /// follows parent references around the cycle.
    Cycle { members: Vec<String> },
    /// An ancestor is missing its parent or sits on a cycle.
    BlockedBy { ancestor: String },
}

/// Diagnosis of a single unattached record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosis {
    pub name: String,
    pub cause: Cause,
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Cause::MissingParent { parent } => {
                write!(f, "{}: parent {} does not exist", self.name, parent)
            }
            Cause::Cycle { members } => {
                write!(f, "{}: part of cycle {}", self.name, members.join(" -> "))?;
                write!(f, " -> {}", self.name)
            }
            Cause::BlockedBy { ancestor } => {
                write!(f, "{}: blocked by unresolved ancestor {}", self.name, ancestor)
            }
        }
    }
}

/// Classify every name in `pending` against the full `records` set.
///
/// Names that are not in `records` are skipped, and so are names whose
/// parent chain reaches a root, since those resolve.
pub fn diagnose(records: &[Record], pending: &[String]) -> Vec<Diagnosis> {
    let parents: HashMap<&str, Option<&str>> = records
        .iter()
        .map(|record| (record.qualified_name.as_str(), record.parent.as_deref()))
        .collect();

    pending
        .iter()
        .filter_map(|name| {
            classify(&parents, name).map(|cause| Diagnosis {
                name: name.clone(),
                cause,
            })
        })
        .collect()
}

fn classify(parents: &HashMap<&str, Option<&str>>, start: &str) -> Option<Cause> {
    let mut path: Vec<&str> = vec![start];
    let mut seen: HashMap<&str, usize> = HashMap::from([(start, 0)]);
    let mut current = start;

    loop {
        let parent = (*parents.get(current)?)?;

        if !parents.contains_key(parent) {
            return Some(if current == start {
                Cause::MissingParent {
                    parent: parent.to_string(),
                }
            } else {
                Cause::BlockedBy {
                    ancestor: current.to_string(),
                }
            });
        }

        if let Some(&position) = seen.get(parent) {
            return Some(if position == 0 {
                Cause::Cycle {
                    members: path.iter().map(|name| name.to_string()).collect(),
                }
            } else {
                Cause::BlockedBy {
                    ancestor: parent.to_string(),
                }
            });
        }

        seen.insert(parent, path.len());
        path.push(parent);
        current = parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_diagnose_missing_parent() {
        let records = vec![Record::root("A"), Record::child("B", "Z")];
        let diagnoses = diagnose(&records, &names(&["B"]));

        assert_eq!(
            diagnoses,
            vec![Diagnosis {
                name: "B".to_string(),
                cause: Cause::MissingParent {
                    parent: "Z".to_string()
                },
            }]
        );
        assert_eq!(diagnoses[0].to_string(), "B: parent Z does not exist");
    }

    #[test]
    fn test_diagnose_two_cycle() {
        let records = vec![Record::child("A", "B"), Record::child("B", "A")];
        let diagnoses = diagnose(&records, &names(&["A", "B"]));

        assert_eq!(
            diagnoses[0].cause,
            Cause::Cycle {
                members: names(&["A", "B"])
            }
        );
        assert_eq!(
            diagnoses[1].cause,
            Cause::Cycle {
                members: names(&["B", "A"])
            }
        );
        assert_eq!(diagnoses[0].to_string(), "A: part of cycle A -> B -> A");
    }

    #[test]
    fn test_diagnose_self_cycle() {
        let records = vec![Record::child("A", "A")];
        let diagnoses = diagnose(&records, &names(&["A"]));
        assert_eq!(
            diagnoses[0].cause,
            Cause::Cycle {
                members: names(&["A"])
            }
        );
    }

    #[test]
    fn test_diagnose_descendants_are_blocked() {
        let records = vec![
            Record::child("A", "B"),
            Record::child("B", "A"),
            Record::child("C", "A"),
            Record::child("D", "Z"),
            Record::child("E", "D"),
            Record::child("F", "E"),
        ];
        let diagnoses = diagnose(&records, &names(&["C", "E", "F"]));

        assert_eq!(
            diagnoses[0].cause,
            Cause::BlockedBy {
                ancestor: "A".to_string()
            }
        );
        assert_eq!(
            diagnoses[1].cause,
            Cause::BlockedBy {
                ancestor: "D".to_string()
            }
        );
        assert_eq!(
            diagnoses[2].cause,
            Cause::BlockedBy {
                ancestor: "D".to_string()
            }
        );
    }

    #[test]
    fn test_diagnose_skips_resolvable_and_unknown_names() {
        let records = vec![Record::root("A"), Record::child("B", "A")];
        assert!(diagnose(&records, &names(&["B", "nope"])).is_empty());
    }
}
