//! Activity catalog.
//!
//! An [`Activity`] pairs a stable id with a display name, a hex color, and
//! an optional target duration. The catalog keeps entries in insertion
//! order -- order drives layout in the presentation layer, nothing else.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{NotFoundError, ValidationError};

/// Unit selector for a target duration entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetUnit {
    Hours,
    Minutes,
    None,
}

/// A target duration as entered: a value plus a unit.
///
/// `None` as the unit, or a zero value, means "no target".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSpec {
    pub value: u64,
    pub unit: TargetUnit,
}

impl TargetSpec {
    pub fn none() -> Self {
        Self { value: 0, unit: TargetUnit::None }
    }

    /// Convert to seconds. Uses saturating arithmetic to prevent overflow
    /// with large values.
    pub fn to_secs(self) -> Option<u64> {
        if self.value == 0 {
            return None;
        }
        match self.unit {
            TargetUnit::Hours => Some(self.value.saturating_mul(3600)),
            TargetUnit::Minutes => Some(self.value.saturating_mul(60)),
            TargetUnit::None => None,
        }
    }
}

/// A user-defined activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Stable id, unique across the catalog.
    pub id: String,
    /// Display name, including the user's emoji prefix.
    pub name: String,
    /// Hex color used by the presentation layer.
    pub color: String,
    /// Target duration in seconds, if the activity has one.
    #[serde(default)]
    pub target_secs: Option<u64>,
}

/// Insertion-ordered catalog of activities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityCatalog {
    entries: Vec<Activity>,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The starter set used when no activities document exists on disk.
    pub fn default_set() -> Self {
        let entry = |id: &str, name: &str, color: &str, target_secs: Option<u64>| Activity {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            target_secs,
        };
        Self {
            entries: vec![
                entry("gym", "\u{1F3CB} Gym", "#4a90e2", None),
                entry("study", "\u{1F4DA} Study", "#00cec9", None),
                entry("shower", "\u{1F6BF} Shower", "#fd79a8", None),
                entry("cycle", "\u{1F6B4} Leisure", "#fdcb6e", Some(3 * 3600)),
                entry("course", "\u{1F4BB} Course", "#6c5ce7", Some(2 * 3600)),
            ],
        }
    }

    /// Add a new activity and return a reference to it.
    ///
    /// The display name is `"{prefix} {name}"`. The id is derived from the
    /// name with a short random suffix and is re-rolled until unique.
    ///
    /// # Errors
    /// [`ValidationError::EmptyField`] if `name` or `prefix` is empty.
    pub fn add(
        &mut self,
        prefix: &str,
        name: &str,
        color: &str,
        target: TargetSpec,
    ) -> Result<&Activity, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "activity name" });
        }
        if prefix.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "activity emoji" });
        }

        let id = self.allocate_id(name);
        self.entries.push(Activity {
            id,
            name: format!("{} {}", prefix.trim(), name.trim()),
            color: color.to_string(),
            target_secs: target.to_secs(),
        });
        Ok(self.entries.last().expect("just pushed"))
    }

    /// Remove an activity by id, returning the removed definition.
    ///
    /// # Errors
    /// [`NotFoundError::Activity`] if the id is absent.
    pub fn remove(&mut self, id: &str) -> Result<Activity, NotFoundError> {
        match self.entries.iter().position(|a| a.id == id) {
            Some(index) => Ok(self.entries.remove(index)),
            None => Err(NotFoundError::Activity { id: id.to_string() }),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.entries.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Entries whose display name equals `name`, in catalog order.
    pub fn by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Activity> {
        self.entries.iter().filter(move |a| a.name == name)
    }

    /// All entries in insertion order.
    pub fn list(&self) -> &[Activity] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn allocate_id(&self, name: &str) -> String {
        let base: String = name
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        loop {
            let suffix = &Uuid::new_v4().simple().to_string()[..4];
            let id = format!("{base}{suffix}");
            if !self.contains(&id) {
                return id;
            }
        }
    }
}
