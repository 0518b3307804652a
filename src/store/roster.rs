use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Static declaration of which students belong to which class.
///
/// Outer key is the class name, inner map goes from a student's display
/// name to their Telegram username (without the leading `@`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassRoster {
    classes: BTreeMap<String, BTreeMap<String, String>>,
}

impl ClassRoster {
    pub fn new(classes: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        Self { classes }
    }

    /// The roster the bot ships with when no `ROSTER_PATH` is configured.
    pub fn builtin() -> Self {
        let mut xii_a = BTreeMap::new();
        xii_a.insert("Azeem Vasanwala".to_string(), "azeemvasanwala".to_string());

        let mut classes = BTreeMap::new();
        classes.insert("XII-A".to_string(), xii_a);
        Self { classes }
    }

    /// Loads a roster from a JSON file shaped like
    /// `{ "XII-A": { "Display Name": "username" } }`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster file {}", path.display()))?;
        let roster: ClassRoster = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse roster file {}", path.display()))?;

        if roster.classes.is_empty() {
            return Err(anyhow!("Roster file {} declares no classes", path.display()));
        }

        Ok(roster)
    }

    /// Class names in sorted order.
    pub fn class_names(&self) -> Vec<String> {
        self.classes.keys().cloned().collect()
    }

    pub fn contains_class(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    /// Usernames of every student in `class`, or `None` if the class is unknown.
    pub fn usernames(&self, class: &str) -> Option<Vec<String>> {
        self.classes
            .get(class)
            .map(|students| students.values().cloned().collect())
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Builds the username -> class inverse index.
    ///
    /// A username listed under several classes maps to the last one in
    /// sorted class order.
    pub fn student_index(&self) -> HashMap<String, String> {
        let mut index = HashMap::new();
        for (class, students) in &self.classes {
            for username in students.values() {
                if let Some(previous) = index.insert(username.clone(), class.clone()) {
                    tracing::warn!(
                        "Student @{} listed in both {} and {}; using {}",
                        username, previous, class, class
                    );
                }
            }
        }
        index
    }
}
