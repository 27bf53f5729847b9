//! Freeform notebooks.
//!
//! Content replacement is the one in-place edit in the system; everything
//! else is create/remove.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{NotFoundError, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub content: String,
    pub created: DateTime<Local>,
}

/// Insertion-ordered notebook collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotebookStore {
    entries: Vec<Notebook>,
}

impl NotebookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// [`ValidationError::EmptyField`] if `name` is empty.
    pub fn create(
        &mut self,
        name: &str,
        color: &str,
        created: DateTime<Local>,
    ) -> Result<&Notebook, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "notebook name" });
        }
        self.entries.push(Notebook {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            color: color.to_string(),
            content: String::new(),
            created,
        });
        Ok(self.entries.last().expect("just pushed"))
    }

    /// Replace a notebook's content.
    ///
    /// # Errors
    /// [`NotFoundError::Notebook`] if the id is absent.
    pub fn update_content(&mut self, id: &str, content: &str) -> Result<(), NotFoundError> {
        let notebook = self
            .entries
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| NotFoundError::Notebook { id: id.to_string() })?;
        notebook.content = content.to_string();
        Ok(())
    }

    /// # Errors
    /// [`NotFoundError::Notebook`] if the id is absent.
    pub fn remove(&mut self, id: &str) -> Result<Notebook, NotFoundError> {
        match self.entries.iter().position(|n| n.id == id) {
            Some(index) => Ok(self.entries.remove(index)),
            None => Err(NotFoundError::Notebook { id: id.to_string() }),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Notebook> {
        self.entries.iter().find(|n| n.id == id)
    }

    pub fn list(&self) -> &[Notebook] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn create_update_remove_roundtrip() {
        let created = Local.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        let mut store = NotebookStore::new();

        assert!(store.create("", "#4a90e2", created).is_err());

        let id = store.create("Ideas", "#4a90e2", created).unwrap().id.clone();
        assert_eq!(store.get(&id).unwrap().content, "");

        store.update_content(&id, "# scratchpad").unwrap();
        assert_eq!(store.get(&id).unwrap().content, "# scratchpad");

        assert!(store.update_content("missing", "x").is_err());

        store.remove(&id).unwrap();
        assert!(store.is_empty());
    }
}
