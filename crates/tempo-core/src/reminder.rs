//! Reminders: dated one-off notes, independent of the timer subsystem.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{NotFoundError, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub text: String,
    pub due: DateTime<Local>,
    #[serde(default)]
    pub completed: bool,
}

impl Reminder {
    /// A reminder is overdue once its due time has passed, unless done.
    pub fn is_overdue(&self, now: DateTime<Local>) -> bool {
        !self.completed && now > self.due
    }
}

/// Insertion-ordered reminder collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderStore {
    entries: Vec<Reminder>,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// [`ValidationError::EmptyField`] if `text` is empty.
    pub fn add(
        &mut self,
        text: &str,
        due: DateTime<Local>,
    ) -> Result<&Reminder, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "reminder text" });
        }
        self.entries.push(Reminder {
            id: Uuid::new_v4().to_string(),
            text: text.trim().to_string(),
            due,
            completed: false,
        });
        Ok(self.entries.last().expect("just pushed"))
    }

    /// # Errors
    /// [`NotFoundError::Reminder`] if the id is absent.
    pub fn remove(&mut self, id: &str) -> Result<Reminder, NotFoundError> {
        match self.entries.iter().position(|r| r.id == id) {
            Some(index) => Ok(self.entries.remove(index)),
            None => Err(NotFoundError::Reminder { id: id.to_string() }),
        }
    }

    pub fn list(&self) -> &[Reminder] {
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
    fn add_validates_text_and_remove_by_id() {
        let due = Local.with_ymd_and_hms(2025, 3, 10, 18, 0, 0).unwrap();
        let mut store = ReminderStore::new();

        assert!(store.add("  ", due).is_err());
        let id = store.add("Call the dentist", due).unwrap().id.clone();
        assert_eq!(store.list().len(), 1);

        store.remove(&id).unwrap();
        assert!(store.is_empty());
        assert!(store.remove(&id).is_err());
    }

    #[test]
    fn overdue_requires_past_due_and_not_completed() {
        let due = Local.with_ymd_and_hms(2025, 3, 10, 18, 0, 0).unwrap();
        let mut reminder = Reminder {
            id: "r".into(),
            text: "water plants".into(),
            due,
            completed: false,
        };

        assert!(!reminder.is_overdue(due - chrono::Duration::minutes(1)));
        assert!(reminder.is_overdue(due + chrono::Duration::minutes(1)));

        reminder.completed = true;
        assert!(!reminder.is_overdue(due + chrono::Duration::minutes(1)));
    }
}
