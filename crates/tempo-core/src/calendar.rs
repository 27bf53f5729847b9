//! Calendar events: dated entries with a color, queried by day and as an
//! upcoming strip.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{NotFoundError, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub text: String,
    pub due: DateTime<Local>,
    pub color: String,
}

/// Insertion-ordered event collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarStore {
    entries: Vec<CalendarEvent>,
}

impl CalendarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// [`ValidationError::EmptyField`] if `text` is empty.
    pub fn add(
        &mut self,
        text: &str,
        due: DateTime<Local>,
        color: &str,
    ) -> Result<&CalendarEvent, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "event description" });
        }
        self.entries.push(CalendarEvent {
            id: Uuid::new_v4().to_string(),
            text: text.trim().to_string(),
            due,
            color: color.to_string(),
        });
        Ok(self.entries.last().expect("just pushed"))
    }

    /// # Errors
    /// [`NotFoundError::CalendarEvent`] if the id is absent.
    pub fn remove(&mut self, id: &str) -> Result<CalendarEvent, NotFoundError> {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => Ok(self.entries.remove(index)),
            None => Err(NotFoundError::CalendarEvent { id: id.to_string() }),
        }
    }

    /// Events on a given local day, in insertion order.
    pub fn events_on(&self, date: NaiveDate) -> impl Iterator<Item = &CalendarEvent> {
        self.entries.iter().filter(move |e| e.due.date_naive() == date)
    }

    /// Events due today or later, soonest first, truncated to `limit`.
    pub fn upcoming(&self, today: NaiveDate, limit: usize) -> Vec<&CalendarEvent> {
        let mut upcoming: Vec<&CalendarEvent> = self
            .entries
            .iter()
            .filter(|e| e.due.date_naive() >= today)
            .collect();
        upcoming.sort_by_key(|e| e.due);
        upcoming.truncate(limit);
        upcoming
    }

    pub fn list(&self) -> &[CalendarEvent] {
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

    fn due(day: u32, hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn events_on_filters_by_day() {
        let mut store = CalendarStore::new();
        store.add("standup", due(10, 9), "#ff6b6b").unwrap();
        store.add("dinner", due(10, 19), "#ff6b6b").unwrap();
        store.add("flight", due(12, 6), "#ff6b6b").unwrap();

        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let texts: Vec<_> = store.events_on(day).map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["standup", "dinner"]);
    }

    #[test]
    fn upcoming_sorts_and_truncates() {
        let mut store = CalendarStore::new();
        store.add("later", due(14, 9), "#aaa").unwrap();
        store.add("past", due(2, 9), "#aaa").unwrap();
        store.add("soon", due(11, 9), "#aaa").unwrap();
        store.add("next", due(12, 9), "#aaa").unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let texts: Vec<_> = store
            .upcoming(today, 2)
            .iter()
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(texts, ["soon", "next"]);
    }

    #[test]
    fn add_rejects_empty_description() {
        let mut store = CalendarStore::new();
        assert!(store.add("", due(10, 9), "#aaa").is_err());
        assert!(store.is_empty());
    }
}
