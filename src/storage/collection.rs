//! Ordered JSON-backed collections
//!
//! Loans, expenses, savings goals and earned badges are each kept as an ordered list in
//! their own file. Insertion order is preserved: the dashboard reads the
//! first loan's income, so order is part of the data.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::EduEasyError;
use crate::models::{Badge, Expense, LoanRecord, SavingsGoal};

use super::file_io::{read_json, write_json_atomic};

/// An entity that can live in a [`Collection`]
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Whether `reference` (full UUID or short id) names this record
    fn matches(&self, reference: &str) -> bool;
}

impl Record for LoanRecord {
    fn matches(&self, reference: &str) -> bool {
        self.id.matches(reference)
    }
}

impl Record for Expense {
    fn matches(&self, reference: &str) -> bool {
        self.id.matches(reference)
    }
}

impl Record for SavingsGoal {
    fn matches(&self, reference: &str) -> bool {
        self.id.matches(reference)
    }
}

/// Badges are keyed by their catalog id
impl Record for Badge {
    fn matches(&self, reference: &str) -> bool {
        self.id == reference
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(bound = "T: Record")]
struct CollectionData<T> {
    #[serde(default)]
    items: Vec<T>,
}

impl<T> Default for CollectionData<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// Repository for one ordered list of records
pub struct Collection<T> {
    path: PathBuf,
    items: RwLock<Vec<T>>,
}

pub type LoanRepository = Collection<LoanRecord>;
pub type ExpenseRepository = Collection<Expense>;
pub type GoalRepository = Collection<SavingsGoal>;
pub type BadgeRepository = Collection<Badge>;

impl<T: Record> Collection<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            items: RwLock::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Whether the backing file has ever been written
    pub fn exists_on_disk(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<(), EduEasyError> {
        let file_data: CollectionData<T> = read_json(&self.path)?;

        let mut items = self
            .items
            .write()
            .map_err(|e| EduEasyError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *items = file_data.items;

        Ok(())
    }

    pub fn save(&self) -> Result<(), EduEasyError> {
        let items = self
            .items
            .read()
            .map_err(|e| EduEasyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = CollectionData {
            items: items.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// All records in insertion order
    pub fn get_all(&self) -> Result<Vec<T>, EduEasyError> {
        let items = self
            .items
            .read()
            .map_err(|e| EduEasyError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(items.clone())
    }

    pub fn count(&self) -> Result<usize, EduEasyError> {
        let items = self
            .items
            .read()
            .map_err(|e| EduEasyError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(items.len())
    }

    /// Find a record by full or short id
    ///
    /// A short id that matches more than one record is rejected.
    pub fn find(&self, reference: &str) -> Result<Option<T>, EduEasyError> {
        let items = self
            .items
            .read()
            .map_err(|e| EduEasyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut matches = items.iter().filter(|item| item.matches(reference));
        let first = matches.next().cloned();
        if first.is_some() && matches.next().is_some() {
            return Err(EduEasyError::Validation(format!(
                "'{}' matches more than one record; use a longer id",
                reference
            )));
        }
        Ok(first)
    }

    /// Append a record at the end
    pub fn push(&self, item: T) -> Result<(), EduEasyError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| EduEasyError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        items.push(item);
        Ok(())
    }

    /// Replace the record with the same id in place, keeping its position
    pub fn replace(&self, reference: &str, item: T) -> Result<bool, EduEasyError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| EduEasyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match items.iter_mut().find(|existing| existing.matches(reference)) {
            Some(slot) => {
                *slot = item;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove and return the record with the given id
    pub fn remove(&self, reference: &str) -> Result<Option<T>, EduEasyError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| EduEasyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(items
            .iter()
            .position(|item| item.matches(reference))
            .map(|index| items.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn loan(title: &str, amount: i64) -> LoanRecord {
        LoanRecord::new(title, "Education", Money::from_units(800), Money::from_units(amount))
    }

    #[test]
    fn test_push_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LoanRepository::new(temp_dir.path().join("loans.json"));

        repo.push(loan("First", 100)).unwrap();
        repo.push(loan("Second", 200)).unwrap();
        repo.push(loan("Third", 300)).unwrap();

        let titles: Vec<_> = repo.get_all().unwrap().into_iter().map(|l| l.title).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("loans.json");

        {
            let repo = LoanRepository::new(path.clone());
            repo.push(loan("Tuition", 2500)).unwrap();
            repo.push(loan("Laptop", 1500)).unwrap();
            repo.save().unwrap();
        }

        let repo = LoanRepository::new(path);
        assert!(repo.exists_on_disk());
        repo.load().unwrap();
        let loans = repo.get_all().unwrap();
        assert_eq!(loans.len(), 2);
        assert_eq!(loans[1].title, "Laptop");
    }

    #[test]
    fn test_replace_keeps_position() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LoanRepository::new(temp_dir.path().join("loans.json"));
        let first = loan("First", 100);
        let id = first.id.to_string();
        repo.push(first.clone()).unwrap();
        repo.push(loan("Second", 200)).unwrap();

        let mut edited = first;
        edited.title = "Renamed".into();
        assert!(repo.replace(&id, edited).unwrap());
        assert!(!repo.replace("loan-ffffffff", loan("Ghost", 1)).unwrap());

        assert_eq!(repo.get_all().unwrap()[0].title, "Renamed");
    }

    #[test]
    fn test_find_and_remove() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LoanRepository::new(temp_dir.path().join("loans.json"));
        let record = loan("Books", 90);
        let id = record.id;
        repo.push(record).unwrap();

        assert!(repo.find(&id.to_string()).unwrap().is_some());
        assert!(repo.find(&id.as_uuid().to_string()).unwrap().is_some());

        let removed = repo.remove(&id.to_string()).unwrap().unwrap();
        assert_eq!(removed.title, "Books");
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.remove(&id.to_string()).unwrap().is_none());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GoalRepository::new(temp_dir.path().join("goals.json"));
        repo.load().unwrap();
        assert!(repo.get_all().unwrap().is_empty());
        assert!(!repo.exists_on_disk());
    }
}
