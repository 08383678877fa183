use super::aggregate::ApplicationRecord;
use crate::shared::list_view::FilterKey;
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

/// Ошибки загрузки реестра заявок
#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("Failed to parse applications: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate application number: {0}")]
    DuplicateNumber(String),
}

/// Реестр заявок. Загружается целиком и дальше только читается.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ApplicationRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<ApplicationRecord>) -> Result<Self, RecordStoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.number.as_str()) {
                return Err(RecordStoreError::DuplicateNumber(record.number.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Разбор JSON-массива заявок
    pub fn from_json(json: &str) -> Result<Self, RecordStoreError> {
        let records: Vec<ApplicationRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn records(&self) -> &[ApplicationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Уникальные непустые значения измерения для выпадающего фильтра
    pub fn distinct_values(&self, key: FilterKey) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.filter_value(key))
            .filter(|v| !v.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }
}
