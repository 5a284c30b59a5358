//! SchoolStore: an explicitly owned, immutable school collection.
//!
//! Callers load it once and pass it into every ranking call. The ranking
//! core keeps no copy of its own.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::errors::DataError;
use crate::school::{School, SchoolRecord};

/// Schools in dataset order, indexed by handle.
#[derive(Debug, Clone, Default)]
pub struct SchoolStore {
    schools: Vec<School>,
    by_handle: HashMap<String, usize>,
}

impl SchoolStore {
    /// Build from schools, rejecting duplicate handles.
    pub fn from_schools(schools: Vec<School>) -> Result<Self, DataError> {
        let mut by_handle = HashMap::with_capacity(schools.len());
        for (idx, school) in schools.iter().enumerate() {
            if by_handle.insert(school.handle().to_string(), idx).is_some() {
                return Err(DataError::DuplicateHandle {
                    handle: school.handle().to_string(),
                });
            }
        }
        debug!(count = schools.len(), "school store built");
        Ok(Self { schools, by_handle })
    }

    pub fn from_records<I>(records: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = SchoolRecord>,
    {
        Self::from_schools(records.into_iter().map(School::from).collect())
    }

    /// Parse a JSON array of school records.
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let records: Vec<SchoolRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        let records: Vec<SchoolRecord> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    /// Read and parse `schools.json` from disk.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let span = crate::store_load_span!(path.display());
        let _guard = span.enter();
        let content = std::fs::read_to_string(path).map_err(|e| DataError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }

    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    pub fn get(&self, handle: &str) -> Option<&School> {
        self.by_handle.get(handle).map(|&idx| &self.schools[idx])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, School> {
        self.schools.iter()
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    pub fn into_schools(self) -> Vec<School> {
        self.schools
    }
}
