//! Vehicle record

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Registration number, unique within a store
    pub id: String,
    /// Categories a driver must hold; empty means any driver
    pub required_qualifications: BTreeSet<String>,
    /// Operational (true) or out of service (false)
    pub serviceable: bool,
    /// Make and model, display only
    #[serde(default)]
    pub label: Option<String>,
}

impl Vehicle {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            required_qualifications: BTreeSet::new(),
            serviceable: true,
            label: None,
        }
    }

    pub fn requiring<I, S>(mut self, qualifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_qualifications = qualifications.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn out_of_service(mut self) -> Self {
        self.serviceable = false;
        self
    }

    /// "ABC123 (Toyota Corolla)", or the bare id without a label
    pub fn display_name(&self) -> String {
        match &self.label {
            Some(label) => format!("{} ({})", self.id, label),
            None => self.id.clone(),
        }
    }
}
