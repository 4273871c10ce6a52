//! Service catalog: the source of per-service durations.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A bookable service (e.g. "Haircut", 45 minutes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_cents: Option<u64>,
}

/// Services in catalog order, looked up by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Sum of the durations of the given services.
    ///
    /// # Errors
    /// Returns `SlotError::UnknownService` for the first id not in the catalog.
    pub fn total_duration<S: AsRef<str>>(&self, service_ids: &[S]) -> Result<u32> {
        service_ids.iter().try_fold(0u32, |total, id| {
            let id = id.as_ref();
            let service = self
                .get(id)
                .ok_or_else(|| SlotError::UnknownService(id.to_string()))?;
            Ok(total.saturating_add(service.duration_minutes))
        })
    }
}
