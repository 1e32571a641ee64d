//! Lookup of host parts for fabrication-service line items.

use crate::error::{EngineError, Result};
use crate::model::Part;

/// Read-only view over the parts of one order, in store order.
#[derive(Debug, Clone, Copy)]
pub struct PartRegistry<'a> {
    parts: &'a [Part],
}

impl<'a> PartRegistry<'a> {
    pub fn new(parts: &'a [Part]) -> Self {
        Self { parts }
    }

    /// Parts a service may be linked to: everything except the service
    /// itself and other services.
    pub fn available_hosts(&self, referencing: &Part) -> impl Iterator<Item = &'a Part> + 'a {
        let self_id = referencing.id;
        self.parts
            .iter()
            .filter(move |p| !p.is_service() && (self_id.is_none() || p.id != self_id))
    }

    /// The host part a service currently points at, if it is linkable.
    pub fn host_for(&self, referencing: &Part) -> Option<&'a Part> {
        let id = referencing.linked_part()?;
        self.available_hosts(referencing).find(|p| p.id == Some(id))
    }

    /// Check that `host_id` can be linked from `referencing`.
    pub fn resolve_host(&self, referencing: &Part, host_id: i64) -> Result<&'a Part> {
        let host = self
            .parts
            .iter()
            .find(|p| p.id == Some(host_id))
            .ok_or(EngineError::HostNotFound { part_id: host_id })?;

        if host.is_service() {
            return Err(EngineError::InvalidHost {
                part_id: host_id,
                reason: "a service cannot be billed against another service".to_string(),
            });
        }
        if referencing.id == Some(host_id) {
            return Err(EngineError::InvalidHost {
                part_id: host_id,
                reason: "a service cannot be billed against itself".to_string(),
            });
        }
        Ok(host)
    }
}
