use storefront_core::{guard, AggregateRoot, DomainError, DomainResult};
use storefront_events::DomainEvent;

use crate::events::{CatalogDomainEvent, CatalogEvent};
use crate::ids::CustomAttributeId;

/// Aggregate root: a merchant-defined product attribute (e.g. "Weight").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomAttribute {
    id: CustomAttributeId,
    name: String,
    data_type: String,
    unit_of_measure: Option<String>,
    deleted: bool,
    pending_events: Vec<CatalogDomainEvent>,
}

impl CustomAttribute {
    pub fn create(name: impl Into<String>, data_type: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let data_type = data_type.into();
        guard::non_empty("name", &name)?;
        guard::non_empty("data type", &data_type)?;

        Ok(Self {
            id: CustomAttributeId::generate(),
            name,
            data_type,
            unit_of_measure: None,
            deleted: false,
            pending_events: Vec::new(),
        })
    }

    pub fn id_typed(&self) -> CustomAttributeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    pub fn unit_of_measure(&self) -> Option<&str> {
        self.unit_of_measure.as_deref()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn pending_events(&self) -> &[CatalogDomainEvent] {
        &self.pending_events
    }

    pub fn take_events(&mut self) -> Vec<CatalogDomainEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        guard::non_empty("name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn change_data_type(&mut self, data_type: impl Into<String>) -> DomainResult<()> {
        let data_type = data_type.into();
        guard::non_empty("data type", &data_type)?;
        self.data_type = data_type;
        Ok(())
    }

    /// Set the unit of measure and fire `CustomAttributeUnitOfMeasureSet`.
    pub fn set_unit_of_measure(&mut self, unit_of_measure: impl Into<String>) -> DomainResult<()> {
        let unit_of_measure = unit_of_measure.into();
        guard::non_empty("unit of measure", &unit_of_measure)?;
        self.unit_of_measure = Some(unit_of_measure.clone());
        self.pending_events.push(DomainEvent::new(
            CatalogEvent::custom_attribute_unit_of_measure_set(self.id, unit_of_measure),
        ));
        Ok(())
    }

    pub fn delete(&mut self) -> DomainResult<()> {
        if self.deleted {
            return Err(DomainError::invalid_state("the attribute is already deleted"));
        }
        self.deleted = true;
        Ok(())
    }

    pub fn restore(&mut self) -> DomainResult<()> {
        if !self.deleted {
            return Err(DomainError::invalid_state("the attribute is not deleted"));
        }
        self.deleted = false;
        Ok(())
    }
}

impl AggregateRoot for CustomAttribute {
    type Id = CustomAttributeId;

    const ENTITY_TYPE: &'static str = "catalog.custom_attribute";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
