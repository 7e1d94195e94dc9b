use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::estimation::VehicleSpec;
use crate::validation::{text_length, ValidationResult};

const NAME_MIN: usize = 1;
const NAME_MAX: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DigitalTwin {
    pub id: String,
    pub name: String,
    pub vehicle: VehicleSpec,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TwinCreate {
    pub name: String,
    pub vehicle: VehicleSpec,
}

impl TwinCreate {
    pub fn validate(&self) -> ValidationResult<()> {
        text_length("name", &self.name, NAME_MIN, NAME_MAX)?;
        self.vehicle.validate()
    }
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TwinUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub vehicle: Option<VehicleSpec>,
}

impl TwinUpdate {
    pub fn validate(&self) -> ValidationResult<()> {
        if let Some(name) = &self.name {
            text_length("name", name, NAME_MIN, NAME_MAX)?;
        }
        if let Some(vehicle) = &self.vehicle {
            vehicle.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TwinPage {
    pub items: Vec<DigitalTwin>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
}
