//! Vital DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_vital::{NewVital, Vital};

/// Request body for creating or overwriting a vital record.
///
/// Any `id` in the body is ignored; identity comes from the store (POST) or
/// the path (PUT).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VitalRequest {
    #[serde(default)]
    pub identifier: Vec<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub weight: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub height: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub general_examination: String,
}

impl From<VitalRequest> for NewVital {
    fn from(request: VitalRequest) -> Self {
        NewVital {
            identifier: request.identifier,
            weight: request.weight,
            height: request.height,
            general_examination: request.general_examination,
        }
    }
}

/// Response body for a vital record
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalResponse {
    pub id: i32,
    pub identifier: Vec<String>,
    pub weight: String,
    pub height: String,
    pub general_examination: String,
}

impl From<Vital> for VitalResponse {
    fn from(vital: Vital) -> Self {
        Self {
            id: vital.id,
            identifier: vital.identifier,
            weight: vital.weight,
            height: vital.height,
            general_examination: vital.general_examination,
        }
    }
}
