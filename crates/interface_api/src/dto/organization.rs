//! Organization DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_organization::{Address, NewOrganization, Organization};

/// One embedded address in a request body
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub postal_code: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub country: String,
}

impl From<AddressRequest> for Address {
    fn from(request: AddressRequest) -> Self {
        Address {
            line1: request.line1,
            line2: request.line2,
            city: request.city,
            state: request.state,
            postal_code: request.postal_code,
            country: request.country,
        }
    }
}

/// Request body for creating or overwriting an organization.
///
/// Any `id` in the body is ignored; identity comes from the store (POST) or
/// the path (PUT).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationRequest {
    #[serde(default)]
    pub identifier: Vec<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub address: Vec<AddressRequest>,
    #[serde(default)]
    pub organization_id: Option<String>,
}

impl From<OrganizationRequest> for NewOrganization {
    fn from(request: OrganizationRequest) -> Self {
        NewOrganization {
            identifier: request.identifier,
            name: request.name,
            alias: request.alias,
            contact: request.contact,
            email: request.email,
            address: request.address.into_iter().map(Address::from).collect(),
            organization_id: request.organization_id,
        }
    }
}

/// Response body for an organization record
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationResponse {
    pub id: i32,
    pub identifier: Vec<String>,
    pub name: String,
    pub alias: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub address: Vec<Address>,
    pub organization_id: Option<String>,
}

impl From<Organization> for OrganizationResponse {
    fn from(organization: Organization) -> Self {
        Self {
            id: organization.id,
            identifier: organization.identifier,
            name: organization.name,
            alias: organization.alias,
            contact: organization.contact,
            email: organization.email,
            address: organization.address,
            organization_id: organization.organization_id,
        }
    }
}
