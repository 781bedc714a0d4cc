//! Organization entity

use serde::{Deserialize, Serialize};

use crate::address::Address;

/// A registered healthcare organization.
///
/// The id is assigned by the store on creation and never changes. `address`
/// is an ordered collection of embedded values that lives and dies with the
/// record. `organization_id` is the external registry identifier the
/// organization is known by upstream, distinct from the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: i32,
    /// Registry identifiers for this organization, in submission order
    pub identifier: Vec<String>,
    pub name: String,
    pub alias: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub address: Vec<Address>,
    pub organization_id: Option<String>,
}

/// The writable fields of an organization: the payload for both create and
/// full overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
    #[serde(default)]
    pub identifier: Vec<String>,
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Vec<Address>,
    #[serde(default)]
    pub organization_id: Option<String>,
}

impl NewOrganization {
    /// Attaches a store-assigned id, producing the persisted form
    pub fn into_organization(self, id: i32) -> Organization {
        Organization {
            id,
            identifier: self.identifier,
            name: self.name,
            alias: self.alias,
            contact: self.contact,
            email: self.email,
            address: self.address,
            organization_id: self.organization_id,
        }
    }
}

impl From<Organization> for NewOrganization {
    fn from(organization: Organization) -> Self {
        Self {
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
