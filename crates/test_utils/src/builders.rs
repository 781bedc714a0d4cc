//! Test Data Builders
//!
//! Builder patterns for constructing test records with sensible defaults, so
//! tests only spell out the fields they actually care about.

use domain_organization::{Address, NewOrganization};
use domain_vital::NewVital;

/// Builder for vital record payloads
pub struct TestVitalBuilder {
    identifier: Vec<String>,
    weight: String,
    height: String,
    general_examination: String,
}

impl Default for TestVitalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestVitalBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            identifier: vec!["patient-1".to_string()],
            weight: "70kg".to_string(),
            height: "175cm".to_string(),
            general_examination: "normal".to_string(),
        }
    }

    /// Sets the patient identifiers
    pub fn with_identifier(mut self, identifier: Vec<&str>) -> Self {
        self.identifier = identifier.into_iter().map(String::from).collect();
        self
    }

    /// Sets the weight
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    /// Sets the height
    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    /// Sets the general examination findings
    pub fn with_general_examination(mut self, findings: impl Into<String>) -> Self {
        self.general_examination = findings.into();
        self
    }

    /// Builds the payload
    pub fn build(self) -> NewVital {
        NewVital {
            identifier: self.identifier,
            weight: self.weight,
            height: self.height,
            general_examination: self.general_examination,
        }
    }
}

/// Builder for organization record payloads
pub struct TestOrganizationBuilder {
    identifier: Vec<String>,
    name: String,
    alias: Option<String>,
    contact: Option<String>,
    email: Option<String>,
    address: Vec<Address>,
    organization_id: Option<String>,
}

impl Default for TestOrganizationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestOrganizationBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            identifier: vec!["org-1".to_string()],
            name: "General Hospital".to_string(),
            alias: Some("GH".to_string()),
            contact: Some("Front Desk".to_string()),
            email: Some("desk@example.org".to_string()),
            address: vec![Address::new("1 Care Way", "Springfield", "12345", "US")],
            organization_id: Some("REG-0001".to_string()),
        }
    }

    /// Sets the registry identifiers
    pub fn with_identifier(mut self, identifier: Vec<&str>) -> Self {
        self.identifier = identifier.into_iter().map(String::from).collect();
        self
    }

    /// Sets the organization name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets or clears the alias
    pub fn with_alias(mut self, alias: Option<&str>) -> Self {
        self.alias = alias.map(String::from);
        self
    }

    /// Sets or clears the contact
    pub fn with_contact(mut self, contact: Option<&str>) -> Self {
        self.contact = contact.map(String::from);
        self
    }

    /// Sets or clears the email
    pub fn with_email(mut self, email: Option<&str>) -> Self {
        self.email = email.map(String::from);
        self
    }

    /// Replaces the address collection
    pub fn with_addresses(mut self, addresses: Vec<Address>) -> Self {
        self.address = addresses;
        self
    }

    /// Appends one address
    pub fn with_address(mut self, address: Address) -> Self {
        self.address.push(address);
        self
    }

    /// Sets or clears the external registry identifier
    pub fn with_organization_id(mut self, organization_id: Option<&str>) -> Self {
        self.organization_id = organization_id.map(String::from);
        self
    }

    /// Builds the payload
    pub fn build(self) -> NewOrganization {
        NewOrganization {
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
