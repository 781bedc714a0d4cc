//! Organization entity tests

use domain_organization::{Address, NewOrganization, OrganizationSortField};

fn sample() -> NewOrganization {
    NewOrganization {
        identifier: vec!["org-001".to_string()],
        name: "City Health Clinic".to_string(),
        alias: Some("CHC".to_string()),
        contact: Some("Dr. A. Okafor".to_string()),
        email: Some("clinic@example.org".to_string()),
        address: vec![Address::new("12 Hospital Rd", "Enugu", "400001", "NG")],
        organization_id: Some("NG-HC-7781".to_string()),
    }
}

#[test]
fn into_organization_attaches_the_id_and_keeps_addresses() {
    let organization = sample().into_organization(4);
    assert_eq!(organization.id, 4);
    assert_eq!(organization.name, "City Health Clinic");
    assert_eq!(organization.address.len(), 1);
    assert_eq!(organization.address[0].city, "Enugu");
}

#[test]
fn wire_shape_uses_camel_case() {
    let json = serde_json::to_value(sample().into_organization(1)).unwrap();
    assert!(json.get("organizationId").is_some());
    assert!(json.get("organization_id").is_none());
    assert!(json["address"][0].get("postalCode").is_some());
}

#[test]
fn optional_fields_default_when_omitted() {
    let parsed: NewOrganization =
        serde_json::from_str(r#"{"name":"Solo Practice"}"#).unwrap();
    assert!(parsed.identifier.is_empty());
    assert!(parsed.alias.is_none());
    assert!(parsed.address.is_empty());
}

#[test]
fn addresses_compare_by_value() {
    let a = Address::new("12 Hospital Rd", "Enugu", "400001", "NG");
    let b = Address::new("12 Hospital Rd", "Enugu", "400001", "NG");
    assert_eq!(a, b);
}

#[test]
fn address_format_includes_optional_lines_when_present() {
    let mut address = Address::new("12 Hospital Rd", "Enugu", "400001", "NG");
    address.line2 = Some("Wing B".to_string());
    address.state = Some("EN".to_string());

    let formatted = address.format();
    assert!(formatted.contains("Wing B"));
    assert!(formatted.contains("Enugu, EN 400001"));
}

#[test]
fn overwrite_payload_round_trips_from_a_record() {
    let organization = sample().into_organization(9);
    let new: NewOrganization = organization.clone().into();
    assert_eq!(new.into_organization(9), organization);
}

#[test]
fn sort_whitelist_accepts_wire_names_only() {
    assert_eq!(
        OrganizationSortField::parse("organizationId"),
        Some(OrganizationSortField::OrganizationId)
    );
    assert_eq!(OrganizationSortField::parse("organization_id"), None);
    assert_eq!(OrganizationSortField::parse("address"), None);
}
