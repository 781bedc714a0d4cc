//! In-memory store implementations
//!
//! Map-backed implementations of the store ports with the same observable
//! semantics as the PostgreSQL repositories: store-assigned ids, not-found
//! failures that leave state untouched, whitelisted sorts with id as the
//! tiebreaker, and nulls ordered the way the database orders them (last
//! ascending, first descending).

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering as AtomicOrdering};
use std::sync::Mutex;

use async_trait::async_trait;
use core_kernel::{DomainStore, Page, PageRequest, SortDirection, StoreError};
use domain_organization::{
    NewOrganization, Organization, OrganizationSortField, OrganizationStore,
};
use domain_vital::{NewVital, Vital, VitalSortField, VitalStore};

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn compare_nullable(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => x.cmp(y),
    }
}

fn slice_page<T: Clone>(items: &[T], request: &PageRequest) -> Vec<T> {
    items
        .iter()
        .skip(request.offset() as usize)
        .take(request.limit() as usize)
        .cloned()
        .collect()
}

/// In-memory implementation of [`VitalStore`]
#[derive(Debug, Default)]
pub struct InMemoryVitalStore {
    records: Mutex<BTreeMap<i32, Vital>>,
    next_id: AtomicI32,
}

impl InMemoryVitalStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            next_id: AtomicI32::new(0),
        }
    }

    /// Number of records currently stored
    pub fn len(&self) -> usize {
        self.records.lock().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DomainStore for InMemoryVitalStore {}

#[async_trait]
impl VitalStore for InMemoryVitalStore {
    async fn insert(&self, vital: NewVital) -> Result<Vital, StoreError> {
        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst) + 1;
        let vital = vital.into_vital(id);
        self.records
            .lock()
            .expect("store lock poisoned")
            .insert(id, vital.clone());
        Ok(vital)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vital>, StoreError> {
        Ok(self
            .records
            .lock()
            .expect("store lock poisoned")
            .get(&id)
            .cloned())
    }

    async fn update(&self, id: i32, vital: NewVital) -> Result<Vital, StoreError> {
        let mut records = self.records.lock().expect("store lock poisoned");
        if !records.contains_key(&id) {
            return Err(StoreError::not_found("Vital", id));
        }
        let vital = vital.into_vital(id);
        records.insert(id, vital.clone());
        Ok(vital)
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut records = self.records.lock().expect("store lock poisoned");
        records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("Vital", id))
    }

    async fn list(&self, request: PageRequest) -> Result<Page<Vital>, StoreError> {
        // BTreeMap iteration already yields ascending id order.
        let mut items: Vec<Vital> = {
            let records = self.records.lock().expect("store lock poisoned");
            records.values().cloned().collect()
        };

        if let Some(sort) = &request.sort {
            let field = VitalSortField::parse(&sort.field)
                .ok_or_else(|| StoreError::invalid_sort_field(sort.field.clone()))?;
            let direction = sort.direction;
            items.sort_by(|a, b| {
                let primary = match field {
                    VitalSortField::Id => a.id.cmp(&b.id),
                    VitalSortField::Weight => a.weight.cmp(&b.weight),
                    VitalSortField::Height => a.height.cmp(&b.height),
                    VitalSortField::GeneralExamination => {
                        a.general_examination.cmp(&b.general_examination)
                    }
                };
                directed(primary, direction).then(a.id.cmp(&b.id))
            });
        }

        let total = items.len() as u64;
        Ok(Page::new(slice_page(&items, &request), total, &request))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// In-memory implementation of [`OrganizationStore`]
#[derive(Debug, Default)]
pub struct InMemoryOrganizationStore {
    records: Mutex<BTreeMap<i32, Organization>>,
    next_id: AtomicI32,
}

impl InMemoryOrganizationStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            next_id: AtomicI32::new(0),
        }
    }

    /// Number of records currently stored
    pub fn len(&self) -> usize {
        self.records.lock().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DomainStore for InMemoryOrganizationStore {}

#[async_trait]
impl OrganizationStore for InMemoryOrganizationStore {
    async fn insert(&self, organization: NewOrganization) -> Result<Organization, StoreError> {
        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst) + 1;
        let organization = organization.into_organization(id);
        self.records
            .lock()
            .expect("store lock poisoned")
            .insert(id, organization.clone());
        Ok(organization)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Organization>, StoreError> {
        Ok(self
            .records
            .lock()
            .expect("store lock poisoned")
            .get(&id)
            .cloned())
    }

    async fn update(
        &self,
        id: i32,
        organization: NewOrganization,
    ) -> Result<Organization, StoreError> {
        let mut records = self.records.lock().expect("store lock poisoned");
        if !records.contains_key(&id) {
            return Err(StoreError::not_found("Organization", id));
        }
        let organization = organization.into_organization(id);
        records.insert(id, organization.clone());
        Ok(organization)
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut records = self.records.lock().expect("store lock poisoned");
        records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("Organization", id))
    }

    async fn list(&self, request: PageRequest) -> Result<Page<Organization>, StoreError> {
        let mut items: Vec<Organization> = {
            let records = self.records.lock().expect("store lock poisoned");
            records.values().cloned().collect()
        };

        if let Some(sort) = &request.sort {
            let field = OrganizationSortField::parse(&sort.field)
                .ok_or_else(|| StoreError::invalid_sort_field(sort.field.clone()))?;
            let direction = sort.direction;
            items.sort_by(|a, b| {
                let primary = match field {
                    OrganizationSortField::Id => a.id.cmp(&b.id),
                    OrganizationSortField::Name => a.name.cmp(&b.name),
                    OrganizationSortField::Alias => compare_nullable(&a.alias, &b.alias),
                    OrganizationSortField::Email => compare_nullable(&a.email, &b.email),
                    OrganizationSortField::OrganizationId => {
                        compare_nullable(&a.organization_id, &b.organization_id)
                    }
                };
                directed(primary, direction).then(a.id.cmp(&b.id))
            });
        }

        let total = items.len() as u64;
        Ok(Page::new(slice_page(&items, &request), total, &request))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Sort;
    use crate::builders::{TestOrganizationBuilder, TestVitalBuilder};

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = InMemoryVitalStore::new();
        let first = store.insert(TestVitalBuilder::new().build()).await.unwrap();
        let second = store.insert(TestVitalBuilder::new().build()).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn update_of_missing_id_leaves_store_unchanged() {
        let store = InMemoryVitalStore::new();
        store.insert(TestVitalBuilder::new().build()).await.unwrap();

        let error = store
            .update(99, TestVitalBuilder::new().with_weight("0kg").build())
            .await
            .unwrap_err();

        assert!(error.is_not_found());
        assert_eq!(store.len(), 1);
        let survivor = store.find_by_id(1).await.unwrap().unwrap();
        assert_ne!(survivor.weight, "0kg");
    }

    #[tokio::test]
    async fn list_sorts_descending_with_id_tiebreak() {
        let store = InMemoryVitalStore::new();
        for weight in ["70kg", "90kg", "70kg"] {
            store
                .insert(TestVitalBuilder::new().with_weight(weight).build())
                .await
                .unwrap();
        }

        let page = store
            .list(PageRequest::new(0, 10).with_sort(Sort::descending("weight")))
            .await
            .unwrap();

        let order: Vec<(String, i32)> = page
            .items
            .iter()
            .map(|v| (v.weight.clone(), v.id))
            .collect();
        assert_eq!(
            order,
            vec![
                ("90kg".to_string(), 2),
                ("70kg".to_string(), 1),
                ("70kg".to_string(), 3),
            ]
        );
    }

    #[tokio::test]
    async fn list_rejects_unknown_sort_field() {
        let store = InMemoryOrganizationStore::new();
        let error = store
            .list(PageRequest::new(0, 10).with_sort(Sort::ascending("address")))
            .await
            .unwrap_err();
        assert!(matches!(error, StoreError::InvalidSortField { .. }));
    }

    #[tokio::test]
    async fn missing_alias_sorts_last_ascending() {
        let store = InMemoryOrganizationStore::new();
        store
            .insert(TestOrganizationBuilder::new().with_alias(None).build())
            .await
            .unwrap();
        store
            .insert(
                TestOrganizationBuilder::new()
                    .with_alias(Some("AAA"))
                    .build(),
            )
            .await
            .unwrap();

        let page = store
            .list(PageRequest::new(0, 10).with_sort(Sort::ascending("alias")))
            .await
            .unwrap();

        assert_eq!(page.items[0].alias.as_deref(), Some("AAA"));
        assert!(page.items[1].alias.is_none());
    }
}
