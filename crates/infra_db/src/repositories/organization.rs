//! Organization repository implementation
//!
//! Database access for organization registrations. An organization spans two
//! tables: the `organizations` row and its `organization_addresses`
//! collection. Writes touch both inside one transaction so a record is never
//! visible with half its addresses; the address rows are replaced wholesale
//! on overwrite and removed by cascade on delete.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use core_kernel::{DomainStore, Page, PageRequest, SortDirection, StoreError};
use domain_organization::{
    Address, NewOrganization, Organization, OrganizationSortField, OrganizationStore,
};

use crate::error::DatabaseError;

const ORGANIZATION_COLUMNS: &str =
    "id, identifier, name, alias, contact, email, organization_id";

/// PostgreSQL-backed store for organization records
#[derive(Debug, Clone)]
pub struct PgOrganizationStore {
    pool: PgPool,
}

/// Database row representation of an organization (addresses excluded)
#[derive(Debug, Clone, sqlx::FromRow)]
struct OrganizationRow {
    id: i32,
    identifier: Vec<String>,
    name: String,
    alias: Option<String>,
    contact: Option<String>,
    email: Option<String>,
    organization_id: Option<String>,
}

/// Database row for one embedded address
#[derive(Debug, Clone, sqlx::FromRow)]
struct AddressRow {
    line1: String,
    line2: Option<String>,
    city: String,
    state: Option<String>,
    postal_code: String,
    country: String,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Address {
            line1: row.line1,
            line2: row.line2,
            city: row.city,
            state: row.state,
            postal_code: row.postal_code,
            country: row.country,
        }
    }
}

fn assemble(row: OrganizationRow, addresses: Vec<AddressRow>) -> Organization {
    Organization {
        id: row.id,
        identifier: row.identifier,
        name: row.name,
        alias: row.alias,
        contact: row.contact,
        email: row.email,
        address: addresses.into_iter().map(Address::from).collect(),
        organization_id: row.organization_id,
    }
}

/// Column backing each sortable field
fn sort_column(field: OrganizationSortField) -> &'static str {
    match field {
        OrganizationSortField::Id => "id",
        OrganizationSortField::Name => "name",
        OrganizationSortField::Alias => "alias",
        OrganizationSortField::Email => "email",
        OrganizationSortField::OrganizationId => "organization_id",
    }
}

impl PgOrganizationStore {
    /// Creates a new store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_record(
        &self,
        organization: &NewOrganization,
    ) -> Result<OrganizationRow, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, OrganizationRow>(
            "INSERT INTO organizations \
                 (identifier, name, alias, contact, email, organization_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, identifier, name, alias, contact, email, organization_id",
        )
        .bind(&organization.identifier)
        .bind(&organization.name)
        .bind(&organization.alias)
        .bind(&organization.contact)
        .bind(&organization.email)
        .bind(&organization.organization_id)
        .fetch_one(&mut *tx)
        .await?;

        insert_addresses(&mut tx, row.id, &organization.address).await?;
        tx.commit().await?;

        Ok(row)
    }

    async fn update_record(
        &self,
        id: i32,
        organization: &NewOrganization,
    ) -> Result<Option<OrganizationRow>, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, OrganizationRow>(
            "UPDATE organizations \
             SET identifier = $2, name = $3, alias = $4, contact = $5, email = $6, \
                 organization_id = $7, updated_at = now() \
             WHERE id = $1 \
             RETURNING id, identifier, name, alias, contact, email, organization_id",
        )
        .bind(id)
        .bind(&organization.identifier)
        .bind(&organization.name)
        .bind(&organization.alias)
        .bind(&organization.contact)
        .bind(&organization.email)
        .bind(&organization.organization_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM organization_addresses WHERE organization_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        insert_addresses(&mut tx, id, &organization.address).await?;
        tx.commit().await?;

        Ok(Some(row))
    }

    async fn delete_record(&self, id: i32) -> Result<u64, DatabaseError> {
        // Address rows go with the owner via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM organizations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn fetch_record(&self, id: i32) -> Result<Option<OrganizationRow>, DatabaseError> {
        let row = sqlx::query_as::<_, OrganizationRow>(&format!(
            "SELECT {ORGANIZATION_COLUMNS} FROM organizations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn fetch_addresses(&self, organization_id: i32) -> Result<Vec<AddressRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, AddressRow>(
            "SELECT line1, line2, city, state, postal_code, country \
             FROM organization_addresses \
             WHERE organization_id = $1 \
             ORDER BY position ASC",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM organizations")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn fetch_page(
        &self,
        column: &str,
        direction: SortDirection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<OrganizationRow>, DatabaseError> {
        // `column` comes from the sort whitelist, never from user input.
        let sql = format!(
            "SELECT {ORGANIZATION_COLUMNS} FROM organizations \
             ORDER BY {column} {direction}, id ASC LIMIT $1 OFFSET $2",
            direction = direction.as_sql(),
        );

        let rows = sqlx::query_as::<_, OrganizationRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}

/// Writes the embedded address collection for an organization, preserving
/// submission order through the `position` column.
async fn insert_addresses(
    tx: &mut Transaction<'_, Postgres>,
    organization_id: i32,
    addresses: &[Address],
) -> Result<(), DatabaseError> {
    for (position, address) in addresses.iter().enumerate() {
        sqlx::query(
            "INSERT INTO organization_addresses \
                 (organization_id, position, line1, line2, city, state, postal_code, country) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(organization_id)
        .bind(position as i32)
        .bind(&address.line1)
        .bind(&address.line2)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.postal_code)
        .bind(&address.country)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

impl DomainStore for PgOrganizationStore {}

#[async_trait]
impl OrganizationStore for PgOrganizationStore {
    async fn insert(&self, organization: NewOrganization) -> Result<Organization, StoreError> {
        let addresses = organization.address.clone();
        let row = self.insert_record(&organization).await?;
        tracing::debug!(id = row.id, "Inserted organization record");
        Ok(Organization {
            address: addresses,
            ..assemble(row, Vec::new())
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Organization>, StoreError> {
        let Some(row) = self.fetch_record(id).await? else {
            return Ok(None);
        };
        let addresses = self.fetch_addresses(id).await?;
        Ok(Some(assemble(row, addresses)))
    }

    async fn update(
        &self,
        id: i32,
        organization: NewOrganization,
    ) -> Result<Organization, StoreError> {
        let addresses = organization.address.clone();
        let row = self
            .update_record(id, &organization)
            .await?
            .ok_or_else(|| StoreError::not_found("Organization", id))?;
        Ok(Organization {
            address: addresses,
            ..assemble(row, Vec::new())
        })
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let removed = self.delete_record(id).await?;
        if removed == 0 {
            return Err(StoreError::not_found("Organization", id));
        }
        Ok(())
    }

    async fn list(&self, request: PageRequest) -> Result<Page<Organization>, StoreError> {
        let (column, direction) = match &request.sort {
            Some(sort) => {
                let field = OrganizationSortField::parse(&sort.field)
                    .ok_or_else(|| StoreError::invalid_sort_field(sort.field.clone()))?;
                (sort_column(field), sort.direction)
            }
            None => (
                sort_column(OrganizationSortField::Id),
                SortDirection::Ascending,
            ),
        };

        let total = self.count().await?;
        let rows = self
            .fetch_page(column, direction, request.limit(), request.offset())
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let addresses = self.fetch_addresses(row.id).await?;
            items.push(assemble(row, addresses));
        }

        Ok(Page::new(items, total as u64, &request))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from)?;
        Ok(())
    }
}
