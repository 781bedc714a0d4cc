//! Vital repository implementation
//!
//! Database access for vital signs records. Each operation maps one-to-one
//! onto a port method; there is no caching or batching layer in between.

use async_trait::async_trait;
use sqlx::PgPool;

use core_kernel::{DomainStore, Page, PageRequest, SortDirection, StoreError};
use domain_vital::{NewVital, Vital, VitalSortField, VitalStore};

use crate::error::DatabaseError;

const VITAL_COLUMNS: &str = "id, identifier, weight, height, general_examination";

/// PostgreSQL-backed store for vital records
#[derive(Debug, Clone)]
pub struct PgVitalStore {
    pool: PgPool,
}

/// Database row representation of a vital record
#[derive(Debug, Clone, sqlx::FromRow)]
struct VitalRow {
    id: i32,
    identifier: Vec<String>,
    weight: String,
    height: String,
    general_examination: String,
}

impl From<VitalRow> for Vital {
    fn from(row: VitalRow) -> Self {
        Vital {
            id: row.id,
            identifier: row.identifier,
            weight: row.weight,
            height: row.height,
            general_examination: row.general_examination,
        }
    }
}

/// Column backing each sortable field
fn sort_column(field: VitalSortField) -> &'static str {
    match field {
        VitalSortField::Id => "id",
        VitalSortField::Weight => "weight",
        VitalSortField::Height => "height",
        VitalSortField::GeneralExamination => "general_examination",
    }
}

impl PgVitalStore {
    /// Creates a new store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_row(&self, vital: &NewVital) -> Result<VitalRow, DatabaseError> {
        let row = sqlx::query_as::<_, VitalRow>(
            "INSERT INTO vitals (identifier, weight, height, general_examination) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, identifier, weight, height, general_examination",
        )
        .bind(&vital.identifier)
        .bind(&vital.weight)
        .bind(&vital.height)
        .bind(&vital.general_examination)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn fetch_row(&self, id: i32) -> Result<Option<VitalRow>, DatabaseError> {
        let row = sqlx::query_as::<_, VitalRow>(&format!(
            "SELECT {VITAL_COLUMNS} FROM vitals WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update_row(&self, id: i32, vital: &NewVital) -> Result<Option<VitalRow>, DatabaseError> {
        let row = sqlx::query_as::<_, VitalRow>(
            "UPDATE vitals \
             SET identifier = $2, weight = $3, height = $4, general_examination = $5, \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING id, identifier, weight, height, general_examination",
        )
        .bind(id)
        .bind(&vital.identifier)
        .bind(&vital.weight)
        .bind(&vital.height)
        .bind(&vital.general_examination)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete_row(&self, id: i32) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM vitals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vitals")
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
    ) -> Result<Vec<VitalRow>, DatabaseError> {
        // `column` comes from the sort whitelist, never from user input.
        let sql = format!(
            "SELECT {VITAL_COLUMNS} FROM vitals \
             ORDER BY {column} {direction}, id ASC LIMIT $1 OFFSET $2",
            direction = direction.as_sql(),
        );

        let rows = sqlx::query_as::<_, VitalRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}

impl DomainStore for PgVitalStore {}

#[async_trait]
impl VitalStore for PgVitalStore {
    async fn insert(&self, vital: NewVital) -> Result<Vital, StoreError> {
        let row = self.insert_row(&vital).await?;
        tracing::debug!(id = row.id, "Inserted vital record");
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vital>, StoreError> {
        let row = self.fetch_row(id).await?;
        Ok(row.map(Vital::from))
    }

    async fn update(&self, id: i32, vital: NewVital) -> Result<Vital, StoreError> {
        let row = self
            .update_row(id, &vital)
            .await?
            .ok_or_else(|| StoreError::not_found("Vital", id))?;
        Ok(row.into())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let removed = self.delete_row(id).await?;
        if removed == 0 {
            return Err(StoreError::not_found("Vital", id));
        }
        Ok(())
    }

    async fn list(&self, request: PageRequest) -> Result<Page<Vital>, StoreError> {
        let (column, direction) = match &request.sort {
            Some(sort) => {
                let field = VitalSortField::parse(&sort.field)
                    .ok_or_else(|| StoreError::invalid_sort_field(sort.field.clone()))?;
                (sort_column(field), sort.direction)
            }
            None => (sort_column(VitalSortField::Id), SortDirection::Ascending),
        };

        let total = self.count().await?;
        let rows = self
            .fetch_page(column, direction, request.limit(), request.offset())
            .await?;

        let items = rows.into_iter().map(Vital::from).collect();
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
