//! Repository for the `clients` table.

use sqlx::PgPool;

use onboard_core::types::DbId;

use crate::models::client::{ClientRecord, NewClient};

/// Column list for `clients` queries.
const COLUMNS: &str = "\
    id, full_name, email, company_name, services, \
    budget_usd, project_start_date, accept_terms, \
    created_at, updated_at";

/// Provides write and lookup operations for stored client intakes.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert one client record. Timestamps are assigned by the store.
    ///
    /// There is no uniqueness constraint: inserting the same intake
    /// twice produces two independent rows.
    #[tracing::instrument(name = "Insert client record", skip(pool, input))]
    pub async fn create(pool: &PgPool, input: &NewClient) -> Result<ClientRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients \
                 (full_name, email, company_name, services, \
                  budget_usd, project_start_date, accept_terms) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientRecord>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.company_name)
            .bind(&input.services)
            .bind(input.budget_usd)
            .bind(input.project_start_date)
            .bind(input.accept_terms)
            .fetch_one(pool)
            .await
    }

    /// Fetch one record by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ClientRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, ClientRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all stored records, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ClientRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY id");
        sqlx::query_as::<_, ClientRecord>(&query).fetch_all(pool).await
    }

    /// Total number of stored records.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clients")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
