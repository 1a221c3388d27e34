//! Generic read-only repository for catalog tables.

use std::marker::PhantomData;

use async_trait::async_trait;
use entain_core::record::CatalogRecord;
use entain_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use crate::predicate::{bind_values, translate_filter, ListFilter};

/// A catalog row type backed by its own table.
pub trait CatalogEntity:
    CatalogRecord + for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + 'static
{
    /// Table the rows are read from.
    const TABLE: &'static str;

    /// Column list shared across queries, in `FromRow` order.
    const COLUMNS: &'static str;

    /// Request filter accepted by list queries on this table.
    type Filter: ListFilter + Send + Sync;
}

/// Provides list and get-by-id reads for one catalog table.
pub struct CatalogRepo<E>(PhantomData<E>);

impl<E: CatalogEntity> CatalogRepo<E> {
    /// Read every row matching `filter`, or the whole table when it is absent.
    ///
    /// Rows come back in id order; callers apply the requested ordering.
    pub async fn list(pool: &PgPool, filter: Option<&E::Filter>) -> Result<Vec<E>, sqlx::Error> {
        let predicate = translate_filter(filter);
        let where_clause = predicate.where_clause();
        let query = format!(
            "SELECT {} FROM {} {where_clause} ORDER BY id",
            E::COLUMNS,
            E::TABLE
        );

        tracing::debug!(
            table = E::TABLE,
            where_clause = %where_clause,
            bind_count = predicate.bind_values().len(),
            "Listing catalog rows",
        );

        bind_values(sqlx::query_as::<_, E>(&query), predicate.bind_values())
            .fetch_all(pool)
            .await
    }

    /// Find a row by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<E>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE id = $1 LIMIT 1",
            E::COLUMNS,
            E::TABLE
        );
        sqlx::query_as::<_, E>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

/// Storage seam for one catalog entity.
///
/// Errors are returned untouched so the caller can tell a failed read from a
/// missing row.
#[async_trait]
pub trait CatalogStore<E: CatalogEntity>: Send + Sync {
    async fn list(&self, filter: Option<&E::Filter>) -> Result<Vec<E>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, sqlx::Error>;
}

#[async_trait]
impl<E: CatalogEntity> CatalogStore<E> for PgPool {
    async fn list(&self, filter: Option<&E::Filter>) -> Result<Vec<E>, sqlx::Error> {
        CatalogRepo::<E>::list(self, filter).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, sqlx::Error> {
        CatalogRepo::<E>::find_by_id(self, id).await
    }
}

/// Database reachability check used by the health endpoint.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl HealthProbe for PgPool {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(self).await
    }
}
