//! The catalog query pipeline shared by races and sports events.
//!
//! `list` runs fetch → status → ordering; `get` runs fetch → status. Both
//! take the observation instant from the caller so a whole response is
//! evaluated against one `now`.

use entain_core::error::CoreError;
use entain_core::ordering::order_records;
use entain_core::status::{assign_status, assign_status_single};
use entain_core::types::{DbId, Timestamp};
use entain_db::repositories::{CatalogEntity, CatalogStore};

use crate::error::AppResult;

/// Fetch the rows matching `filter`, stamp their status as of `now` and
/// order them by `order_by`.
///
/// A storage failure is returned as-is; there are no partial results.
pub async fn list<E: CatalogEntity>(
    store: &dyn CatalogStore<E>,
    filter: Option<&E::Filter>,
    order_by: &str,
    now: Timestamp,
) -> AppResult<Vec<E>> {
    let mut records = store.list(filter).await?;

    assign_status(&mut records, now);
    let sort_key = order_records(&mut records, order_by);

    tracing::debug!(
        entity = E::ENTITY,
        count = records.len(),
        order_by,
        ?sort_key,
        "Listed catalog records",
    );

    Ok(records)
}

/// Fetch one record by id and stamp its status as of `now`.
///
/// Fails with [`CoreError::NotFound`] when no row has that id.
pub async fn get<E: CatalogEntity>(
    store: &dyn CatalogStore<E>,
    id: DbId,
    now: Timestamp,
) -> AppResult<E> {
    let mut record = store
        .find_by_id(id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: E::ENTITY,
            id,
        })?;

    assign_status_single(&mut record, now);
    Ok(record)
}
