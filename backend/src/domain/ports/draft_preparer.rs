//! Conversion of a validated draft into a persistence-ready record.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::resource::NaturalKeyResource;

/// Turns a validated draft into the record handed to the store.
///
/// Preparers only see drafts that already passed
/// [`NaturalKeyResource::is_valid`].
#[async_trait]
pub trait DraftPreparer<R: NaturalKeyResource>: Send + Sync {
    /// Prepare `draft` for insertion.
    async fn prepare(&self, draft: R::Draft) -> Result<R::NewRecord, Error>;
}

/// Preparer for resources whose insert shape is built directly from the draft.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThroughPreparer;

#[async_trait]
impl<R> DraftPreparer<R> for PassThroughPreparer
where
    R: NaturalKeyResource,
    R::NewRecord: From<R::Draft>,
{
    async fn prepare(&self, draft: R::Draft) -> Result<R::NewRecord, Error> {
        Ok(draft.into())
    }
}
