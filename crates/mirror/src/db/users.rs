//! Repository over the mirrored users collection.

use futures::stream::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{self, doc};
use mongodb::options::ReturnDocument;

use crate::models::{ExternalUser, MirroredUser};

/// Repository for the mirrored user documents.
#[derive(Clone)]
pub struct MirrorRepository {
    collection: Collection<MirroredUser>,
}

impl MirrorRepository {
    /// Create a repository over the given collection handle.
    #[must_use]
    pub const fn new(collection: Collection<MirroredUser>) -> Self {
        Self { collection }
    }

    /// Insert-or-update one feed record, keyed by its external id.
    ///
    /// Mutable fields are overwritten on every call; `externalId` and
    /// `createdAt` are written only when the document is first inserted,
    /// so repeated fetches never duplicate and keep the original creation
    /// time. Returns the document as stored after the upsert.
    ///
    /// # Errors
    ///
    /// Returns `mongodb::error::Error` if the upsert fails.
    pub async fn upsert(&self, user: &ExternalUser) -> Result<MirroredUser, mongodb::error::Error> {
        let now = bson::DateTime::now();
        let update = doc! {
            "$set": {
                "name": &user.name,
                "username": &user.username,
                "email": &user.email,
                "phone": &user.phone,
                "website": &user.website,
                "address": bson::to_bson(&user.address)?,
                "company": bson::to_bson(&user.company)?,
                "updatedAt": now,
            },
            "$setOnInsert": {
                "externalId": user.id,
                "createdAt": now,
            },
        };

        let saved = self
            .collection
            .find_one_and_update(doc! { "externalId": user.id }, update)
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?;

        // With upsert + ReturnDocument::After the driver always hands the
        // document back; a missing one means the store misbehaved.
        saved.ok_or_else(|| {
            mongodb::error::Error::custom("upsert returned no document".to_owned())
        })
    }

    /// All mirrored documents, sorted by external id.
    ///
    /// # Errors
    ///
    /// Returns `mongodb::error::Error` if the query fails.
    pub async fn list(&self) -> Result<Vec<MirroredUser>, mongodb::error::Error> {
        self.collection
            .find(doc! {})
            .sort(doc! { "externalId": 1 })
            .await?
            .try_collect()
            .await
    }

    /// One mirrored document by its external id.
    ///
    /// # Errors
    ///
    /// Returns `mongodb::error::Error` if the query fails.
    pub async fn find_by_external_id(
        &self,
        external_id: i64,
    ) -> Result<Option<MirroredUser>, mongodb::error::Error> {
        self.collection
            .find_one(doc! { "externalId": external_id })
            .await
    }

    /// Remove every mirrored document, returning how many were deleted.
    ///
    /// # Errors
    ///
    /// Returns `mongodb::error::Error` if the delete fails.
    pub async fn delete_all(&self) -> Result<u64, mongodb::error::Error> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
