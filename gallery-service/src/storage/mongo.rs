// MongoDB implementation of the painting store

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson},
    error::{Error as MongoError, ErrorKind},
    Collection,
};
use shared::database::MongoConnection;

use super::{PaintingStore, StorageError, StorageResult};
use crate::models::Painting;

#[derive(Debug, Clone)]
pub struct MongoPaintingStore {
    collection: Collection<Painting>,
}

impl MongoPaintingStore {
    pub fn new(connection: &MongoConnection) -> Self {
        Self {
            collection: connection.collection(),
        }
    }
}

#[async_trait]
impl PaintingStore for MongoPaintingStore {
    async fn insert(&self, painting: Painting) -> StorageResult<ObjectId> {
        let result = self
            .collection
            .insert_one(painting, None)
            .await
            .map_err(|e| StorageError::Insert(e.to_string()))?;

        let id = object_id_from(result.inserted_id)?;
        tracing::debug!("Inserted painting document: id={}", id);
        Ok(id)
    }

    async fn find_all(&self) -> StorageResult<Vec<Painting>> {
        let cursor = self
            .collection
            .find(doc! {}, None)
            .await
            .map_err(|e| StorageError::Read(e.to_string()))?;

        let paintings: Vec<Painting> = cursor.try_collect().await.map_err(read_error)?;

        tracing::debug!("Fetched {} painting documents", paintings.len());
        Ok(paintings)
    }
}

fn object_id_from(inserted_id: Bson) -> StorageResult<ObjectId> {
    match inserted_id {
        Bson::ObjectId(id) => Ok(id),
        other => Err(StorageError::UnexpectedId(other.to_string())),
    }
}

fn read_error(err: MongoError) -> StorageError {
    match *err.kind {
        ErrorKind::BsonDeserialization(_) => StorageError::Decode(err.to_string()),
        _ => StorageError::Read(err.to_string()),
    }
}
