// In-memory painting store for handler tests

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::{PaintingStore, StorageResult};
use crate::models::Painting;

#[derive(Debug, Default)]
pub struct InMemoryPaintingStore {
    paintings: Mutex<Vec<Painting>>,
}

impl InMemoryPaintingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.paintings.lock().unwrap().len()
    }
}

#[async_trait]
impl PaintingStore for InMemoryPaintingStore {
    async fn insert(&self, mut painting: Painting) -> StorageResult<ObjectId> {
        let id = *painting.id.get_or_insert_with(ObjectId::new);
        self.paintings.lock().unwrap().push(painting);
        Ok(id)
    }

    async fn find_all(&self) -> StorageResult<Vec<Painting>> {
        Ok(self.paintings.lock().unwrap().clone())
    }
}
