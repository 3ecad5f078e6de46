use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{MovieStore, StoreResult};
use crate::{id, models::Movie};

/// In-process stand-in for [`super::SqlStore`].
#[derive(Default)]
pub struct MemoryStore {
    movies: RwLock<Vec<Movie>>,
}

#[async_trait]
impl MovieStore for MemoryStore {
    async fn insert(&self, movie: &Movie) -> StoreResult<String> {
        let id = id::new_id();
        let mut stored = movie.clone();
        stored.id = Some(id.clone());
        self.movies.write().await.push(stored);
        Ok(id)
    }

    async fn mark_watched(&self, id: &str) -> StoreResult<u64> {
        let mut movies = self.movies.write().await;
        let mut matched = 0;
        for movie in movies.iter_mut().filter(|m| m.id.as_deref() == Some(id)) {
            movie.watched = true;
            matched += 1;
        }
        Ok(matched)
    }

    async fn delete(&self, id: &str) -> StoreResult<u64> {
        let mut movies = self.movies.write().await;
        let before = movies.len();
        movies.retain(|m| m.id.as_deref() != Some(id));
        Ok((before - movies.len()) as u64)
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        let mut movies = self.movies.write().await;
        let count = movies.len() as u64;
        movies.clear();
        Ok(count)
    }

    async fn list_all(&self) -> StoreResult<Vec<Movie>> {
        Ok(self.movies.read().await.clone())
    }
}
