//! Cache en memoria con expiración por TTL
//!
//! Cada entrada guarda el instante de inserción; una entrada más vieja que el
//! TTL se trata como ausente y se elimina al leerla. Cuando el cache está
//! lleno se desaloja la entrada menos usada recientemente (LRU).

use std::num::NonZeroUsize;
use std::time::Duration;

use lru::LruCache;
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

use super::cache_config::CacheSettings;

/// Datos en cache con su instante de inserción
#[derive(Debug, Clone)]
struct CachedEntry {
    value: Value,
    inserted_at: Instant,
}

/// Cache acotado con expiración por tiempo
pub struct TtlCache {
    name: &'static str,
    ttl: Duration,
    entries: Mutex<LruCache<String, CachedEntry>>,
}

impl TtlCache {
    /// Crear un cache nuevo; una capacidad de 0 se trata como 1
    pub fn new(name: &'static str, settings: CacheSettings) -> Self {
        let capacity = NonZeroUsize::new(settings.capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            name,
            ttl: settings.ttl,
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Obtener un valor si existe y no ha expirado
    pub async fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.lock().await;

        let expired = match entries.get(key) {
            Some(entry) if entry.inserted_at.elapsed() <= self.ttl => {
                debug!("Cache hit [{}] para clave: {}", self.name, key);
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.pop(key);
            debug!("Cache miss (expirado) [{}] para clave: {}", self.name, key);
        } else {
            debug!("Cache miss [{}] para clave: {}", self.name, key);
        }
        None
    }

    /// Insertar o reemplazar un valor
    pub async fn insert(&self, key: impl Into<String>, value: Value) {
        let key = key.into();
        let mut entries = self.entries.lock().await;

        if let Some((evicted, _)) = entries.push(
            key.clone(),
            CachedEntry {
                value,
                inserted_at: Instant::now(),
            },
        ) {
            if evicted != key {
                debug!("Cache [{}] lleno, clave desalojada: {}", self.name, evicted);
            }
        }
        debug!("Datos guardados en cache [{}] para clave: {}", self.name, key);
    }

    /// Eliminar todas las entradas expiradas, devuelve cuántas se eliminaron
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.lock().await;
        let expired: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| entry.inserted_at.elapsed() > self.ttl)
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            entries.pop(key);
        }
        expired.len()
    }

    /// Número de entradas almacenadas (incluye las expiradas aún no purgadas)
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }
}
