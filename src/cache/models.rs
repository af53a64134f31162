//! Cache payload and statistics models.

// Author: kelexine (https://github.com/kelexine)

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

/// An opaque cached value as handed to and from a cache backend.
///
/// The bytes are JSON; callers only ever see typed values through
/// [`CachePayload::encode`] and [`CachePayload::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachePayload {
    pub data: Vec<u8>,
    /// When the value was written. Backends that cannot store it leave it `None`.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CachePayload {
    /// Wrap raw bytes without a timestamp.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            updated_at: None,
        }
    }

    /// Serialize `value` and stamp it with the current time.
    pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self {
            data: serde_json::to_vec(value)?,
            updated_at: Some(Utc::now()),
        })
    }

    /// Deserialize the payload into any target shape.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.data)?)
    }

    /// Check if this payload is older than `max_age`. Payloads without a
    /// timestamp never expire.
    pub fn is_expired(&self, max_age: Duration) -> bool {
        let Some(updated_at) = self.updated_at else {
            return false;
        };

        let elapsed = Utc::now()
            .signed_duration_since(updated_at)
            .to_std()
            .unwrap_or(Duration::ZERO);

        elapsed > max_age
    }
}

/// A typed cache entry: a decoded payload and when it was last written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheItem<T> {
    pub payload: T,
    pub updated_at: DateTime<Utc>,
}

impl<T> CacheItem<T> {
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            updated_at: Utc::now(),
        }
    }
}

impl<T: DeserializeOwned> CacheItem<T> {
    /// Decode a stored payload, keeping its timestamp (or `now` if it had none).
    pub fn from_payload(payload: &CachePayload) -> Result<Self> {
        Ok(Self {
            payload: payload.decode()?,
            updated_at: payload.updated_at.unwrap_or_else(Utc::now),
        })
    }
}

/// Statistics for cache operations.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of requests served from the cache.
    pub hits: u64,
    /// Number of requests that fell through to a live fetch.
    pub misses: u64,
    /// Number of fetched values written back to the cache.
    pub writes: u64,
}
