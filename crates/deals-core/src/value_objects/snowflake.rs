//! Snowflake ID - 64-bit time-ordered unique identifier
//!
//! Layout: 42 bits of milliseconds since the custom epoch, 10 bits of
//! worker id, 12 bits of per-millisecond sequence. IDs sort by creation
//! time and serialize as strings in JSON (JavaScript BigInt safety).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

const TIMESTAMP_SHIFT: u8 = 22;
const WORKER_SHIFT: u8 = 12;
const MAX_WORKER_ID: u16 = 1023;
const SEQUENCE_MASK: i64 = 0xFFF;

/// Time-ordered 64-bit unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Custom epoch: 2023-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_672_531_200_000;

    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Zero means "not yet assigned"
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Milliseconds since the Unix epoch at which this ID was minted
    #[inline]
    pub fn timestamp_millis(&self) -> i64 {
        (self.0 >> TIMESTAMP_SHIFT) + Self::EPOCH
    }

    /// Creation time as a UTC timestamp
    pub fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        use chrono::{TimeZone, Utc};
        Utc.timestamp_millis_opt(self.timestamp_millis())
            .single()
            .unwrap_or_else(|| Utc.timestamp_millis_opt(0).unwrap())
    }

    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.parse::<i64>()
            .map(Snowflake)
            .map_err(|_| SnowflakeParseError::InvalidFormat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct SnowflakeVisitor;

        impl Visitor<'_> for SnowflakeVisitor {
            type Value = Snowflake;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer snowflake ID")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Snowflake, E> {
                Ok(Snowflake(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Snowflake, E> {
                Ok(Snowflake(value as i64))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Snowflake, E> {
                value
                    .parse::<i64>()
                    .map(Snowflake)
                    .map_err(|_| de::Error::custom("invalid snowflake string"))
            }
        }

        deserializer.deserialize_any(SnowflakeVisitor)
    }
}

/// Thread-safe Snowflake minting, up to 4096 IDs per millisecond per worker.
///
/// The generator state is tiny and held under a mutex for at most a few
/// instructions per ID; contention is not a concern at this call rate.
pub struct SnowflakeGenerator {
    worker_id: u16,
    state: Mutex<GeneratorState>,
}

struct GeneratorState {
    last_millis: i64,
    sequence: i64,
}

impl SnowflakeGenerator {
    /// # Panics
    /// Panics if `worker_id` exceeds the 10-bit range.
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id <= MAX_WORKER_ID, "worker_id must be <= 1023");
        Self {
            worker_id,
            state: Mutex::new(GeneratorState {
                last_millis: 0,
                sequence: 0,
            }),
        }
    }

    /// Mint a new unique ID
    pub fn generate(&self) -> Snowflake {
        let mut state = self.state.lock().expect("snowflake state poisoned");

        let mut now = current_millis();
        // Never hand out timestamps older than the last one we used, even
        // if the wall clock stepped backwards.
        if now < state.last_millis {
            now = state.last_millis;
        }

        if now == state.last_millis {
            state.sequence = (state.sequence + 1) & SEQUENCE_MASK;
            if state.sequence == 0 {
                // Sequence exhausted within this millisecond
                while now <= state.last_millis {
                    now = current_millis();
                }
            }
        } else {
            state.sequence = 0;
        }
        state.last_millis = now;

        let id = ((now - Snowflake::EPOCH) << TIMESTAMP_SHIFT)
            | (i64::from(self.worker_id) << WORKER_SHIFT)
            | state.sequence;
        Snowflake::new(id)
    }

    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

fn current_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_and_inner() {
        let id = Snowflake::new(987654321);
        assert_eq!(id.into_inner(), 987654321);
        assert!(!id.is_zero());
        assert!(Snowflake::default().is_zero());
    }

    #[test]
    fn test_parse_and_display() {
        let id = Snowflake::parse("424242").unwrap();
        assert_eq!(id.to_string(), "424242");
        assert!(Snowflake::parse("not-a-number").is_err());
    }

    #[test]
    fn test_json_round_trip_as_string() {
        let id = Snowflake::new(123456789012345678);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"123456789012345678\"");

        let back: Snowflake = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        // Integers are accepted too
        let from_num: Snowflake = serde_json::from_str("42").unwrap();
        assert_eq!(from_num.into_inner(), 42);
    }

    #[test]
    fn test_ids_sort_by_time() {
        let gen = SnowflakeGenerator::new(3);
        let a = gen.generate();
        let b = gen.generate();
        assert!(b > a);
        assert_eq!(gen.worker_id(), 3);
    }

    #[test]
    fn test_generator_uniqueness() {
        let gen = SnowflakeGenerator::default();
        let mut seen = HashSet::new();
        for _ in 0..5000 {
            assert!(seen.insert(gen.generate()), "duplicate ID");
        }
    }

    #[test]
    fn test_generator_across_threads() {
        let gen = Arc::new(SnowflakeGenerator::new(7));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let gen = Arc::clone(&gen);
                thread::spawn(move || (0..1000).map(|_| gen.generate()).collect::<Vec<_>>())
            })
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(all.insert(id), "duplicate ID across threads");
            }
        }
        assert_eq!(all.len(), 4000);
    }

    #[test]
    #[should_panic(expected = "worker_id must be <= 1023")]
    fn test_worker_id_out_of_range() {
        SnowflakeGenerator::new(1024);
    }

    #[test]
    fn test_timestamp_extraction() {
        let gen = SnowflakeGenerator::default();
        let before = current_millis();
        let id = gen.generate();
        let after = current_millis();
        assert!(id.timestamp_millis() >= before);
        assert!(id.timestamp_millis() <= after);
    }
}
