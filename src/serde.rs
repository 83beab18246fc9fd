use super::OrderedMap;

use serde::de::{Deserialize, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserializer;

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

pub struct OrderedMapVisitor<K: Eq + Hash, V, H: BuildHasher> {
    #[allow(clippy::type_complexity)]
    marker: PhantomData<fn() -> OrderedMap<K, V, H>>,
}

impl<K, V, H> OrderedMapVisitor<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher,
{
    fn new() -> Self {
        OrderedMapVisitor {
            marker: PhantomData,
        }
    }
}

impl<'de, K, V, H> Visitor<'de> for OrderedMapVisitor<K, V, H>
where
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
    H: BuildHasher + Default,
{
    type Value = OrderedMap<K, V, H>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an OrderedMap")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let map =
            OrderedMap::with_capacity_and_hasher(access.size_hint().unwrap_or(0), H::default());

        while let Some((key, value)) = access.next_entry()? {
            map.upsert(key, value);
        }

        Ok(map)
    }
}

impl<'de, K, V, H> Deserialize<'de> for OrderedMap<K, V, H>
where
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
    H: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor::<K, V, H>::new())
    }
}

impl<K, V, H> Serialize for OrderedMap<K, V, H>
where
    K: Serialize,
    V: Serialize,
    H: BuildHasher,
{
    /// Serializes the entries in iteration order.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let map = self.try_scan_sized(
            |len| serializer.serialize_map(Some(len)),
            |map: &mut S::SerializeMap, k, v| map.serialize_entry(k, v),
        )?;
        map.end()
    }
}
