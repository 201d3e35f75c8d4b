//! Serde support for heterogeneous lists.
//!
//! Lists serialize as fixed-length tuples, so `hlist![1, "a"]` and
//! `(1, "a")` have the same representation. Deserialization rejects input
//! with the wrong number of elements.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};

use super::{HCons, HList, HNil};

// =============================================================================
// Serialize
// =============================================================================

pub trait SerializeElements {
    fn serialize_elements<S: SerializeTuple>(&self, tuple: &mut S) -> Result<(), S::Error>;
}

impl SerializeElements for HNil {
    fn serialize_elements<S: SerializeTuple>(&self, _tuple: &mut S) -> Result<(), S::Error> {
        Ok(())
    }
}

impl<H: Serialize, T: SerializeElements> SerializeElements for HCons<H, T> {
    fn serialize_elements<S: SerializeTuple>(&self, tuple: &mut S) -> Result<(), S::Error> {
        tuple.serialize_element(&self.head)?;
        self.tail.serialize_elements(tuple)
    }
}

impl Serialize for HNil {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_tuple(0)?.end()
    }
}

impl<H, T> Serialize for HCons<H, T>
where
    H: Serialize,
    T: SerializeElements + HList,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(<Self as HList>::LEN)?;
        self.serialize_elements(&mut tuple)?;
        tuple.end()
    }
}

// =============================================================================
// Deserialize
// =============================================================================

pub trait DeserializeElements<'de>: Sized {
    fn deserialize_elements<A>(sequence: &mut A, position: usize) -> Result<Self, A::Error>
    where
        A: SeqAccess<'de>;
}

impl<'de> DeserializeElements<'de> for HNil {
    fn deserialize_elements<A>(_sequence: &mut A, _position: usize) -> Result<Self, A::Error>
    where
        A: SeqAccess<'de>,
    {
        Ok(Self)
    }
}

impl<'de, H, T> DeserializeElements<'de> for HCons<H, T>
where
    H: Deserialize<'de>,
    T: DeserializeElements<'de> + HList,
{
    fn deserialize_elements<A>(sequence: &mut A, position: usize) -> Result<Self, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let head = sequence
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(position, &"a longer tuple"))?;
        let tail = T::deserialize_elements(sequence, position + 1)?;
        Ok(Self { head, tail })
    }
}

struct ListVisitor<L> {
    marker: PhantomData<L>,
}

impl<L> ListVisitor<L> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, L> Visitor<'de> for ListVisitor<L>
where
    L: DeserializeElements<'de> + HList,
{
    type Value = L;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a tuple of {} elements", L::LEN)
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let list = L::deserialize_elements(&mut sequence, 0)?;
        if sequence.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(L::LEN + 1, &self));
        }
        Ok(list)
    }
}

impl<'de> Deserialize<'de> for HNil {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(0, ListVisitor::new())
    }
}

impl<'de, H, T> Deserialize<'de> for HCons<H, T>
where
    H: Deserialize<'de>,
    T: DeserializeElements<'de> + HList,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(<Self as HList>::LEN, ListVisitor::new())
    }
}
