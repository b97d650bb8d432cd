//! Separate-chaining hash map keyed by `i64`.
//
// - Bucket of a key is `|key| mod capacity`, capacity is a power of two
// - Chains are owned singly linked lists, new keys join the tail
// - Capacity doubles when a new key arrives at `floor(capacity * 0.75)` entries
// - Chains are torn down iteratively so long chains cannot overflow the stack

use std::{fmt, iter::FusedIterator, mem};

use log::{debug, trace};

use super::LongMap;
use crate::error::{LongMapError, Result};
use crate::util::bucket::{bucket_index, grow_threshold, normalize_capacity, INITIAL_CAPACITY};

struct Entry<V> {
    key: i64,
    value: V,
}

struct Node<V> {
    entry: Entry<V>,
    next: Link<V>,
}

type Link<V> = Option<Box<Node<V>>>;

impl<V> Node<V> {
    fn boxed(key: i64, value: V) -> Box<Self> {
        Box::new(Self {
            entry: Entry { key, value },
            next: None,
        })
    }
}

fn chain<V>(head: &Link<V>) -> impl Iterator<Item = &Node<V>> {
    std::iter::successors(head.as_deref(), |node| node.next.as_deref())
}

/// Hangs `node` off the last link of the chain starting at `link`.
fn append<V>(mut link: &mut Link<V>, node: Box<Node<V>>) {
    loop {
        match link {
            Some(current) => link = &mut current.next,
            None => {
                *link = Some(node);
                return;
            }
        }
    }
}

/// Drops a chain one node at a time.
fn release<V>(mut link: Link<V>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

fn empty_buckets<V>(capacity: usize) -> Box<[Link<V>]> {
    (0..capacity).map(|_| None).collect()
}

/// Hash map from `i64` keys to `V`, built on a bucket array of chains.
///
/// The operation set lives on the [`LongMap`] trait; the inherent methods
/// cover what a Rust caller additionally expects (infallible `insert`,
/// `get_mut`, iteration, sizing).
///
/// ```
/// use longmap::{LongHashMap, LongMap};
///
/// let mut map = LongHashMap::new();
/// assert_eq!(map.put(19, "nineteen").unwrap(), None);
/// assert_eq!(map.get(19), Some(&"nineteen"));
/// assert!(map.put(20, None::<&str>).is_err());
/// ```
pub struct LongHashMap<V> {
    buckets: Box<[Link<V>]>,
    size: usize,
}

impl<V> Default for LongHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> LongHashMap<V> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Starts with `buckets` rounded up to a power of two (at least one).
    pub fn with_capacity(buckets: usize) -> Self {
        Self {
            buckets: empty_buckets(normalize_capacity(buckets)),
            size: 0,
        }
    }

    /// Current length of the bucket array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    fn index_of(&self, key: i64) -> usize {
        bucket_index(key, self.capacity())
    }

    /// Stores `value` under `key` and returns the value it replaced.
    ///
    /// Overwrites happen in place. A new key may first double the bucket
    /// array, then joins the tail of its chain.
    pub fn insert(&mut self, key: i64, value: V) -> Option<V> {
        if let Some(slot) = self.get_mut(key) {
            return Some(mem::replace(slot, value));
        }

        if self.size >= grow_threshold(self.capacity()) {
            self.grow();
        }

        let index = self.index_of(key);
        append(&mut self.buckets[index], Node::boxed(key, value));
        self.size += 1;
        None
    }

    fn find(&self, key: i64) -> Option<&Entry<V>> {
        chain(&self.buckets[self.index_of(key)])
            .map(|node| &node.entry)
            .find(|entry| entry.key == key)
    }

    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        let index = self.index_of(key);
        let mut link = self.buckets[index].as_deref_mut();
        while let Some(node) = link {
            if node.entry.key == key {
                return Some(&mut node.entry.value);
            }
            link = node.next.as_deref_mut();
        }
        None
    }

    /// Doubles the bucket array and re-chains every node by its key.
    ///
    /// Nodes are moved, not reallocated. Walking the old buckets in order
    /// keeps each new chain in the order its nodes were visited.
    fn grow(&mut self) {
        let capacity = self.capacity() * 2;
        trace!(
            "growing bucket array {} -> {} ({} entries)",
            self.capacity(),
            capacity,
            self.size
        );

        let old = mem::replace(&mut self.buckets, empty_buckets(capacity));
        let mut rechained: Vec<Vec<Box<Node<V>>>> = (0..capacity).map(|_| Vec::new()).collect();
        for mut head in old.into_vec() {
            while let Some(mut node) = head {
                head = node.next.take();
                rechained[bucket_index(node.entry.key, capacity)].push(node);
            }
        }

        for (slot, nodes) in self.buckets.iter_mut().zip(rechained) {
            *slot = nodes.into_iter().rev().fold(None, |next, mut node| {
                node.next = next;
                Some(node)
            });
        }
    }

    /// Entries in bucket order, then chain order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            node: None,
            remaining: self.size,
        }
    }
}

impl<V> LongMap<V> for LongHashMap<V> {
    fn put<T>(&mut self, key: i64, value: T) -> Result<Option<V>>
    where
        T: Into<Option<V>>,
    {
        match value.into() {
            Some(value) => Ok(self.insert(key, value)),
            None => {
                debug!("rejected absent value for key {key}");
                Err(LongMapError::InvalidArgument { key })
            }
        }
    }

    fn get(&self, key: i64) -> Option<&V> {
        self.find(key).map(|entry| &entry.value)
    }

    fn remove(&mut self, key: i64) -> Option<V> {
        let index = self.index_of(key);
        let mut link = &mut self.buckets[index];
        loop {
            match link {
                None => return None,
                Some(found) if found.entry.key == key => break,
                Some(node) => link = &mut node.next,
            }
        }

        let node = link.take()?;
        let Node { entry, next } = *node;
        *link = next;
        self.size -= 1;
        Some(entry.value)
    }

    fn contains_key(&self, key: i64) -> bool {
        self.find(key).is_some()
    }

    fn contains_value<'q, Q>(&self, value: Q) -> bool
    where
        Q: Into<Option<&'q V>>,
        V: PartialEq + 'q,
    {
        match value.into() {
            Some(value) => self.iter().any(|(_, candidate)| candidate == value),
            None => false,
        }
    }

    fn keys(&self) -> Option<Vec<i64>> {
        if self.size == 0 {
            return None;
        }
        Some(self.iter().map(|(key, _)| key).collect())
    }

    fn values(&self) -> Option<Vec<&V>> {
        if self.size == 0 {
            return None;
        }
        Some(self.iter().map(|(_, value)| value).collect())
    }

    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    /// Empties every bucket. The bucket array keeps its current length.
    fn clear(&mut self) {
        if self.size > 0 {
            debug!(
                "clearing {} entries, capacity stays {}",
                self.size,
                self.capacity()
            );
        }
        self.buckets.iter_mut().for_each(|slot| release(slot.take()));
        self.size = 0;
    }
}

impl<V> Drop for LongHashMap<V> {
    fn drop(&mut self) {
        self.buckets.iter_mut().for_each(|slot| release(slot.take()));
    }
}

impl<V: Clone> Clone for LongHashMap<V> {
    /// Same capacity, same chain layout.
    fn clone(&self) -> Self {
        let mut map = Self::with_capacity(self.capacity());
        for (key, value) in self.iter() {
            map.insert(key, value.clone());
        }
        map
    }
}

impl<V: fmt::Debug> fmt::Debug for LongHashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: PartialEq> PartialEq for LongHashMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .iter()
                .all(|(key, value)| other.get(key).map_or(false, |theirs| value == theirs))
    }
}

impl<V: Eq> Eq for LongHashMap<V> {}

impl<V> FromIterator<(i64, V)> for LongHashMap<V> {
    fn from_iter<I: IntoIterator<Item = (i64, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<V> Extend<(i64, V)> for LongHashMap<V> {
    fn extend<I: IntoIterator<Item = (i64, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

pub struct Iter<'a, V> {
    buckets: std::slice::Iter<'a, Link<V>>,
    node: Option<&'a Node<V>>,
    remaining: usize,
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            node: self.node,
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.node {
                self.node = node.next.as_deref();
                self.remaining -= 1;
                return Some((node.entry.key, &node.entry.value));
            }
            self.node = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a LongHashMap<V> {
    type Item = (i64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator, same order as [`LongHashMap::iter`].
pub struct IntoIter<V> {
    buckets: std::vec::IntoIter<Link<V>>,
    chain: Link<V>,
    remaining: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (i64, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(mut node) = self.chain.take() {
                self.chain = node.next.take();
                self.remaining -= 1;
                let Entry { key, value } = node.entry;
                return Some((key, value));
            }
            self.chain = self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
impl<V> FusedIterator for IntoIter<V> {}

impl<V> Drop for IntoIter<V> {
    fn drop(&mut self) {
        release(self.chain.take());
        self.buckets.by_ref().for_each(release);
    }
}

impl<V> IntoIterator for LongHashMap<V> {
    type Item = (i64, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let remaining = mem::replace(&mut self.size, 0);
        IntoIter {
            buckets: mem::take(&mut self.buckets).into_vec().into_iter(),
            chain: None,
            remaining,
        }
    }
}
