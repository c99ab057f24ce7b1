// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::collections::{BTreeMap, HashMap, LinkedList};
use std::fmt;
use std::hint;

use crate::payload::Payload;
use crate::raw_array::RawArray;

/// The collections under test, in reporting order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// `BTreeMap`, traversed in ascending key order
    OrderedMap,
    /// `HashMap`, traversed in unspecified order
    HashMap,
    /// `Vec`, traversed by index
    Sequence,
    /// `LinkedList`, traversed node by node
    LinkedSequence,
    /// `RawArray`, traversed by index
    RawArray,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 5] = [
        ContainerKind::OrderedMap,
        ContainerKind::HashMap,
        ContainerKind::Sequence,
        ContainerKind::LinkedSequence,
        ContainerKind::RawArray,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContainerKind::OrderedMap => "btree map",
            ContainerKind::HashMap => "hash map",
            ContainerKind::Sequence => "vec",
            ContainerKind::LinkedSequence => "linked list",
            ContainerKind::RawArray => "array",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Five collections holding `len` boxed payloads each
///
/// Every collection owns its own set of payloads; nothing is shared
/// between them.
pub struct Containers {
    btree: BTreeMap<usize, Box<Payload>>,
    hash: HashMap<usize, Box<Payload>>,
    vec: Vec<Box<Payload>>,
    list: LinkedList<Box<Payload>>,
    array: RawArray<Box<Payload>>,
    len: usize,
}

impl Containers {
    /// Inserts a fresh payload for every `i` in `0..n` into each
    /// collection.
    pub fn populate(n: usize) -> Self {
        let mut btree = BTreeMap::new();
        let mut hash = HashMap::new();
        let mut vec = Vec::new();
        let mut list = LinkedList::new();
        let mut array = RawArray::new(n);

        for i in 0..n {
            let x = i as i64;
            btree.insert(i, Box::new(Payload::new(x)));
            hash.insert(i, Box::new(Payload::new(x)));
            list.push_back(Box::new(Payload::new(x)));
            vec.push(Box::new(Payload::new(x)));
            let pushed = array.push(Box::new(Payload::new(x)));
            debug_assert!(pushed.is_ok());
        }

        Containers {
            btree,
            hash,
            vec,
            list,
            array,
            len: n,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of payloads held by the collection of `kind`
    pub fn count(&self, kind: ContainerKind) -> usize {
        match kind {
            ContainerKind::OrderedMap => self.btree.len(),
            ContainerKind::HashMap => self.hash.len(),
            ContainerKind::Sequence => self.vec.len(),
            ContainerKind::LinkedSequence => self.list.len(),
            ContainerKind::RawArray => self.array.len(),
        }
    }

    /// Visits every payload of one collection in its natural order,
    /// returning the sum of the integer values.
    pub fn traverse(&self, kind: ContainerKind) -> i64 {
        match kind {
            ContainerKind::OrderedMap => {
                accumulate(self.btree.values().map(|p| &**p))
            }
            ContainerKind::HashMap => {
                accumulate(self.hash.values().map(|p| &**p))
            }
            ContainerKind::Sequence => {
                let vec = &self.vec;
                accumulate((0..vec.len()).map(move |i| &*vec[i]))
            }
            ContainerKind::LinkedSequence => {
                accumulate(self.list.iter().map(|p| &**p))
            }
            ContainerKind::RawArray => {
                let array = &self.array;
                accumulate((0..array.len()).map(move |i| &*array[i]))
            }
        }
    }
}

/// The timed loop body: one integer read and one string copy per element
#[inline(always)]
fn accumulate<'a, I>(payloads: I) -> i64
where
    I: Iterator<Item = &'a Payload>,
{
    let mut total = 0i64;
    for payload in payloads {
        total += payload.get();
        let string = payload.string();
        hint::black_box(string);
    }
    total
}

/// Sum of all keys in `0..n`
pub fn expected_total(n: usize) -> i64 {
    let n = n as i64;
    if n == 0 {
        0
    } else {
        n * (n - 1) / 2
    }
}
