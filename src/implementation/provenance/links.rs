// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the arena of provenance links. Rather than storing
//! the list of its items in each frontier point (which would cost a quadratic
//! amount of memory), each point only refers to one link: the last item that
//! was added to build it, and the link of the point it was built from.

use crate::LinkId;

/// One provenance record
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SourceLink {
    /// The position of the item in the solver input
    pub item: usize,
    /// The link of the point this one was extended from (none for an item
    /// that was taken alone)
    pub parent: Option<LinkId>,
}

/// An append only arena of provenance links.
#[derive(Debug, Clone, Default)]
pub struct LinkTable {
    links: Vec<SourceLink>,
}

impl LinkTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }
    /// Records that `item` was added to the point identified by `parent` and
    /// returns the identifier of the resulting point.
    pub fn push(&mut self, item: usize, parent: Option<LinkId>) -> LinkId {
        let id = LinkId(self.links.len());
        self.links.push(SourceLink { item, parent });
        id
    }
    /// Returns the link with the given id
    pub fn get(&self, id: LinkId) -> SourceLink {
        self.links[id.0]
    }
    /// Returns the number of links in the table
    pub fn len(&self) -> usize {
        self.links.len()
    }
    /// Returns true iff the table is empty
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
    /// Iterates over the items of the point identified by `from`, from the
    /// last added item up to the first one.
    pub fn items(&self, from: Option<LinkId>) -> BackTrace<'_> {
        BackTrace { table: self, cursor: from }
    }
}

/// Walks a chain of provenance links up to its root.
pub struct BackTrace<'a> {
    table: &'a LinkTable,
    cursor: Option<LinkId>,
}

impl Iterator for BackTrace<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let link = self.table.get(self.cursor?);
        self.cursor = link.parent;
        Some(link.item)
    }
}

#[cfg(test)]
mod test_links {
    use crate::*;

    #[test]
    fn by_default_it_is_empty() {
        let table = LinkTable::new();
        assert!(table.is_empty());
        assert_eq!(0, table.len());
    }

    #[test]
    fn push_returns_consecutive_ids() {
        let mut table = LinkTable::new();
        assert_eq!(LinkId(0), table.push(4, None));
        assert_eq!(LinkId(1), table.push(2, Some(LinkId(0))));
        assert_eq!(2, table.len());
        assert_eq!(SourceLink { item: 2, parent: Some(LinkId(0)) }, table.get(LinkId(1)));
    }

    #[test]
    fn backtrace_of_nothing_is_empty() {
        let table = LinkTable::new();
        assert_eq!(0, table.items(None).count());
    }

    #[test]
    fn backtrace_follows_the_parents() {
        let mut table = LinkTable::new();
        let a = table.push(0, None);
        let _ = table.push(9, None);
        let b = table.push(3, Some(a));
        let c = table.push(5, Some(b));
        assert_eq!(vec![5, 3, 0], table.items(Some(c)).collect::<Vec<_>>());
        assert_eq!(vec![3, 0], table.items(Some(b)).collect::<Vec<_>>());
    }
}
