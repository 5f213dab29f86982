use std::collections::BTreeMap;

/// Disjoint-set forest over stops.
///
/// Stops are registered up front as their own singleton roots; `find` on a stop that was
/// never registered returns `None`.
#[derive(Debug, Clone)]
pub struct UnionFind<S> {
    parent: BTreeMap<S, S>,
}

impl<S: Ord + Copy> UnionFind<S> {
    /// Forest with every given stop as its own root. Repeated stops are registered once.
    pub fn from_stops(stops: impl IntoIterator<Item = S>) -> Self {
        Self {
            parent: stops.into_iter().map(|stop| (stop, stop)).collect(),
        }
    }

    /// Representative of the set holding `stop`.
    ///
    /// Iterative, with full path compression: every stop walked over is re-pointed
    /// straight at the root.
    pub fn find(&mut self, stop: S) -> Option<S> {
        let mut root = stop;
        loop {
            let parent = *self.parent.get(&root)?;
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = stop;
        while current != root {
            // every link on the path was just read, so the entry exists
            let Some(link) = self.parent.get_mut(&current) else {
                break;
            };
            let next = *link;
            *link = root;
            current = next;
        }

        Some(root)
    }

    /// Merges the sets holding `a` and `b`, attaching `b`'s root under `a`'s.
    ///
    /// Returns `true` only when two distinct sets were merged. Unregistered stops merge nothing.
    pub fn union(&mut self, a: S, b: S) -> bool {
        let (Some(root_a), Some(root_b)) = (self.find(a), self.find(b)) else {
            return false;
        };

        if root_a == root_b {
            return false;
        }

        self.parent.insert(root_b, root_a);
        true
    }

    pub fn same(&mut self, a: S, b: S) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(root_a), Some(root_b)) => root_a == root_b,
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_stops_start_as_roots() {
        let mut forest = UnionFind::from_stops(["usb", "a", "b", "a"]);

        assert_eq!(forest.len(), 3);
        for stop in ["usb", "a", "b"] {
            assert_eq!(forest.find(stop), Some(stop));
        }
    }

    #[test]
    fn unknown_stop_has_no_root() {
        let mut forest = UnionFind::from_stops([1, 2]);

        assert_eq!(forest.find(3), None);
        assert!(!forest.union(1, 3));
        assert!(!forest.same(3, 3));
    }

    #[test]
    fn union_attaches_second_root_under_first() {
        let mut forest = UnionFind::from_stops([1, 2, 3]);

        assert!(forest.union(1, 2));
        assert_eq!(forest.find(2), Some(1));
        assert!(forest.same(1, 2));
        assert!(!forest.same(1, 3));
    }

    #[test]
    fn union_within_a_set_is_a_no_op() {
        let mut forest = UnionFind::from_stops([1, 2, 3]);
        forest.union(1, 2);
        forest.union(2, 3);

        assert!(!forest.union(3, 1));
        assert_eq!(forest.find(3), Some(1));
    }

    #[test]
    fn find_compresses_whole_path() {
        let mut forest = UnionFind::from_stops(0..5);
        // chain 0 <- 1 <- 2 <- 3 <- 4
        for stop in (1..5).rev() {
            forest.union(stop - 1, stop);
        }

        assert_eq!(forest.find(4), Some(0));
        for stop in 1..5 {
            assert_eq!(forest.parent[&stop], 0, "stop {stop} should point at the root");
        }
    }

    #[test]
    fn empty_forest() {
        let forest = UnionFind::<u32>::from_stops([]);

        assert!(forest.is_empty());
    }
}
