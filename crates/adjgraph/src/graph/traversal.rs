//! Reachability, path search, cycle detection and cascade removal.
//!
//! Every algorithm here runs on an explicit stack or queue with a visited
//! set, so stack usage does not grow with graph depth.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::numeric::ArithmeticNumber;

use super::engine::Graph;
use super::policy::{Direction, Weighting};
use super::types::{VertexId, VertexValue};

/// Outcome of [`Graph::search_path`].
///
/// `distance` is the hop count of `path`, or the accumulator's negative
/// not-found sentinel (with an empty `path`) when no path was found.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSearch<T, N> {
    /// Number of hops, or `N::not_found()`.
    pub distance: N,
    /// Vertex values from tail to head, both included.
    pub path: Vec<T>,
}

impl<T, N: ArithmeticNumber> PathSearch<T, N> {
    fn not_found() -> Self {
        Self {
            distance: N::not_found(),
            path: Vec::new(),
        }
    }

    /// Returns `true` if a path was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.distance.is_found()
    }
}

impl<T: VertexValue, D: Direction, W: Weighting> Graph<T, D, W> {
    /// Returns `true` if `head` is reachable from `tail` in one or more hops.
    ///
    /// Always `false` if either vertex is absent or `tail == head`.
    #[must_use]
    pub fn exist_path(&self, tail: &T, head: &T) -> bool {
        let (Some(start), Some(target)) = (self.id_of(tail), self.id_of(head)) else {
            return false;
        };
        if start == target {
            return false;
        }

        let mut visited = FxHashSet::default();
        visited.insert(start);
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            for next in self.vertex_by_id(current).adjacents() {
                if next == target {
                    return true;
                }
                if visited.insert(next) {
                    stack.push(next);
                }
            }
        }

        tracing::trace!(tail = ?tail, head = ?head, visited = visited.len(), "No path found");
        false
    }

    /// Returns `true` if a walk of exactly `length` hops leads from `tail` to `head`.
    ///
    /// Walks may revisit vertices. `length == 1` is plain adjacency. The
    /// search expands the set of vertices reachable in exactly `k` hops, one
    /// level at a time, so cost grows with `length · E` rather than
    /// exponentially. Always `false` if either vertex is absent,
    /// `tail == head`, `length == 0`, or `length` exceeds
    /// `limits.max_walk_length`.
    #[must_use]
    pub fn exist_path_with_length(&self, tail: &T, head: &T, length: usize) -> bool {
        let (Some(start), Some(target)) = (self.id_of(tail), self.id_of(head)) else {
            return false;
        };
        if start == target || length == 0 {
            return false;
        }
        if let Some(max) = self.limits.max_walk_length {
            if length > max {
                tracing::warn!(
                    length,
                    max_walk_length = max,
                    "Walk length exceeds configured limit"
                );
                return false;
            }
        }

        let mut frontier: FxHashSet<VertexId> = FxHashSet::default();
        frontier.insert(start);
        for _ in 1..length {
            let next: FxHashSet<VertexId> = frontier
                .iter()
                .flat_map(|&id| self.vertex_by_id(id).adjacents())
                .collect();
            if next.is_empty() {
                return false;
            }
            frontier = next;
        }

        frontier
            .iter()
            .any(|&id| self.vertex_by_id(id).is_adjacent(target))
    }

    /// Depth-first backtracking search for *a* path from `tail` to `head`.
    ///
    /// The result is the first path found in link order together with its
    /// hop count; it is not necessarily the shortest one (see
    /// [`Graph::shortest_path`]). `tail == head` yields distance 0 and a
    /// single-vertex path. Vertices explored on an abandoned branch are not
    /// revisited. Branches longer than `N` can count are not descended; if
    /// that hides the target, the minimum-hop path is returned instead, and
    /// a target whose minimum hop count does not fit in `N` is reported as
    /// not found.
    #[must_use]
    pub fn search_path<N: ArithmeticNumber>(&self, tail: &T, head: &T) -> PathSearch<T, N> {
        let (Some(start), Some(target)) = (self.id_of(tail), self.id_of(head)) else {
            return PathSearch::not_found();
        };
        if start == target {
            return PathSearch {
                distance: N::zero(),
                path: vec![tail.clone()],
            };
        }
        if self.vertex_by_id(start).is_adjacent(target) {
            return PathSearch {
                distance: N::one(),
                path: vec![tail.clone(), head.clone()],
            };
        }

        let mut visited = FxHashSet::default();
        visited.insert(start);
        // (vertex, index of the next link to try)
        let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];
        // hops from `start` to the vertex on top of the stack
        let mut distance = N::zero();
        let mut truncated = false;

        while let Some(&(current, cursor)) = stack.last() {
            let links = self.vertex_by_id(current).links();
            let candidate = links
                .iter()
                .enumerate()
                .skip(cursor)
                .find(|(_, link)| !visited.contains(&link.head))
                .map(|(i, link)| (i, link.head));

            let Some((index, next)) = candidate else {
                stack.pop();
                if !stack.is_empty() {
                    distance.decrement();
                }
                continue;
            };

            if let Some(top) = stack.last_mut() {
                top.1 = index + 1;
            }
            // branches deeper than `N` can count are not descended
            let Some(through_next) = distance.checked_sum(N::one()) else {
                truncated = true;
                continue;
            };

            if self.vertex_by_id(next).is_adjacent(target) {
                let Some(total) = through_next.checked_sum(N::one()) else {
                    truncated = true;
                    continue;
                };
                let path = stack
                    .iter()
                    .map(|&(id, _)| id)
                    .chain([next, target])
                    .map(|id| self.info_of(id).clone())
                    .collect();
                return PathSearch {
                    distance: total,
                    path,
                };
            }
            visited.insert(next);
            distance = through_next;
            stack.push((next, 0));
        }

        if truncated {
            return self.counted_shortest_path(tail, head);
        }
        tracing::trace!(tail = ?tail, head = ?head, visited = visited.len(), "Path search exhausted");
        PathSearch::not_found()
    }

    /// Breadth-first minimum-hop path from `tail` to `head`, endpoints included.
    ///
    /// Returns `None` if either vertex is absent or `head` is unreachable;
    /// `tail == head` yields a single-vertex path.
    #[must_use]
    pub fn shortest_path(&self, tail: &T, head: &T) -> Option<Vec<T>> {
        let start = self.id_of(tail)?;
        let target = self.id_of(head)?;
        if start == target {
            return Some(vec![tail.clone()]);
        }

        // child -> parent on one shortest path
        let mut parents: FxHashMap<VertexId, VertexId> = FxHashMap::default();
        let mut queue = VecDeque::new();
        parents.insert(start, start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for next in self.vertex_by_id(current).adjacents() {
                if parents.contains_key(&next) {
                    continue;
                }
                parents.insert(next, current);
                if next == target {
                    return Some(self.reconstruct(&parents, start, target));
                }
                queue.push_back(next);
            }
        }
        None
    }

    /// Returns `true` if the graph contains a cycle.
    ///
    /// Directed: some vertex can walk back to itself. Undirected: a
    /// depth-first walk reaches an already visited vertex through an edge
    /// other than the one leading back to its immediate parent.
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        if D::DIRECTED {
            self.vertices.keys().any(|&id| self.returns_to(id))
        } else {
            self.has_undirected_cycle()
        }
    }

    /// Removes `info` together with every vertex reachable from it.
    ///
    /// Returns the removed values in depth-first discovery order (empty if
    /// `info` is absent).
    pub fn remove_vertex_cascade(&mut self, info: &T) -> Vec<T> {
        let Some(start) = self.id_of(info) else {
            return Vec::new();
        };

        let selected: Vec<T> = self
            .closure(start)
            .into_iter()
            .map(|id| self.info_of(id).clone())
            .collect();
        for value in &selected {
            self.remove_vertex(value);
        }

        tracing::debug!(vertex = ?info, removed = selected.len(), "Cascade removal");
        selected
    }

    /// Fallback for [`Graph::search_path`] once a branch was cut short by
    /// the accumulator range: the BFS path, if its hop count fits in `N`.
    fn counted_shortest_path<N: ArithmeticNumber>(
        &self,
        tail: &T,
        head: &T,
    ) -> PathSearch<T, N> {
        let Some(path) = self.shortest_path(tail, head) else {
            return PathSearch::not_found();
        };
        let mut distance = N::zero();
        for _ in 1..path.len() {
            if !distance.try_increment() {
                tracing::warn!(
                    tail = ?tail,
                    head = ?head,
                    hops = path.len() - 1,
                    accumulator = std::any::type_name::<N>(),
                    "Path length exceeds accumulator range"
                );
                return PathSearch::not_found();
            }
        }
        PathSearch { distance, path }
    }

    /// Every vertex reachable from `start` (itself included), in pre-order.
    fn closure(&self, start: VertexId) -> Vec<VertexId> {
        let mut seen = FxHashSet::default();
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            order.push(id);
            let links = self.vertex_by_id(id).links();
            stack.extend(
                links
                    .iter()
                    .rev()
                    .map(|link| link.head)
                    .filter(|head| !seen.contains(head)),
            );
        }
        order
    }

    /// Directed cycle check for one origin: can `origin` be reached again?
    fn returns_to(&self, origin: VertexId) -> bool {
        let mut visited = FxHashSet::default();
        let mut stack: Vec<VertexId> = self.vertex_by_id(origin).adjacents().collect();

        while let Some(current) = stack.pop() {
            if current == origin {
                return true;
            }
            if visited.insert(current) {
                stack.extend(self.vertex_by_id(current).adjacents());
            }
        }
        false
    }

    fn has_undirected_cycle(&self) -> bool {
        let mut visited = FxHashSet::default();

        for &root in self.vertices.keys() {
            if visited.contains(&root) {
                continue;
            }
            // (vertex, parent it was reached from)
            let mut stack: Vec<(VertexId, Option<VertexId>)> = vec![(root, None)];
            while let Some((current, parent)) = stack.pop() {
                if !visited.insert(current) {
                    return true;
                }
                for next in self.vertex_by_id(current).adjacents() {
                    if Some(next) != parent {
                        stack.push((next, Some(current)));
                    }
                }
            }
        }
        false
    }

    fn reconstruct(
        &self,
        parents: &FxHashMap<VertexId, VertexId>,
        start: VertexId,
        target: VertexId,
    ) -> Vec<T> {
        let mut path = vec![self.info_of(target).clone()];
        let mut current = target;
        while current != start {
            let Some(&parent) = parents.get(&current) else {
                break;
            };
            path.push(self.info_of(parent).clone());
            current = parent;
        }
        path.reverse();
        path
    }
}
