//! Breadth-first path analysis over a world's room graph.
//!
//! Pure read-only helpers behind the `route` and `check` tooling. Exits
//! are directed, so reachability is not symmetric.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::direction::Direction;
use crate::world::{RoomId, World};

/// Shortest path from `from` to `to`, inclusive of both ends.
///
/// Returns `None` when `to` cannot be reached. A room trivially reaches
/// itself.
pub fn shortest_path(world: &World, from: RoomId, to: RoomId) -> Option<Vec<RoomId>> {
    if from == to {
        return Some(vec![from]);
    }
    let mut prev: HashMap<RoomId, RoomId> = HashMap::new();
    let mut queue = VecDeque::from([from]);
    while let Some(node) = queue.pop_front() {
        for (_, neighbor) in world.room(node).exits() {
            if neighbor != from && !prev.contains_key(&neighbor) {
                prev.insert(neighbor, node);
                if neighbor == to {
                    return Some(rebuild(&prev, from, to));
                }
                queue.push_back(neighbor);
            }
        }
    }
    None
}

/// Every room reachable from `from`, in breadth-first order, starting
/// with `from` itself.
pub fn reachable(world: &World, from: RoomId) -> Vec<RoomId> {
    let mut seen = HashSet::from([from]);
    let mut order = Vec::new();
    let mut queue = VecDeque::from([from]);
    while let Some(node) = queue.pop_front() {
        order.push(node);
        for (_, neighbor) in world.room(node).exits() {
            if seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    order
}

/// Paths to all nearest rooms still holding an item.
///
/// Walks outward level by level and stops at the first distance where any
/// item turns up, returning one path per room at that distance. Collected
/// items no longer count, since taking an item clears its room. Empty when
/// nothing is left to find.
pub fn nearest_items(world: &World, from: RoomId) -> Vec<Vec<RoomId>> {
    let mut prev: HashMap<RoomId, RoomId> = HashMap::new();
    let mut seen = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);
    while !queue.is_empty() {
        let mut found = Vec::new();
        for _ in 0..queue.len() {
            let Some(node) = queue.pop_front() else { break };
            if world.room(node).item().is_some() {
                found.push(node);
            }
            for (_, neighbor) in world.room(node).exits() {
                if seen.insert(neighbor) {
                    prev.insert(neighbor, node);
                    queue.push_back(neighbor);
                }
            }
        }
        if !found.is_empty() {
            return found.iter().map(|&n| rebuild(&prev, from, n)).collect();
        }
    }
    Vec::new()
}

/// The directions taken along a path, one per hop.
pub fn directions(world: &World, path: &[RoomId]) -> Vec<Direction> {
    path.windows(2)
        .filter_map(|pair| {
            world
                .room(pair[0])
                .exits()
                .find(|&(_, target)| target == pair[1])
                .map(|(d, _)| d)
        })
        .collect()
}

fn rebuild(prev: &HashMap<RoomId, RoomId>, from: RoomId, to: RoomId) -> Vec<RoomId> {
    let mut path = vec![to];
    let mut cur = to;
    while cur != from {
        match prev.get(&cur) {
            Some(&p) => {
                path.push(p);
                cur = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
