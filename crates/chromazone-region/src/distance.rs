//! Distance-to-edge transform restricted to one zone
//!
//! A zone pixel is at distance 0 when any of its 4-neighbors lies outside
//! the zone (including outside the image). Distances then grow by one per
//! 4-connected step inward, computed by a multi-source breadth-first search
//! in O(zone size).

use chromazone_core::Point;
use std::collections::{HashMap, VecDeque};

/// Distance to the zone edge for each pixel of `pixels`, in the same order.
///
/// `pixels` must not contain duplicates.
pub fn edge_distances(pixels: &[Point]) -> Vec<u32> {
    let index: HashMap<Point, usize> = pixels.iter().enumerate().map(|(i, &p)| (p, i)).collect();
    let member = |p: Option<Point>| p.and_then(|p| index.get(&p).copied());

    let mut dist = vec![u32::MAX; pixels.len()];
    let mut queue = VecDeque::new();

    for (i, &p) in pixels.iter().enumerate() {
        if p.neighbors4().into_iter().any(|n| member(n).is_none()) {
            dist[i] = 0;
            queue.push_back(i);
        }
    }

    while let Some(i) = queue.pop_front() {
        let next = dist[i] + 1;
        for n in pixels[i].neighbors4() {
            if let Some(j) = member(n)
                && dist[j] == u32::MAX
            {
                dist[j] = next;
                queue.push_back(j);
            }
        }
    }

    dist
}
