//! Flood-fill segmentation
//!
//! Groups the non-boundary pixels of a [`BoundaryMap`] into 4-connected
//! zones. Pixels are scanned in row-major order; every unlabeled fill pixel
//! seeds a breadth-first fill that claims its whole zone before the scan
//! continues. Each pixel is visited once.

use crate::zone::Zone;
use chromazone_core::{BOUNDARY_LABEL, BoundaryMap, LabelGrid, Point};
use std::collections::VecDeque;

/// Zones plus the per-pixel label grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    /// Zones indexed by id
    pub zones: Vec<Zone>,
    /// Zone id of every pixel, [`BOUNDARY_LABEL`] on boundaries
    pub labels: LabelGrid,
}

impl Segmentation {
    /// Number of zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether no zone was found.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// Label every connected region of non-boundary pixels.
///
/// Zone ids are assigned from 0 in the order the scan first meets each
/// zone. Diagonal contact does not connect zones.
pub fn find_zones(boundary: &BoundaryMap) -> Segmentation {
    let w = boundary.width();
    let h = boundary.height();
    let mut labels = LabelGrid::new(w, h);
    let mut zones = Vec::new();
    let mut queue = VecDeque::new();

    for y in 0..h {
        for x in 0..w {
            if boundary.get(x, y) || !labels.is_unlabeled(x, y) {
                continue;
            }

            let id = zones.len();
            let label = id as i32;
            let mut pixels = Vec::new();
            labels.set(x, y, label);
            queue.push_back(Point::new(x, y));

            while let Some(p) = queue.pop_front() {
                pixels.push(p);
                for n in p.neighbors4().into_iter().flatten() {
                    if n.x >= w || n.y >= h {
                        continue;
                    }
                    if boundary.contains(n) || !labels.is_unlabeled(n.x, n.y) {
                        continue;
                    }
                    labels.set(n.x, n.y, label);
                    queue.push_back(n);
                }
            }

            zones.push(Zone { id, pixels });
        }
    }

    debug_assert!(
        labels.as_slice().iter().zip(boundary.as_slice()).all(|(&l, &b)| b == (l == BOUNDARY_LABEL))
    );
    log::debug!("segmentation: {} zones in {}x{}", zones.len(), w, h);
    Segmentation { zones, labels }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_from(rows: &[&str]) -> BoundaryMap {
        let h = rows.len() as u32;
        let w = rows.first().map_or(0, |r| r.len()) as u32;
        let data = rows.iter().flat_map(|r| r.bytes().map(|b| b == b'#')).collect();
        BoundaryMap::from_vec(w, h, data).unwrap()
    }

    #[test]
    fn test_single_zone() {
        let seg = find_zones(&BoundaryMap::new(4, 3));
        assert_eq!(seg.len(), 1);
        assert_eq!(seg.zones[0].len(), 12);
        assert_eq!(seg.zones[0].pixels[0], Point::new(0, 0));
    }

    #[test]
    fn test_cross_makes_four_quadrants() {
        let map = map_from(&["..#..", "..#..", "#####", "..#..", "..#.."]);
        let seg = find_zones(&map);
        assert_eq!(seg.len(), 4);
        for z in &seg.zones {
            assert_eq!(z.len(), 4);
        }
        let boundary = seg.labels.as_slice().iter().filter(|&&l| l == BOUNDARY_LABEL).count();
        assert_eq!(boundary, 9);
        assert_eq!(seg.labels.get(0, 0), 0);
        assert_eq!(seg.labels.get(4, 0), 1);
        assert_eq!(seg.labels.get(0, 4), 2);
        assert_eq!(seg.labels.get(4, 4), 3);
    }

    #[test]
    fn test_all_boundary() {
        let map = map_from(&["###", "###"]);
        let seg = find_zones(&map);
        assert!(seg.is_empty());
        assert!(seg.labels.as_slice().iter().all(|&l| l == BOUNDARY_LABEL));
    }

    #[test]
    fn test_diagonal_not_connected() {
        let map = map_from(&[".#", "#."]);
        let seg = find_zones(&map);
        assert_eq!(seg.len(), 2);
        assert_eq!(seg.labels.get(0, 0), 0);
        assert_eq!(seg.labels.get(1, 1), 1);
    }

    #[test]
    fn test_concave_zone_is_one() {
        let map = map_from(&[".....", ".###.", ".#.#.", ".#.#."]);
        let seg = find_zones(&map);
        assert_eq!(seg.len(), 2);
        assert_eq!(seg.zones[0].len(), 11);
        assert_eq!(seg.zones[1].pixels, vec![Point::new(2, 2), Point::new(2, 3)]);
    }

    #[test]
    fn test_empty_map() {
        let seg = find_zones(&BoundaryMap::new(0, 0));
        assert!(seg.is_empty());
    }
}
