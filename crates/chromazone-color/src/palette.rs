//! Palette reduction
//!
//! Collapses the per-zone mean colors of a segmented drawing into a small
//! numbered palette by agglomerative clustering in CIE L*a*b* space.
//!
//! # Algorithm
//!
//! 1. Zones with bit-identical colors start in the same group, so exact
//!    duplicates are never distorted.
//! 2. While more than `max_colors` groups remain, the two groups whose
//!    representative colors are closest in L*a*b* are merged. The merged
//!    representative is the mean over every zone color in the group, each
//!    zone weighing 1.
//! 3. Surviving groups are numbered from 1 in their current order.

use crate::distance::distance_lab;
use crate::mean::weighted_mean;
use chromazone_core::Rgba;
use std::collections::HashMap;

/// One numbered color of the reduced palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// 1-based number painted into zones using this color
    pub number: u32,
    /// Representative color
    pub color: Rgba,
}

/// Reduced palette plus the zone -> entry assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    /// Distinct palette entries, numbered 1..=len
    pub entries: Vec<PaletteEntry>,
    /// Zone id -> index into `entries`
    pub zone_map: Vec<usize>,
}

impl ColorMap {
    /// Number of palette entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Palette entry assigned to `zone`, if the zone id is in range.
    pub fn entry_for_zone(&self, zone: usize) -> Option<&PaletteEntry> {
        self.zone_map.get(zone).and_then(|&i| self.entries.get(i))
    }
}

#[derive(Debug)]
struct ColorGroup {
    color: Rgba,
    zones: Vec<usize>,
}

/// Reduce per-zone colors to at most `max_colors` palette entries.
///
/// `max_colors == 0` disables merging: the palette then holds one entry
/// per distinct input color. An empty input yields an empty map.
///
/// # Arguments
///
/// * `zone_colors` - Mean color of each zone, indexed by zone id
/// * `max_colors` - Upper bound on palette size, 0 for unlimited
pub fn reduce_colors(zone_colors: &[Rgba], max_colors: usize) -> ColorMap {
    if zone_colors.is_empty() {
        return ColorMap::default();
    }

    let mut index: HashMap<Rgba, usize> = HashMap::new();
    let mut groups: Vec<ColorGroup> = Vec::new();
    for (zone, &color) in zone_colors.iter().enumerate() {
        match index.get(&color) {
            Some(&g) => groups[g].zones.push(zone),
            None => {
                index.insert(color, groups.len());
                groups.push(ColorGroup {
                    color,
                    zones: vec![zone],
                });
            }
        }
    }
    let distinct = groups.len();

    while max_colors > 0 && groups.len() > max_colors {
        let (keep, absorb) = closest_pair(&groups);
        let absorbed = groups.remove(absorb);
        let target = &mut groups[keep];
        target.zones.extend(absorbed.zones);

        let members: Vec<Rgba> = target.zones.iter().map(|&z| zone_colors[z]).collect();
        target.color = weighted_mean(&members, None);
    }

    log::debug!(
        "palette: {} zones, {} distinct colors, {} entries",
        zone_colors.len(),
        distinct,
        groups.len()
    );

    let mut zone_map = vec![0usize; zone_colors.len()];
    let entries = groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            for &z in &group.zones {
                zone_map[z] = i;
            }
            PaletteEntry {
                number: i as u32 + 1,
                color: group.color,
            }
        })
        .collect();

    ColorMap { entries, zone_map }
}

/// Indices `(i, j)` with `i < j` of the two closest groups. Ties go to the
/// first pair in ascending `(i, j)` order.
fn closest_pair(groups: &[ColorGroup]) -> (usize, usize) {
    let mut best = (0, 1);
    let mut best_dist = f64::MAX;
    for i in 0..groups.len() {
        for j in i + 1..groups.len() {
            let d = distance_lab(groups[i].color, groups[j].color);
            if d < best_dist {
                best_dist = d;
                best = (i, j);
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::rgb(255, 0, 0);
    const GREEN: Rgba = Rgba::rgb(0, 255, 0);
    const BLUE: Rgba = Rgba::rgb(0, 0, 255);

    #[test]
    fn test_empty_input() {
        let cm = reduce_colors(&[], 5);
        assert!(cm.is_empty());
        assert!(cm.zone_map.is_empty());
    }

    #[test]
    fn test_unlimited_keeps_distinct_colors() {
        let cm = reduce_colors(&[RED, GREEN, BLUE], 0);
        assert_eq!(cm.len(), 3);
        assert_eq!(cm.zone_map, vec![0, 1, 2]);
        let numbers: Vec<u32> = cm.entries.iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicates_grouped_exactly() {
        let cm = reduce_colors(&[RED, RED, BLUE, RED], 0);
        assert_eq!(cm.len(), 2);
        assert_eq!(cm.zone_map, vec![0, 0, 1, 0]);
        assert_eq!(cm.entries[0].color, RED);
        assert_eq!(cm.entries[1].color, BLUE);
    }

    #[test]
    fn test_merge_nearest_pairs() {
        let colors = [
            RED,
            Rgba::rgb(250, 0, 0),
            BLUE,
            Rgba::rgb(0, 0, 250),
            GREEN,
        ];
        let cm = reduce_colors(&colors, 3);
        assert_eq!(cm.len(), 3);
        assert_eq!(cm.zone_map[0], cm.zone_map[1]);
        assert_eq!(cm.zone_map[2], cm.zone_map[3]);
        assert_ne!(cm.zone_map[0], cm.zone_map[2]);
        assert_ne!(cm.zone_map[4], cm.zone_map[0]);
        assert_ne!(cm.zone_map[4], cm.zone_map[2]);
        assert_eq!(cm.entry_for_zone(4).map(|e| e.color), Some(GREEN));
    }

    #[test]
    fn test_merge_to_one() {
        let colors = [
            Rgba::rgb(100, 0, 0),
            Rgba::rgb(0, 100, 0),
            Rgba::rgb(0, 0, 100),
        ];
        let cm = reduce_colors(&colors, 1);
        assert_eq!(cm.len(), 1);
        assert!(cm.zone_map.iter().all(|&i| i == 0));
        assert_eq!(cm.entries[0].number, 1);
    }

    #[test]
    fn test_merged_color_weighs_every_zone() {
        // Two identical black zones and one grey zone: the merged mean is
        // taken over the three zones, not over the two groups.
        let cm = reduce_colors(&[Rgba::BLACK, Rgba::BLACK, Rgba::rgb(90, 90, 90)], 1);
        assert_eq!(cm.entries[0].color, Rgba::rgb(30, 30, 30));
    }

    #[test]
    fn test_max_colors_above_distinct() {
        let cm = reduce_colors(&[RED, GREEN], 10);
        assert_eq!(cm.len(), 2);
        assert_eq!(cm.entries[0].color, RED);
    }

    #[test]
    fn test_no_orphan_entries() {
        let colors: Vec<Rgba> = (0..40u8).map(|i| Rgba::rgb(i * 6, 255 - i * 6, i)).collect();
        let cm = reduce_colors(&colors, 7);
        assert_eq!(cm.len(), 7);
        for i in 0..cm.len() {
            assert!(cm.zone_map.contains(&i));
        }
    }
}
