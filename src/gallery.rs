//! Gallery item collection, category filtering, and the lightbox cursor
//! arithmetic. The item list is static; the filtered subset is recomputed on
//! every filter action.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    Factory,
    Machinery,
    Mining,
    Products,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Factory,
        Category::Machinery,
        Category::Mining,
        Category::Products,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Factory => "Factory",
            Category::Machinery => "Machinery",
            Category::Mining => "Mining",
            Category::Products => "Products",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(c) => c == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(c) => c.label(),
        }
    }

    /// Stable fragment for element keys so a filter change remounts the
    /// grid items and replays their entry animation.
    pub fn key(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(c) => c.label(),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct GalleryItem {
    pub category: Category,
    /// Path below the asset base, see `config::asset_base`.
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static ITEMS: &[GalleryItem] = &[
    GalleryItem {
        category: Category::Factory,
        image: "2020/09/Factory_wide.jpg",
        title: "Processing Plant",
        description: "Our primary processing facility in Haldwani, Uttarakhand.",
    },
    GalleryItem {
        category: Category::Factory,
        image: "2020/09/finallaboutuscollage-1-1170x760.jpg",
        title: "Plant Floor",
        description: "Grinding and classification lines during a production run.",
    },
    GalleryItem {
        category: Category::Machinery,
        image: "2020/09/machine.jpg",
        title: "Micronizing Mill",
        description: "Air-classifier mill producing sub-10-micron talc powder.",
    },
    GalleryItem {
        category: Category::Machinery,
        image: "2020/09/macbull.jpg",
        title: "Heavy Equipment",
        description: "Loaders moving crushed ore to the milling section.",
    },
    GalleryItem {
        category: Category::Mining,
        image: "2020/08/mineworking.jpg",
        title: "Mine Working",
        description: "Open-cast soapstone extraction at our captive mine.",
    },
    GalleryItem {
        category: Category::Mining,
        image: "2020/08/orebody.jpg",
        title: "Ore Body",
        description: "High-purity talc seam before extraction.",
    },
    GalleryItem {
        category: Category::Products,
        image: "2020/09/powder-grades.jpg",
        title: "Powder Grades",
        description: "Finished talc grades sampled for whiteness testing.",
    },
    GalleryItem {
        category: Category::Products,
        image: "2020/09/packing-line.jpg",
        title: "Packing Line",
        description: "25 kg and jumbo bag packing ahead of dispatch.",
    },
    GalleryItem {
        category: Category::Products,
        image: "2020/09/dispatch.jpg",
        title: "Dispatch Yard",
        description: "Palletized consignments ready for export.",
    },
];

/// Ordered indices of the items the given filter keeps visible.
pub fn visible_indices(items: &[GalleryItem], filter: Filter) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.matches(item.category))
        .map(|(i, _)| i)
        .collect()
}

/// Moves the lightbox cursor by `delta`, wrapping at both ends. `len` must
/// be non-zero; the lightbox is never open over an empty filtered set.
pub fn step(cursor: usize, len: usize, delta: i32) -> usize {
    debug_assert!(len > 0);
    (cursor as i32 + delta).rem_euclid(len as i32) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<GalleryItem> {
        let mk = |category| GalleryItem {
            category,
            image: "x.jpg",
            title: "t",
            description: "d",
        };
        vec![
            mk(Category::Factory),
            mk(Category::Mining),
            mk(Category::Factory),
            mk(Category::Products),
            mk(Category::Machinery),
        ]
    }

    #[test]
    fn filter_keeps_exactly_the_matching_items() {
        let items = fixture();
        assert_eq!(
            visible_indices(&items, Filter::Only(Category::Factory)),
            vec![0, 2]
        );
        assert_eq!(
            visible_indices(&items, Filter::Only(Category::Mining)),
            vec![1]
        );
    }

    #[test]
    fn all_filter_shows_every_item() {
        let items = fixture();
        assert_eq!(visible_indices(&items, Filter::All).len(), items.len());
    }

    #[test]
    fn cursor_wraps_at_both_ends() {
        assert_eq!(step(0, 5, -1), 4);
        assert_eq!(step(4, 5, 1), 0);
        assert_eq!(step(2, 5, 1), 3);
        assert_eq!(step(0, 1, -1), 0);
    }

    #[test]
    fn repeated_steps_traverse_and_wrap_the_whole_set() {
        // Each move starts from the cursor the previous move produced, so
        // holding an arrow key walks every item, not just the neighbors of
        // the opening position.
        let mut cursor = 0;
        let mut seen = vec![cursor];
        for _ in 0..3 {
            cursor = step(cursor, 4, -1);
            seen.push(cursor);
        }
        assert_eq!(seen, vec![0, 3, 2, 1]);
        assert_eq!(step(cursor, 4, -1), 0);

        let forward: Vec<usize> = (0..8).scan(0, |c, _| {
            *c = step(*c, 4, 1);
            Some(*c)
        }).collect();
        assert_eq!(forward, vec![1, 2, 3, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn every_static_item_is_reachable_through_some_filter() {
        let by_category: usize = Category::ALL
            .iter()
            .map(|&c| visible_indices(ITEMS, Filter::Only(c)).len())
            .sum();
        assert_eq!(by_category, ITEMS.len());
    }
}
