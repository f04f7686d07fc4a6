// Copyright 2025 the Quadfa Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Quadfa Index: insert, query both ways, remove, and inspect the partition.

use quadfa_index::{Bound, QuadTree};

type Tree = QuadTree<(Bound, &'static str), 3>;

fn names(tree: &Tree, region: Bound) -> Vec<&'static str> {
    tree.query_overlap(region)
        .into_iter()
        .filter_map(|h| tree.get(h).map(|(_, name)| *name))
        .collect()
}

fn main() -> Result<(), quadfa_index::Error> {
    let outer = Bound::from_xywh(0, 0, 100, 100)?;
    let mut tree: Tree = QuadTree::new(outer);
    tree.insert((Bound::from_xywh(0, 0, 10, 10)?, "A"))?;
    tree.insert((Bound::from_xywh(90, 90, 10, 10)?, "B"))?;
    tree.insert((Bound::from_xywh(40, 40, 20, 20)?, "C"))?;

    // Query overlapping the center
    println!("overlap center: {:?}", names(&tree, Bound::from_xywh(45, 45, 10, 10)?));

    // Query fully contained in the top-left quarter
    let quarter = Bound::from_xywh(0, 0, 50, 50)?;
    let inside: Vec<_> = tree
        .query_contain(quarter)
        .into_iter()
        .filter_map(|h| tree.get(h))
        .collect();
    println!("contained in {quarter}: {inside:?}");

    // Remove everything touching the quarter
    let removed = tree.remove_overlap(quarter);
    println!("removed {removed}, left: {:?}", names(&tree, outer));

    for bound in tree.bounds() {
        println!("node {bound}");
    }

    if let Err(err) = tree.insert((Bound::from_xywh(95, 95, 10, 10)?, "D")) {
        println!("rejected: {err}");
    }
    Ok(())
}
