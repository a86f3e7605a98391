use std::collections::BTreeSet;

use itertools::Itertools;
use polya_count::solution;

// Counts orbits directly: canonicalise every coloring as the smallest image
// under all row and column permutations.
fn brute_force(width: usize, height: usize, size: u8) -> usize {
    let cells = width * height;
    let row_perms: Vec<Vec<usize>> = (0..height).permutations(height).collect();
    let col_perms: Vec<Vec<usize>> = (0..width).permutations(width).collect();
    let mut seen = BTreeSet::new();
    let mut coloring = vec![0u8; cells];
    loop {
        let mut best: Option<Vec<u8>> = None;
        for rows in &row_perms {
            for cols in &col_perms {
                let mut image = vec![0u8; cells];
                for r in 0..height {
                    for c in 0..width {
                        image[rows[r] * width + cols[c]] = coloring[r * width + c];
                    }
                }
                if best.as_ref().map_or(true, |b| image < *b) {
                    best = Some(image);
                }
            }
        }
        seen.extend(best);

        // advance the base-`size` counter
        let mut idx = 0;
        while idx < cells {
            coloring[idx] += 1;
            if coloring[idx] < size {
                break;
            }
            coloring[idx] = 0;
            idx += 1;
        }
        if idx == cells {
            break;
        }
    }
    seen.len()
}

#[test]
fn matches_direct_enumeration_on_small_grids() {
    let cases = [
        (1, 1, 3),
        (1, 3, 3),
        (2, 2, 2),
        (2, 2, 3),
        (2, 3, 2),
        (2, 3, 4),
        (3, 3, 2),
        (3, 3, 3),
        (2, 4, 2),
        (4, 3, 2),
    ];
    for (width, height, size) in cases {
        let expected = brute_force(width, height, size);
        let actual = solution(width as i64, height as i64, i64::from(size)).unwrap();
        assert_eq!(actual, expected.to_string(), "{width}x{height} with {size} colors");
    }
}
