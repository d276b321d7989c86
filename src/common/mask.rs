use std::ops::Deref;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use super::metadata::ECLevel;
use crate::builder::SymbolMatrix;

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub fn new(pattern: u8) -> Self {
        debug_assert!(pattern < 8, "Invalid masking pattern");
        Self(pattern & 7)
    }

    pub fn all() -> impl Iterator<Item = MaskPattern> {
        (0..8).map(MaskPattern)
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// x is the column and y the row
mod mask_functions {
    pub fn checkerboard(x: i32, y: i32) -> bool {
        (x + y) & 1 == 0
    }

    pub fn horizontal_lines(_: i32, y: i32) -> bool {
        y & 1 == 0
    }

    pub fn vertical_lines(x: i32, _: i32) -> bool {
        x % 3 == 0
    }

    pub fn diagonal_lines(x: i32, y: i32) -> bool {
        (x + y) % 3 == 0
    }

    pub fn large_checkerboard(x: i32, y: i32) -> bool {
        ((y >> 1) + (x / 3)) & 1 == 0
    }

    pub fn fields(x: i32, y: i32) -> bool {
        ((x * y) & 1) + ((x * y) % 3) == 0
    }

    pub fn diamonds(x: i32, y: i32) -> bool {
        (((x * y) & 1) + ((x * y) % 3)) & 1 == 0
    }

    pub fn meadow(x: i32, y: i32) -> bool {
        (((x + y) & 1) + ((x * y) % 3)) & 1 == 0
    }
}

impl MaskPattern {
    pub fn mask_function(self) -> fn(i32, i32) -> bool {
        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            _ => mask_functions::meadow,
        }
    }
}

#[cfg(test)]
mod mask_function_tests {
    use test_case::test_case;

    use super::MaskPattern;

    // Top left 6x6 corner of each pattern, rows top to bottom, '#' where the mask flips
    #[test_case(0, ["#.#.#.", ".#.#.#", "#.#.#.", ".#.#.#", "#.#.#.", ".#.#.#"])]
    #[test_case(1, ["######", "......", "######", "......", "######", "......"])]
    #[test_case(2, ["#..#..", "#..#..", "#..#..", "#..#..", "#..#..", "#..#.."])]
    #[test_case(3, ["#..#..", "..#..#", ".#..#.", "#..#..", "..#..#", ".#..#."])]
    #[test_case(4, ["###...", "###...", "...###", "...###", "###...", "###..."])]
    #[test_case(5, ["######", "#.....", "#..#..", "#.#.#.", "#..#..", "#....."])]
    #[test_case(6, ["######", "###...", "##.##.", "#.#.#.", "#.##.#", "#...##"])]
    #[test_case(7, ["#.#.#.", "...###", "#...##", ".#.#.#", "###...", ".###.."])]
    fn test_mask_function(pattern: u8, exp: [&str; 6]) {
        let mask_fn = MaskPattern::new(pattern).mask_function();
        for (y, row) in exp.iter().enumerate() {
            let got: String =
                (0..6).map(|x| if mask_fn(x, y as i32) { '#' } else { '.' }).collect();
            assert_eq!(&got, row, "Pattern {pattern} row {y}");
        }
    }
}

// Mask selection
//------------------------------------------------------------------------------

/// Copy of `matrix` with every data module flipped where the pattern holds.
pub fn apply_mask(matrix: &SymbolMatrix, pattern: MaskPattern) -> SymbolMatrix {
    let mut masked = matrix.clone();
    masked.mask_data(pattern);
    masked
}

fn evaluate(matrix: &SymbolMatrix, ecl: ECLevel, pattern: MaskPattern) -> (u32, SymbolMatrix) {
    let mut masked = apply_mask(matrix, pattern);
    masked.add_format_info(ecl, pattern);
    let pen = compute_total_penalty(&masked);
    trace!(mask = *pattern, penalty = pen, "Evaluated mask");
    (pen, masked)
}

/// Tries all 8 patterns and keeps the lowest penalty, the lowest pattern winning
/// ties. The returned matrix carries the format info of the chosen pattern.
pub fn select_best(matrix: &SymbolMatrix, ecl: ECLevel) -> (SymbolMatrix, MaskPattern) {
    #[cfg(feature = "parallel")]
    let candidates: Vec<_> = (0..8u8)
        .into_par_iter()
        .map(|m| {
            let pattern = MaskPattern::new(m);
            let (pen, masked) = evaluate(matrix, ecl, pattern);
            (pen, pattern, masked)
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let candidates: Vec<_> = MaskPattern::all()
        .map(|pattern| {
            let (pen, masked) = evaluate(matrix, ecl, pattern);
            (pen, pattern, masked)
        })
        .collect();

    let mut best: Option<(u32, MaskPattern, SymbolMatrix)> = None;
    for cand in candidates {
        if best.as_ref().map_or(true, |b| (cand.0, cand.1) < (b.0, b.1)) {
            best = Some(cand);
        }
    }

    match best {
        Some((_, pattern, masked)) => (masked, pattern),
        None => unreachable!("Eight candidates are always evaluated"),
    }
}

// Penalty
//------------------------------------------------------------------------------

pub fn compute_total_penalty(matrix: &SymbolMatrix) -> u32 {
    let adj_pen = compute_adjacent_penalty(matrix);
    let blk_pen = compute_block_penalty(matrix);
    let fp_pen = compute_finder_pattern_penalty(matrix);
    let bal_pen = compute_balance_penalty(matrix);
    adj_pen + blk_pen + fp_pen + bal_pen
}

// Runs of 5 or more same colored modules in a row or column add run length - 2
fn compute_adjacent_penalty(matrix: &SymbolMatrix) -> u32 {
    let w = matrix.width() as i32;
    let run_pen = |run: u32| if run >= 5 { run - 2 } else { 0 };

    let mut pen = 0;
    for i in 0..w {
        let (mut row_run, mut col_run) = (1, 1);
        for j in 1..w {
            if matrix.get(j, i) == matrix.get(j - 1, i) {
                row_run += 1;
            } else {
                pen += run_pen(row_run);
                row_run = 1;
            }
            if matrix.get(i, j) == matrix.get(i, j - 1) {
                col_run += 1;
            } else {
                pen += run_pen(col_run);
                col_run = 1;
            }
        }
        pen += run_pen(row_run) + run_pen(col_run);
    }
    pen
}

fn compute_block_penalty(matrix: &SymbolMatrix) -> u32 {
    let mut pen = 0;
    let w = matrix.width() as i32;
    for y in 0..w - 1 {
        for x in 0..w - 1 {
            let clr = matrix.get(x, y);
            if clr == matrix.get(x + 1, y)
                && clr == matrix.get(x, y + 1)
                && clr == matrix.get(x + 1, y + 1)
            {
                pen += 3;
            }
        }
    }
    pen
}

// 1:1:3:1:1 finder lookalike with 4 light modules on either side, scanned along rows
fn compute_finder_pattern_penalty(matrix: &SymbolMatrix) -> u32 {
    static LEADING: [bool; 11] =
        [false, false, false, false, true, false, true, true, true, false, true];
    static TRAILING: [bool; 11] =
        [true, false, true, true, true, false, true, false, false, false, false];

    let mut pen = 0;
    let w = matrix.width() as i32;
    for y in 0..w {
        for x in 0..=w - 11 {
            let window = (x..x + 11).map(|i| matrix.get(i, y));
            if window.clone().eq(LEADING.iter().copied()) {
                pen += 40;
            }
            if window.eq(TRAILING.iter().copied()) {
                pen += 40;
            }
        }
    }
    pen
}

// 10 points for every full 5% step the dark ratio strays from 50%
fn compute_balance_penalty(matrix: &SymbolMatrix) -> u32 {
    let w = matrix.width();
    let dark_pct = (matrix.count_dark_modules() * 100 / (w * w)) as i64;
    ((dark_pct - 50).unsigned_abs() / 5 * 10) as u32
}
