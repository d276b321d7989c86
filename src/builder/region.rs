use super::qr::{Module, SymbolMatrix};
use crate::common::ec::codeword_blocks;
use crate::common::iter::EncRegionIter;
use crate::common::metadata::{ECLevel, Version};

// Rect
//------------------------------------------------------------------------------

/// Rectangle of modules, `x` counting columns and `y` rows from the top left.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { x, y, width, height }
    }

    /// Part of the rectangle inside a `size` x `size` grid.
    pub fn clip(self, size: usize) -> Self {
        let x = self.x.min(size);
        let y = self.y.min(size);
        let width = self.width.min(size - x);
        let height = self.height.min(size - y);
        Self { x, y, width, height }
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.x..self.x + self.width).contains(&x) && (self.y..self.y + self.height).contains(&y)
    }

    fn shifted(self, dx: i32, dy: i32) -> Option<Self> {
        let x = usize::try_from(self.x as i32 + dx).ok()?;
        let y = usize::try_from(self.y as i32 + dy).ok()?;
        Some(Self { x, y, ..self })
    }
}

// Reserved region
//------------------------------------------------------------------------------

/// Area withheld from data placement for an external overlay such as a logo.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReservedRegion {
    /// Fixed rectangle, clipped to the grid.
    Rect(Rect),
    /// Centred square with sides of the given percentage of the symbol width.
    Centered(u8),
}

impl ReservedRegion {
    /// Concrete rectangle for a symbol of version `ver`.
    pub fn resolve(self, ver: Version) -> Rect {
        let size = ver.width();
        match self {
            Self::Rect(rect) => rect.clip(size),
            Self::Centered(percent) => centered_placement(ver, percent),
        }
    }
}

// Odd side so the square sits on the centre module, nudged by up to 3 modules
// along each axis to cover as few function modules as possible
fn centered_placement(ver: Version, percent: u8) -> Rect {
    let size = ver.width();
    let mut side = (size * percent.min(100) as usize) / 100;
    if side & 1 == 0 {
        side += 1;
    }
    let side = side.min(size);
    let start = (size - side) / 2;
    let centred = Rect::new(start, start, side, side);

    let matrix = SymbolMatrix::with_function_patterns(ver);
    let overlap = |r: &Rect| {
        matrix.count_function_modules_in(r.x as i32, r.y as i32, r.width as i32, r.height as i32)
    };

    let mut best = centred;
    let mut min_overlap = overlap(&centred);
    for dx in -MAX_NUDGE..=MAX_NUDGE {
        for dy in -MAX_NUDGE..=MAX_NUDGE {
            let Some(cand) = centred.shifted(dx, dy) else {
                continue;
            };
            if cand.x + cand.width > size || cand.y + cand.height > size {
                continue;
            }
            let cand_overlap = overlap(&cand);
            if cand_overlap < min_overlap {
                min_overlap = cand_overlap;
                best = cand;
            }
        }
    }
    best
}

static MAX_NUDGE: i32 = 3;

// Level escalation
//------------------------------------------------------------------------------

/// Lowest level whose recovery covers the obscured share of the symbol with a
/// 1.5x margin, never below `requested`.
pub fn escalate_level(requested: ECLevel, region: Rect, ver: Version) -> ECLevel {
    let size = ver.width();
    let obscured = region.clip(size).area() as f64 / (size * size) as f64;
    let required = (obscured * SAFETY_MARGIN).min(ECLevel::H.recovery_ratio());

    let needed = if required > ECLevel::Q.recovery_ratio() {
        ECLevel::H
    } else if required > ECLevel::M.recovery_ratio() {
        ECLevel::Q
    } else if required > ECLevel::L.recovery_ratio() {
        ECLevel::M
    } else {
        ECLevel::L
    };
    requested.max(needed)
}

static SAFETY_MARGIN: f64 = 1.5;

/// Whether every block can still correct the codewords that `region` hides
/// from a symbol of version `ver` at `ecl`.
pub fn is_recoverable(region: Rect, ver: Version, ecl: ECLevel) -> bool {
    let limit = ver.correctable_codewords(ecl);
    hidden_codewords(region, ver, ecl).iter().all(|&n| n <= limit)
}

// Hidden codewords per block. A codeword counts once however many of its bits
// fall in the region; remainder bits belong to no codeword.
fn hidden_codewords(region: Rect, ver: Version, ecl: ECLevel) -> Vec<usize> {
    let region = region.clip(ver.width());
    let matrix = SymbolMatrix::with_function_patterns(ver);
    let blocks = codeword_blocks(ver, ecl);

    let mut hidden = vec![false; blocks.len()];
    let data_modules = EncRegionIter::new(ver)
        .filter(|&(x, y)| matches!(matrix.module(x, y), Some(Module::Empty)))
        .enumerate();
    for (i, (x, y)) in data_modules {
        if region.contains(x as usize, y as usize) {
            if let Some(h) = hidden.get_mut(i >> 3) {
                *h = true;
            }
        }
    }

    let block_count = blocks.iter().max().map_or(0, |&b| b + 1);
    let mut res = vec![0; block_count];
    for (&b, _) in blocks.iter().zip(&hidden).filter(|&(_, &h)| h) {
        res[b] += 1;
    }
    res
}
