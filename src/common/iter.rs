use super::metadata::Version;

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

/// Zigzag walk over every module outside the vertical timing column, yielding
/// `(x, y)`. Column pairs are visited right to left, alternating upward and
/// downward, with the right column of a pair first in each row.
pub struct EncRegionIter {
    x: i32,
    y: i32,
    width: i32,
    upward: bool,
    right: bool,
}

impl EncRegionIter {
    pub const fn new(version: Version) -> Self {
        let w = version.width() as i32;
        Self { x: w - 1, y: w - 1, width: w, upward: true, right: true }
    }

    fn next_column_pair(&mut self) {
        self.upward = !self.upward;
        self.x -= 2;
        if self.x == VERT_TIMING_COL {
            self.x -= 1;
        }
    }
}

impl Iterator for EncRegionIter {
    type Item = (i32, i32);
    fn next(&mut self) -> Option<Self::Item> {
        if self.x < 0 {
            return None;
        }
        let res = if self.right { (self.x, self.y) } else { (self.x - 1, self.y) };

        if self.right {
            self.right = false;
        } else {
            self.right = true;
            match self.upward {
                true if self.y > 0 => self.y -= 1,
                false if self.y < self.width - 1 => self.y += 1,
                _ => self.next_column_pair(),
            }
        }
        Some(res)
    }
}

static VERT_TIMING_COL: i32 = 6;
