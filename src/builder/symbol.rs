use super::qr::SymbolMatrix;
use crate::common::codec::Mode;
use crate::common::mask::MaskPattern;
use crate::common::metadata::{ECLevel, Version};

/// Finished symbol. Produced only by a successful build and never mutated
/// afterwards; renderers read it through the accessors below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QRSymbol {
    version: Version,
    ec_level: ECLevel,
    mode: Mode,
    mask: MaskPattern,
    matrix: SymbolMatrix,
}

impl QRSymbol {
    pub(crate) fn new(
        ec_level: ECLevel,
        mode: Mode,
        mask: MaskPattern,
        matrix: SymbolMatrix,
    ) -> Self {
        Self { version: matrix.version(), ec_level, mode, mask, matrix }
    }

    /// Modules per side, `17 + 4 * version`.
    pub fn size(&self) -> usize {
        self.matrix.width()
    }

    /// Whether the module at column `x`, row `y` is dark. Outside the grid reads light.
    pub fn module_at(&self, x: usize, y: usize) -> bool {
        let size = self.size();
        x < size && y < size && self.matrix.get(x as i32, y as i32)
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Level the symbol was encoded at, which may exceed the requested level
    /// when a region was reserved.
    pub fn level(&self) -> ECLevel {
        self.ec_level
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    /// Light border in modules that renderers must leave around the symbol.
    pub fn quiet_zone(&self) -> usize {
        QUIET_ZONE
    }

    /// Whether `(x, y)` lies in one of the three 7x7 finder patterns.
    pub fn is_finder(&self, x: usize, y: usize) -> bool {
        let size = self.size();
        x < size && y < size && self.matrix.is_finder(x as i32, y as i32)
    }

    pub fn dark_modules(&self) -> usize {
        self.matrix.count_dark_modules()
    }

    /// Row major copy of the grid, `true` for dark.
    pub fn to_bools(&self) -> Vec<bool> {
        self.matrix.to_bools()
    }
}

static QUIET_ZONE: usize = 4;
