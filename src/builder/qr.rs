use std::ops::Deref;

use crate::common::bit_utils::BitStream;
use crate::common::iter::EncRegionIter;
use crate::common::mask::MaskPattern;
use crate::common::metadata::{
    Color, ECLevel, Version, FORMAT_INFO_BIT_LEN, VERSION_INFO_BIT_LEN,
};
use crate::common::version_db::{FORMAT_INFO_COORDS_MAIN, FORMAT_INFO_COORDS_SIDE};

/// Module kind doubles as the reserved mask: everything except `Empty` and
/// `Data` is off limits to placement and masking.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Version(Color),
    Format(Color),
    Region(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
            Module::Version(c) => c,
            Module::Format(c) => c,
            Module::Region(c) => c,
            Module::Data(c) => c,
        }
    }
}

impl Module {
    pub fn is_reserved(self) -> bool {
        !matches!(self, Module::Empty | Module::Data(_))
    }

    // Structural modules, i.e. reserved by the symbol layout rather than by a caller
    pub fn is_function(self) -> bool {
        matches!(self, Module::Func(_) | Module::Version(_) | Module::Format(_))
    }

    fn with_color(self, clr: Color) -> Self {
        match self {
            Module::Empty | Module::Data(_) => Module::Data(clr),
            Module::Func(_) => Module::Func(clr),
            Module::Version(_) => Module::Version(clr),
            Module::Format(_) => Module::Format(clr),
            Module::Region(_) => Module::Region(clr),
        }
    }
}

/// Square module grid for one version, addressed by column `x` and row `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMatrix {
    grid: Vec<Module>,
    w: usize,
    ver: Version,
}

// Grid access
//------------------------------------------------------------------------------

impl SymbolMatrix {
    pub fn new(ver: Version) -> Self {
        let w = ver.width();
        Self { grid: vec![Module::Empty; w * w], w, ver }
    }

    /// Blank matrix with every structural pattern drawn and the format area reserved.
    pub fn with_function_patterns(ver: Version) -> Self {
        let mut matrix = Self::new(ver);
        matrix.draw_all_function_patterns();
        matrix.reserve_format_area();
        matrix
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let w = self.w as i32;
        if (0..w).contains(&x) && (0..w).contains(&y) {
            Some((y * w + x) as usize)
        } else {
            None
        }
    }

    // Negative coordinates count back from the far edge
    fn wrap(&self, x: i32, y: i32) -> (i32, i32) {
        let w = self.w as i32;
        debug_assert!(-w <= x && x < w, "x out of range: {x}");
        debug_assert!(-w <= y && y < w, "y out of range: {y}");
        (if x < 0 { x + w } else { x }, if y < 0 { y + w } else { y })
    }

    /// Module at `(x, y)`, `None` outside the grid.
    pub fn module(&self, x: i32, y: i32) -> Option<Module> {
        self.index(x, y).map(|i| self.grid[i])
    }

    pub(crate) fn set_module(&mut self, x: i32, y: i32, module: Module) {
        if let Some(i) = self.index(x, y) {
            self.grid[i] = module;
        }
    }

    /// Whether the module is dark. Outside the grid reads light.
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.module(x, y).is_some_and(|m| m.is_dark())
    }

    /// Writes a value, keeping the kind of the module. No-op outside the grid.
    pub fn set(&mut self, x: i32, y: i32, dark: bool) {
        if let Some(i) = self.index(x, y) {
            self.grid[i] = self.grid[i].with_color(dark.into());
        }
    }

    /// Out of bounds counts as reserved.
    pub fn is_reserved(&self, x: i32, y: i32) -> bool {
        self.module(x, y).map_or(true, Module::is_reserved)
    }

    /// Claims a module for an external collaborator, keeping its value. Structural
    /// modules stay as they are.
    pub fn set_reserved(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            if let m @ (Module::Empty | Module::Data(_)) = self.grid[i] {
                self.grid[i] = Module::Region(*m);
            }
        }
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|m| m.is_dark()).count()
    }

    pub fn to_bools(&self) -> Vec<bool> {
        self.grid.iter().map(|m| m.is_dark()).collect()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i32;
        let mut res = String::with_capacity((w * (w + 1) + 1) as usize);
        res.push('\n');
        for y in 0..w {
            for x in 0..w {
                let c = match self.module(x, y).unwrap_or(Module::Empty) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Version(Color::Dark) => 'v',
                    Module::Version(Color::Light) => 'V',
                    Module::Format(Color::Dark) => 'm',
                    Module::Format(Color::Light) => 'M',
                    Module::Region(Color::Dark) => 'r',
                    Module::Region(Color::Light) => 'R',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl SymbolMatrix {
    /// Three 7x7 finders with their light separators.
    pub fn add_finder_patterns(&mut self) {
        let w = self.w as i32;
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(w - 4, 3);
        self.draw_finder_pattern_at(3, w - 4);
    }

    // Separator cells falling outside the grid are dropped
    fn draw_finder_pattern_at(&mut self, cx: i32, cy: i32) {
        for dy in -4..=4_i32 {
            for dx in -4..=4_i32 {
                let clr = match dx.abs().max(dy.abs()) {
                    4 | 2 => Color::Light,
                    _ => Color::Dark,
                };
                self.set_module(cx + dx, cy + dy, Module::Func(clr));
            }
        }
    }

    /// Whether `(x, y)` lies in one of the three 7x7 finders, separators excluded.
    pub fn is_finder(&self, x: i32, y: i32) -> bool {
        let w = self.w as i32;
        let near = |v: i32| (0..7).contains(&v);
        let far = |v: i32| (w - 7..w).contains(&v);
        (near(x) && near(y)) || (far(x) && near(y)) || (near(x) && far(y))
    }
}


// Timing pattern & dark module
//------------------------------------------------------------------------------

impl SymbolMatrix {
    /// Alternating strips along row 6 and column 6 between the finders.
    pub fn add_timing_patterns(&mut self) {
        let last = self.w as i32 - 9;
        for i in 8..=last {
            let m = Module::Func(Color::from(i & 1 == 0));
            self.set_module(i, 6, m);
            self.set_module(6, i, m);
        }
    }

    /// Always dark module beside the bottom left finder.
    pub fn add_dark_module(&mut self) {
        let y = 4 * *self.ver as i32 + 9;
        self.set_module(8, y, Module::Func(Color::Dark));
    }
}

#[cfg(test)]
mod timing_pattern_tests {
    use super::SymbolMatrix;
    use crate::common::metadata::Version;

    #[test]
    fn test_timing_pattern_1() {
        let mut m = SymbolMatrix::new(Version::MIN);
        m.add_timing_patterns();
        m.add_dark_module();
        assert_eq!(
            m.to_debug_str(),
            "\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             ........fFfFf........\n\
             .....................\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             ........f............\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n"
        );
    }
}

// Alignment pattern
//------------------------------------------------------------------------------

impl SymbolMatrix {
    /// 5x5 alignment patterns at every pair of centres that avoids the finders.
    pub fn add_alignment_patterns(&mut self) {
        let poses = self.ver.alignment_pattern();
        for &y in poses {
            for &x in poses {
                self.draw_alignment_pattern_at(x, y)
            }
        }
    }

    fn draw_alignment_pattern_at(&mut self, cx: i32, cy: i32) {
        let w = self.w as i32;
        if (cy == 6 && (cx == 6 || cx == w - 7)) || (cy == w - 7 && cx == 6) {
            return;
        }
        for dy in -2..=2_i32 {
            for dx in -2..=2_i32 {
                let clr = Color::from(dx.abs().max(dy.abs()) != 1);
                self.set_module(cx + dx, cy + dy, Module::Func(clr));
            }
        }
    }
}


// Format & version info
//------------------------------------------------------------------------------

impl SymbolMatrix {
    /// Reserves both format info strips so that placement skips them.
    pub fn reserve_format_area(&mut self) {
        self.draw_format_info(0);
    }

    /// Writes the format info word for `ecl` and `mask` into both strips.
    pub fn add_format_info(&mut self, ecl: ECLevel, mask: MaskPattern) {
        self.draw_format_info(ecl.format_info(mask));
    }

    fn draw_format_info(&mut self, format_info: u32) {
        for coords in [&FORMAT_INFO_COORDS_MAIN, &FORMAT_INFO_COORDS_SIDE] {
            self.draw_number(
                format_info,
                FORMAT_INFO_BIT_LEN,
                Module::Format(Color::Light),
                Module::Format(Color::Dark),
                coords,
            );
        }
    }

    /// 6x3 and 3x6 version info blocks, only from version 7 onwards.
    pub fn add_version_info(&mut self) {
        if *self.ver < 7 {
            return;
        }
        let info = self.ver.info();
        let w = self.w as i32;
        for i in 0..VERSION_INFO_BIT_LEN as i32 {
            let clr = Color::from((info >> i) & 1 == 1);
            let (a, b) = (w - 11 + i % 3, i / 3);
            self.set_module(a, b, Module::Version(clr));
            self.set_module(b, a, Module::Version(clr));
        }
    }

    // Most significant bit goes to the first coordinate
    fn draw_number(
        &mut self,
        number: u32,
        bit_len: usize,
        off_clr: Module,
        on_clr: Module,
        coords: &[(i32, i32)],
    ) {
        let mut mask = 1 << (bit_len - 1);
        for &(x, y) in coords {
            let (x, y) = self.wrap(x, y);
            if number & mask == 0 {
                self.set_module(x, y, off_clr);
            } else {
                self.set_module(x, y, on_clr);
            }
            mask >>= 1;
        }
    }
}

#[cfg(test)]
mod qr_information_tests {
    use super::SymbolMatrix;
    use crate::common::mask::MaskPattern;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_version_info_1() {
        let mut m = SymbolMatrix::new(Version::MIN);
        m.add_version_info();
        assert_eq!(m, SymbolMatrix::new(Version::MIN));
    }

    #[test]
    fn test_version_info_7() {
        let mut m = SymbolMatrix::new(Version::new(7).unwrap());
        m.add_version_info();
        let picture = m.to_debug_str();
        let rows: Vec<&str> = picture.lines().skip(1).collect();
        let top_right: Vec<&str> = rows[..6].iter().map(|r| &r[34..37]).collect();
        assert_eq!(top_right, ["VVv", "VvV", "VvV", "Vvv", "vvv", "VVV"]);
        let bottom_left: Vec<&str> = rows[34..37].iter().map(|r| &r[..6]).collect();
        assert_eq!(bottom_left, ["VVVVvV", "VvvvvV", "vVVvvV"]);
        assert_eq!(picture.matches(['v', 'V']).count(), 36);
    }

    #[test]
    fn test_reserve_format_info_qr() {
        let mut m = SymbolMatrix::new(Version::MIN);
        m.reserve_format_area();
        assert_eq!(
            m.to_debug_str(),
            "\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             .....................\n\
             ........M............\n\
             MMMMMM.MM....MMMMMMMM\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             ........M............\n"
        );
    }

    #[test]
    fn test_format_info_bits() {
        let mut m = SymbolMatrix::new(Version::MIN);
        m.reserve_format_area();
        // M with mask 5 is 100000011001110
        m.add_format_info(ECLevel::M, MaskPattern::new(5));
        let picture = m.to_debug_str();
        let rows: Vec<&str> = picture.lines().skip(1).collect();
        assert_eq!(&rows[8][..9], "mMMMMM.Mm");
        assert_eq!(&rows[8][13..], "mmMMmmmM");
        let col8: String = rows.iter().map(|r| &r[8..9]).collect();
        assert_eq!(&col8[..9], "MmmmMM.mm");
        assert_eq!(&col8[14..], "MMMMMMm");
    }
}

// Function patterns
//------------------------------------------------------------------------------

impl SymbolMatrix {
    pub fn draw_all_function_patterns(&mut self) {
        self.add_finder_patterns();
        self.add_timing_patterns();
        self.add_alignment_patterns();
        self.add_version_info();
        self.add_dark_module();
    }

    /// Claims the rectangle for an external collaborator and clears it to light.
    /// Structural modules inside the rectangle are left intact.
    pub fn reserve_region(&mut self, x0: i32, y0: i32, width: i32, height: i32) {
        for y in y0..y0 + height {
            for x in x0..x0 + width {
                if let Some(Module::Empty | Module::Data(_)) = self.module(x, y) {
                    self.set_module(x, y, Module::Region(Color::Light));
                }
            }
        }
    }

    /// Modules of structural patterns inside the rectangle.
    pub fn count_function_modules_in(&self, x0: i32, y0: i32, width: i32, height: i32) -> usize {
        (y0..y0 + height)
            .flat_map(|y| (x0..x0 + width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.module(x, y).is_some_and(Module::is_function))
            .count()
    }
}


// Encoding region
//------------------------------------------------------------------------------

impl SymbolMatrix {
    /// Lays the codewords along the zigzag walk, most significant bit first.
    /// Structural modules are skipped. Region modules are not skipped: each one
    /// swallows the bit that would have landed there, so every later bit keeps
    /// its standard position and the hidden bits surface as codeword errors.
    /// Skipping them outright would shift the rest of the stream and no reader
    /// could recover it. Modules left after the last codeword are light.
    pub fn place(&mut self, codewords: &[u8]) {
        let mut bits = BitStream::from_bytes(codewords);
        for (x, y) in EncRegionIter::new(self.ver) {
            match self.module(x, y) {
                Some(Module::Empty) => {
                    let clr = Color::from(bits.next().unwrap_or(false));
                    self.set_module(x, y, Module::Data(clr));
                }
                Some(Module::Region(_)) => {
                    bits.next();
                }
                _ => (),
            }
        }
        debug_assert!(!self.grid.contains(&Module::Empty), "Empty module left after placement");
    }

    /// Flips every data module where the mask function holds.
    pub fn mask_data(&mut self, pattern: MaskPattern) {
        let mask_fn = pattern.mask_function();
        let w = self.w as i32;
        for y in 0..w {
            for x in 0..w {
                if let Some(Module::Data(clr)) = self.module(x, y) {
                    if mask_fn(x, y) {
                        self.set_module(x, y, Module::Data(!clr));
                    }
                }
            }
        }
    }
}
