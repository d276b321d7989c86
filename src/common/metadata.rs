use std::ops::{Deref, Not};

use super::codec::Mode;
use super::mask::MaskPattern;
use super::version_db::{ALIGNMENT_PATTERN_POSITIONS, BLOCK_STRUCTURE, FORMAT_INFO};

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<bool> for Color {
    fn from(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

// Error correction level
//------------------------------------------------------------------------------

/// Error correction level, ordered by increasing redundancy.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum ECLevel {
    /// Recovers ~7% of codewords
    L = 0,
    /// Recovers ~15% of codewords
    M = 1,
    /// Recovers ~25% of codewords
    Q = 2,
    /// Recovers ~30% of codewords
    H = 3,
}

impl ECLevel {
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Fraction of codewords the level can recover.
    pub fn recovery_ratio(self) -> f64 {
        match self {
            Self::L => 0.07,
            Self::M => 0.15,
            Self::Q => 0.25,
            Self::H => 0.30,
        }
    }

    /// 15 bit format information word for this level combined with `mask`.
    pub fn format_info(self, mask: MaskPattern) -> u32 {
        FORMAT_INFO[self as usize][*mask as usize]
    }
}

// Block group
//------------------------------------------------------------------------------

/// A run of equally shaped Reed-Solomon blocks.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BlockGroup {
    pub count: usize,
    pub data_codewords: usize,
    pub total_codewords: usize,
}

impl BlockGroup {
    pub fn ec_codewords(&self) -> usize {
        self.total_codewords - self.data_codewords
    }
}

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Version(usize);

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Version {
    pub const MIN: Version = Version(1);
    pub const MAX: Version = Version(40);

    /// Returns `None` unless `version` lies in `1..=40`.
    pub fn new(version: usize) -> Option<Self> {
        (1..=40).contains(&version).then_some(Self(version))
    }

    pub fn all() -> impl Iterator<Item = Version> {
        (1..=40).map(Version)
    }

    pub const fn width(self) -> usize {
        17 + 4 * self.0
    }

    pub fn block_structure(self, ecl: ECLevel) -> &'static [BlockGroup] {
        BLOCK_STRUCTURE[self.0 - 1][ecl as usize]
    }

    pub fn total_data_codewords(self, ecl: ECLevel) -> usize {
        self.block_structure(ecl).iter().map(|g| g.count * g.data_codewords).sum()
    }

    pub fn total_codewords(self) -> usize {
        self.block_structure(ECLevel::L).iter().map(|g| g.count * g.total_codewords).sum()
    }

    /// Codeword errors each block of this version can correct at `ecl`. The
    /// smallest symbols hold back a few ec codewords for misdecode protection.
    pub fn correctable_codewords(self, ecl: ECLevel) -> usize {
        let ec_len = self.block_structure(ecl)[0].ec_codewords();
        let protection = match (self.0, ecl) {
            (1, ECLevel::L) => 3,
            (1, ECLevel::M) | (2, ECLevel::L) => 2,
            (1, _) | (3, ECLevel::L) => 1,
            _ => 0,
        };
        (ec_len - protection) / 2
    }

    pub fn data_bit_capacity(self, ecl: ECLevel) -> usize {
        self.total_data_codewords(ecl) << 3
    }

    pub fn alignment_pattern(self) -> &'static [i32] {
        ALIGNMENT_PATTERN_POSITIONS[self.0 - 1]
    }

    pub fn mode_bits(self) -> usize {
        4
    }

    pub fn char_cnt_bits(self, mode: Mode) -> usize {
        match (mode, self.0) {
            (Mode::Numeric, 1..=9) => 10,
            (Mode::Numeric, 10..=26) => 12,
            (Mode::Numeric, _) => 14,
            (Mode::Alphanumeric, 1..=9) => 9,
            (Mode::Alphanumeric, 10..=26) => 11,
            (Mode::Alphanumeric, _) => 13,
            (Mode::Byte, 1..=9) => 8,
            (Mode::Byte, _) => 16,
        }
    }

    /// Largest character count of `mode` that fits this version at `ecl`.
    pub fn capacity(self, mode: Mode, ecl: ECLevel) -> usize {
        let header = self.mode_bits() + self.char_cnt_bits(mode);
        let avail = self.data_bit_capacity(ecl).saturating_sub(header);
        let chars = match mode {
            Mode::Numeric => {
                let tail = match avail % 10 {
                    7..=9 => 2,
                    4..=6 => 1,
                    _ => 0,
                };
                (avail / 10) * 3 + tail
            }
            Mode::Alphanumeric => (avail / 11) * 2 + usize::from(avail % 11 >= 6),
            Mode::Byte => avail / 8,
        };
        chars.min((1 << self.char_cnt_bits(mode)) - 1)
    }

    /// Modules available for codewords once every function pattern is drawn.
    pub fn data_modules(self) -> usize {
        let v = self.0;
        let mut res = (16 * v + 128) * v + 64;
        if v >= 2 {
            let align = v / 7 + 2;
            res -= (25 * align - 10) * align - 55;
            if v >= 7 {
                res -= 36;
            }
        }
        res
    }

    pub fn remainder_bits(self) -> usize {
        self.data_modules() - (self.total_codewords() << 3)
    }

    /// 18 bit version information word, only drawn from version 7 onwards.
    pub fn info(self) -> u32 {
        debug_assert!(self.0 >= 7, "Version info is only defined for version 7 and above");

        let v = self.0 as u32;
        let mut rem = v;
        for _ in 0..12 {
            rem = (rem << 1) ^ ((rem >> 11) * VERSION_INFO_GENERATOR);
        }
        (v << 12) | rem
    }
}

#[cfg(test)]
mod version_tests {
    use test_case::test_case;

    use super::{ECLevel, Version};
    use crate::common::codec::Mode;

    #[test]
    fn test_new() {
        assert_eq!(Version::new(0), None);
        assert_eq!(Version::new(41), None);
        assert_eq!(Version::new(1), Some(Version::MIN));
        assert_eq!(Version::new(40), Some(Version::MAX));
    }

    #[test]
    fn test_width() {
        assert_eq!(Version::MIN.width(), 21);
        assert_eq!(Version::MAX.width(), 177);
    }

    #[test]
    fn test_block_table_matches_module_count() {
        for ver in Version::all() {
            let codewords = ver.data_modules() >> 3;
            for ecl in ECLevel::ALL {
                let groups = ver.block_structure(ecl);
                assert!(matches!(groups.len(), 1 | 2), "Version {}", *ver);
                let total: usize = groups.iter().map(|g| g.count * g.total_codewords).sum();
                assert_eq!(total, codewords, "Version {} {ecl:?}", *ver);
                let ec: Vec<_> = groups.iter().map(|g| g.ec_codewords()).collect();
                assert!(ec.iter().all(|&e| e == ec[0]), "Version {} {ecl:?}", *ver);
            }
        }
    }

    #[test_case(1, ECLevel::L, 2)]
    #[test_case(1, ECLevel::M, 4)]
    #[test_case(1, ECLevel::Q, 6)]
    #[test_case(1, ECLevel::H, 8)]
    #[test_case(2, ECLevel::L, 4)]
    #[test_case(3, ECLevel::L, 7)]
    #[test_case(5, ECLevel::H, 11)]
    #[test_case(40, ECLevel::M, 14)]
    fn test_correctable_codewords(v: usize, ecl: ECLevel, exp: usize) {
        assert_eq!(Version::new(v).unwrap().correctable_codewords(ecl), exp);
    }

    #[test]
    fn test_alignment_positions_follow_spacing_rule() {
        for ver in Version::all().skip(1) {
            let v = *ver as i32;
            let count = v / 7 + 2;
            let step = if v == 32 { 26 } else { (v * 4 + count * 2 + 1) / (count * 2 - 2) * 2 };
            let mut exp = vec![6];
            exp.extend((0..count - 1).map(|i| ver.width() as i32 - 7 - i * step).rev());
            assert_eq!(ver.alignment_pattern(), &exp[..], "Version {v}");
        }
        assert!(Version::MIN.alignment_pattern().is_empty());
    }

    #[test_case(1, ECLevel::L, 19)]
    #[test_case(1, ECLevel::M, 16)]
    #[test_case(1, ECLevel::H, 9)]
    #[test_case(5, ECLevel::Q, 62)]
    #[test_case(40, ECLevel::L, 2956)]
    #[test_case(40, ECLevel::M, 2334)]
    #[test_case(40, ECLevel::Q, 1666)]
    #[test_case(40, ECLevel::H, 1276)]
    fn test_total_data_codewords(v: usize, ecl: ECLevel, exp: usize) {
        assert_eq!(Version::new(v).unwrap().total_data_codewords(ecl), exp);
    }

    #[test_case(1, Mode::Numeric, ECLevel::L, 41)]
    #[test_case(1, Mode::Alphanumeric, ECLevel::L, 25)]
    #[test_case(1, Mode::Byte, ECLevel::L, 17)]
    #[test_case(1, Mode::Numeric, ECLevel::H, 17)]
    #[test_case(1, Mode::Alphanumeric, ECLevel::H, 10)]
    #[test_case(1, Mode::Byte, ECLevel::H, 7)]
    #[test_case(10, Mode::Alphanumeric, ECLevel::M, 311)]
    #[test_case(40, Mode::Numeric, ECLevel::L, 7089)]
    #[test_case(40, Mode::Alphanumeric, ECLevel::L, 4296)]
    #[test_case(40, Mode::Byte, ECLevel::L, 2953)]
    #[test_case(40, Mode::Byte, ECLevel::H, 1273)]
    fn test_capacity(v: usize, mode: Mode, ecl: ECLevel, exp: usize) {
        assert_eq!(Version::new(v).unwrap().capacity(mode, ecl), exp);
    }

    #[test_case(1, 0)]
    #[test_case(2, 7)]
    #[test_case(7, 0)]
    #[test_case(14, 3)]
    #[test_case(21, 4)]
    #[test_case(40, 0)]
    fn test_remainder_bits(v: usize, exp: usize) {
        assert_eq!(Version::new(v).unwrap().remainder_bits(), exp);
    }

    #[test_case(7, 0x07C94)]
    #[test_case(8, 0x085BC)]
    #[test_case(21, 0x15683)]
    #[test_case(40, 0x28C69)]
    fn test_version_info(v: usize, exp: u32) {
        assert_eq!(Version::new(v).unwrap().info(), exp);
    }
}


// Global constants
//------------------------------------------------------------------------------

pub static VERSION_INFO_GENERATOR: u32 = 0x1F25;

pub static FORMAT_INFO_BIT_LEN: usize = 15;

pub static VERSION_INFO_BIT_LEN: usize = 18;
