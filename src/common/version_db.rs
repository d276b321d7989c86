use super::metadata::BlockGroup;

const fn g(count: usize, data_codewords: usize, total_codewords: usize) -> BlockGroup {
    BlockGroup { count, data_codewords, total_codewords }
}

// Reed-Solomon block layout per version, indexed [version - 1][ec level]. Each entry lists
// one or two groups of (block count, data codewords per block, total codewords per block).
//------------------------------------------------------------------------------

#[rustfmt::skip]
pub(crate) static BLOCK_STRUCTURE: [[&[BlockGroup]; 4]; 40] = [
    // 1
    [&[g(1, 19, 26)], &[g(1, 16, 26)], &[g(1, 13, 26)], &[g(1, 9, 26)]],
    // 2
    [&[g(1, 34, 44)], &[g(1, 28, 44)], &[g(1, 22, 44)], &[g(1, 16, 44)]],
    // 3
    [&[g(1, 55, 70)], &[g(1, 44, 70)], &[g(2, 17, 35)], &[g(2, 13, 35)]],
    // 4
    [&[g(1, 80, 100)], &[g(2, 32, 50)], &[g(2, 24, 50)], &[g(4, 9, 25)]],
    // 5
    [&[g(1, 108, 134)], &[g(2, 43, 67)], &[g(2, 15, 33), g(2, 16, 34)], &[g(2, 11, 33), g(2, 12, 34)]],
    // 6
    [&[g(2, 68, 86)], &[g(4, 27, 43)], &[g(4, 19, 43)], &[g(4, 15, 43)]],
    // 7
    [&[g(2, 78, 98)], &[g(4, 31, 49)], &[g(2, 14, 32), g(4, 15, 33)], &[g(4, 13, 39), g(1, 14, 40)]],
    // 8
    [&[g(2, 97, 121)], &[g(2, 38, 60), g(2, 39, 61)], &[g(4, 18, 40), g(2, 19, 41)], &[g(4, 14, 40), g(2, 15, 41)]],
    // 9
    [&[g(2, 116, 146)], &[g(3, 36, 58), g(2, 37, 59)], &[g(4, 16, 36), g(4, 17, 37)], &[g(4, 12, 36), g(4, 13, 37)]],
    // 10
    [&[g(2, 68, 86), g(2, 69, 87)], &[g(4, 43, 69), g(1, 44, 70)], &[g(6, 19, 43), g(2, 20, 44)], &[g(6, 15, 43), g(2, 16, 44)]],
    // 11
    [&[g(4, 81, 101)], &[g(1, 50, 80), g(4, 51, 81)], &[g(4, 22, 50), g(4, 23, 51)], &[g(3, 12, 36), g(8, 13, 37)]],
    // 12
    [&[g(2, 92, 116), g(2, 93, 117)], &[g(6, 36, 58), g(2, 37, 59)], &[g(4, 20, 46), g(6, 21, 47)], &[g(7, 14, 42), g(4, 15, 43)]],
    // 13
    [&[g(4, 107, 133)], &[g(8, 37, 59), g(1, 38, 60)], &[g(8, 20, 44), g(4, 21, 45)], &[g(12, 11, 33), g(4, 12, 34)]],
    // 14
    [&[g(3, 115, 145), g(1, 116, 146)], &[g(4, 40, 64), g(5, 41, 65)], &[g(11, 16, 36), g(5, 17, 37)], &[g(11, 12, 36), g(5, 13, 37)]],
    // 15
    [&[g(5, 87, 109), g(1, 88, 110)], &[g(5, 41, 65), g(5, 42, 66)], &[g(5, 24, 54), g(7, 25, 55)], &[g(11, 12, 36), g(7, 13, 37)]],
    // 16
    [&[g(5, 98, 122), g(1, 99, 123)], &[g(7, 45, 73), g(3, 46, 74)], &[g(15, 19, 43), g(2, 20, 44)], &[g(3, 15, 45), g(13, 16, 46)]],
    // 17
    [&[g(1, 107, 135), g(5, 108, 136)], &[g(10, 46, 74), g(1, 47, 75)], &[g(1, 22, 50), g(15, 23, 51)], &[g(2, 14, 42), g(17, 15, 43)]],
    // 18
    [&[g(5, 120, 150), g(1, 121, 151)], &[g(9, 43, 69), g(4, 44, 70)], &[g(17, 22, 50), g(1, 23, 51)], &[g(2, 14, 42), g(19, 15, 43)]],
    // 19
    [&[g(3, 113, 141), g(4, 114, 142)], &[g(3, 44, 70), g(11, 45, 71)], &[g(17, 21, 47), g(4, 22, 48)], &[g(9, 13, 39), g(16, 14, 40)]],
    // 20
    [&[g(3, 107, 135), g(5, 108, 136)], &[g(3, 41, 67), g(13, 42, 68)], &[g(15, 24, 54), g(5, 25, 55)], &[g(15, 15, 43), g(10, 16, 44)]],
    // 21
    [&[g(4, 116, 144), g(4, 117, 145)], &[g(17, 42, 68)], &[g(17, 22, 50), g(6, 23, 51)], &[g(19, 16, 46), g(6, 17, 47)]],
    // 22
    [&[g(2, 111, 139), g(7, 112, 140)], &[g(17, 46, 74)], &[g(7, 24, 54), g(16, 25, 55)], &[g(34, 13, 37)]],
    // 23
    [&[g(4, 121, 151), g(5, 122, 152)], &[g(4, 47, 75), g(14, 48, 76)], &[g(11, 24, 54), g(14, 25, 55)], &[g(16, 15, 45), g(14, 16, 46)]],
    // 24
    [&[g(6, 117, 147), g(4, 118, 148)], &[g(6, 45, 73), g(14, 46, 74)], &[g(11, 24, 54), g(16, 25, 55)], &[g(30, 16, 46), g(2, 17, 47)]],
    // 25
    [&[g(8, 106, 132), g(4, 107, 133)], &[g(8, 47, 75), g(13, 48, 76)], &[g(7, 24, 54), g(22, 25, 55)], &[g(22, 15, 45), g(13, 16, 46)]],
    // 26
    [&[g(10, 114, 142), g(2, 115, 143)], &[g(19, 46, 74), g(4, 47, 75)], &[g(28, 22, 50), g(6, 23, 51)], &[g(33, 16, 46), g(4, 17, 47)]],
    // 27
    [&[g(8, 122, 152), g(4, 123, 153)], &[g(22, 45, 73), g(3, 46, 74)], &[g(8, 23, 53), g(26, 24, 54)], &[g(12, 15, 45), g(28, 16, 46)]],
    // 28
    [&[g(3, 117, 147), g(10, 118, 148)], &[g(3, 45, 73), g(23, 46, 74)], &[g(4, 24, 54), g(31, 25, 55)], &[g(11, 15, 45), g(31, 16, 46)]],
    // 29
    [&[g(7, 116, 146), g(7, 117, 147)], &[g(21, 45, 73), g(7, 46, 74)], &[g(1, 23, 53), g(37, 24, 54)], &[g(19, 15, 45), g(26, 16, 46)]],
    // 30
    [&[g(5, 115, 145), g(10, 116, 146)], &[g(19, 47, 75), g(10, 48, 76)], &[g(15, 24, 54), g(25, 25, 55)], &[g(23, 15, 45), g(25, 16, 46)]],
    // 31
    [&[g(13, 115, 145), g(3, 116, 146)], &[g(2, 46, 74), g(29, 47, 75)], &[g(42, 24, 54), g(1, 25, 55)], &[g(23, 15, 45), g(28, 16, 46)]],
    // 32
    [&[g(17, 115, 145)], &[g(10, 46, 74), g(23, 47, 75)], &[g(10, 24, 54), g(35, 25, 55)], &[g(19, 15, 45), g(35, 16, 46)]],
    // 33
    [&[g(17, 115, 145), g(1, 116, 146)], &[g(14, 46, 74), g(21, 47, 75)], &[g(29, 24, 54), g(19, 25, 55)], &[g(11, 15, 45), g(46, 16, 46)]],
    // 34
    [&[g(13, 115, 145), g(6, 116, 146)], &[g(14, 46, 74), g(23, 47, 75)], &[g(44, 24, 54), g(7, 25, 55)], &[g(59, 16, 46), g(1, 17, 47)]],
    // 35
    [&[g(12, 121, 151), g(7, 122, 152)], &[g(12, 47, 75), g(26, 48, 76)], &[g(39, 24, 54), g(14, 25, 55)], &[g(22, 15, 45), g(41, 16, 46)]],
    // 36
    [&[g(6, 121, 151), g(14, 122, 152)], &[g(6, 47, 75), g(34, 48, 76)], &[g(46, 24, 54), g(10, 25, 55)], &[g(2, 15, 45), g(64, 16, 46)]],
    // 37
    [&[g(17, 122, 152), g(4, 123, 153)], &[g(29, 46, 74), g(14, 47, 75)], &[g(49, 24, 54), g(10, 25, 55)], &[g(24, 15, 45), g(46, 16, 46)]],
    // 38
    [&[g(4, 122, 152), g(18, 123, 153)], &[g(13, 46, 74), g(32, 47, 75)], &[g(48, 24, 54), g(14, 25, 55)], &[g(42, 15, 45), g(32, 16, 46)]],
    // 39
    [&[g(20, 117, 147), g(4, 118, 148)], &[g(40, 47, 75), g(7, 48, 76)], &[g(43, 24, 54), g(22, 25, 55)], &[g(10, 15, 45), g(67, 16, 46)]],
    // 40
    [&[g(19, 118, 148), g(6, 119, 149)], &[g(18, 47, 75), g(31, 48, 76)], &[g(34, 24, 54), g(34, 25, 55)], &[g(20, 15, 45), g(61, 16, 46)]],
];

// Alignment pattern centres per version, applied to both axes
//------------------------------------------------------------------------------

#[rustfmt::skip]
pub(crate) static ALIGNMENT_PATTERN_POSITIONS: [&[i32]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

// Format information words, indexed [ec level][mask pattern]. BCH(15, 5) with generator
// 0x537, already XORed with 0x5412.
//------------------------------------------------------------------------------

#[rustfmt::skip]
pub(crate) static FORMAT_INFO: [[u32; 8]; 4] = [
    [0x77C4, 0x72F3, 0x7DAA, 0x789D, 0x662F, 0x6318, 0x6C41, 0x6976],
    [0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0],
    [0x355F, 0x3068, 0x3F31, 0x3A06, 0x24B4, 0x2183, 0x2EDA, 0x2BED],
    [0x1689, 0x13BE, 0x1CE7, 0x19D0, 0x0762, 0x0255, 0x0D0C, 0x083B],
];

// Bit positions of the format info, most significant bit first. MAIN runs around the
// top-left finder, SIDE is split between the top-right and bottom-left finders.
//------------------------------------------------------------------------------

#[rustfmt::skip]
pub(crate) static FORMAT_INFO_COORDS_MAIN: [(i32, i32); 15] = [
    (0, 8), (1, 8), (2, 8), (3, 8), (4, 8), (5, 8), (7, 8), (8, 8),
    (8, 7), (8, 5), (8, 4), (8, 3), (8, 2), (8, 1), (8, 0),
];

#[rustfmt::skip]
pub(crate) static FORMAT_INFO_COORDS_SIDE: [(i32, i32); 15] = [
    (8, -1), (8, -2), (8, -3), (8, -4), (8, -5), (8, -6), (8, -7),
    (-8, 8), (-7, 8), (-6, 8), (-5, 8), (-4, 8), (-3, 8), (-2, 8), (-1, 8),
];
