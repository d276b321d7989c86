use tracing::debug;

use super::types::{Mode, PADDING_CODEWORDS};
use crate::common::bit_utils::BitStream;
use crate::common::error::{QRError, QRResult};
use crate::common::metadata::{ECLevel, Version};

// Segment
//------------------------------------------------------------------------------

/// Input text paired with a mode able to represent all of it. Only constructible
/// through [`Segment::new`] and [`Segment::detect`], so packing never sees an
/// unrepresentable character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    mode: Mode,
    data: &'a [u8],
}

impl<'a> Segment<'a> {
    pub fn new(mode: Mode, data: &'a [u8]) -> QRResult<Self> {
        if !data.iter().all(|&b| mode.contains(b)) {
            return Err(QRError::UnsupportedMode);
        }
        Ok(Self { mode, data })
    }

    pub fn detect(data: &'a [u8]) -> Self {
        Self { mode: Mode::detect(data), data }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn char_count(&self) -> usize {
        self.data.len()
    }

    pub fn bit_len(&self, ver: Version) -> usize {
        ver.mode_bits() + ver.char_cnt_bits(self.mode) + self.mode.encoded_len(self.data.len())
    }

    pub fn fits(&self, ver: Version, ecl: ECLevel) -> bool {
        self.char_count() <= ver.capacity(self.mode, ecl)
    }
}


// Encoder
//------------------------------------------------------------------------------

/// Smallest version whose capacity at `ecl` holds the segment.
pub fn find_version(seg: &Segment, ecl: ECLevel) -> QRResult<Version> {
    Version::all().find(|&v| seg.fits(v, ecl)).ok_or(QRError::CapacityExceeded)
}

/// Packs the segment and pads it to the exact data capacity of `ver` at `ecl`.
pub fn encode_with_version(seg: &Segment, ver: Version, ecl: ECLevel) -> QRResult<BitStream> {
    if !seg.fits(ver, ecl) {
        return Err(QRError::CapacityExceeded);
    }
    let mut bs = BitStream::new(ver.data_bit_capacity(ecl));
    pack(seg, ver, &mut bs);
    terminate_and_pad(&mut bs);

    debug!(
        mode = ?seg.mode(),
        chars = seg.char_count(),
        payload_bits = seg.bit_len(ver),
        capacity_bits = bs.capacity(),
        "Packed data codewords"
    );
    Ok(bs)
}

/// Mode indicator, character count indicator and payload.
pub fn pack(seg: &Segment, ver: Version, out: &mut BitStream) {
    push_header(seg, ver, out);
    let mode = seg.mode();
    for chunk in seg.data().chunks(mode.chunk_len()) {
        out.push_bits(mode.encode_chunk(chunk), mode.encoded_len(chunk.len()));
    }
}

fn push_header(seg: &Segment, ver: Version, out: &mut BitStream) {
    out.push_bits(seg.mode().indicator(), ver.mode_bits());
    let char_cnt = seg.char_count();
    let len_bits = ver.char_cnt_bits(seg.mode());
    debug_assert!(
        char_cnt < (1 << len_bits),
        "Char count exceeds bit length: Char count {char_cnt}, Char count bits {len_bits}"
    );
    out.push_bits(char_cnt as u16, len_bits);
}

/// Terminator, zero bits to the byte boundary, then alternating pad codewords.
pub fn terminate_and_pad(out: &mut BitStream) {
    push_terminator(out);
    push_padding_bits(out);
    push_padding_codewords(out);
    out.truncate(out.capacity());
    debug_assert_eq!(out.len(), out.capacity(), "Padded stream must fill the capacity");
}

fn push_terminator(out: &mut BitStream) {
    let term_len = std::cmp::min(4, out.remaining());
    out.push_bits(0u8, term_len);
}

fn push_padding_bits(out: &mut BitStream) {
    let offset = out.len() & 7;
    if offset > 0 {
        out.push_bits(0u8, 8 - offset);
    }
}

fn push_padding_codewords(out: &mut BitStream) {
    let offset = out.len() & 7;
    debug_assert!(offset == 0, "Bit offset should be zero before padding codewords: {offset}");

    let remain_byte_capacity = out.remaining() >> 3;
    PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
        out.push_bits(pc, 8);
    });
}
