use tracing::debug;

use super::{galois::*, Block};
use crate::common::metadata::{ECLevel, Version};

// Error correction codewords
//------------------------------------------------------------------------------

impl Block {
    // Remainder of the data polynomial, shifted by the ec length, divided by the
    // generator polynomial. The remainder coefficients are the ecc
    pub(super) fn compute_ecc(&mut self) {
        let ec_len = self.ec_len();
        let (data, ecc) = self.parts_mut();
        ecc.copy_from_slice(&generate_ecc(data, ec_len));
    }
}

/// Systematic Reed-Solomon encoding of `data` into `ec_len` recovery bytes.
pub fn generate_ecc(data: &[u8], ec_len: usize) -> Vec<u8> {
    let len = data.len();
    let gen_poly = generator_poly(ec_len);

    let mut res: Vec<G> = data.iter().map(|&b| G(b)).collect();
    res.resize(len + ec_len, G(0));

    for i in 0..len {
        let lead_coeff = res[i];
        if lead_coeff.is_zero() {
            continue;
        }
        for (u, &g) in res[i + 1..].iter_mut().zip(gen_poly[1..].iter()) {
            *u += lead_coeff * g;
        }
    }

    res[len..].iter().map(|&g| g.into()).collect()
}

// Blocks
//------------------------------------------------------------------------------

/// Splits the data codewords into blocks per the version table and computes the
/// ecc of each.
pub(crate) fn blockify(data: &[u8], ver: Version, ecl: ECLevel) -> Vec<Block> {
    let groups = ver.block_structure(ecl);
    let total_size: usize = groups.iter().map(|g| g.count * g.data_codewords).sum();
    debug_assert!(
        total_size == data.len(),
        "Data len doesn't match total size of blocks: Data len {}, Total block size {}",
        data.len(),
        total_size
    );

    let block_count = groups.iter().map(|g| g.count).sum();
    let mut blocks = Vec::with_capacity(block_count);
    let mut rest = data;
    for g in groups {
        let (head, tail) = rest.split_at(g.count * g.data_codewords);
        blocks.extend(head.chunks(g.data_codewords).map(|c| Block::new(c, g.total_codewords)));
        rest = tail;
    }
    blocks
}

/// Takes index 0 of every block, then index 1, and so on, skipping blocks that
/// have run out.
pub fn interleave<T: Copy, V: AsRef<[T]>>(blocks: &[V]) -> Vec<T> {
    let max_len = blocks.iter().map(|b| b.as_ref().len()).max().unwrap_or(0);
    let total = blocks.iter().map(|b| b.as_ref().len()).sum();
    let mut res = Vec::with_capacity(total);
    for i in 0..max_len {
        for b in blocks {
            if let Some(&v) = b.as_ref().get(i) {
                res.push(v);
            }
        }
    }
    res
}

/// Index of the owning block for every position of the final codeword stream.
pub fn codeword_blocks(ver: Version, ecl: ECLevel) -> Vec<usize> {
    let shapes: Vec<_> = ver
        .block_structure(ecl)
        .iter()
        .flat_map(|g| std::iter::repeat((g.data_codewords, g.ec_codewords())).take(g.count))
        .collect();
    let data: Vec<Vec<usize>> = shapes.iter().enumerate().map(|(i, &(d, _))| vec![i; d]).collect();
    let ecc: Vec<Vec<usize>> = shapes.iter().enumerate().map(|(i, &(_, e))| vec![i; e]).collect();

    let mut res = interleave(&data);
    res.extend(interleave(&ecc));
    res
}

/// Final codeword sequence: interleaved data codewords followed by interleaved ecc.
pub fn build_codeword_stream(data: &[u8], ver: Version, ecl: ECLevel) -> Vec<u8> {
    let blocks = blockify(data, ver, ecl);

    let data_blocks: Vec<&[u8]> = blocks.iter().map(Block::data).collect();
    let ecc_blocks: Vec<&[u8]> = blocks.iter().map(Block::ecc).collect();

    let mut res = interleave(&data_blocks);
    res.extend(interleave(&ecc_blocks));

    debug!(
        blocks = blocks.len(),
        ec_per_block = blocks.first().map_or(0, Block::ec_len),
        codewords = res.len(),
        "Computed error correction"
    );
    debug_assert_eq!(res.len(), ver.total_codewords(), "Codeword stream length mismatch");
    res
}
