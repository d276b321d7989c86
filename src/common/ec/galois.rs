use std::ops::{Add, AddAssign, Div, Mul};

// Galois field element
//------------------------------------------------------------------------------

/// Element of GF(256) under the primitive polynomial x^8 + x^4 + x^3 + x^2 + 1.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct G(pub u8);

impl G {
    /// Generator element raised to `pow`.
    pub fn gen_pow(pow: usize) -> Self {
        G(EXP_TABLE[pow % 255])
    }

    pub fn log(self) -> usize {
        debug_assert!(self.0 != 0, "Log of zero is undefined");
        LOG_TABLE[self.0 as usize] as usize
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<G> for u8 {
    fn from(g: G) -> Self {
        g.0
    }
}

impl Add for G {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        G(self.0 ^ rhs.0)
    }
}

impl AddAssign for G {
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Mul for G {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return G(0);
        }
        G::gen_pow(self.log() + rhs.log())
    }
}

impl Div for G {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "Division by zero in GF(256)");
        if self.is_zero() {
            return G(0);
        }
        G::gen_pow(self.log() + 255 - rhs.log())
    }
}

// Polynomials
//------------------------------------------------------------------------------

/// Monic generator polynomial with roots α^0..α^(degree-1), highest power first.
pub fn generator_poly(degree: usize) -> Vec<G> {
    let mut poly = Vec::with_capacity(degree + 1);
    poly.push(G(1));
    for i in 0..degree {
        let root = G::gen_pow(i);
        poly.push(G(0));
        for k in (1..poly.len()).rev() {
            let prev = poly[k - 1];
            poly[k] += prev * root;
        }
    }
    poly
}


// Global constants
//------------------------------------------------------------------------------

const PRIMITIVE_POLY: u16 = 0x11D;

const fn exp_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 256 {
        table[i] = x as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    table
}

const fn log_table() -> [u8; 256] {
    let exp = exp_table();
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

pub static EXP_TABLE: [u8; 256] = exp_table();

pub static LOG_TABLE: [u8; 256] = log_table();
