//! # qrmint
//!
//! A Rust library for encoding text into QR Code symbols with Reed-Solomon error correction.
//! The output is a plain boolean module grid; rasterizing it is left to the caller.
//!
//! ## Features
//!
//! - **Mode & Version Selection**: Picks the most compact of numeric, alphanumeric and byte
//!   modes, and the smallest of the 40 versions that holds the data
//! - **Reed-Solomon Error Correction**: Levels L, M, Q and H over GF(256), blocks interleaved
//!   per the version table
//! - **Mask Optimization**: Scores all 8 mask patterns with the four penalty rules and keeps
//!   the best one, optionally in parallel with the `parallel` feature
//! - **Reserved Regions**: Keeps a rectangle free of data, e.g. for a logo, raising the error
//!   correction level until every block can correct the codewords it hides
//!
//! ## Quick Start
//!
//! ### Simple QR Code Generation
//!
//! ```rust
//! use qrmint::{encode, ECLevel};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = encode("Hello, World!", ECLevel::M)?;
//!
//! for y in 0..qr.size() {
//!     let row: String =
//!         (0..qr.size()).map(|x| if qr.module_at(x, y) { '#' } else { ' ' }).collect();
//!     println!("{row}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrmint::{ECLevel, MaskPattern, Mode, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = "HELLO WORLD";
//! let qr = QRBuilder::new(data.as_bytes())
//!     .version(Version::new(2).unwrap()) // Smallest fitting version if not provided
//!     .ec_level(ECLevel::Q)              // Defaults to ECLevel::M
//!     .mode(Mode::Alphanumeric)          // Detected from the data if not provided
//!     .mask(MaskPattern::new(3))         // Lowest penalty mask if not provided
//!     .build()?;
//!
//! assert_eq!(qr.size(), 25);
//! # Ok(())
//! # }
//! ```
//!
//! ### Reserving Space for a Logo
//!
//! ```rust
//! use qrmint::{ECLevel, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new(b"https://example.com")
//!     .ec_level(ECLevel::L)
//!     .reserve_centered(30) // Square of 30% of the width, centred
//!     .build()?;
//!
//! // Level raised to keep the hidden modules recoverable
//! assert!(qr.level() > ECLevel::L);
//! # Ok(())
//! # }
//! ```
//!
//! ## QR Code Components
//!
//! ### Versions
//! Versions 1-40, with sizes from 21x21 to 177x177 modules
//!
//! ### Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction
//!
//! ## Logging
//!
//! Pipeline stages are reported through [`tracing`](https://docs.rs/tracing) at `debug` level
//! and per-mask penalties at `trace` level. No subscriber is installed by the library.

pub mod builder;
pub(crate) mod common;

pub use builder::{QRBuilder, QRSymbol, Rect};
pub use common::codec::Mode;
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{ECLevel, Version};

/// Encodes `text` at `level`, choosing mode, version and mask automatically.
pub fn encode(text: &str, level: ECLevel) -> QRResult<QRSymbol> {
    QRBuilder::new(text.as_bytes()).ec_level(level).build()
}

/// Like [`encode`], keeping `region` free of data. `level` is raised when the
/// region hides more than it can recover, and [`QRError::RegionTooLarge`] is
/// returned when even level H cannot.
pub fn encode_with_reserved_region(text: &str, level: ECLevel, region: Rect) -> QRResult<QRSymbol> {
    QRBuilder::new(text.as_bytes()).ec_level(level).reserve(region).build()
}
