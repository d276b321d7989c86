mod qr;
mod region;
mod symbol;

pub use qr::{Module, SymbolMatrix};
pub use region::{escalate_level, is_recoverable, Rect, ReservedRegion};
pub use symbol::QRSymbol;

use tracing::debug;

use crate::common::{
    codec::{encode_with_version, find_version, Mode, Segment},
    ec::build_codeword_stream,
    error::{QRError, QRResult},
    mask::{apply_mask, select_best, MaskPattern},
    metadata::{ECLevel, Version},
};

/// Per-call encoder configuration. Unset options fall back to automatic choices:
/// detected mode, smallest fitting version and the lowest penalty mask.
pub struct QRBuilder<'a> {
    data: &'a [u8],
    version: Option<Version>,
    ec_level: ECLevel,
    mode: Option<Mode>,
    mask: Option<MaskPattern>,
    region: Option<ReservedRegion>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, version: None, ec_level: ECLevel::M, mode: None, mask: None, region: None }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn mode(&mut self, mode: Mode) -> &mut Self {
        self.mode = Some(mode);
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    /// Keeps data out of `rect`, clipped to the grid. The level may be raised so
    /// the obscured modules stay recoverable.
    pub fn reserve(&mut self, rect: Rect) -> &mut Self {
        self.region = Some(ReservedRegion::Rect(rect));
        self
    }

    /// Like [`QRBuilder::reserve`] with a centred square whose side is `percent`
    /// of the symbol width.
    pub fn reserve_centered(&mut self, percent: u8) -> &mut Self {
        self.region = Some(ReservedRegion::Centered(percent));
        self
    }

    pub fn unset_region(&mut self) -> &mut Self {
        self.region = None;
        self
    }

    pub fn metadata(&self) -> String {
        let version = self.version.map_or("None".to_string(), |v| (*v).to_string());
        format!(
            "{{ Version: {}, Ec level: {:?}, Mode: {:?}, Region: {:?} }}",
            version, self.ec_level, self.mode, self.region
        )
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QRSymbol> {
        debug!(config = %self.metadata(), "Generating QR");
        if self.data.is_empty() {
            return Err(QRError::EmptyInput);
        }

        let seg = match self.mode {
            Some(mode) => Segment::new(mode, self.data)?,
            None => Segment::detect(self.data),
        };

        let mut ec_level = self.ec_level;
        let mut version = self.select_version(&seg, ec_level)?;

        // The region is sized against the first version for the area estimate,
        // then checked codeword by codeword against each candidate level
        let region = match self.region {
            Some(region) => {
                let escalated = escalate_level(ec_level, region.resolve(version), version);
                if escalated != ec_level {
                    debug!(from = ?ec_level, to = ?escalated, "Raised error correction level");
                    ec_level = escalated;
                    version = self.select_version(&seg, ec_level)?;
                }
                let (ver, ecl, rect) = self.fit_region(&seg, region, version, ec_level)?;
                version = ver;
                ec_level = ecl;
                Some(rect)
            }
            None => None,
        };
        debug!(version = *version, ec_level = ?ec_level, mode = ?seg.mode(), "Selected version");

        let encoded = encode_with_version(&seg, version, ec_level)?;
        let codewords = build_codeword_stream(encoded.data(), version, ec_level);

        let mut matrix = SymbolMatrix::with_function_patterns(version);
        if let Some(rect) = region {
            debug!(?rect, "Reserving region");
            let (x, y) = (rect.x as i32, rect.y as i32);
            matrix.reserve_region(x, y, rect.width as i32, rect.height as i32);
        }
        matrix.place(&codewords);

        let (matrix, mask) = match self.mask {
            Some(mask) => {
                let mut masked = apply_mask(&matrix, mask);
                masked.add_format_info(ec_level, mask);
                (masked, mask)
            }
            None => select_best(&matrix, ec_level),
        };

        let qr = QRSymbol::new(ec_level, seg.mode(), mask, matrix);
        let total_modules = qr.size() * qr.size();
        debug!(
            mask = *mask,
            dark_modules = qr.dark_modules(),
            balance = qr.dark_modules() * 100 / total_modules,
            "QR generated"
        );
        Ok(qr)
    }

    // Raises the level until every block can correct what the region hides
    fn fit_region(
        &self,
        seg: &Segment,
        region: ReservedRegion,
        mut version: Version,
        mut ec_level: ECLevel,
    ) -> QRResult<(Version, ECLevel, Rect)> {
        loop {
            let rect = region.resolve(version);
            if is_recoverable(rect, version, ec_level) {
                return Ok((version, ec_level, rect));
            }
            let next = match ec_level {
                ECLevel::L => ECLevel::M,
                ECLevel::M => ECLevel::Q,
                ECLevel::Q => ECLevel::H,
                ECLevel::H => return Err(QRError::RegionTooLarge),
            };
            debug!(from = ?ec_level, to = ?next, "Region hides too many codewords, raising level");
            ec_level = next;
            version = self.select_version(seg, ec_level)?;
        }
    }

    fn select_version(&self, seg: &Segment, ec_level: ECLevel) -> QRResult<Version> {
        match self.version {
            Some(v) if seg.fits(v, ec_level) => Ok(v),
            Some(_) => Err(QRError::CapacityExceeded),
            None => find_version(seg, ec_level),
        }
    }
}
