fn decode(qr: &qrmint::QRSymbol) -> (usize, String) {
    let scale = 3;
    let qz = qr.quiet_zone();
    let px = (qr.size() + 2 * qz) * scale;
    let mut img = rqrr::PreparedImage::prepare_from_greyscale(px, px, |x, y| {
        let (mx, my) = ((x / scale).wrapping_sub(qz), (y / scale).wrapping_sub(qz));
        if qr.module_at(mx, my) {
            0
        } else {
            255
        }
    });
    let grids = img.detect_grids();
    assert_eq!(grids.len(), 1, "Expected exactly one symbol");
    let (meta, decoded) = grids[0].decode().expect("Failed to read QR");
    (meta.version.0, decoded)
}

#[cfg(test)]
mod qr_proptests {
    use prop::string::string_regex;
    use proptest::prelude::*;

    use qrmint::*;

    use super::decode;

    pub fn ec_level_strategy() -> BoxedStrategy<ECLevel> {
        prop_oneof![Just(ECLevel::L), Just(ECLevel::M), Just(ECLevel::Q), Just(ECLevel::H)].boxed()
    }

    // Kept well under the version 40 capacity so each case stays quick
    pub fn qr_strategy(regex: String) -> impl Strategy<Value = (ECLevel, String)> {
        ec_level_strategy().prop_flat_map(move |ecl| {
            let pattern = format!(r"{}{{1,{}}}", regex, 120);
            string_regex(&pattern).unwrap().prop_map(move |data| (ecl, data))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn proptest_numeric(params in qr_strategy("[0-9]".to_string())) {
            let (ecl, data) = params;
            let qr = encode(&data, ecl).unwrap();
            prop_assert_eq!(qr.mode(), Mode::Numeric);
            prop_assert_eq!(data, decode(&qr).1);
        }

        #[test]
        fn proptest_alphanumeric(params in qr_strategy(r"[0-9A-Z $%*+\-./:]".to_string())) {
            let (ecl, data) = params;
            let qr = encode(&data, ecl).unwrap();
            prop_assert!(qr.mode() <= Mode::Alphanumeric);
            prop_assert_eq!(data, decode(&qr).1);
        }

        #[test]
        fn proptest_byte(params in qr_strategy("[a-z0-9 ,.!?]".to_string())) {
            let (ecl, data) = params;
            let qr = encode(&data, ecl).unwrap();
            prop_assert_eq!(data, decode(&qr).1);
        }

        #[test]
        fn proptest_smallest_version(params in qr_strategy("[0-9A-Za-z]".to_string())) {
            let (ecl, data) = params;
            let qr = encode(&data, ecl).unwrap();
            let ver = qr.version();
            prop_assert_eq!(qr.size(), 17 + 4 * *ver);
            prop_assert!(data.len() <= ver.capacity(qr.mode(), ecl));
            if let Some(prev) = Version::new(*ver - 1) {
                prop_assert!(data.len() > prev.capacity(qr.mode(), ecl));
            }
        }
    }
}

#[cfg(test)]
mod qr_tests {
    use test_case::test_case;

    use qrmint::{
        encode, encode_with_reserved_region, ECLevel, Mode, QRBuilder, QRError, Rect, Version,
    };

    use super::decode;

    #[test_case("123456789012345", Mode::Numeric)]
    #[test_case("HELLO WORLD", Mode::Alphanumeric)]
    #[test_case("hello, world!", Mode::Byte)]
    fn test_round_trip_all_levels(data: &str, mode: Mode) {
        for ecl in ECLevel::ALL {
            let qr = encode(data, ecl).unwrap();
            assert_eq!(qr.mode(), mode);
            assert_eq!(qr.level(), ecl);
            let (ver, decoded) = decode(&qr);
            assert_eq!(ver, *qr.version());
            assert_eq!(decoded, data);
        }
    }

    #[test_case("B3@j#Z%8vK!3zC^8&rF9*b6".repeat(3), 7, ECLevel::L; "test_qr_1")]
    #[test_case("aAAAAAA1111111111111AAAAAAa".repeat(3), 7, ECLevel::Q; "test_qr_2")]
    #[test_case("A11111111111111".repeat(20), 10, ECLevel::M; "test_qr_3")]
    #[test_case("B3@j#Z%8vK!3zC^8&rF9*b6".repeat(22), 27, ECLevel::L; "test_qr_4")]
    #[test_case("1234567890".repeat(145), 27, ECLevel::H; "test_qr_5")]
    #[test_case("A111111111111111".repeat(97), 40, ECLevel::M; "test_qr_6")]
    #[test_case("1234567890".repeat(305), 40, ECLevel::H; "test_qr_7")]
    fn test_qr(data: String, ver: usize, ecl: ECLevel) {
        let ver = Version::new(ver).unwrap();
        let qr = QRBuilder::new(data.as_bytes()).version(ver).ec_level(ecl).build().unwrap();
        let (decoded_ver, decoded) = decode(&qr);
        assert_eq!(decoded_ver, *ver);
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_long_numeric_picks_large_version() {
        let data = "0000031022405220401010321345892000401000322568020000010002300310301000513223203020101022877575834440050582029467942301925931144369329533701753166851910986753056484424869814511873452028333268210099496448322540294554342657927104286229791902762829561858874626218405591746088935629708422639107029089819040373042489";
        let qr = encode(data, ECLevel::M).unwrap();
        assert_eq!(qr.mode(), Mode::Numeric);
        assert_eq!(decode(&qr).1, data);
    }

    #[test]
    fn test_finder_patterns() {
        let qr = encode("hello, world!", ECLevel::Q).unwrap();
        let s = qr.size();
        for (ox, oy) in [(0, 0), (s - 7, 0), (0, s - 7)] {
            for dy in 0..7 {
                for dx in 0..7 {
                    // Dark outer ring and 3x3 centre, light ring between
                    let border = dx == 0 || dy == 0 || dx == 6 || dy == 6;
                    let centre = (2..=4).contains(&dx) && (2..=4).contains(&dy);
                    let exp = border || centre;
                    assert_eq!(qr.module_at(ox + dx, oy + dy), exp, "({}, {})", ox + dx, oy + dy);
                    assert!(qr.is_finder(ox + dx, oy + dy));
                }
            }
        }
    }

    #[test]
    fn test_timing_patterns() {
        let long = "x".repeat(500);
        for data in ["1", "HELLO WORLD", long.as_str()] {
            let qr = encode(data, ECLevel::L).unwrap();
            let s = qr.size();
            for i in 8..=s - 9 {
                assert_eq!(qr.module_at(i, 6), i % 2 == 0);
                assert_eq!(qr.module_at(6, i), i % 2 == 0);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        for ecl in ECLevel::ALL {
            assert_eq!(encode("", ecl).unwrap_err(), QRError::EmptyInput);
        }
    }

    #[test]
    fn test_capacity_exceeded() {
        // Version 40-L holds 4296 alphanumeric characters
        let data = "A".repeat(4297);
        assert_eq!(encode(&data, ECLevel::L).unwrap_err(), QRError::CapacityExceeded);
        assert_eq!(*encode(&data[1..], ECLevel::L).unwrap().version(), 40);
        // 2953 bytes at 40-L
        let data = "a".repeat(2954);
        assert_eq!(encode(&data, ECLevel::L).unwrap_err(), QRError::CapacityExceeded);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let a = encode("https://example.com", ECLevel::M).unwrap();
        let b = encode("https://example.com", ECLevel::M).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.mask(), b.mask());
    }

    #[test]
    fn test_reserved_region_round_trip() {
        let data = "HELLO WORLD";
        let qr = QRBuilder::new(data.as_bytes())
            .ec_level(ECLevel::H)
            .reserve_centered(20)
            .build()
            .unwrap();
        assert_eq!(qr.level(), ECLevel::H);
        assert_eq!(decode(&qr).1, data);
    }

    #[test_case("HELLO WORLD")]
    #[test_case("https://example.com")]
    #[test_case("1234567890123")]
    #[test_case("hello, world! this is a longer byte payload")]
    fn test_reserved_region_round_trip_all_sizes(data: &str) {
        for percent in [5, 10, 15, 20, 25, 30] {
            for ecl in ECLevel::ALL {
                let qr = QRBuilder::new(data.as_bytes())
                    .ec_level(ecl)
                    .reserve_centered(percent)
                    .build()
                    .unwrap();
                assert!(qr.level() >= ecl);
                assert_eq!(decode(&qr).1, data, "{percent}% at {ecl:?}");
            }
        }
    }

    #[test_case("HELLO WORLD")]
    #[test_case("https://example.com")]
    #[test_case("1234567890123")]
    fn test_reserved_region_too_large(data: &str) {
        for ecl in ECLevel::ALL {
            let res = QRBuilder::new(data.as_bytes()).ec_level(ecl).reserve_centered(40).build();
            assert_eq!(res, Err(QRError::RegionTooLarge));
        }
    }

    #[test]
    fn test_encode_with_reserved_region() {
        let data = "https://example.com/a/longer/path?with=query";
        let plain = encode(data, ECLevel::L).unwrap();
        let size = plain.size();
        let side = size / 4;
        let region = Rect::new((size - side) / 2, (size - side) / 2, side, side);

        let qr = encode_with_reserved_region(data, ECLevel::L, region).unwrap();
        assert!(qr.level() > ECLevel::L);
        // Clear of function patterns, so the whole region reads light
        for y in region.y..region.y + region.height {
            for x in region.x..region.x + region.width {
                assert!(!qr.module_at(x, y), "({x}, {y})");
            }
        }
        assert_eq!(decode(&qr).1, data);
    }
}
