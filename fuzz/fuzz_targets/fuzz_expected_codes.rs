#![no_main]

use libfuzzer_sys::fuzz_target;
use lbforge::domain::value_objects::ExpectedCodes;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(codes) = ExpectedCodes::parse(input) {
            // A parsed set always renders to a non-empty, re-parseable pattern
            let pattern = codes.to_pattern();
            assert!(!pattern.is_empty());
            let reparsed = ExpectedCodes::parse(&pattern.replace('|', ",")).unwrap();
            assert_eq!(reparsed, codes);
        }
    }
});
