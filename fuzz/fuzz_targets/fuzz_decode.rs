#![no_main]

use libfuzzer_sys::fuzz_target;
use mincer::Registry;

fuzz_target!(|data: &str| {
    // Decoding arbitrary text should never panic
    let registry = Registry::global();
    if let Ok((scheme, decoded)) = registry.decode(data) {
        assert_eq!(scheme.identifier(), decoded.identifier());
        assert_eq!(decoded.layout(), scheme.layout());
    }
    let _ = mincer::needs_upgrade(data);
});
