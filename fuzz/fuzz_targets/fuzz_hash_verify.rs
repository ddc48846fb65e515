#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|password: &[u8]| {
    // Every freshly produced hash must verify against its own password
    let encoded = mincer::hash(password).expect("hashing should succeed");
    let valid = mincer::verify(&encoded, password).expect("own hash should decode");
    assert!(valid, "hash of {password:?} did not verify");
    assert!(!mincer::needs_upgrade(&encoded));
});
