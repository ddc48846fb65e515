#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use mincer::Registry;

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::extended)
}

fuzz_target!(|data: &[u8]| {
    // First byte splits encoded hash from password; must never panic
    let Some((split, rest)) = data.split_first() else {
        return;
    };
    let at = usize::from(*split).min(rest.len());
    let (encoded, password) = rest.split_at(rest.len() - at);
    let _ = mincer::verify_with(registry(), encoded, password);
});
