#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Probe and decode must never panic; a successful decode is always complete.
    let _ = zentga::ImageInfo::from_bytes(data);
    if let Ok(decoded) = zentga::decode(data, enough::Unstoppable) {
        assert_eq!(
            decoded.pixels().len(),
            decoded.width as usize * decoded.height as usize * 4
        );
    }
});
