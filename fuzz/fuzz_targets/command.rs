#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(script) = std::str::from_utf8(data) {
        if script.len() < 256 {
            let _ = jagged::run_script(&[vec![1, 2, 3], vec![4]], script);
        }
    }
});
