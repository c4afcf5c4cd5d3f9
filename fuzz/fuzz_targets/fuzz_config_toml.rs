#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and method selection must never panic
        if let Ok(config) = toml::from_str::<berth::Config>(content) {
            for workload in &config.deployments {
                let _ = workload.method();
            }
        }
    }
});
