#![no_main]

use libfuzzer_sys::fuzz_target;
use lbforge::{transform_loadbalancer, ConfigRenderer, LoadBalancer};

fuzz_target!(|data: &[u8]| {
    // Arbitrary topologies must transform and render without panicking
    if let Ok(lb) = serde_json::from_slice::<LoadBalancer>(data) {
        if let Ok(context) = transform_loadbalancer(&lb) {
            let _ = ConfigRenderer::default().render(&context);
        }
    }
});
