use std::time::Instant;

use crate::configuration::config::UpdateOrder;
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

/// Time `step_frame` on the canonical system for both update orders
pub fn bench_step_frame() {
    // Frame counts to run per order
    let frame_counts = [1_000, 10_000, 100_000];
    let params = Parameters::default();

    for frames in frame_counts {
        let mut per_frame = Vec::with_capacity(2);

        for order in [UpdateOrder::Sequential, UpdateOrder::Snapshot] {
            let mut sys = System::solar(&params).with_update_order(order);

            // Warm up
            let mut aborted = usize::from(sys.step_frame().is_err());
            sys.reset();

            let t0 = Instant::now();
            for _ in 0..frames {
                if sys.step_frame().is_err() {
                    aborted += 1;
                }
            }
            let us = t0.elapsed().as_secs_f64() * 1.0e6 / frames as f64;
            if aborted > 0 {
                println!("{order:?}: {aborted} of {frames} frames aborted (warm-up included)");
            }
            per_frame.push(us);
        }

        println!(
            "frames = {frames:7}, sequential = {:8.3} us/frame, snapshot = {:8.3} us/frame",
            per_frame[0], per_frame[1]
        );
    }
}
