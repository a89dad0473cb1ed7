//! Example: Karatsuba multiplication with an indented trace.
//!
//! Run with:
//! `cargo run --example karatsuba`

use dnc_trace::problems::karatsuba::karatsuba;
use dnc_trace::utils::format_with_commas;
use dnc_trace::{Playback, TraceStep};

fn main() {
    let x = "31415926535";
    let y = "27182818284";

    let run = karatsuba(x, y);

    // Step through the log the way a viewer would.
    let mut playback = Playback::new(run.steps.len());
    playback.play();
    loop {
        if let Some(step) = playback.current_step(&run.steps) {
            let indent = "  ".repeat(step.level().unwrap_or(0));
            println!("{indent}[{}] {}", step.tag(), step.description());
        }
        if !playback.tick() {
            break;
        }
    }

    println!("{x} × {y} = {}", format_with_commas(&run.result));
}
