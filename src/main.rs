//! Crownwheel demo — drives the session with synthetic frame deltas.

use crownwheel::prelude::*;

const FRAME_DT: f64 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    println!("━━━ Crownwheel: three crowns, harmonic speeds ━━━");
    println!();

    let mut session = SimulationSession::new();
    session.add_ring();
    session.add_ring();
    session.accumulate_speeds_down(); // seed indices 0, 1, 2
    session.adjust_ring_wedges(1, 2); // middle crown: 3 wedges
    session.toggle_ring_phase(2);

    let recurrence = session.recurrence();
    println!("  rings:       {}", session.rings().len());
    println!("  recurrence:  {} time units", recurrence);
    println!();

    println!(
        "  {:>8}  {:>10}  {:>6}  {}",
        "time", "gauge", "rev", "angles (rad)"
    );
    let frames = (20.0 / FRAME_DT) as usize;
    for frame in 0..=frames {
        session.advance(FRAME_DT);
        if frame % 120 == 0 {
            let view = session.clock_view();
            let angles: Vec<String> = session
                .ring_views()
                .iter()
                .map(|r| format!("{:.3}", r.theta))
                .collect();
            println!(
                "  {:>8.2}  {:>10}  {:>6}  [{}]{}",
                view.elapsed,
                session.gauge(),
                view.revolutions,
                angles.join(", "),
                if view.flash_active { "  *flash*" } else { "" }
            );
        }
    }

    println!();
    println!("━━━ Seeking to three quarters of the cycle ━━━");
    session.seek(0.75);
    let view = session.clock_view();
    println!(
        "  progress {:.3}, elapsed {:.2}, gauge {}",
        view.progress,
        view.elapsed,
        session.gauge()
    );
}
