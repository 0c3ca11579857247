//! segment — smallest demo of the beltsim conveyor model.
//!
//! Feeds a handful of parcels onto one conveyor segment and drives simulated
//! time forward event-by-event: read the event horizon, jump straight to the
//! earliest event, service whatever arrived, repeat.  No ticking — the whole
//! run takes exactly as many iterations as there are events.

use anyhow::Result;

use belt_core::{CheckpointId, ModelId, ObjectId};
use belt_model::{ConveyorModel, EventFilter, EventPoint};

// ── Constants ─────────────────────────────────────────────────────────────────

const BELT_LENGTH: f64 = 100.0; // meters
const MAX_SPEED:   f64 = 2.5;   // m/s
const BELT_SPEED:  f64 = 1.5;   // m/s for the whole run

const SCANNER: CheckpointId = CheckpointId(0);
const SCALE:   CheckpointId = CheckpointId(1);
const DIVERT:  CheckpointId = CheckpointId(2);

fn checkpoint_name(point: EventPoint) -> &'static str {
    match point {
        EventPoint::Checkpoint(SCANNER) => "scanner",
        EventPoint::Checkpoint(SCALE) => "scale",
        EventPoint::Checkpoint(DIVERT) => "diverter",
        EventPoint::Checkpoint(_) => "unknown checkpoint",
        EventPoint::SegmentEnd => "end of belt",
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let mut belt: ConveyorModel<&'static str> = ConveyorModel::new(
        BELT_LENGTH,
        MAX_SPEED,
        [(SCANNER, 20.0), (SCALE, 45.0), (DIVERT, 80.0)],
        ModelId(0),
    )?;

    belt.set_speed(BELT_SPEED)?;
    for (i, (label, pos)) in [("envelope", 0.0), ("small box", 12.0), ("crate", 30.0)]
        .into_iter()
        .enumerate()
    {
        belt.put_object(ObjectId(i as u64), label, pos)?;
    }
    println!(
        "belt {:.0} m, speed {:.1} m/s, {} parcels loaded",
        BELT_LENGTH,
        belt.speed(),
        belt.len()
    );

    let mut now = 0.0;
    while !belt.is_empty() {
        let eta = match belt.next_events(EventFilter::ALL, true).first() {
            Some(ev) => ev.eta,
            None => break,
        };

        // Reconciliation bracket: the scheduler has absorbed all changes and
        // may run the belt again.
        if belt.dirty() {
            belt.start_resolving()?;
            belt.end_resolving()?;
        }

        // Run the belt up to the next event, then settle positions.
        belt.resume(now)?;
        now += eta;
        belt.pause(now)?;

        // Everything sitting exactly on a checkpoint (or the end) right now.
        let arrivals: Vec<(ObjectId, &str, EventPoint)> = belt
            .immediate_events(EventFilter::ALL)
            .iter()
            .map(|ev| (ev.object, *ev.payload, ev.point))
            .collect();
        for (id, label, point) in arrivals {
            println!("t={now:6.2}s  {label} reached {}", checkpoint_name(point));
            if point == EventPoint::SegmentEnd {
                belt.remove_object(id)?;
            }
        }
    }

    println!("t={now:6.2}s  belt drained");
    Ok(())
}
