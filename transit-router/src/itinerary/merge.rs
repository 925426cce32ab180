//! Rejoining legs that a walk split apart.
//!
//! The graph models a stop on a route as its own node, so a path that stays
//! on one route can still leave it briefly through a transfer node. The
//! result reads as "ride R1, walk, ride R1"; this pass folds such runs back
//! into a single ride.

use crate::domain::Leg;

/// Merge runs of same-route legs separated only by walk legs.
///
/// One forward scan. The walks inside a merged run are folded into the
/// surviving leg, so hop totals are preserved. Same-route legs that touch
/// directly, with no walk between them, are left alone.
pub fn merge_split_legs(legs: Vec<Leg>) -> Vec<Leg> {
    let mut merged: Vec<Leg> = Vec::with_capacity(legs.len());
    // Index in `merged` of the last riding leg, if any
    let mut last_ride: Option<usize> = None;

    for leg in legs {
        if leg.is_walk() {
            merged.push(leg);
            continue;
        }

        let rejoin = last_ride.filter(|&idx| {
            idx + 1 < merged.len() && merged[idx].riding_route() == leg.riding_route()
        });

        match rejoin {
            Some(idx) => {
                let walks: Vec<Leg> = merged.drain(idx + 1..).collect();
                let anchor = &mut merged[idx];
                for walk in &walks {
                    anchor.absorb(walk);
                }
                anchor.absorb(&leg);
            }
            None => {
                merged.push(leg);
                last_ride = Some(merged.len() - 1);
            }
        }
    }

    merged
}
