//! Tree planting offsets.
//!
//! `g` and `i` move along X by +25 and -25, `h` and `k` along Z by +10 and
//! -10. The placement grammar doubles every symbol per generation, so the
//! offset doubles with depth.

use glam::Vec2;

use crate::lsystem::LSystem;

pub const STEP_PRIMARY: f32 = 25.0;
pub const STEP_SECONDARY: f32 = 10.0;

/// Axiom planting on the positive side.
pub const POSITIVE_AXIOM: &str = "gh";
/// Axiom planting on the negative side.
pub const NEGATIVE_AXIOM: &str = "ik";

/// Sum the offsets of every placement symbol; others are ignored.
pub fn placement_offset(symbols: &str) -> Vec2 {
    symbols.chars().fold(Vec2::ZERO, |acc, c| match c {
        'g' => acc + Vec2::new(STEP_PRIMARY, 0.0),
        'h' => acc + Vec2::new(0.0, STEP_SECONDARY),
        'i' => acc - Vec2::new(STEP_PRIMARY, 0.0),
        'k' => acc - Vec2::new(0.0, STEP_SECONDARY),
        _ => acc,
    })
}

/// Offset of `axiom` grown to `depth`, where depth 1 is the axiom itself and
/// each further depth is one rewrite. Depth 0 is treated as depth 1.
pub fn placement_for(axiom: &str, depth: u32) -> Vec2 {
    let symbols = LSystem::placement(axiom).generate(depth.saturating_sub(1));
    placement_offset(&symbols)
}
