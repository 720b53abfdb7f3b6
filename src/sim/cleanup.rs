//! Removal of entities that fell past the bottom edge

use super::state::GameState;

/// Cull off-screen meteors and stars. Each culled meteor counts as dodged
/// and is scored; missed stars are dropped silently.
///
/// Returns the number of meteors dodged.
pub fn cull_offscreen(state: &mut GameState) -> usize {
    let meteor_limit = state.arena.y + state.tuning.meteor_cull_margin;
    let star_limit = state.arena.y + state.tuning.star_cull_margin;

    let before = state.meteors.len();
    state.meteors.retain(|m| m.pos.y <= meteor_limit);
    let dodged = before - state.meteors.len();

    state.stars.retain(|s| s.pos.y <= star_limit);

    let points = state.tuning.dodge_points.saturating_mul(dodged as u64);
    state.award(points);

    dodged
}
