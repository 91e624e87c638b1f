use crate::{Ball, Config, Events, GameRng, Horizontal, RoundState, Side, Time, Vertical};
use hecs::World;
use rand::Rng;

/// Serve the parked ball once the round timer is due
pub fn serve_ball(
    world: &mut World,
    config: &Config,
    time: &Time,
    round: &mut RoundState,
    rng: &mut GameRng,
    events: &mut Events,
) {
    if !round.serve.is_due(time.now_ms) {
        return;
    }

    // Towards whoever lost the last round; the opening serve goes right
    let move_x = if round.previous_loser == Some(Side::User) {
        Horizontal::Left
    } else {
        Horizontal::Right
    };
    let move_y = if rng.0.gen_bool(0.5) {
        Vertical::Up
    } else {
        Vertical::Down
    };
    let (low, high) = config.serve_band();
    let start_y = rng.0.gen_range(low..high).floor();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.move_x = move_x;
        ball.move_y = move_y;
        ball.pos.y = start_y;
    }

    round.serve.clear();
    events.served = true;
    log::debug!("Served {:?}/{:?} from y={}", move_x, move_y, start_y);
}
