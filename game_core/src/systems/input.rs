use hecs::World;

use crate::{Key, Keyboard, Paddle, PaddleIntent, Side};

/// Keys that move a paddle up and down
pub fn paddle_keys(side: Side) -> (Key, Key) {
    match side {
        Side::Left => (Key::W, Key::S),
        Side::Right => (Key::Up, Key::Down),
    }
}

/// Read key state into each paddle's intent
pub fn ingest_inputs(world: &mut World, keys: &impl Keyboard) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        let (up, down) = paddle_keys(paddle.side());
        intent.up = keys.is_key_down(up);
        intent.down = keys.is_key_down(down);
    }
}
