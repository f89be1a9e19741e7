use crate::{AudioSink, Ball, Config, Events, GameRng, Scorer, Sound};

/// Ball left the field on the left: the right player scores
pub fn touch_left(
    ball: &mut Ball,
    scorer: &mut impl Scorer,
    audio: &mut impl AudioSink,
    rng: &mut GameRng,
    config: &Config,
    events: &mut Events,
) {
    ball.center(config, rng);
    ball.flip_direction(audio);
    scorer.score_up_right();
    audio.play(Sound::Out);
    events.right_scored = true;
}

/// Ball left the field on the right: the left player scores
pub fn touch_right(
    ball: &mut Ball,
    scorer: &mut impl Scorer,
    audio: &mut impl AudioSink,
    rng: &mut GameRng,
    config: &Config,
    events: &mut Events,
) {
    ball.center(config, rng);
    ball.flip_direction(audio);
    scorer.score_up_left();
    audio.play(Sound::Out);
    events.left_scored = true;
}
