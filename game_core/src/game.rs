use hecs::{Entity, World};

use crate::systems::{draw_ball, draw_field, draw_paddle, draw_score};
use crate::{
    create_ball, create_paddle, step, AudioSink, Ball, Canvas, Config, Events, Flow, GameRng, Key,
    Keyboard, Paddle, ScoreBoard, Side,
};

/// The whole game: owns every entity and is driven by the host once per frame
pub struct Pong {
    world: World,
    config: Config,
    score: ScoreBoard,
    events: Events,
    rng: GameRng,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl Pong {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let left = create_paddle(&mut world, Side::Left, &config);
        let right = create_paddle(&mut world, Side::Right, &config);
        let ball = create_ball(&mut world, Ball::new(&config, &mut rng));

        log::info!(
            "new game on a {}x{} field (seed {})",
            config.field_width,
            config.field_height,
            seed
        );

        Self {
            world,
            score: ScoreBoard::new(config.flash_duration),
            config,
            events: Events::new(),
            rng,
            left,
            right,
            ball,
        }
    }

    /// Logic tick: paddle input, then one ball move
    pub fn update(&mut self, keys: &impl Keyboard, audio: &mut impl AudioSink) -> Flow {
        let flow = if keys.is_key_down(Key::Escape) {
            log::info!("escape pressed, closing");
            Flow::Close
        } else {
            Flow::Continue
        };

        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            keys,
            audio,
        );

        if self.events.left_scored || self.events.right_scored {
            let scorer = if self.events.left_scored { "left" } else { "right" };
            log::debug!(
                "{} player scores: {} - {}",
                scorer,
                self.score.left(),
                self.score.right()
            );
        }
        if self.events.ball_hit_wall {
            log::trace!("ball bounced off a wall");
        }

        flow
    }

    /// Render tick: field, scores, paddles, ball
    pub fn draw(&mut self, canvas: &mut impl Canvas) {
        draw_field(canvas, &self.config);
        draw_score(canvas, &mut self.score, &self.config);

        for entity in [self.left, self.right] {
            if let Ok(paddle) = self.world.get::<&Paddle>(entity) {
                draw_paddle(canvas, &*paddle, &self.config);
            }
        }

        if let Ok(ball) = self.world.get::<&Ball>(self.ball) {
            draw_ball(canvas, &ball, &self.config);
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    /// What happened during the last update
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    /// Replace the ball's state, e.g. to set up a scenario
    pub fn set_ball(&mut self, ball: Ball) {
        if let Ok(mut current) = self.world.get::<&mut Ball>(self.ball) {
            *current = ball;
        }
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        self.world.get::<&Paddle>(entity).ok().map(|paddle| *paddle)
    }
}

impl Default for Pong {
    fn default() -> Self {
        Self::new(Config::new(), crate::Params::DEFAULT_SEED)
    }
}
