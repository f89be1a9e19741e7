use std::collections::HashSet;

use game_core::systems::{check_collisions, integrate_ball};
use game_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Default)]
struct Keys(HashSet<Key>);

impl Keyboard for Keys {
    fn is_key_down(&self, key: Key) -> bool {
        self.0.contains(&key)
    }
}

impl Keys {
    /// Random subset of the four paddle keys
    fn random(rng: &mut StdRng) -> Self {
        let mut held = HashSet::new();
        for key in [Key::Up, Key::Down, Key::W, Key::S] {
            if rng.gen_bool(0.4) {
                held.insert(key);
            }
        }
        Self(held)
    }
}

#[derive(Default)]
struct Sounds(Vec<Sound>);

impl AudioSink for Sounds {
    fn play(&mut self, sound: Sound) {
        self.0.push(sound);
    }
}

impl Sounds {
    fn count(&self, sound: Sound) -> usize {
        self.0.iter().filter(|s| **s == sound).count()
    }
}

/// Canvas that only counts calls
#[derive(Default)]
struct CountingCanvas {
    lines: usize,
    quads: usize,
    texts: Vec<String>,
}

impl Canvas for CountingCanvas {
    fn draw_line(&mut self, _: f32, _: f32, _: Color, _: f32, _: f32, _: Color) {
        self.lines += 1;
    }

    fn draw_quad(
        &mut self,
        _: f32,
        _: f32,
        _: Color,
        _: f32,
        _: f32,
        _: Color,
        _: f32,
        _: f32,
        _: Color,
        _: f32,
        _: f32,
        _: Color,
    ) {
        self.quads += 1;
    }

    fn text_width(&self, text: &str) -> f32 {
        text.len() as f32 * 20.0
    }

    fn draw_text(&mut self, text: &str, _: f32, _: f32, _: f32, _: f32, _: Color) {
        self.texts.push(text.to_owned());
    }
}

#[test]
fn test_paddles_stay_in_bounds() {
    let mut game = Pong::new(Config::new(), 1);
    let mut rng = StdRng::seed_from_u64(42);
    let config = game.config().clone();
    let half = config.paddle_height / 2.0;

    for _ in 0..5000 {
        game.update(&Keys::random(&mut rng), &mut NullAudio);
        for side in [Side::Left, Side::Right] {
            let paddle = game.paddle(side).unwrap();
            assert!(
                paddle.y() >= half && paddle.y() <= config.field_height - half,
                "{:?} paddle left the field: {}",
                side,
                paddle.y()
            );
            assert_eq!(paddle.x(), config.paddle_x(side));
        }
    }
}

#[test]
fn test_scores_never_decrease_and_one_side_per_goal() {
    let mut game = Pong::new(Config::new(), 3);
    let mut rng = StdRng::seed_from_u64(3);
    let mut audio = Sounds::default();
    let mut goals = 0;

    for _ in 0..20_000 {
        let before = (game.score().left(), game.score().right());
        game.update(&Keys::random(&mut rng), &mut audio);
        let after = (game.score().left(), game.score().right());

        assert!(after.0 >= before.0 && after.1 >= before.1);
        let gained = (after.0 - before.0) + (after.1 - before.1);
        assert!(gained <= 1, "At most one goal per tick");

        if gained == 1 {
            goals += 1;
            let events = game.events();
            assert!(events.left_scored != events.right_scored);
        }
    }

    assert!(goals > 0, "Random play should concede goals");
    assert_eq!(audio.count(Sound::Out), goals);
}

#[test]
fn test_ball_within_field_after_wall_checks() {
    let config = Config::new();
    let mut rng = GameRng::new(11);
    let mut keys_rng = StdRng::seed_from_u64(11);
    let mut ball = Ball::new(&config, &mut rng);
    let mut left = Paddle::new(Side::Left, &config);
    let mut right = Paddle::new(Side::Right, &config);
    let mut score = ScoreBoard::new(config.flash_duration);
    let mut events = Events::new();

    for _ in 0..20_000 {
        // Wander the paddles so both hits and misses happen
        for paddle in [&mut left, &mut right] {
            if keys_rng.gen_bool(0.5) {
                paddle.move_up(&config);
            } else {
                paddle.move_down(&config);
            }
        }

        events.clear();
        check_collisions(
            &mut ball,
            &left,
            &right,
            &mut score,
            &mut NullAudio,
            &mut rng,
            &config,
            &mut events,
        );

        assert!(ball.pos.x >= 0.0 && ball.pos.x <= config.field_width);
        // A paddle hit re-projects y along the trajectory and may leave the
        // field for one tick at steep angles; the next wall check clamps it.
        if !events.ball_hit_paddle {
            assert!(ball.pos.y >= config.min_ball_y() && ball.pos.y <= config.max_ball_y());
        }

        integrate_ball(&mut ball, &config);
    }
}

#[test]
fn test_goal_recenters_with_single_flip() {
    let mut game = Pong::new(Config::new(), 5);
    let mut ball = game.ball().unwrap();
    ball.pos = Vec2::new(4.0, 90.0);
    ball.direction = Side::Left;
    ball.angle = -30.0;
    game.set_ball(ball);

    let mut audio = Sounds::default();
    game.update(&Keys::default(), &mut audio);

    let ball = game.ball().unwrap();
    assert_eq!(game.score().right(), 1);
    assert_eq!(game.score().left(), 0);
    assert_eq!(ball.direction, Side::Right, "Direction flips exactly once");
    assert!((1.0..=44.0).contains(&ball.angle));
    // Re-centered, then moved one tick toward the right paddle
    assert_eq!(ball.pos.x, 325.0);
    let dy = ball.angle.to_radians().tan() * 5.0;
    assert!((ball.pos.y - (180.0 + dy)).abs() < 1e-3);
    assert_eq!(audio.count(Sound::Out), 1);
    assert_eq!(audio.count(Sound::Hit), 1);
}

#[test]
fn test_top_wall_bounce_plays_once() {
    let mut game = Pong::new(Config::new(), 5);
    let mut ball = game.ball().unwrap();
    ball.pos = Vec2::new(320.0, 5.0);
    ball.direction = Side::Right;
    ball.angle = 20.0;
    game.set_ball(ball);

    let mut audio = Sounds::default();
    game.update(&Keys::default(), &mut audio);

    let ball = game.ball().unwrap();
    assert_eq!(ball.angle, -20.0);
    assert_eq!(ball.direction, Side::Right);
    assert_eq!(audio.0, vec![Sound::Bounce]);
    assert!(game.events().ball_hit_wall);
}

#[test]
fn test_rally_off_left_paddle() {
    let mut game = Pong::new(Config::new(), 9);
    let mut ball = game.ball().unwrap();
    ball.pos = Vec2::new(29.0, 180.0);
    ball.direction = Side::Left;
    ball.angle = 0.0;
    game.set_ball(ball);

    let mut audio = Sounds::default();
    // 29 -> 24 without contact, then the hit on the next tick
    game.update(&Keys::default(), &mut audio);
    assert!(audio.0.is_empty());
    game.update(&Keys::default(), &mut audio);

    let ball = game.ball().unwrap();
    assert_eq!(ball.direction, Side::Right);
    assert_eq!(ball.angle, 10.0);
    assert_eq!(ball.pos.x, 30.0);
    assert_eq!(audio.0, vec![Sound::Hit]);
    assert!(game.events().ball_hit_paddle);
}

#[test]
fn test_flash_tied_to_draw_calls() {
    let mut game = Pong::new(Config::new(), 2);
    let mut ball = game.ball().unwrap();
    ball.pos.x = 636.0;
    ball.direction = Side::Right;
    game.set_ball(ball);

    game.update(&Keys::default(), &mut NullAudio);
    assert_eq!(game.score().left(), 1);
    assert_eq!(game.score().flash(), 7);

    for _ in 0..3 {
        game.update(&Keys::default(), &mut NullAudio);
    }
    assert_eq!(game.score().flash(), 7);

    let mut canvas = CountingCanvas::default();
    for _ in 0..7 {
        game.draw(&mut canvas);
    }
    assert_eq!(game.score().flash(), 0);
    // 7 flash overlays + 3 entity quads per draw
    assert_eq!(canvas.quads, 7 + 7 * 3);
    assert_eq!(canvas.lines, 7);
    assert_eq!(&canvas.texts[..2], &["1".to_owned(), "0".to_owned()]);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = Pong::new(Config::new(), 77);
    let mut b = Pong::new(Config::new(), 77);
    let mut keys_a = StdRng::seed_from_u64(8);
    let mut keys_b = StdRng::seed_from_u64(8);

    for _ in 0..2000 {
        a.update(&Keys::random(&mut keys_a), &mut NullAudio);
        b.update(&Keys::random(&mut keys_b), &mut NullAudio);
    }

    assert_eq!(a.ball(), b.ball());
    assert_eq!(a.score(), b.score());
}
