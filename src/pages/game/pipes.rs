use std::collections::VecDeque;

use rand::Rng;

use crate::constants::game;
use crate::pages::game::hitbox::Hitbox;

/// One top and one bottom pipe sharing a horizontal position. The gap
/// between them has a fixed height; only its vertical placement varies.
#[derive(Debug, Clone, Copy)]
pub struct PipePair {
    x: f32,
    gap_top: f32,
}

impl PipePair {
    pub fn new(x: f32, gap_top: f32) -> Self {
        PipePair { x, gap_top }
    }

    pub fn gap_top(&self) -> f32 {
        self.gap_top
    }

    pub fn right(&self) -> f32 {
        self.x + game::PIPE_WIDTH
    }

    pub fn upper(&self) -> Hitbox {
        Hitbox::new(self.x, 0.0, game::PIPE_WIDTH, self.gap_top)
    }

    pub fn lower(&self) -> Hitbox {
        let top = self.gap_top + game::GAP_HEIGHT;
        Hitbox::new(self.x, top, game::PIPE_WIDTH, game::LOGICAL_HEIGHT - top)
    }
}

/// The live pipes of one round, ordered left to right. Spawning is driven by
/// elapsed wall-clock time so cadence does not depend on the tick rate.
#[derive(Debug, Default)]
pub struct PipeField {
    pairs: VecDeque<PipePair>,
    last_spawn_ms: u64,
}

impl PipeField {
    pub fn new() -> Self {
        PipeField::default()
    }

    pub fn reset(&mut self) {
        self.pairs.clear();
        self.last_spawn_ms = 0;
    }

    /// Spawns one pair at the right edge once the spawn interval has passed.
    /// `now_ms` is milliseconds since round start; the gap placement comes
    /// from the injected `rng`.
    pub fn try_spawn<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> bool {
        if now_ms - self.last_spawn_ms <= game::SPAWN_INTERVAL_MS {
            return false;
        }

        let gap_top = rng.gen_range(game::GAP_TOP_MIN..game::LOGICAL_HEIGHT - game::GAP_HEIGHT);
        self.pairs.push_back(PipePair::new(game::LOGICAL_WIDTH, gap_top));
        self.last_spawn_ms = now_ms;
        true
    }

    /// Moves every pair left by `scroll_speed` and removes the ones whose
    /// right edge has left the screen. Returns one point per removed pair;
    /// removal happens at most once per pair, in spawn order.
    pub fn advance(&mut self, scroll_speed: f32) -> u32 {
        for pair in self.pairs.iter_mut() {
            pair.x -= scroll_speed;
        }

        let mut points = 0;
        while let Some(pair) = self.pairs.front() {
            if pair.right() >= 0.0 {
                break;
            }
            self.pairs.pop_front();
            points += 1;
        }
        points
    }

    pub fn collides(&self, hitbox: &Hitbox) -> bool {
        self.pairs.iter().any(|pair| hitbox.intersects(&pair.upper()) || hitbox.intersects(&pair.lower()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PipePair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_spawn_waits_for_interval() {
        let mut field = PipeField::new();
        let mut rng = test_rng();

        assert!(!field.try_spawn(game::SPAWN_INTERVAL_MS, &mut rng));
        assert!(field.is_empty());

        assert!(field.try_spawn(game::SPAWN_INTERVAL_MS + 1, &mut rng));
        assert_eq!(field.len(), 1);

        // The timer was reset by the spawn.
        assert!(!field.try_spawn(game::SPAWN_INTERVAL_MS + 2, &mut rng));
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn test_spawned_gap_stays_in_bounds() {
        let mut rng = test_rng();
        for _ in 0..100 {
            let mut field = PipeField::new();
            field.try_spawn(game::SPAWN_INTERVAL_MS + 1, &mut rng);
            let pair = field.iter().next().unwrap();
            assert!(pair.gap_top() >= game::GAP_TOP_MIN);
            assert!(pair.gap_top() < game::LOGICAL_HEIGHT - game::GAP_HEIGHT);
        }
    }

    #[test]
    fn test_gap_height_is_constant() {
        let mut field = PipeField::new();
        let mut rng = test_rng();
        field.try_spawn(game::SPAWN_INTERVAL_MS + 1, &mut rng);

        let pair = field.iter().next().unwrap();
        let gap = pair.lower().y - pair.upper().bottom();
        assert!((gap - game::GAP_HEIGHT).abs() < f32::EPSILON);
    }

    #[test]
    fn test_same_seed_places_same_gap() {
        let mut first = PipeField::new();
        let mut second = PipeField::new();
        let mut rng_a = ChaCha8Rng::seed_from_u64(7);
        let mut rng_b = ChaCha8Rng::seed_from_u64(7);

        first.try_spawn(game::SPAWN_INTERVAL_MS + 1, &mut rng_a);
        second.try_spawn(game::SPAWN_INTERVAL_MS + 1, &mut rng_b);

        let a = first.iter().next().unwrap().gap_top();
        let b = second.iter().next().unwrap().gap_top();
        assert!((a - b).abs() < f32::EPSILON);
    }

    #[test]
    fn test_advance_moves_pairs_exactly() {
        let mut field = PipeField::new();
        let mut rng = test_rng();
        field.try_spawn(game::SPAWN_INTERVAL_MS + 1, &mut rng);

        let before = field.iter().next().unwrap().upper().x;
        let points = field.advance(3.0);
        let after = field.iter().next().unwrap().upper().x;

        assert_eq!(points, 0);
        assert!((before - after - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_pair_scores_once_when_fully_passed() {
        let mut field = PipeField::new();
        let mut rng = test_rng();
        field.try_spawn(game::SPAWN_INTERVAL_MS + 1, &mut rng);
        assert_eq!(field.len(), 1);

        let mut score = 0;
        let mut ticks = 0;
        while score == 0 {
            score += field.advance(3.0);
            ticks += 1;
            assert!(ticks < 1000, "pair never left the screen");
        }

        assert_eq!(score, 1);
        assert!(field.is_empty());

        // Nothing left to score on further advances.
        assert_eq!(field.advance(3.0), 0);
    }

    #[test]
    fn test_pair_survives_until_right_edge_passes_zero() {
        let mut field = PipeField::new();
        field.pairs.push_back(PipePair::new(-game::PIPE_WIDTH, 200.0));

        // Right edge exactly at zero: still alive.
        assert_eq!(field.advance(0.0), 0);
        assert_eq!(field.len(), 1);

        assert_eq!(field.advance(1.0), 1);
        assert!(field.is_empty());
    }

    #[test]
    fn test_collision_against_either_pipe() {
        let mut field = PipeField::new();
        field.pairs.push_back(PipePair::new(90.0, 150.0));

        // Inside the upper pipe.
        assert!(field.collides(&Hitbox::new(100.0, 50.0, 20.0, 20.0)));
        // Inside the lower pipe.
        assert!(field.collides(&Hitbox::new(100.0, 400.0, 20.0, 20.0)));
        // Inside the gap.
        assert!(!field.collides(&Hitbox::new(100.0, 200.0, 20.0, 20.0)));
        // Clear of the pair horizontally.
        assert!(!field.collides(&Hitbox::new(300.0, 50.0, 20.0, 20.0)));
    }

    #[test]
    fn test_reset_clears_pairs_and_timer() {
        let mut field = PipeField::new();
        let mut rng = test_rng();
        field.try_spawn(game::SPAWN_INTERVAL_MS + 1, &mut rng);
        field.reset();

        assert!(field.is_empty());
        // Timer restarts from zero, so an early spawn is rejected again.
        assert!(!field.try_spawn(100, &mut rng));
        assert!(field.try_spawn(game::SPAWN_INTERVAL_MS + 1, &mut rng));
    }
}
