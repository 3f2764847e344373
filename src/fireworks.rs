//! Celebration shown once every region has been answered.

use std::time::Duration;

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use ratatui::style::Color;

pub const FRAME_INTERVAL: Duration = Duration::from_millis(80);
pub const FRAME_COUNT: usize = 50;

const BURSTS_PER_FRAME: usize = 8;
const SPARKS_PER_BURST: usize = 6;
const MARGIN: f64 = 8.0;

const COLORS: [Color; 7] = [
    Color::Red,
    Color::Yellow,
    Color::LightRed,
    Color::Cyan,
    Color::Magenta,
    Color::LightGreen,
    Color::White,
];

/// Canvas extent in the fireworks' own coordinate space.
pub const WIDTH: f64 = 100.0;
pub const HEIGHT: f64 = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Burst {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
    pub sparks: Vec<(f64, f64)>,
}

pub struct Fireworks {
    rng: StdRng,
    frame: usize,
    bursts: Vec<Burst>,
}

impl Fireworks {
    pub fn new(rng: StdRng) -> Self {
        let mut fireworks = Self {
            rng,
            frame: 0,
            bursts: Vec::new(),
        };
        fireworks.tick();
        fireworks
    }

    /// Replace the bursts with a fresh set. Does nothing once the show is over.
    pub fn tick(&mut self) {
        if self.is_done() {
            return;
        }
        self.frame += 1;
        self.bursts = (0..BURSTS_PER_FRAME)
            .map(|_| random_burst(&mut self.rng))
            .collect();
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn is_done(&self) -> bool {
        self.frame >= FRAME_COUNT
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }
}

fn random_burst(rng: &mut StdRng) -> Burst {
    let x = rng.gen_range(MARGIN..WIDTH - MARGIN);
    let y = rng.gen_range(MARGIN..HEIGHT - MARGIN);
    let radius = rng.gen_range(2.0..5.0);
    let color = *COLORS.choose(rng).unwrap_or(&Color::White);

    let sparks = (0..SPARKS_PER_BURST)
        .map(|_| {
            let sx = x + rng.gen_range(-radius * 2.0..=radius * 2.0);
            let sy = y + rng.gen_range(-radius * 2.0..=radius * 2.0);
            (sx.clamp(0.0, WIDTH), sy.clamp(0.0, HEIGHT))
        })
        .collect();

    Burst {
        x,
        y,
        radius,
        color,
        sparks,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_frames_stay_on_canvas() {
        let mut fireworks = Fireworks::new(StdRng::seed_from_u64(5));
        for _ in 0..10 {
            assert_eq!(fireworks.bursts().len(), BURSTS_PER_FRAME);
            for burst in fireworks.bursts() {
                assert!((MARGIN..WIDTH - MARGIN).contains(&burst.x));
                assert!((MARGIN..HEIGHT - MARGIN).contains(&burst.y));
                assert_eq!(burst.sparks.len(), SPARKS_PER_BURST);
                assert!(
                    burst
                        .sparks
                        .iter()
                        .all(|&(sx, sy)| (0.0..=WIDTH).contains(&sx) && (0.0..=HEIGHT).contains(&sy))
                );
            }
            fireworks.tick();
        }
    }

    #[test]
    fn test_show_stops_after_last_frame() {
        let mut fireworks = Fireworks::new(StdRng::seed_from_u64(1));
        for _ in 0..FRAME_COUNT * 2 {
            fireworks.tick();
        }
        assert!(fireworks.is_done());
        assert_eq!(fireworks.frame(), FRAME_COUNT);
    }

    #[test]
    fn test_same_seed_same_show() {
        let a = Fireworks::new(StdRng::seed_from_u64(9));
        let b = Fireworks::new(StdRng::seed_from_u64(9));
        assert_eq!(a.bursts(), b.bursts());
    }
}
