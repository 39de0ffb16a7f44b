use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::StdRng;

use super::*;

/// Shuffles `mines` mine markers among the empty ones and lays them out row-major.
pub fn shuffled_mine_mask<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Array2<bool> {
    let total_tiles = usize::from(config.total_tiles());
    let mines = usize::from(config.mines).min(total_tiles);
    if mines < usize::from(config.mines) {
        log::warn!(
            "Capping {} mines at {}, the board has no room for more",
            config.mines,
            total_tiles
        );
    }

    let mut markers = vec![false; total_tiles];
    markers[..mines].fill(true);
    markers.shuffle(rng);

    Array2::from_shape_vec(cell((config.side, config.side)), markers)
        .expect("one marker per tile")
}

/// Generates from any caller-provided random source.
pub struct ShuffleGenerator<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> ShuffleGenerator<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> MinefieldGenerator for ShuffleGenerator<'_, R> {
    fn generate(self, config: GameConfig) -> MineLayout {
        let mask = shuffled_mine_mask(config, self.rng);
        MineLayout {
            mine_mask: mask,
            mine_count: config.mines.min(config.total_tiles()),
        }
    }
}

/// Purely random placement from a seed, the same seed always gives the same board.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Picks a fresh seed and logs it so the board can be replayed with `--seed`
    pub fn from_entropy() -> Self {
        let seed = rand::rng().random();
        log::info!("Using random seed {}", seed);
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let layout = ShuffleGenerator::new(&mut rng).generate(config);

        debug_assert_eq!(
            layout.mine_mask.iter().filter(|&&is_mine| is_mine).count(),
            usize::from(layout.mine_count),
        );
        log::debug!(
            "Generated {}x{} minefield with {} mines from seed {}",
            config.side,
            config.side,
            layout.mine_count,
            self.seed
        );
        layout
    }
}
