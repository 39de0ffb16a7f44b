use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}

/// Hands back a layout that was decided up front, mostly useful for tests and replays.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinefieldGenerator(pub MineLayout);

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        if self.0.game_config() != config {
            log::warn!(
                "Fixed layout {:?} does not match requested {:?}, using the layout",
                self.0.game_config(),
                config
            );
        }
        self.0
    }
}
