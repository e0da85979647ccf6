use crate::pieces::Side;

/// What happens when the side about to move has no legal play available.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub enum NoPlaysRule {
    /// Nothing happens; the game carries on and the stuck side simply cannot move.
    #[default]
    Ignore,
    /// The side with no available plays loses, ie, the side that just moved wins.
    Loss
}

/// A set of rules for a game of Ard-Rí. The board geometry, movement and capture rules are fixed;
/// only the parameters below may vary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ruleset {
    /// Which side goes first.
    pub starting_side: Side,
    /// Whether a side left with no legal plays loses.
    pub no_plays: NoPlaysRule
}

impl Default for Ruleset {
    fn default() -> Self {
        crate::preset::rules::ARD_RI
    }
}
