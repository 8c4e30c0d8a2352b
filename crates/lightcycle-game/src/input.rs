use crate::{Heading, PlayerIndex};

/// A turn request produced from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRequest {
    pub player: PlayerIndex,
    pub heading: Heading,
}

/// A key symbol and the turn it requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: &'static str,
    pub request: TurnRequest,
}

const fn bind(key: &'static str, player: PlayerIndex, heading: Heading) -> KeyBinding {
    KeyBinding {
        key,
        request: TurnRequest { player, heading },
    }
}

/// Blue steers with w/a/s/d, red with the arrow keys. Letter keys match the
/// typed character, so they are case sensitive.
pub static DEFAULT_BINDINGS: [KeyBinding; 8] = [
    bind("w", 0, Heading::North),
    bind("a", 0, Heading::West),
    bind("s", 0, Heading::South),
    bind("d", 0, Heading::East),
    bind("Up", 1, Heading::North),
    bind("Left", 1, Heading::West),
    bind("Down", 1, Heading::South),
    bind("Right", 1, Heading::East),
];

/// Maps key-down symbols to turn requests.
#[derive(Debug, Clone)]
pub struct InputMapper {
    bindings: &'static [KeyBinding],
}

impl InputMapper {
    pub fn new() -> Self {
        Self {
            bindings: &DEFAULT_BINDINGS,
        }
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        self.bindings
    }

    /// Turn request for `key`, or `None` for keys that are not bound.
    pub fn map(&self, key: &str) -> Option<TurnRequest> {
        self.bindings
            .iter()
            .find(|b| b.key == key)
            .map(|b| b.request)
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blue_keys() {
        let mapper = InputMapper::new();
        assert_eq!(
            mapper.map("w"),
            Some(TurnRequest {
                player: 0,
                heading: Heading::North
            })
        );
        assert_eq!(mapper.map("a").map(|r| r.heading), Some(Heading::West));
        assert_eq!(mapper.map("s").map(|r| r.heading), Some(Heading::South));
        assert_eq!(mapper.map("d").map(|r| r.heading), Some(Heading::East));
    }

    #[test]
    fn red_keys() {
        let mapper = InputMapper::new();
        for (key, heading) in [
            ("Up", Heading::North),
            ("Left", Heading::West),
            ("Down", Heading::South),
            ("Right", Heading::East),
        ] {
            assert_eq!(
                mapper.map(key),
                Some(TurnRequest { player: 1, heading }),
                "key {key}"
            );
        }
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mapper = InputMapper::new();
        assert_eq!(mapper.map("q"), None);
        assert_eq!(mapper.map("W"), None);
        assert_eq!(mapper.map(""), None);
        assert_eq!(mapper.map("space"), None);
    }

    #[test]
    fn every_player_has_four_bindings() {
        let mapper = InputMapper::new();
        for player in 0..2 {
            let mut headings: Vec<_> = mapper
                .bindings()
                .iter()
                .filter(|b| b.request.player == player)
                .map(|b| b.request.heading.degrees())
                .collect();
            headings.sort_unstable();
            assert_eq!(headings, vec![0, 90, 180, 270]);
        }
    }
}
