use std::fmt;

use crate::Color;

/// Who makes the decisions for a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Human,
    Computer,
}

/// A participant of a match. The side is fixed for the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub color: Color,
    pub kind: PlayerKind,
}

impl Player {
    pub fn human(color: Color) -> Player {
        Player {
            color,
            kind: PlayerKind::Human,
        }
    }

    pub fn computer(color: Color) -> Player {
        Player {
            color,
            kind: PlayerKind::Computer,
        }
    }

    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            PlayerKind::Human => write!(f, "{} (human)", self.color),
            PlayerKind::Computer => write!(f, "{} (computer)", self.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert!(Player::human(Color::Black).is_human());
        assert!(!Player::computer(Color::White).is_human());
    }

    #[test]
    fn to_string() {
        assert_eq!("sente (human)", Player::human(Color::Black).to_string());
        assert_eq!("gote (computer)", Player::computer(Color::White).to_string());
    }
}
