//! Rule switches where the reference behavior and the real game differ.

/// Selects which of the optional drop restrictions are enforced.
///
/// The promotion rules, the two-pawns rule and the Pawn/Knight rank
/// restrictions are always in force; only the two switches below vary.
///
/// # Examples
///
/// ```
/// use shogi_match::RuleSet;
///
/// assert_eq!(RuleSet::standard(), RuleSet::default());
/// assert!(!RuleSet::reference().forbid_pawn_drop_mate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet {
    /// Forbid dropping a Lance on the farthest rank.
    pub restrict_lance_drops: bool,
    /// Forbid a Pawn drop that checkmates immediately.
    pub forbid_pawn_drop_mate: bool,
}

impl RuleSet {
    /// The rules of the real game.
    pub const fn standard() -> RuleSet {
        RuleSet {
            restrict_lance_drops: true,
            forbid_pawn_drop_mate: true,
        }
    }

    /// Only the Pawn and Knight drop restrictions, without the pawn-drop-mate
    /// rule.
    pub const fn reference() -> RuleSet {
        RuleSet {
            restrict_lance_drops: false,
            forbid_pawn_drop_mate: false,
        }
    }

    /// Looks a rule set up by name (`standard` or `reference`).
    pub fn from_name(name: &str) -> Option<RuleSet> {
        match name {
            "standard" => Some(RuleSet::standard()),
            "reference" => Some(RuleSet::reference()),
            _ => None,
        }
    }
}

impl Default for RuleSet {
    fn default() -> RuleSet {
        RuleSet::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name() {
        assert_eq!(Some(RuleSet::standard()), RuleSet::from_name("standard"));
        assert_eq!(Some(RuleSet::reference()), RuleSet::from_name("reference"));
        assert_eq!(None, RuleSet::from_name("Standard"));
        assert_eq!(None, RuleSet::from_name(""));
    }
}
