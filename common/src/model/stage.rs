use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage of a lead.
///
/// The set and order are fixed; the funnel views iterate `Stage::ALL` so
/// every stage-grouped output follows the same ordering. On the wire the
/// variants serialize lowercase (`"prospect"`, ...), matching the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Prospect,
    Qualified,
    Negotiation,
    Closed,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 4] = [
        Stage::Prospect,
        Stage::Qualified,
        Stage::Negotiation,
        Stage::Closed,
    ];

    /// Lowercase wire/CSS key, e.g. `"prospect"`.
    pub fn key(&self) -> &'static str {
        match self {
            Stage::Prospect => "prospect",
            Stage::Qualified => "qualified",
            Stage::Negotiation => "negotiation",
            Stage::Closed => "closed",
        }
    }

    /// Capitalized label for display, e.g. `"Prospect"`.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Prospect => "Prospect",
            Stage::Qualified => "Qualified",
            Stage::Negotiation => "Negotiation",
            Stage::Closed => "Closed",
        }
    }

    /// Parses a lowercase key back into a stage. Used by the stage
    /// `<select>` and the kanban drop targets.
    pub fn from_key(key: &str) -> Option<Stage> {
        Stage::ALL.iter().copied().find(|s| s.key() == key)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Stage::Prospect).unwrap(), "\"prospect\"");
        assert_eq!(serde_json::to_string(&Stage::Closed).unwrap(), "\"closed\"");
    }

    #[test]
    fn key_round_trips() {
        for stage in Stage::ALL {
            assert_eq!(Stage::from_key(stage.key()), Some(stage));
        }
        assert_eq!(Stage::from_key("Prospect"), None);
    }
}
