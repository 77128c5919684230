//! Team lookup results and roster entries.

use serde::Serialize;

use super::id::{PlayerId, TeamId};

/// A team the provider matched against a lookup query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamCandidate {
    pub id: TeamId,
    pub name: String,
    pub abbreviation: String,
}

impl std::fmt::Display for TeamCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, id {})", self.name, self.abbreviation, self.id)
    }
}

/// Outcome of resolving a team name or code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamLookup {
    /// Exactly one team matched.
    Resolved(TeamId),
    /// Several teams matched; the caller has to pick.
    Ambiguous(Vec<TeamCandidate>),
    NotFound,
}

impl TeamLookup {
    /// Classify a candidate list.
    #[must_use]
    pub fn from_candidates(mut candidates: Vec<TeamCandidate>) -> Self {
        match candidates.len() {
            0 => Self::NotFound,
            1 => Self::Resolved(candidates.remove(0).id),
            _ => Self::Ambiguous(candidates),
        }
    }
}

/// One player on a team's active roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub player_id: PlayerId,
    pub full_name: String,
    pub position_code: String,
}

/// Roster entries at `position_code`, in roster order.
#[must_use]
pub fn players_at_position<'a>(roster: &'a [RosterEntry], position_code: &str) -> Vec<&'a RosterEntry> {
    roster
        .iter()
        .filter(|entry| entry.position_code == position_code)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: u32, name: &str) -> TeamCandidate {
        TeamCandidate {
            id: TeamId::new(id),
            name: name.to_string(),
            abbreviation: name[..3].to_ascii_uppercase(),
        }
    }

    #[test]
    fn lookup_classifies_candidate_counts() {
        assert_eq!(TeamLookup::from_candidates(vec![]), TeamLookup::NotFound);
        assert_eq!(
            TeamLookup::from_candidates(vec![candidate(147, "Yankees")]),
            TeamLookup::Resolved(TeamId::new(147))
        );
        let both = vec![candidate(147, "Yankees"), candidate(121, "Mets")];
        assert_eq!(
            TeamLookup::from_candidates(both.clone()),
            TeamLookup::Ambiguous(both)
        );
    }

    #[test]
    fn position_filter_keeps_roster_order() {
        let roster = vec![
            RosterEntry {
                player_id: PlayerId::new(3),
                full_name: "Closer".into(),
                position_code: "1".into(),
            },
            RosterEntry {
                player_id: PlayerId::new(1),
                full_name: "Catcher".into(),
                position_code: "2".into(),
            },
            RosterEntry {
                player_id: PlayerId::new(2),
                full_name: "Starter".into(),
                position_code: "1".into(),
            },
        ];
        let pitchers = players_at_position(&roster, "1");
        let ids: Vec<u32> = pitchers.iter().map(|p| p.player_id.get()).collect();
        assert_eq!(ids, vec![3, 2]);
    }
}
