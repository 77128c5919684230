//! Team lookup by name, city, abbreviation or code.

use super::dto::TeamDto;
use crate::domain::TeamCandidate;

/// Match `query` against a league's teams.
///
/// Case-insensitive. An exact hit on the full name, abbreviation, file code
/// or team code wins outright; otherwise every team with the query inside
/// any of its name fields is returned.
#[must_use]
pub fn match_teams(teams: &[TeamDto], query: &str) -> Vec<TeamCandidate> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let exact: Vec<TeamCandidate> = teams
        .iter()
        .filter(|team| {
            [&team.name, &team.abbreviation, &team.file_code, &team.team_code]
                .iter()
                .any(|field| field.to_lowercase() == needle)
        })
        .map(TeamCandidate::from)
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    teams
        .iter()
        .filter(|team| {
            [
                &team.name,
                &team.team_name,
                &team.location_name,
                &team.short_name,
                &team.abbreviation,
                &team.file_code,
                &team.team_code,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .map(TeamCandidate::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: u32, name: &str, team_name: &str, location: &str, abbr: &str, code: &str) -> TeamDto {
        TeamDto {
            id,
            name: name.into(),
            team_name: team_name.into(),
            location_name: location.into(),
            short_name: String::new(),
            abbreviation: abbr.into(),
            file_code: code.into(),
            team_code: code.into(),
        }
    }

    fn league() -> Vec<TeamDto> {
        vec![
            team(147, "New York Yankees", "Yankees", "Bronx", "NYY", "nyy"),
            team(121, "New York Mets", "Mets", "Flushing", "NYM", "nym"),
            team(111, "Boston Red Sox", "Red Sox", "Boston", "BOS", "bos"),
        ]
    }

    fn ids(candidates: &[TeamCandidate]) -> Vec<u32> {
        candidates.iter().map(|c| c.id.get()).collect()
    }

    #[test]
    fn substring_of_nickname_matches() {
        assert_eq!(ids(&match_teams(&league(), "yank")), vec![147]);
        assert_eq!(ids(&match_teams(&league(), "red sox")), vec![111]);
    }

    #[test]
    fn shared_city_is_ambiguous() {
        assert_eq!(ids(&match_teams(&league(), "New York")), vec![147, 121]);
    }

    #[test]
    fn exact_abbreviation_wins_over_substrings() {
        assert_eq!(ids(&match_teams(&league(), "BOS")), vec![111]);
        assert_eq!(ids(&match_teams(&league(), "nym")), vec![121]);

        let teams = vec![
            team(158, "Milwaukee Brewers", "Brewers", "Milwaukee", "MIL", "mil"),
            team(4124, "Milford Sound", "Sound", "Milford", "MFS", "mfs"),
        ];
        assert_eq!(ids(&match_teams(&teams, "mil")), vec![158]);
        assert_eq!(ids(&match_teams(&teams, "milw")), vec![158]);
        assert_eq!(ids(&match_teams(&teams, "milf")), vec![4124]);
    }

    #[test]
    fn unknown_or_blank_query_matches_nothing() {
        assert!(match_teams(&league(), "Expos").is_empty());
        assert!(match_teams(&league(), "  ").is_empty());
    }
}
