//! Role-scoped roster filtering and platoon statistics.
//!
//! Every listing starts from the viewer's role scope: platoon-bound
//! rater roles only ever see their own platoon, reviewer roles see the
//! whole camp. Free-text search and the platoon dropdown then narrow the
//! scoped set conjunctively - they can never widen it.

use std::collections::BTreeMap;

use crate::auth::SessionData;
use crate::models::{CampState, CorpsMember, Platoon};
use crate::utils::contains_ignore_case;

/// Optional narrowing filters a dashboard applies on top of role scope.
#[derive(Debug, Clone, Default)]
pub struct RosterQuery {
    /// Case-insensitive fragment matched against name, state code, and
    /// call-up number.
    pub search: Option<String>,
    /// Platoon dropdown selection.
    pub platoon: Option<Platoon>,
}

impl RosterQuery {
    pub fn search(fragment: impl Into<String>) -> Self {
        Self {
            search: Some(fragment.into()),
            platoon: None,
        }
    }
}

/// Members the viewer's role permits them to act on.
///
/// A rater with a platoon binding sees only that platoon; every other
/// viewer sees the full collection.
pub fn scoped<'a>(members: &'a [CorpsMember], viewer: &SessionData) -> Vec<&'a CorpsMember> {
    let binding = viewer.role.is_rater().then_some(viewer.platoon).flatten();
    members
        .iter()
        .filter(|member| binding.map_or(true, |platoon| member.platoon == platoon))
        .collect()
}

/// Role scope plus the dashboard's search and platoon filters, all
/// required to match.
pub fn filtered<'a>(
    members: &'a [CorpsMember],
    viewer: &SessionData,
    query: &RosterQuery,
) -> Vec<&'a CorpsMember> {
    scoped(members, viewer)
        .into_iter()
        .filter(|member| {
            query
                .platoon
                .map_or(true, |platoon| member.platoon == platoon)
        })
        .filter(|member| match query.search.as_deref() {
            Some(term) if !term.is_empty() => matches_search(member, term),
            _ => true,
        })
        .collect()
}

fn matches_search(member: &CorpsMember, term: &str) -> bool {
    contains_ignore_case(&member.surname, term)
        || member
            .other_names
            .as_deref()
            .is_some_and(|names| contains_ignore_case(names, term))
        || contains_ignore_case(&member.state_code, term)
        || contains_ignore_case(&member.call_up_no, term)
}

/// Member count per platoon, including empty platoons, for the
/// commandant dashboard summary.
pub fn platoon_counts(members: &[CorpsMember]) -> Vec<(Platoon, usize)> {
    Platoon::all()
        .map(|platoon| {
            let count = members.iter().filter(|m| m.platoon == platoon).count();
            (platoon, count)
        })
        .collect()
}

/// Member count per camp state of deployment.
pub fn camp_state_counts(members: &[CorpsMember]) -> BTreeMap<CampState, usize> {
    let mut counts = BTreeMap::new();
    for state in CampState::ALL {
        counts.insert(state, 0);
    }
    for member in members {
        *counts.entry(member.state_of_deployment).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::models::{Batch, MemberStatus, Role, StateOfOrigin};

    fn member(id: &str, surname: &str, platoon: u8, state: CampState) -> CorpsMember {
        CorpsMember {
            id: id.to_string(),
            state_code: format!("{}/25C/00{:02}", state.abbreviation(), platoon),
            platoon: Platoon::new(platoon).unwrap(),
            call_up_no: format!("NYSC/{}/{}", state.abbreviation(), id),
            surname: surname.to_string(),
            other_names: None,
            change_of_name: None,
            state_of_origin: StateOfOrigin::Ogun,
            state_of_deployment: state,
            batch: Batch::A,
            phone: None,
            qualification: "B.Sc.".to_string(),
            specialization: "Economics".to_string(),
            institutions: Vec::new(),
            status: MemberStatus::Submitted,
            ratings: Vec::new(),
            comments: BTreeMap::new(),
        }
    }

    fn viewer(role: Role, platoon: Option<u8>) -> SessionData {
        SessionData {
            user_id: "u-1".to_string(),
            username: "viewer".to_string(),
            full_name: "Test Viewer".to_string(),
            role,
            platoon: platoon.map(|p| Platoon::new(p).unwrap()),
            created_at: Utc::now(),
        }
    }

    fn camp() -> Vec<CorpsMember> {
        vec![
            member("0001", "ADEBAYO", 3, CampState::Lagos),
            member("0002", "OKORO", 3, CampState::Lagos),
            member("0003", "MUSA", 4, CampState::Lagos),
            member("0004", "EZE", 7, CampState::Ondo),
        ]
    }

    #[test]
    fn test_platoon_bound_rater_sees_only_own_platoon() {
        let members = camp();
        let rater = viewer(Role::PlatoonInstructor, Some(3));

        let visible = scoped(&members, &rater);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|m| m.platoon.number() == 3));
    }

    #[test]
    fn test_reviewer_sees_all_platoons() {
        let members = camp();
        let commandant = viewer(Role::Commandant, None);
        assert_eq!(scoped(&members, &commandant).len(), 4);

        // A platoon value on a reviewer session is not a restriction
        let soldier = viewer(Role::Soldier, Some(9));
        assert_eq!(scoped(&members, &soldier).len(), 4);
    }

    #[test]
    fn test_rater_without_binding_sees_all() {
        let members = camp();
        let squad = viewer(Role::SquadInstructor, None);
        assert_eq!(scoped(&members, &squad).len(), 4);
    }

    #[test]
    fn test_search_narrows_scoped_set() {
        let members = camp();
        let rater = viewer(Role::PlatoonInstructor, Some(3));

        let hits = filtered(&members, &rater, &RosterQuery::search("ade"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].surname, "ADEBAYO");

        // MUSA is platoon 4: search can never widen past the role scope
        let hits = filtered(&members, &rater, &RosterQuery::search("musa"));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_matches_state_code_and_call_up() {
        let members = camp();
        let commandant = viewer(Role::Commandant, None);

        let hits = filtered(&members, &commandant, &RosterQuery::search("od/25c"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].surname, "EZE");

        let hits = filtered(&members, &commandant, &RosterQuery::search("nysc/la/0003"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].surname, "MUSA");
    }

    #[test]
    fn test_filters_compose_conjunctively() {
        let members = camp();
        let commandant = viewer(Role::Commandant, None);

        let query = RosterQuery {
            search: Some("o".to_string()),
            platoon: Platoon::new(3).ok(),
        };
        // "o" matches ADEBAYO, OKORO, and EZE by surname or codes, but
        // only platoon 3 members survive the dropdown filter
        let hits = filtered(&members, &commandant, &query);
        assert!(hits.iter().all(|m| m.platoon.number() == 3));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_empty_query_is_role_scope_only() {
        let members = camp();
        let rater = viewer(Role::ManOWar, Some(7));
        let hits = filtered(&members, &rater, &RosterQuery::default());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].surname, "EZE");
    }

    #[test]
    fn test_platoon_counts_cover_all_ten() {
        let members = camp();
        let counts = platoon_counts(&members);
        assert_eq!(counts.len(), 10);
        assert_eq!(counts[2], (Platoon::new(3).unwrap(), 2));
        assert_eq!(counts[9], (Platoon::new(10).unwrap(), 0));
    }

    #[test]
    fn test_camp_state_counts() {
        let members = camp();
        let counts = camp_state_counts(&members);
        assert_eq!(counts[&CampState::Lagos], 3);
        assert_eq!(counts[&CampState::Ondo], 1);
    }
}
