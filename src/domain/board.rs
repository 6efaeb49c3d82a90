use crate::domain::{
    snapshot::Snapshot,
    sorting::sort_tickets,
    ticket::{status_icon, Ticket, DEFAULT_GROUP_ICON},
    view_state::{GroupBy, ViewState},
};
use std::collections::HashMap;

/// Label used when a ticket's owner is not part of the snapshot
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// A column of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    pub label: String,
    pub icon: &'static str,
    pub tickets: Vec<&'a Ticket>,
}

impl<'a> Group<'a> {
    fn new(label: String, icon: &'static str) -> Self {
        Self {
            label,
            icon,
            tickets: Vec::new(),
        }
    }

    /// Number of tickets in the column
    pub fn count(&self) -> usize {
        self.tickets.len()
    }
}

/// Computes the column label a ticket belongs to under the given grouping
pub fn group_label(snapshot: &Snapshot, ticket: &Ticket, grouping: GroupBy) -> String {
    match grouping {
        GroupBy::Status => ticket.status.clone(),
        GroupBy::User => snapshot
            .user_for(ticket)
            .map(|user| user.name.clone())
            .unwrap_or_else(|| UNASSIGNED_LABEL.to_string()),
        GroupBy::Priority => ticket.priority.label().to_string(),
    }
}

/// Projects a snapshot into ordered columns of ordered tickets
///
/// Columns appear in the order their first ticket appears in the snapshot.
/// Every ticket lands in exactly one column. The snapshot is only borrowed,
/// so projecting again with another view is always safe.
pub fn project<'a>(snapshot: &'a Snapshot, view: &ViewState) -> Vec<Group<'a>> {
    let mut groups: Vec<Group<'a>> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for ticket in &snapshot.tickets {
        let label = group_label(snapshot, ticket, view.grouping);
        let index = match positions.get(&label) {
            Some(&index) => index,
            None => {
                let icon = match view.grouping {
                    GroupBy::Status => status_icon(&label),
                    GroupBy::User | GroupBy::Priority => DEFAULT_GROUP_ICON,
                };
                positions.insert(label.clone(), groups.len());
                groups.push(Group::new(label, icon));
                groups.len() - 1
            }
        };
        groups[index].tickets.push(ticket);
    }

    for group in &mut groups {
        sort_tickets(&mut group.tickets, view.sorting);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ticket::Priority,
        user::User,
        view_state::OrderBy,
    };
    use std::collections::HashSet;

    fn sample_snapshot() -> Snapshot {
        Snapshot::new(
            vec![
                Ticket::new("CAM-1", "Update profile page")
                    .with_status("Todo")
                    .with_user("usr-1")
                    .with_priority(Priority::Low),
                Ticket::new("CAM-2", "Add language support")
                    .with_status("In progress")
                    .with_user("usr-2")
                    .with_priority(Priority::Urgent),
                Ticket::new("CAM-3", "Optimize queries")
                    .with_status("Todo")
                    .with_user("usr-ghost")
                    .with_priority(Priority::Medium),
                Ticket::new("CAM-4", "billing dashboard")
                    .with_status("Backlog")
                    .with_user("usr-1")
                    .with_priority(Priority::Urgent),
                Ticket::new("CAM-5", "Archive old tickets")
                    .with_status("Blocked")
                    .with_user("usr-2")
                    .with_priority(Priority::NoPriority),
            ],
            vec![User::new("usr-1", "Anoop sharma"), User::new("usr-2", "Yogesh")],
        )
    }

    fn labels(groups: &[Group<'_>]) -> Vec<String> {
        groups.iter().map(|g| g.label.clone()).collect()
    }

    fn ids<'a>(group: &Group<'a>) -> Vec<&'a str> {
        group.tickets.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_group_by_status_keeps_first_encounter_order() {
        let snapshot = sample_snapshot();
        let groups = project(&snapshot, &ViewState::new(GroupBy::Status, OrderBy::Priority));

        assert_eq!(labels(&groups), vec!["Todo", "In progress", "Backlog", "Blocked"]);
        assert_eq!(ids(&groups[0]), vec!["CAM-3", "CAM-1"]);
        assert_eq!(groups[0].count(), 2);
    }

    #[test]
    fn test_group_by_status_uses_status_icons() {
        let snapshot = sample_snapshot();
        let groups = project(&snapshot, &ViewState::default());

        assert_eq!(groups[0].icon, "📝");
        assert_eq!(groups[1].icon, "🔄");
        assert_eq!(groups[2].icon, "📋");
        assert_eq!(groups[3].icon, DEFAULT_GROUP_ICON);
    }

    #[test]
    fn test_group_by_user_resolves_names() {
        let snapshot = sample_snapshot();
        let groups = project(&snapshot, &ViewState::new(GroupBy::User, OrderBy::Title));

        assert_eq!(labels(&groups), vec!["Anoop sharma", "Yogesh", UNASSIGNED_LABEL]);
        assert_eq!(ids(&groups[0]), vec!["CAM-4", "CAM-1"]);
        assert_eq!(ids(&groups[1]), vec!["CAM-2", "CAM-5"]);
        assert!(groups.iter().all(|g| g.icon == DEFAULT_GROUP_ICON));
    }

    #[test]
    fn test_missing_user_goes_to_unassigned() {
        let snapshot = Snapshot::new(
            vec![Ticket::new("CAM-9", "Orphan").with_user("usr-deleted")],
            vec![User::new("usr-1", "Anoop sharma")],
        );
        let groups = project(&snapshot, &ViewState::new(GroupBy::User, OrderBy::Priority));

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "Unassigned");
        assert_eq!(ids(&groups[0]), vec!["CAM-9"]);
    }

    #[test]
    fn test_group_by_priority_uses_labels() {
        let snapshot = sample_snapshot();
        let groups = project(&snapshot, &ViewState::new(GroupBy::Priority, OrderBy::Title));

        assert_eq!(labels(&groups), vec!["Low", "Urgent", "Medium", "No priority"]);
        assert_eq!(ids(&groups[1]), vec!["CAM-2", "CAM-4"]);
    }

    #[test]
    fn test_priority_sort_within_group() {
        let snapshot = Snapshot::new(
            vec![
                Ticket::new("CAM-1", "a").with_priority(Priority::Low),
                Ticket::new("CAM-2", "b").with_priority(Priority::Urgent),
                Ticket::new("CAM-3", "c").with_priority(Priority::Medium),
            ],
            Vec::new(),
        );
        let groups = project(&snapshot, &ViewState::default());

        let priorities: Vec<u8> = groups[0].tickets.iter().map(|t| t.priority.value()).collect();
        assert_eq!(priorities, vec![4, 2, 1]);
    }

    #[test]
    fn test_title_sort_within_group() {
        let snapshot = Snapshot::new(
            vec![Ticket::new("CAM-1", "Banana"), Ticket::new("CAM-2", "apple")],
            Vec::new(),
        );
        let groups = project(&snapshot, &ViewState::new(GroupBy::Status, OrderBy::Title));

        let titles: Vec<&str> = groups[0].tickets.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["apple", "Banana"]);
    }

    #[test]
    fn test_every_ticket_lands_in_exactly_one_group() {
        let snapshot = sample_snapshot();

        for grouping in [GroupBy::Status, GroupBy::User, GroupBy::Priority] {
            for sorting in [OrderBy::Priority, OrderBy::Title] {
                let groups = project(&snapshot, &ViewState::new(grouping, sorting));
                let placed: Vec<&str> = groups.iter().flat_map(ids).collect();
                let unique: HashSet<&str> = placed.iter().copied().collect();

                assert_eq!(placed.len(), snapshot.tickets.len());
                assert_eq!(unique.len(), snapshot.tickets.len());
            }
        }
    }

    #[test]
    fn test_projection_is_deterministic_and_leaves_snapshot_untouched() {
        let snapshot = sample_snapshot();
        let before = snapshot.clone();
        let view = ViewState::new(GroupBy::User, OrderBy::Title);

        let first = project(&snapshot, &view);
        let second = project(&snapshot, &view);

        assert_eq!(first, second);
        assert_eq!(snapshot, before);
    }

    #[test]
    fn test_empty_snapshot_has_no_groups() {
        let snapshot = Snapshot::default();
        assert!(project(&snapshot, &ViewState::default()).is_empty());
    }
}
