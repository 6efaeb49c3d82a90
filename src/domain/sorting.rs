use crate::domain::{ticket::Ticket, view_state::OrderBy};
use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Sorts a column of tickets in-place
///
/// The sort is stable: tickets that compare equal keep the relative order
/// they had in the snapshot.
///
/// # Examples
/// ```
/// use kanban_view::domain::sorting::sort_tickets;
/// use kanban_view::domain::{OrderBy, Priority, Ticket};
///
/// let low = Ticket::new("CAM-1", "A").with_priority(Priority::Low);
/// let urgent = Ticket::new("CAM-2", "B").with_priority(Priority::Urgent);
/// let mut column = vec![&low, &urgent];
///
/// sort_tickets(&mut column, OrderBy::Priority);
/// assert_eq!(column[0].id.as_str(), "CAM-2");
/// ```
pub fn sort_tickets(tickets: &mut [&Ticket], order: OrderBy) {
    match order {
        OrderBy::Priority => tickets.sort_by(|a, b| b.priority.cmp(&a.priority)),
        OrderBy::Title => tickets.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
}

/// Compares titles the way a reader would alphabetize them
///
/// Accents and letter case are ignored at first, so "apple" sorts before
/// "Banana" and "Éclair" before "fig". Titles that tie on base letters are
/// then ordered by their accents ("resume" before "résumé"). Titles that
/// differ only in case compare equal.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
}

/// Lower-cased canonical decomposition, accents kept as combining marks
fn folded(title: &str) -> impl Iterator<Item = char> + '_ {
    title.nfd().flat_map(char::to_lowercase)
}

/// Lower-cased canonical decomposition with combining marks removed
fn base_letters(title: &str) -> impl Iterator<Item = char> + '_ {
    folded(title).filter(|c| !is_combining_mark(*c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::Priority;

    fn titles<'a>(tickets: &[&'a Ticket]) -> Vec<&'a str> {
        tickets.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_sort_by_priority_descending() {
        let t1 = Ticket::new("CAM-1", "one").with_priority(Priority::Low);
        let t2 = Ticket::new("CAM-2", "four").with_priority(Priority::Urgent);
        let t3 = Ticket::new("CAM-3", "two").with_priority(Priority::Medium);
        let mut tickets = vec![&t1, &t2, &t3];

        sort_tickets(&mut tickets, OrderBy::Priority);

        assert_eq!(tickets[0].priority, Priority::Urgent);
        assert_eq!(tickets[1].priority, Priority::Medium);
        assert_eq!(tickets[2].priority, Priority::Low);
    }

    #[test]
    fn test_sort_by_priority_is_stable() {
        let t1 = Ticket::new("CAM-1", "first high").with_priority(Priority::High);
        let t2 = Ticket::new("CAM-2", "low").with_priority(Priority::Low);
        let t3 = Ticket::new("CAM-3", "second high").with_priority(Priority::High);
        let mut tickets = vec![&t1, &t2, &t3];

        sort_tickets(&mut tickets, OrderBy::Priority);

        assert_eq!(titles(&tickets), vec!["first high", "second high", "low"]);
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let t1 = Ticket::new("CAM-1", "Banana");
        let t2 = Ticket::new("CAM-2", "apple");
        let mut tickets = vec![&t1, &t2];

        sort_tickets(&mut tickets, OrderBy::Title);

        assert_eq!(titles(&tickets), vec!["apple", "Banana"]);
    }

    #[test]
    fn test_sort_by_title_mixed_case() {
        let t1 = Ticket::new("CAM-1", "zebra");
        let t2 = Ticket::new("CAM-2", "Apple");
        let t3 = Ticket::new("CAM-3", "BANANA");
        let mut tickets = vec![&t1, &t2, &t3];

        sort_tickets(&mut tickets, OrderBy::Title);

        assert_eq!(titles(&tickets), vec!["Apple", "BANANA", "zebra"]);
    }

    #[test]
    fn test_sort_by_title_is_stable_for_case_variants() {
        let t1 = Ticket::new("CAM-1", "Deploy");
        let t2 = Ticket::new("CAM-2", "deploy");
        let mut tickets = vec![&t1, &t2];

        sort_tickets(&mut tickets, OrderBy::Title);

        assert_eq!(tickets[0].id.as_str(), "CAM-1");
        assert_eq!(tickets[1].id.as_str(), "CAM-2");
    }

    #[test]
    fn test_sort_by_title_ignores_accents() {
        let t1 = Ticket::new("CAM-1", "zebra");
        let t2 = Ticket::new("CAM-2", "Éclair");
        let t3 = Ticket::new("CAM-3", "fig");
        let mut tickets = vec![&t1, &t2, &t3];

        sort_tickets(&mut tickets, OrderBy::Title);

        assert_eq!(titles(&tickets), vec!["Éclair", "fig", "zebra"]);
    }

    #[test]
    fn test_accents_break_ties_between_base_letters() {
        assert_eq!(compare_titles("resume", "résumé"), Ordering::Less);
        assert_eq!(compare_titles("Résumé", "resume"), Ordering::Greater);
        assert_eq!(compare_titles("Résumé", "résumé"), Ordering::Equal);
        // Precomposed and decomposed forms are the same title
        assert_eq!(compare_titles("caf\u{e9}", "cafe\u{301}"), Ordering::Equal);
    }

    #[test]
    fn test_compare_titles() {
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_titles("Zoo", "apple"), Ordering::Greater);
        assert_eq!(compare_titles("Same", "sAME"), Ordering::Equal);
        assert_eq!(compare_titles("App", "Apple"), Ordering::Less);
    }
}
