//! Linking date groups to the triggers and person mentions that select them.

use crate::groups::SpanGroup;
use crate::triggers::Trigger;

/// Return the first merged DATETIME group whose start offset is the expected
/// date position of any trigger or any PERSON group.
///
/// Triggers precede their date in typical sentence structure, so the first
/// qualifying group in reading order is taken and scanning stops there.
/// Returns `None` when no group qualifies.
#[must_use]
pub fn link(
    datetimes: &[SpanGroup],
    persons: &[SpanGroup],
    triggers: &[Trigger],
) -> Option<SpanGroup> {
    datetimes.iter().copied().find(|group| {
        triggers.iter().any(|t| t.next == group.start)
            || persons.iter().any(|p| p.next == Some(group.start))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(start: usize, end: usize, next: Option<usize>) -> SpanGroup {
        SpanGroup { start, end, next }
    }

    #[test]
    fn test_trigger_selects_group() {
        let dates = [group(20, 32, None)];
        let triggers = [Trigger {
            start: 10,
            end: 18,
            next: 20,
        }];
        assert_eq!(link(&dates, &[], &triggers), Some(dates[0]));
    }

    #[test]
    fn test_person_selects_group() {
        let dates = [group(5, 17, None)];
        let persons = [group(0, 2, Some(5))];
        assert_eq!(link(&dates, &persons, &[]), Some(dates[0]));
    }

    #[test]
    fn test_no_pointer_lands_on_group() {
        let dates = [group(20, 23, None)];
        let persons = [group(0, 4, Some(6))];
        let triggers = [Trigger {
            start: 6,
            end: 13,
            next: 15,
        }];
        assert_eq!(link(&dates, &persons, &triggers), None);
    }

    #[test]
    fn test_first_qualifying_group_wins() {
        let dates = [group(10, 19, Some(21)), group(34, 43, None)];
        let triggers = [
            Trigger {
                start: 24,
                end: 32,
                next: 34,
            },
            Trigger {
                start: 0,
                end: 8,
                next: 10,
            },
        ];
        assert_eq!(link(&dates, &[], &triggers), Some(dates[0]));
    }

    #[test]
    fn test_second_group_qualifies_alone() {
        let dates = [group(4, 7, Some(9)), group(30, 39, None)];
        let triggers = [Trigger {
            start: 20,
            end: 28,
            next: 30,
        }];
        assert_eq!(link(&dates, &[], &triggers), Some(dates[1]));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(link(&[], &[], &[]), None);
    }
}
