use crate::rating::RatingRecord;

/// Combine two independently committed ratings for the same subject into
/// their mean, rounded to one decimal place.
///
/// Returns `None` while either side is incomplete: a missing rating is an
/// expected state on the review path, never an error, and is never
/// substituted with a partial or zero-filled average. Symmetric in its
/// arguments.
pub fn combine(a: &RatingRecord, b: &RatingRecord) -> Option<f64> {
    if !(a.complete && b.complete) {
        return None;
    }
    Some(round_to_tenth((a.total + b.total) as f64 / 2.0))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::rating::RatingSheet;

    fn rating(role: Role, values: &[u8]) -> RatingRecord {
        let mut sheet = RatingSheet::new(role, "tester").unwrap();
        for (key, value) in sheet.categories().iter().zip(values) {
            sheet.set(key, *value).unwrap();
        }
        sheet.commit().unwrap()
    }

    fn incomplete(role: Role) -> RatingRecord {
        let mut record = rating(role, &[2, 2, 2, 2, 2]);
        record.complete = false;
        record
    }

    #[test]
    fn test_combine_is_symmetric() {
        let a = rating(Role::PlatoonInstructor, &[10, 10, 10, 10, 10]);
        let b = rating(Role::ManOWar, &[8, 8, 8, 10, 10]);
        assert_eq!(combine(&a, &b), combine(&b, &a));
        // (50 + 44) / 2
        assert_eq!(combine(&a, &b), Some(47.0));
    }

    #[test]
    fn test_combine_across_unequal_scales() {
        let squad = rating(Role::SquadInstructor, &[10, 8, 6, 4, 2, 10, 8, 6, 4]);
        let platoon = rating(Role::PlatoonInstructor, &[10, 8, 6, 2, 2]);
        assert_eq!(squad.total, 58);
        assert_eq!(platoon.total, 28);
        assert_eq!(combine(&squad, &platoon), Some(43.0));
    }

    #[test]
    fn test_combine_keeps_one_decimal_for_odd_sums() {
        // The current scale only produces even totals, but combine's
        // contract is a mean to one decimal place whatever the totals.
        let mut a = rating(Role::PlatoonInstructor, &[10, 8, 6, 4, 2]);
        let mut b = rating(Role::ManOWar, &[10, 8, 6, 4, 2]);
        a.total = 41;
        b.total = 36;
        assert_eq!(combine(&a, &b), Some(38.5));
        assert_eq!(combine(&b, &a), Some(38.5));
    }

    #[test]
    fn test_combine_unavailable_when_either_side_incomplete() {
        let complete = rating(Role::PlatoonInstructor, &[10, 8, 6, 4, 2]);
        let pending = incomplete(Role::ManOWar);

        assert_eq!(combine(&complete, &pending), None);
        assert_eq!(combine(&pending, &complete), None);
        assert_eq!(combine(&pending, &pending), None);
    }

    #[test]
    fn test_combine_does_not_mutate_inputs() {
        let a = rating(Role::PlatoonInstructor, &[10, 8, 6, 4, 2]);
        let b = rating(Role::ManOWar, &[2, 4, 6, 8, 10]);
        let (a_before, b_before) = (a.clone(), b.clone());
        let _ = combine(&a, &b);
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }
}
