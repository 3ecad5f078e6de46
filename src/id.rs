//! Storage-assigned record identifiers.
//!
//! Ids are time-ordered UUIDv7 values in hyphenated lowercase form, so sorting
//! by id follows insertion order.

use uuid::Uuid;

pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

pub fn is_well_formed(id: &str) -> bool {
    Uuid::parse_str(id).is_ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique_v7() {
        let ids: Vec<String> = (0..1000).map(|_| new_id()).collect();
        assert!(ids.iter().all(|id| is_well_formed(id)));
        assert!(ids.iter().all(|id| Uuid::parse_str(id).unwrap().get_version_num() == 7));
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }

    #[test]
    fn ids_sort_in_creation_order() {
        let ids: Vec<String> = (0..100).map(|_| new_id()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("not-an-id"));
        assert!(!is_well_formed("abcdef0123456789abcdef01"));
        assert!(is_well_formed("01890a5d-ac96-774b-bcce-b302099a8057"));
    }
}
