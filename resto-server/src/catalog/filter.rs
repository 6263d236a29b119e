//! Filter Predicate Engine
//!
//! Evaluates each record of a collection against the active filter
//! criteria: an optional equality predicate (category / status / role /
//! location) and an optional free-text predicate matched
//! case-insensitively against one or more designated fields.
//!
//! A record is kept iff every *active* predicate holds (logical AND).
//! The sentinel value "Semua" deactivates the equality predicate, an
//! empty query string deactivates the text predicate. Filtering is
//! stable: the result preserves the input ordering.

use serde::Deserialize;
use shared::FILTER_ALL;

/// Filter criteria, deserialized from a list endpoint's query string.
///
/// `equals` carries the selected dropdown value (whose field is chosen by
/// the endpoint), `q` the free-text search box content.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterQuery {
    pub equals: Option<String>,
    pub q: Option<String>,
}

impl FilterQuery {
    pub fn new(equals: Option<&str>, q: Option<&str>) -> Self {
        Self {
            equals: equals.map(str::to_string),
            q: q.map(str::to_string),
        }
    }

    /// The equality value, if the predicate is active
    fn equality(&self) -> Option<&str> {
        match self.equals.as_deref() {
            None | Some("") | Some(FILTER_ALL) => None,
            Some(v) => Some(v),
        }
    }

    /// The lowercased query, if the text predicate is active
    fn query(&self) -> Option<String> {
        match self.q.as_deref() {
            None | Some("") => None,
            Some(q) => Some(q.to_lowercase()),
        }
    }
}

/// Filter `records` in place, keeping the records that satisfy every
/// active predicate.
///
/// * `equality_key` selects the field compared against `query.equals`
///   with exact string equality.
/// * `search_fields` lists the fields the free-text query is matched
///   against; a record passes if ANY of them contains the query,
///   case-insensitively.
///
/// An empty input yields an empty output; no matches yield an empty Vec,
/// never an error.
pub fn apply<T>(
    mut records: Vec<T>,
    query: &FilterQuery,
    equality_key: impl Fn(&T) -> &str,
    search_fields: impl Fn(&T) -> Vec<String>,
) -> Vec<T> {
    let equality = query.equality();
    let needle = query.query();

    // Fast path: identity when no predicate is active
    if equality.is_none() && needle.is_none() {
        return records;
    }

    records.retain(|record| {
        if let Some(value) = equality
            && equality_key(record) != value
        {
            return false;
        }
        if let Some(needle) = &needle {
            let hit = search_fields(record)
                .iter()
                .any(|field| field.to_lowercase().contains(needle));
            if !hit {
                return false;
            }
        }
        true
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Customer;

    fn sample_customers() -> Vec<Customer> {
        let raw: &[(i64, &str, &str, &str, &str)] = &[
            (1, "Budi Santoso", "budi@example.com", "081234567890", "Regular"),
            (2, "Siti Rahayu", "siti@example.com", "081234567891", "VIP"),
            (3, "Ahmad Hidayat", "ahmad@example.com", "081234567892", "Regular"),
            (4, "Dewi Lestari", "dewi@example.com", "081234567893", "VIP"),
            (5, "Rudi Hartono", "rudi@example.com", "081234567894", "Regular"),
            (6, "Rina Wijaya", "rina@example.com", "081234567895", "Regular"),
        ];
        raw.iter()
            .map(|(id, name, email, phone, ty)| Customer {
                id: *id,
                name: name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                customer_type: ty.to_string(),
                visits: 0,
                last_visit: "-".to_string(),
                points: 0,
                notes: String::new(),
            })
            .collect()
    }

    fn customer_search_fields(c: &Customer) -> Vec<String> {
        vec![c.name.clone(), c.email.clone(), c.phone.clone()]
    }

    #[test]
    fn no_active_predicates_is_identity() {
        let customers = sample_customers();
        let ids: Vec<i64> = customers.iter().map(|c| c.id).collect();

        for query in [
            FilterQuery::default(),
            FilterQuery::new(Some(FILTER_ALL), None),
            FilterQuery::new(Some(""), Some("")),
        ] {
            let out = apply(
                sample_customers(),
                &query,
                |c| &c.customer_type,
                customer_search_fields,
            );
            let out_ids: Vec<i64> = out.iter().map(|c| c.id).collect();
            assert_eq!(out_ids, ids);
        }
    }

    #[test]
    fn equality_predicate_is_sound_and_complete() {
        let query = FilterQuery::new(Some("VIP"), None);
        let out = apply(
            sample_customers(),
            &query,
            |c| &c.customer_type,
            customer_search_fields,
        );
        // 2 VIP of 6, order preserved
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, 2);
        assert_eq!(out[1].id, 4);
        assert!(out.iter().all(|c| c.customer_type == "VIP"));
    }

    #[test]
    fn text_predicate_matches_any_designated_field() {
        // Matches email of customer 3 only
        let query = FilterQuery::new(None, Some("AHMAD"));
        let out = apply(
            sample_customers(),
            &query,
            |c| &c.customer_type,
            customer_search_fields,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 3);

        // Matches by phone suffix
        let query = FilterQuery::new(None, Some("7895"));
        let out = apply(
            sample_customers(),
            &query,
            |c| &c.customer_type,
            customer_search_fields,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Rina Wijaya");
    }

    #[test]
    fn predicates_combine_with_logical_and() {
        let query = FilterQuery::new(Some("Regular"), Some("r"));
        let out = apply(
            sample_customers(),
            &query,
            |c| &c.customer_type,
            customer_search_fields,
        );
        assert!(!out.is_empty());
        for c in &out {
            assert_eq!(c.customer_type, "Regular");
            let needle_hit = customer_search_fields(c)
                .iter()
                .any(|f| f.to_lowercase().contains('r'));
            assert!(needle_hit);
        }
    }

    #[test]
    fn empty_collection_yields_empty_result() {
        let query = FilterQuery::new(Some("VIP"), Some("budi"));
        let out = apply(
            Vec::<Customer>::new(),
            &query,
            |c| &c.customer_type,
            customer_search_fields,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn no_matches_yields_empty_result() {
        let query = FilterQuery::new(None, Some("tidak ada"));
        let out = apply(
            sample_customers(),
            &query,
            |c| &c.customer_type,
            customer_search_fields,
        );
        assert!(out.is_empty());
    }
}
