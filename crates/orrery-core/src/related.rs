//! Related-planet selection by diameter similarity
//!
//! Given a reference planet and a fetched catalog, picks the closest matches
//! by absolute diameter difference. The reference itself is never a match.

use crate::error::{Error, Result};
use crate::types::Planet;

/// Default number of related planets shown on a detail page
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Select up to `limit` planets closest in diameter to `reference`.
///
/// Candidates equal to the reference (by id) are excluded, the rest are
/// ordered by ascending `|candidate.diameter - reference.diameter|` and
/// truncated to `limit`. The sort is stable: candidates at equal distance
/// keep their catalog order.
///
/// Fails with [`Error::InvalidInput`] if the reference or any candidate has a
/// non-finite diameter, before any ordering is attempted.
pub fn select_related(
    reference: &Planet,
    candidates: &[Planet],
    limit: usize,
) -> Result<Vec<Planet>> {
    if !reference.diameter.is_finite() {
        return Err(Error::invalid_input(format!(
            "planet '{}' has a non-finite diameter",
            reference.id
        )));
    }
    if let Some(bad) = candidates.iter().find(|p| !p.diameter.is_finite()) {
        return Err(Error::invalid_input(format!(
            "planet '{}' has a non-finite diameter",
            bad.id
        )));
    }

    let distance = |p: &Planet| (p.diameter - reference.diameter).abs();

    let mut related: Vec<Planet> = candidates
        .iter()
        .filter(|p| p.id != reference.id)
        .cloned()
        .collect();

    // Distances are finite by the checks above, so total_cmp matches the
    // naive partial ordering; sort_by is stable.
    related.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
    related.truncate(limit);

    tracing::debug!(
        reference = %reference.id,
        candidates = candidates.len(),
        selected = related.len(),
        "selected related planets"
    );

    Ok(related)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn planet(id: &str, diameter: f64) -> Planet {
        Planet::new(id, format!("Planet {id}"), diameter)
    }

    fn ids(planets: &[Planet]) -> Vec<&str> {
        planets.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_orders_by_diameter_distance() {
        let reference = planet("P1", 100.0);
        let candidates = vec![
            planet("P1", 100.0),
            planet("P2", 90.0),
            planet("P3", 150.0),
            planet("P4", 40.0),
        ];

        let result = select_related(&reference, &candidates, 3).unwrap();
        assert_eq!(ids(&result), vec!["P2", "P3", "P4"]);
    }

    #[test]
    fn test_excludes_reference() {
        let reference = planet("P1", 100.0);
        let candidates = vec![planet("P1", 100.0), planet("P2", 100.0)];

        let result = select_related(&reference, &candidates, 3).unwrap();
        assert_eq!(ids(&result), vec!["P2"]);
    }

    #[test]
    fn test_limit_zero_is_empty() {
        let reference = planet("P1", 100.0);
        let candidates = vec![planet("P2", 90.0), planet("P3", 110.0)];

        let result = select_related(&reference, &candidates, 0).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_self_only_catalog_is_empty() {
        let reference = planet("P1", 100.0);
        let candidates = vec![planet("P1", 100.0)];

        let result = select_related(&reference, &candidates, 3).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_catalog_is_empty() {
        let reference = planet("P1", 100.0);
        let result = select_related(&reference, &[], 3).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_equal_distance_keeps_catalog_order() {
        let reference = planet("P1", 100.0);
        // 90 and 110 are both at distance 10; 90 comes first in the catalog.
        let candidates = vec![planet("P2", 90.0), planet("P3", 110.0)];

        let result = select_related(&reference, &candidates, 3).unwrap();
        assert_eq!(ids(&result), vec!["P2", "P3"]);

        // Swapped catalog order swaps the tie.
        let candidates = vec![planet("P3", 110.0), planet("P2", 90.0)];
        let result = select_related(&reference, &candidates, 3).unwrap();
        assert_eq!(ids(&result), vec!["P3", "P2"]);
    }

    #[test]
    fn test_non_finite_diameter_rejected() {
        let reference = planet("P1", 100.0);
        let candidates = vec![planet("P2", f64::NAN)];
        let err = select_related(&reference, &candidates, 3).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("P2"));

        let bad_reference = planet("P1", f64::INFINITY);
        let err = select_related(&bad_reference, &[planet("P2", 90.0)], 3).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    fn arb_planets(max: usize) -> impl Strategy<Value = Vec<Planet>> {
        prop::collection::vec((0u32..50, 0.0f64..1e6), 0..max)
            .prop_map(|entries| {
                entries
                    .into_iter()
                    .map(|(id, d)| planet(&format!("P{id}"), d))
                    .collect()
            })
    }

    proptest! {
        #[test]
        fn prop_never_contains_reference(candidates in arb_planets(32), d in 0.0f64..1e6) {
            let reference = planet("P7", d);
            let result = select_related(&reference, &candidates, 5).unwrap();
            prop_assert!(result.iter().all(|p| p.id != reference.id));
        }

        #[test]
        fn prop_length_is_min_of_limit_and_rest(
            candidates in arb_planets(32),
            limit in 0usize..10,
            d in 0.0f64..1e6,
        ) {
            let reference = planet("P7", d);
            let rest = candidates.iter().filter(|p| p.id != reference.id).count();
            let result = select_related(&reference, &candidates, limit).unwrap();
            prop_assert_eq!(result.len(), limit.min(rest));
        }

        #[test]
        fn prop_distances_non_decreasing(candidates in arb_planets(32), d in 0.0f64..1e6) {
            let reference = planet("P7", d);
            let result = select_related(&reference, &candidates, 8).unwrap();
            let dist = |p: &Planet| (p.diameter - reference.diameter).abs();
            prop_assert!(result.windows(2).all(|w| dist(&w[0]) <= dist(&w[1])));
        }

        #[test]
        fn prop_deterministic(candidates in arb_planets(32), d in 0.0f64..1e6) {
            let reference = planet("P7", d);
            let first = select_related(&reference, &candidates, 5).unwrap();
            let second = select_related(&reference, &candidates, 5).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
