use crate::solver::board::{Digit, Domain};

/// A strategy for the order in which a branching cell's candidate digits are
/// tried.
pub trait ValueOrderingHeuristic {
    /// Returns the digits of `domain` in the order they should be tried.
    /// The order must be deterministic for reproducible solves.
    fn order_values(&self, domain: &Domain) -> Vec<Digit>;
}

/// Tries digits in ascending order, the natural iteration order of a domain.
pub struct AscendingValueOrder;

impl ValueOrderingHeuristic for AscendingValueOrder {
    fn order_values(&self, domain: &Domain) -> Vec<Digit> {
        domain.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ascending_order_sorts_digits() {
        let domain: Domain = [7, 2, 9, 4]
            .into_iter()
            .map(|d| Digit::new(d).unwrap())
            .collect();
        let ordered = AscendingValueOrder.order_values(&domain);
        let raw: Vec<u8> = ordered.into_iter().map(Digit::get).collect();
        assert_eq!(raw, vec![2, 4, 7, 9]);
    }
}
