//! The course catalog: categories mapped to offerings.

use crate::models::Offering;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// All known offerings, grouped by category.
///
/// Category order and offering order within a category follow insertion
/// order; the selection run iterates in exactly this order, so order is
/// part of the data. Categories and offerings are append-only within a
/// session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    categories: IndexMap<String, Vec<Offering>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an offering to a category, creating the category on first
    /// use.
    pub fn add_offering(&mut self, category: impl Into<String>, offering: Offering) {
        self.categories
            .entry(category.into())
            .or_default()
            .push(offering);
    }

    /// Offerings in a category, in insertion order. Empty when the
    /// category is unknown.
    pub fn offerings(&self, category: &str) -> &[Offering] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates categories and their offerings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Offering])> {
        self.categories
            .iter()
            .map(|(category, offerings)| (category.as_str(), offerings.as_slice()))
    }

    /// Number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of offerings across all categories.
    pub fn offering_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Whether the catalog holds no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offering(number: &str) -> Offering {
        let mut o = Offering::new(number).unwrap();
        o.add_meeting("M", "9:00am".parse().unwrap(), "10:00am".parse().unwrap())
            .unwrap();
        o
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut catalog = Catalog::new();
        catalog.add_offering("Math", offering("101"));
        catalog.add_offering("Art", offering("201"));
        catalog.add_offering("Math", offering("102"));

        let categories: Vec<&str> = catalog.iter().map(|(c, _)| c).collect();
        assert_eq!(categories, vec!["Math", "Art"]);

        let math: Vec<&str> = catalog
            .offerings("Math")
            .iter()
            .map(|o| o.number.as_str())
            .collect();
        assert_eq!(math, vec!["101", "102"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.offerings("Nope").is_empty());
        assert!(catalog.is_empty());
        assert_eq!(catalog.category_count(), 0);
        assert_eq!(catalog.offering_count(), 0);
    }

    #[test]
    fn test_counts() {
        let mut catalog = Catalog::new();
        catalog.add_offering("Math", offering("101"));
        catalog.add_offering("Math", offering("102"));
        catalog.add_offering("Art", offering("201"));
        assert_eq!(catalog.category_count(), 2);
        assert_eq!(catalog.offering_count(), 3);
    }

    #[test]
    fn test_serde_round_trip_keeps_order() {
        let mut catalog = Catalog::new();
        catalog.add_offering("Math", offering("101"));
        catalog.add_offering("Art", offering("201"));
        catalog.add_offering("Math", offering("102"));

        let json = serde_json::to_string(&catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);

        let categories: Vec<&str> = back.iter().map(|(c, _)| c).collect();
        assert_eq!(categories, vec!["Math", "Art"]);
    }
}
