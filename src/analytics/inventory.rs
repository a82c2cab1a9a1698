//! # Inventory Category Aggregator
//!
//! Converts raw per-category counts into percentage-of-total shares for the
//! dashboard and pie chart. Counting fans out one query per distinct
//! category, all issued concurrently.

use std::collections::BTreeMap;

use futures::future::try_join_all;

use crate::error::Result;
use crate::store::ProductStore;

/// Percentage-of-total share per category.
///
/// A zero total would make every share 0/0; the defined result is 0 for all
/// categories rather than NaN or an error.
pub fn distribution(counts: &[(String, u64)], total: u64) -> BTreeMap<String, i64> {
    counts
        .iter()
        .map(|(category, count)| {
            let percent = if total == 0 {
                0
            } else {
                ((*count as f64 / total as f64) * 100.0).round() as i64
            };
            (category.clone(), percent)
        })
        .collect()
}

/// Count every listed category concurrently, then convert to shares.
/// Callers already hold the distinct category list and the total product
/// count from their own fan-out, so neither is re-queried here.
pub async fn breakdown(
    products: &dyn ProductStore,
    categories: &[String],
    total: u64,
) -> Result<BTreeMap<String, i64>> {
    let counts =
        try_join_all(categories.iter().map(|c| products.count_in_category(c))).await?;

    let pairs: Vec<(String, u64)> = categories.iter().cloned().zip(counts).collect();
    Ok(distribution(&pairs, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> Vec<(String, u64)> {
        pairs.iter().map(|(c, n)| (c.to_string(), *n)).collect()
    }

    #[test]
    fn test_even_split() {
        let shares = distribution(&counts(&[("A", 2), ("B", 2)]), 4);
        assert_eq!(shares.get("A"), Some(&50));
        assert_eq!(shares.get("B"), Some(&50));
    }

    #[test]
    fn test_zero_total_yields_zero_shares() {
        let shares = distribution(&counts(&[("A", 0), ("B", 0)]), 0);
        assert_eq!(shares.get("A"), Some(&0));
        assert_eq!(shares.get("B"), Some(&0));
    }

    #[test]
    fn test_rounding() {
        let shares = distribution(&counts(&[("laptop", 1), ("audio", 2)]), 3);
        assert_eq!(shares.get("laptop"), Some(&33));
        assert_eq!(shares.get("audio"), Some(&67));
    }

    #[tokio::test]
    async fn test_breakdown_counts_concurrently() {
        use crate::models::NewProduct;
        use crate::store::MemoryStore;

        let store = MemoryStore::new();
        for (name, category) in [("a", "laptop"), ("b", "laptop"), ("c", "audio"), ("d", "camera")] {
            ProductStore::insert(
                &store,
                NewProduct {
                    name: name.to_string(),
                    photo: format!("{name}.jpg"),
                    price: 100,
                    stock: 1,
                    category: category.to_string(),
                }
                .into_product(chrono::Utc::now()),
            )
            .await
            .unwrap();
        }

        let categories = store.distinct_categories().await.unwrap();
        let total = ProductStore::count(&store).await.unwrap();
        let shares = breakdown(&store, &categories, total).await.unwrap();

        assert_eq!(shares.get("laptop"), Some(&50));
        assert_eq!(shares.get("audio"), Some(&25));
        assert_eq!(shares.get("camera"), Some(&25));
    }
}
