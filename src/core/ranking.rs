use crate::domain::model::Deal;

pub const DEFAULT_TOP_N: usize = 5;

/// Sorts by `compare_price - price`, largest first. The sort is stable, so
/// equal discounts keep their input order.
pub fn rank_deals(deals: &[Deal]) -> Vec<Deal> {
    let mut ranked = deals.to_vec();
    ranked.sort_by(|a, b| b.discount().total_cmp(&a.discount()));
    ranked
}

pub fn top_deals(deals: &[Deal], n: usize) -> Vec<Deal> {
    let mut ranked = rank_deals(deals);
    ranked.truncate(n);
    ranked
}

/// First-listed deal among those with the largest discount.
pub fn best_deal(deals: &[Deal]) -> Option<Deal> {
    top_deals(deals, 1).into_iter().next()
}
