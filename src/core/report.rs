use crate::domain::model::{Deal, ReportDate, SummaryEntry};

pub fn store_report_filename(store_id: &str) -> String {
    format!("ica_deals_{}.txt", store_id)
}

pub fn summary_filename(date: ReportDate) -> String {
    format!("ica_skanne_summary_v{}.txt", date.week)
}

pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

/// `"<rank>. <name> - <price> kr<unit>"`, plus `" (var <old> kr<unit>)"`
/// when the compare price is above the current price.
pub fn format_deal_line(rank: usize, deal: &Deal) -> String {
    let was = if deal.is_discounted() {
        format!(" (var {} kr{})", format_price(deal.compare_price), deal.unit)
    } else {
        String::new()
    };
    format!(
        "{}. {} - {} kr{}{}",
        rank,
        deal.name,
        format_price(deal.price),
        deal.unit,
        was
    )
}

pub fn format_summary_line(entry: &SummaryEntry) -> String {
    format!(
        "{}: {} - {} kr{}",
        entry.store_name,
        entry.deal.name,
        format_price(entry.deal.price),
        entry.deal.unit
    )
}

/// Store names already carry the chain prefix. Deals are expected ranked.
pub fn render_store_report(store_name: &str, top_deals: &[Deal], date: ReportDate) -> String {
    let mut out = format!(
        "{} – Erbjudanden vecka {} {}\n",
        store_name, date.week, date.year
    );
    out.push_str(&"=".repeat(50));
    out.push('\n');
    for (i, deal) in top_deals.iter().enumerate() {
        out.push_str(&format_deal_line(i + 1, deal));
        out.push('\n');
    }
    out
}

pub fn render_summary_report(province: &str, entries: &[SummaryEntry], date: ReportDate) -> String {
    let mut out = format!(
        "Top deals från alla ICA-butiker i {} – Vecka {} {}\n",
        province, date.week, date.year
    );
    out.push_str(&"=".repeat(60));
    out.push('\n');
    for entry in entries {
        out.push_str(&format_summary_line(entry));
        out.push('\n');
    }
    out
}
