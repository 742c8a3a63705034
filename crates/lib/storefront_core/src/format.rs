//! Display formatting shared by every front-end.

use crate::models::Product;

/// Vietnamese dong, formatted the way `vi-VN` currency formatting does:
/// whole units, `.` as the thousands separator, then a no-break space and `₫`.
pub fn format_vnd(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{amount}\u{a0}₫");
    }
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped.push_str("\u{a0}₫");
    grouped
}

/// `★ 4.5 (12)`, or `None` for unrated products.
pub fn format_rating(rating: Option<f64>, count: Option<i32>) -> Option<String> {
    let rating = rating.filter(|r| *r > 0.0)?;
    Some(match count.filter(|c| *c > 0) {
        Some(count) => format!("★ {rating:.1} ({count})"),
        None => format!("★ {rating:.1}"),
    })
}

pub fn stock_label(quantity: i64) -> String {
    if quantity <= 0 {
        "Out of stock".to_string()
    } else {
        format!("In stock: {quantity}")
    }
}

/// One-line listing row: `#id name  price  [rating]  (stock)`.
pub fn product_line(product: &Product) -> String {
    let mut line = format!(
        "#{} {}  {}",
        product.id,
        product.product_name,
        format_vnd(product.price)
    );
    if let Some(rating) = format_rating(product.rating, product.rating_count) {
        line.push_str("  ");
        line.push_str(&rating);
    }
    line.push_str(&format!("  ({})", stock_label(product.quantity)));
    line
}

/// Zero-based page request, sent as `noPage` / `sizePage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub size: u32,
}

impl Page {
    /// Catalog listings default to 30 per page.
    pub const CATALOG: Page = Page { number: 0, size: 30 };
    /// Admin user listings default to 20 per page.
    pub const ADMIN: Page = Page { number: 0, size: 20 };

    pub fn new(number: u32, size: u32) -> Self {
        Self { number, size }
    }

    /// Index of the first row on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.number) * u64::from(self.size)
    }

    pub fn next(self) -> Self {
        Self {
            number: self.number.saturating_add(1),
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            number: self.number.saturating_sub(1),
            ..self
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::CATALOG
    }
}
