//! Currency and percentage formatting for presentation

/// Currency symbol and digit grouping for whole-unit amounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub group_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            group_separator: ',',
        }
    }
}

impl CurrencyFormat {
    /// Format whole units with digit grouping, e.g. `$1,309,867`
    pub fn format(&self, amount: i64) -> String {
        let digits = amount.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(ch);
        }

        let sign = if amount < 0 { "-" } else { "" };
        format!("{}{}{}", sign, self.symbol, grouped)
    }

    /// Format an entered amount as given: cents appear only when present,
    /// e.g. `$10,000` and `$250.50`
    pub fn format_amount(&self, amount: f64) -> String {
        let cents = (amount.abs() * 100.0).round() as i64;
        let mut text = self.format(cents / 100);
        if cents % 100 != 0 {
            text = format!("{}.{:02}", text, cents % 100);
        }
        if amount < 0.0 && cents != 0 {
            format!("-{}", text)
        } else {
            text
        }
    }
}

/// Format with the default `$` and `,` grouping
pub fn format_currency(amount: i64) -> String {
    CurrencyFormat::default().format(amount)
}

/// Short form for headline figures: `$1.31M`, `$220.0K`, `$950`
pub fn format_compact(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    if abs >= 1_000_000.0 {
        format!("{}${:.2}M", sign, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}${:.1}K", sign, abs / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs)
    }
}

/// Percentage as entered, without trailing zeros: `8%`, `3.5%`
pub fn format_percent(percent: f64) -> String {
    format!("{}%", percent)
}
