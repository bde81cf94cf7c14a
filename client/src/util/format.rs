//! Display formatting for prices.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group digits in threes: `250000` → `"250,000"`.
#[must_use]
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Price in won with the currency sign: `"₩250,000"`.
#[must_use]
pub fn format_won(price: u32) -> String {
    format!("₩{}", group_thousands(price))
}
