/// Fixed currency prefix for every printed amount.
pub const CURRENCY_SYMBOL: &str = "£";

/// Half-up rounding to `places` decimals (0.125 -> 0.13 at 2 places).
pub fn round_half_up(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale + 0.5).floor() / scale
}

/// Round half-up first, then print with exactly `places` decimals.
///
/// The explicit rounding step matters: `format!("{:.2}")` alone rounds the
/// binary value and can land on the other side of a tie.
pub fn format_fixed(value: f64, places: u32) -> String {
    format!("{:.*}", places as usize, round_half_up(value, places))
}

pub fn format_pounds(amount: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_fixed(amount, 2))
}
