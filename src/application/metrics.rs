// Metric display formatting
use crate::domain::dashboard::DashboardMetrics;
use crate::domain::estimate::EstimateResult;
use serde::Deserialize;

const MAX_FRACTION_DIGITS: usize = 3;

/// Digit grouping convention for the cost display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum NumberLocale {
    /// 1,234,567
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// 12,34,567
    #[serde(rename = "en-IN")]
    EnIn,
}

#[derive(Debug, Clone)]
pub struct MetricFormatter {
    currency_symbol: String,
    locale: NumberLocale,
}

impl Default for MetricFormatter {
    fn default() -> Self {
        Self::new("₹", NumberLocale::EnUs)
    }
}

impl MetricFormatter {
    pub fn new(currency_symbol: impl Into<String>, locale: NumberLocale) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            locale,
        }
    }

    pub fn metrics(&self, result: &EstimateResult) -> DashboardMetrics {
        DashboardMetrics {
            total_cost: self.currency(result.costs.total),
            steel: format!("{} Tons", self.grouped(result.materials.steel_tons)),
            cement: format!("{} Bags", self.grouped(result.materials.cement_bags)),
        }
    }

    pub fn currency(&self, value: f64) -> String {
        format!("{}{}", self.currency_symbol, self.grouped(value))
    }

    /// Grouped with at most three fraction digits, trailing zeros dropped
    pub fn grouped(&self, value: f64) -> String {
        if !value.is_finite() {
            return plain_number(value);
        }

        let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut out = String::new();
        let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
        if value.is_sign_negative() && !is_zero {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, self.locale));
        if !frac_part.is_empty() {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }
}

fn group_digits(digits: &str, locale: NumberLocale) -> String {
    let len = digits.len();
    let boundary = |remaining: usize| match locale {
        NumberLocale::EnUs => remaining % 3 == 0,
        NumberLocale::EnIn => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
    };

    let mut out = String::with_capacity(len + len / 2);
    for (i, digit) in digits.chars().enumerate() {
        let remaining = len - i;
        if i > 0 && boundary(remaining) {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Number printed the way the browser stringifies it: positional between 1e-6 and 1e21,
/// exponent form outside that range
pub fn plain_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let name = if value > 0.0 { "Infinity" } else { "-Infinity" };
        name.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let exp = format!("{:e}", value);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        value.to_string()
    }
}
