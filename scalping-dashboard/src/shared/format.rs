/// Number formatting helpers shared by all panels
///
/// Missing or zero data formats as a zero placeholder ("$0.00", "0"), never
/// as an error.

/// Scale a number to a T/B/M/K suffix
pub fn scale_number(v: f64) -> (f64, &'static str) {
    let abs = v.abs();
    if abs >= 1e12 {
        (v / 1e12, "T")
    } else if abs >= 1e9 {
        (v / 1e9, "B")
    } else if abs >= 1e6 {
        (v / 1e6, "M")
    } else if abs >= 1e3 {
        (v / 1e3, "K")
    } else {
        (v, "")
    }
}

/// "$150.23"
pub fn format_price(v: f64) -> String {
    format!("${:.2}", finite_or_zero(v))
}

/// Dollar amount with T/B/M/K suffix, e.g. "$2.45T"
pub fn format_money_compact(v: f64) -> String {
    let (scaled, suffix) = scale_number(finite_or_zero(v));
    format!("${:.2}{}", scaled, suffix)
}

/// Share volume with B/M/K suffix, e.g. "45.23M"
///
/// Values below one thousand are printed as-is.
pub fn format_volume(v: u64) -> String {
    let f = v as f64;
    if f >= 1e9 {
        format!("{:.2}B", f / 1e9)
    } else if f >= 1e6 {
        format!("{:.2}M", f / 1e6)
    } else if f >= 1e3 {
        format!("{:.2}K", f / 1e3)
    } else {
        v.to_string()
    }
}

/// Contract counts in the options chain, e.g. "2.1K"
pub fn format_contracts(v: u64) -> String {
    if v >= 1000 {
        format!("{:.1}K", v as f64 / 1000.0)
    } else {
        v.to_string()
    }
}

/// Market cap given in billions: "$1.2T" or "$850.3B"
pub fn format_market_cap_billions(billions: f64) -> String {
    let billions = finite_or_zero(billions);
    if billions >= 1000.0 {
        format!("${:.1}T", billions / 1000.0)
    } else {
        format!("${:.1}B", billions)
    }
}

/// Signed value with explicit "+" for non-negative input
pub fn format_signed(v: f64) -> String {
    let v = finite_or_zero(v);
    if v >= 0.0 {
        format!("+{:.2}", v)
    } else {
        format!("{:.2}", v)
    }
}

/// Signed percentage, e.g. "+1.65%"
pub fn format_signed_pct(v: f64) -> String {
    format!("{}%", format_signed(v))
}

/// Round to cents
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
