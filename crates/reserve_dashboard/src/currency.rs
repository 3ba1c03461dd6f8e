//! Currency formatting for dashboard cards and chart axes.

/// Formats a dollar amount for the summary cards: rounded to whole dollars
/// with thousands separators.
///
/// # Examples
///
/// ```rust
/// use reserve_dashboard::currency::format_usd;
///
/// assert_eq!(format_usd(52_500.0), "$52,500");
/// assert_eq!(format_usd(1_234_567.89), "$1,234,568");
/// assert_eq!(format_usd(0.4), "$0");
/// assert_eq!(format_usd(-900.0), "-$900");
/// ```
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// Formats a dollar amount for axis labels: compact with a magnitude suffix.
///
/// Values under one thousand print whole dollars; thousands and millions use
/// one decimal place with `K`/`M` suffixes.
///
/// # Examples
///
/// ```rust
/// use reserve_dashboard::currency::format_usd_compact;
///
/// assert_eq!(format_usd_compact(950.0), "$950");
/// assert_eq!(format_usd_compact(52_500.0), "$52.5K");
/// assert_eq!(format_usd_compact(1_200_000.0), "$1.2M");
/// assert_eq!(format_usd_compact(-52_500.0), "-$52.5K");
/// ```
pub fn format_usd_compact(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();

    if abs >= 1_000_000.0 {
        format!("{sign}${:.1}M", abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{sign}${:.1}K", abs / 1_000.0)
    } else {
        format!("{sign}${:.0}", abs)
    }
}

/// Inserts comma separators every three digits.
fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut groups = Vec::new();
    while value > 0 {
        groups.push(value % 1000);
        value /= 1000;
    }

    let mut out = groups.last().map(|g| g.to_string()).unwrap_or_default();
    for group in groups.iter().rev().skip(1) {
        out.push_str(&format!(",{group:03}"));
    }
    out
}
