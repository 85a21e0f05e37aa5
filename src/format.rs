//! Display helpers for player record fields.
//!
//! Every function here is total: unknown input falls back to a fixed default
//! instead of failing.

use std::collections::HashMap;

use chrono::DateTime;
use once_cell::sync::Lazy;

/// Rank point ceiling used for the Battle Royale progress bar.
pub const BR_RANK_POINT_CAP: i64 = 200_000;
/// Rank point ceiling used for the Clash Squad progress bar.
pub const CS_RANK_POINT_CAP: i64 = 100_000;

static RANK_NAMES: Lazy<HashMap<i64, &str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(100, "Bronze I");
    m.insert(110, "Bronze II");
    m.insert(120, "Bronze III");
    m.insert(200, "Silver I");
    m.insert(210, "Silver II");
    m.insert(220, "Silver III");
    m.insert(300, "Gold I");
    m.insert(310, "Gold II");
    m.insert(320, "Gold III");
    m.insert(400, "Platinum I");
    m.insert(410, "Platinum II");
    m.insert(420, "Platinum III");
    m.insert(500, "Diamond I");
    m.insert(510, "Diamond II");
    m.insert(520, "Diamond III");
    m.insert(600, "Heroic");
    m.insert(700, "Grand Master");
    m
});

pub fn rank_name(code: i64) -> &'static str {
    RANK_NAMES.get(&code).copied().unwrap_or("Unranked")
}

/// Abbreviates large counters.
///
/// # Examples
/// ```
/// use ff_player_lookup::format::format_number;
///
/// assert_eq!(format_number(1_500_000), "1.5M");
/// assert_eq!(format_number(2_500), "2.5K");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(value: i64) -> String {
    if value >= 1_000_000 {
        format!("{}M", round_one_decimal(value as f64 / 1_000_000.0))
    } else if value >= 1_000 {
        format!("{}K", round_one_decimal(value as f64 / 1_000.0))
    } else {
        group_thousands(value)
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats an integer with `,` between groups of three digits.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn from_code(code: &str) -> Self {
        match code {
            "Gender_MALE" => Self::Male,
            _ => Self::Female,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Male => "fas fa-mars",
            Self::Female => "fas fa-venus",
        }
    }
}

pub fn mode_preference(code: &str) -> &'static str {
    match code {
        "ModePrefer_BR" => "Battle Royale",
        _ => "Clash Squad",
    }
}

pub fn reward_state(code: &str) -> &'static str {
    match code {
        "REWARD_STATE_UNCLAIMED" => "Unclaimed",
        _ => "Claimed",
    }
}

pub fn account_type(code: i64) -> &'static str {
    match code {
        1 => "Premium Account",
        _ => "Guest Account",
    }
}

pub fn toggle_label(enabled: bool) -> &'static str {
    if enabled {
        "Enabled"
    } else {
        "Disabled"
    }
}

/// Drops an upstream enum prefix such as `Language_` or `RankShow_`.
pub fn strip_enum_prefix<'a>(value: &'a str, prefix: &str) -> &'a str {
    value.strip_prefix(prefix).unwrap_or(value)
}

/// `Jan 02, 2024` for a unix timestamp in seconds, in UTC.
pub fn format_date(timestamp: i64) -> Option<String> {
    DateTime::from_timestamp(timestamp, 0).map(|d| d.format("%b %d, %Y").to_string())
}

pub fn format_year(timestamp: i64) -> Option<String> {
    DateTime::from_timestamp(timestamp, 0).map(|d| d.format("%Y").to_string())
}

/// Share of `cap` reached by `points`, clamped to `0..=100`.
pub fn rank_progress(points: i64, cap: i64) -> f64 {
    if cap <= 0 {
        return 0.0;
    }
    (points as f64 / cap as f64 * 100.0).clamp(0.0, 100.0)
}
