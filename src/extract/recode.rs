use chrono::NaiveDate;

/// The source data records day and month only; the campaign ran in 2022.
const CONTACT_YEAR: i32 = 2022;

/// 1 iff the raw value is exactly `truthy`; any other label, an empty cell,
/// or a missing value is 0.
pub fn flag(raw: Option<&str>, truthy: &str) -> u8 {
    match raw {
        Some(v) if v == truthy => 1,
        _ => 0,
    }
}

/// Strip `.` and turn `-` into `_`, so `admin.` becomes `admin` and
/// `blue-collar` becomes `blue_collar`. Missing stays missing.
pub fn clean_job(raw: Option<&str>) -> Option<String> {
    raw.map(|v| v.replace('.', "").replace('-', "_"))
}

/// `.` becomes `_`; the literal `unknown` is a missing value, not a label.
pub fn clean_education(raw: Option<&str>) -> Option<String> {
    raw.map(|v| v.replace('.', "_")).filter(|v| v != "unknown")
}

fn month_number(name: &str) -> Option<u32> {
    match name.to_ascii_lowercase().as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

/// Build a `2022-MM-DD` date string from the split day-of-month and
/// month-name fields. Unrecognized month names, unparseable days, and
/// impossible dates (day 31 in April, Feb 29 in 2022) yield `None`.
pub fn contact_date(day: Option<&str>, month: Option<&str>) -> Option<String> {
    let day: u32 = day?.trim().parse().ok()?;
    let month = month_number(month?.trim())?;
    let date = NaiveDate::from_ymd_opt(CONTACT_YEAR, month, day)?;
    Some(date.format("%Y-%m-%d").to_string())
}
