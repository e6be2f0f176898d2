use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

/// Parse a date of birth as typed on the intake form.
///
/// Accepts day-month-year (`31-12-1990`) and ISO year-month-day
/// (`1990-12-31`, optionally followed by a `T` time part). `-`, `/` and `.`
/// all work as separators. Fields are read explicitly so the result never
/// depends on locale.
pub fn parse_date_of_birth(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let date_part = text.split('T').next().unwrap_or(text);

    let fields: Vec<&str> = date_part.split(|c: char| matches!(c, '-' | '/' | '.')).map(str::trim).collect();
    if fields.len() != 3 || fields.iter().any(|f| f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit())) {
        debug!(dob = text, "Unrecognised date of birth");
        return None;
    }

    let (year, month, day) = if fields[0].len() == 4 {
        (fields[0], fields[1], fields[2])
    } else if fields[2].len() == 4 {
        (fields[2], fields[1], fields[0])
    } else {
        debug!(dob = text, "Date of birth needs a four digit year");
        return None;
    };

    let date = NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?);
    if date.is_none() {
        debug!(dob = text, "Date of birth is not a calendar date");
    }
    date
}

/// Whole years between two dates. One year is taken off while the birthday
/// has not yet come round in the as-of year.
pub fn age_between(dob: NaiveDate, as_of: NaiveDate) -> Option<u32> {
    if dob > as_of {
        return None;
    }
    let mut years = as_of.year() - dob.year();
    if (as_of.month(), as_of.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Age in years on `as_of` for a date of birth typed on the form
pub fn age_from_dob(dob: &str, as_of: NaiveDate) -> Option<u32> {
    age_between(parse_date_of_birth(dob)?, as_of)
}

/// Age in years today, by the local calendar
pub fn age_today(dob: &str) -> Option<u32> {
    age_from_dob(dob, Local::now().date_naive())
}
