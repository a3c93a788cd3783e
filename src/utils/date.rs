use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime};

pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Accepts a plain calendar date or a full timestamp, keeping only the date.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, QUERY_DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|datetime| datetime.date())
}

pub fn format_query_date(date: NaiveDate) -> String {
    date.format(QUERY_DATE_FORMAT).to_string()
}

/// "Oct 16, 2026"
pub fn format_picker_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// "Fri, Oct 16"
pub fn format_slot_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// "October 2026"
pub fn format_month(first_of_month: NaiveDate) -> String {
    first_of_month.format("%B %Y").to_string()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn add_months(first_of_month: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        first_of_month.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        first_of_month.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(first_of_month)
}

/// Calendar cells for one month, weeks starting on Sunday. Leading cells before
/// the first of the month are `None`.
pub fn month_grid(first_of_month: NaiveDate) -> Vec<Option<NaiveDate>> {
    let leading = first_of_month.weekday().num_days_from_sunday() as usize;
    let mut cells = vec![None; leading];
    cells.extend(
        first_of_month
            .iter_days()
            .take_while(|day| day.month() == first_of_month.month())
            .map(Some),
    );
    cells
}

/// Serde adapter writing `YYYY-MM-DD` and reading anything `parse_calendar_date` understands.
pub mod lenient_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_query_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_calendar_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid calendar date '{}'", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calendar_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 10, 16);
        assert_eq!(parse_calendar_date("2026-10-16"), expected);
        assert_eq!(parse_calendar_date("2026-10-16T09:30:00.000Z"), expected);
        assert_eq!(parse_calendar_date("2026-10-16T09:30:00"), expected);
        assert_eq!(parse_calendar_date("16/10/2026"), None);
    }

    #[test]
    fn test_display_formats() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 6).unwrap();
        assert_eq!(format_query_date(date), "2026-10-06");
        assert_eq!(format_picker_date(date), "Oct 06, 2026");
        assert_eq!(format_slot_date(date), "Tue, Oct 6");
        assert_eq!(format_month(first_of_month(date)), "October 2026");
    }

    #[test]
    fn test_month_grid_layout() {
        let october = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let cells = month_grid(october);
        // 1 October 2026 is a Thursday.
        assert_eq!(cells.iter().take_while(|c| c.is_none()).count(), 4);
        assert_eq!(cells.iter().flatten().count(), 31);
        assert_eq!(cells.last().copied().flatten(), NaiveDate::from_ymd_opt(2026, 10, 31));
    }

    #[test]
    fn test_add_months_crosses_years() {
        let december = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        assert_eq!(add_months(december, 1), NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
        assert_eq!(add_months(december, -12), NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
    }
}
