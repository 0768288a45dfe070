use chrono::{DateTime, Local, NaiveDate, Utc};

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_timestamp_date(ts: DateTime<Utc>) -> String {
    format_date(ts.with_timezone(&Local).date_naive())
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
