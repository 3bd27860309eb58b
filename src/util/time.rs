use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
pub fn from_timestamp(ts: i64) -> DateTime<Utc> {
    use chrono::TimeZone;
    Utc.timestamp_opt(ts, 0).single().unwrap_or_else(now)
}
