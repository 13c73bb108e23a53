use chrono::{SecondsFormat, Utc};

pub fn current_time_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_utc_with_millis() {
        let iso = current_time_iso();
        assert!(iso.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&iso).is_ok());
        // 2024-01-01T00:00:00.000Z
        assert_eq!(iso.len(), 24);
    }
}
