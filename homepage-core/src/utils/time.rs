use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// Istante corrente in UTC formattato come RFC3339 (es. "2025-11-02T12:34:56.123Z").
pub fn now_timestamp() -> String {
    format_timestamp(OffsetDateTime::now_utc())
}

/// Rfc3339 fallisce solo per anni fuori da 0..=9999: in quel caso si ripiega sui secondi unix.
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(&Rfc3339)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}
