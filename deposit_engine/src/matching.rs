use chrono::{DateTime, Duration, Utc};
use dpg_common::Rupiah;
use log::*;
use zenitsu_tools::TransactionRecord;

/// How far back in the statement a credit may lie and still settle a deposit.
pub const RECENCY_WINDOW: Duration = Duration::minutes(5);

/// An incoming credit that settles a pending deposit.
#[derive(Debug, Clone)]
pub struct MatchedPayment {
    pub amount: Rupiah,
    pub paid_at: DateTime<Utc>,
    pub record: TransactionRecord,
}

/// Scans `records` for an incoming credit of exactly `expected` rupiah, strictly younger than
/// [`RECENCY_WINDOW`] at the instant `now`.
///
/// A record that fails to parse is skipped rather than failing the sweep, since one garbled
/// statement row must not mask a legitimate payment elsewhere in the batch. When several credits
/// qualify, the most recent one wins. Clock skew can put a mutation timestamp ahead of `now`;
/// such credits count as recent.
pub fn find_matching_payment(
    records: &[TransactionRecord],
    expected: Rupiah,
    now: DateTime<Utc>,
) -> Option<MatchedPayment> {
    records
        .iter()
        .filter(|r| r.is_incoming())
        .filter_map(|r| {
            let paid_at = match r.timestamp() {
                Ok(ts) => ts,
                Err(e) => {
                    debug!("🔄️ Skipping a mutation with an unusable timestamp. {e}");
                    return None;
                },
            };
            let amount = match r.credited_amount() {
                Ok(a) => a,
                Err(e) => {
                    debug!("🔄️ Skipping a mutation with an unusable credit amount. {e}");
                    return None;
                },
            };
            Some((r, paid_at, amount))
        })
        .filter(|(_, paid_at, amount)| *amount == expected && now.signed_duration_since(*paid_at) < RECENCY_WINDOW)
        .max_by_key(|(_, paid_at, _)| *paid_at)
        .map(|(record, paid_at, amount)| MatchedPayment { amount, paid_at, record: record.clone() })
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::*;

    fn record(date: &str, kind: &str, kredit: &str) -> TransactionRecord {
        TransactionRecord {
            date: date.to_string(),
            kind: kind.to_string(),
            kredit: kredit.to_string(),
            ..Default::default()
        }
    }

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, h, m, s).unwrap()
    }

    #[test]
    fn finds_a_recent_incoming_credit() {
        let records = vec![
            record("2024-05-01 18:08:21", "IN", "50.007"),
            record("2024-05-01 18:05:00", "OUT", "50.007"),
        ];
        let matched = find_matching_payment(&records, Rupiah::from(50_007), at(18, 10, 0)).unwrap();
        assert_eq!(matched.amount, Rupiah::from(50_007));
        assert_eq!(matched.paid_at, at(18, 8, 21));
    }

    #[test]
    fn outgoing_mutations_never_match() {
        let records = vec![record("2024-05-01 18:09:00", "OUT", "50.007")];
        assert!(find_matching_payment(&records, Rupiah::from(50_007), at(18, 10, 0)).is_none());
    }

    #[test]
    fn amounts_must_match_exactly() {
        let records = vec![record("2024-05-01 18:09:00", "IN", "50.007")];
        assert!(find_matching_payment(&records, Rupiah::from(50_006), at(18, 10, 0)).is_none());
        assert!(find_matching_payment(&records, Rupiah::from(50_008), at(18, 10, 0)).is_none());
    }

    #[test]
    fn credits_on_the_window_boundary_are_stale() {
        let records = vec![record("2024-05-01 18:05:00", "IN", "50.007")];
        // Exactly five minutes old misses the window.
        assert!(find_matching_payment(&records, Rupiah::from(50_007), at(18, 10, 0)).is_none());
        // A second younger still settles.
        assert!(find_matching_payment(&records, Rupiah::from(50_007), at(18, 9, 59)).is_some());
    }

    #[test]
    fn future_dated_credits_count_as_recent() {
        let records = vec![record("2024-05-01 18:11:00", "IN", "50.007")];
        assert!(find_matching_payment(&records, Rupiah::from(50_007), at(18, 10, 0)).is_some());
    }

    #[test]
    fn garbled_rows_do_not_mask_later_credits() {
        let records = vec![
            record("not a timestamp", "IN", "50.007"),
            record("2024-05-01 18:09:00", "IN", "Rp 50.007"),
            record("2024-05-01 18:08:21", "IN", "50.007"),
        ];
        let matched = find_matching_payment(&records, Rupiah::from(50_007), at(18, 10, 0)).unwrap();
        assert_eq!(matched.paid_at, at(18, 8, 21));
    }

    #[test]
    fn the_most_recent_of_several_credits_wins() {
        let records = vec![
            record("2024-05-01 18:06:00", "IN", "50.007"),
            record("2024-05-01 18:09:30", "IN", "50.007"),
            record("2024-05-01 18:08:00", "IN", "50.007"),
        ];
        let matched = find_matching_payment(&records, Rupiah::from(50_007), at(18, 10, 0)).unwrap();
        assert_eq!(matched.paid_at, at(18, 9, 30));
    }

    #[test]
    fn legacy_timestamps_participate_in_matching() {
        let records = vec![record("01/05/2024 18:08", "IN", "125.000")];
        let matched = find_matching_payment(&records, Rupiah::from(125_000), at(18, 10, 0)).unwrap();
        assert_eq!(matched.paid_at, at(18, 8, 0));
    }

    #[test]
    fn an_empty_statement_matches_nothing() {
        assert!(find_matching_payment(&[], Rupiah::from(50_007), at(18, 10, 0)).is_none());
    }
}
