//! Range response parsing.
//!
//! A range response body holds one `SUFFIX:COUNT` record per line. Lines that
//! do not parse are skipped and counted; they never abort the scan.

use super::hash::{HashSuffix, SUFFIX_LEN};

/// One record of a range response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachCandidateEntry {
    pub suffix: String,
    pub count: u64,
}

impl BreachCandidateEntry {
    /// Parses a single `SUFFIX:COUNT` line.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (suffix, count) = line.trim().split_once(':')?;
        let suffix = suffix.trim();

        if suffix.len() != SUFFIX_LEN || !suffix.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let count = count.trim().parse::<u64>().ok()?;

        Some(Self {
            suffix: suffix.to_string(),
            count,
        })
    }
}

/// Parsed range response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeResponse {
    entries: Vec<BreachCandidateEntry>,
    skipped: usize,
}

impl RangeResponse {
    pub fn parse(body: &str) -> Self {
        let mut response = Self::default();

        for line in body.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match BreachCandidateEntry::parse_line(line) {
                Some(entry) => response.entries.push(entry),
                None => response.skipped += 1,
            }
        }

        #[cfg(feature = "tracing")]
        if response.skipped > 0 {
            tracing::debug!("Skipped {} malformed range response lines", response.skipped);
        }

        response
    }

    pub fn entries(&self) -> &[BreachCandidateEntry] {
        &self.entries
    }

    /// Number of non-blank lines that failed to parse.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Occurrence count for `suffix`, or 0 when no entry matches.
    pub fn count_for(&self, suffix: &HashSuffix) -> u64 {
        self.entries
            .iter()
            .find(|entry| suffix.matches(&entry.suffix))
            .map_or(0, |entry| entry.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breach::hash::split_hash;
    use secrecy::SecretString;

    fn password_suffix() -> HashSuffix {
        split_hash(&SecretString::new("password".to_string().into())).1
    }

    #[test]
    fn test_parse_line() {
        let entry = BreachCandidateEntry::parse_line("1E4C9B93F3F0682250B6CF8331B7EE68FD8:3").unwrap();
        assert_eq!(entry.suffix, "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
        assert_eq!(entry.count, 3);
    }

    #[test]
    fn test_parse_line_large_count() {
        let entry = BreachCandidateEntry::parse_line("1E4C9B93F3F0682250B6CF8331B7EE68FD8:10434004").unwrap();
        assert_eq!(entry.count, 10_434_004);
    }

    #[test]
    fn test_parse_line_rejects_malformed() {
        for line in [
            "1E4C9B93F3F0682250B6CF8331B7EE68FD8",
            "1E4C9B93F3F0682250B6CF8331B7EE68FD8:",
            "1E4C9B93F3F0682250B6CF8331B7EE68FD8:abc",
            "1E4C9B93F3F0682250B6CF8331B7EE68FD8:-1",
            "1E4C9B93F3F0682250B6CF8331B7EE68F:3",
            "ZZZZ9B93F3F0682250B6CF8331B7EE68FD8:3",
            ":3",
        ] {
            assert!(BreachCandidateEntry::parse_line(line).is_none(), "accepted {line:?}");
        }
    }

    #[test]
    fn test_count_for_match() {
        let body = "0018A45C4D1DEF81644B54AB7F969B88D65:1\r\n\
                    1E4C9B93F3F0682250B6CF8331B7EE68FD8:3\r\n\
                    011053FD0102E94D6AE2F8B83D76FAF94F6:1\r\n";
        let response = RangeResponse::parse(body);

        assert_eq!(response.entries().len(), 3);
        assert_eq!(response.count_for(&password_suffix()), 3);
    }

    #[test]
    fn test_count_for_no_match_is_zero() {
        let body = "0018A45C4D1DEF81644B54AB7F969B88D65:1\n011053FD0102E94D6AE2F8B83D76FAF94F6:7\n";
        let response = RangeResponse::parse(body);

        assert_eq!(response.count_for(&password_suffix()), 0);
    }

    #[test]
    fn test_malformed_lines_are_skipped_not_fatal() {
        let body = "garbage\n\
                    0018A45C4D1DEF81644B54AB7F969B88D65:not-a-number\n\
                    \n\
                    1E4C9B93F3F0682250B6CF8331B7EE68FD8:3\n";
        let response = RangeResponse::parse(body);

        assert_eq!(response.skipped(), 2);
        assert_eq!(response.count_for(&password_suffix()), 3);
    }

    #[test]
    fn test_lowercase_suffix_does_not_match() {
        let response = RangeResponse::parse("1e4c9b93f3f0682250b6cf8331b7ee68fd8:3");

        assert_eq!(response.entries().len(), 1);
        assert_eq!(response.count_for(&password_suffix()), 0);
    }

    #[test]
    fn test_empty_body() {
        let response = RangeResponse::parse("");
        assert!(response.entries().is_empty());
        assert_eq!(response.count_for(&password_suffix()), 0);
    }
}
