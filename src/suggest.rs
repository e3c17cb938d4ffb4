// src/suggest.rs
//
// Fuzzy "did you mean" ranking for the name entry box. Read-only: the
// result only feeds the suggestion list, never the stored records.

use strsim::{jaro_winkler, normalized_levenshtein};

/// Similarity of `query` to `candidate`, 0..=100 (case-insensitive).
///
/// Best of: edit distance over the whole name, and Jaro-Winkler against each
/// name part so "kim" finds "Lee, Kim" and "smi" finds "Smith, John".
pub fn score(query: &str, candidate: &str) -> u8 {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return 0;
    }
    let c = candidate.to_lowercase();

    if c.contains(&q) {
        return 100;
    }

    let whole = normalized_levenshtein(&q, &c);
    let part = c
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(|p| jaro_winkler(&q, p))
        .fold(0.0_f64, f64::max);

    (whole.max(part) * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Candidates sorted by descending similarity. Ties keep their input
/// (roster) order; an empty query returns the input order unchanged.
pub fn rank<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<String> {
    if query.trim().is_empty() {
        return candidates.iter().map(|c| s!(c.as_ref())).collect();
    }
    let mut scored: Vec<(u8, &str)> = candidates
        .iter()
        .map(|c| (score(query, c.as_ref()), c.as_ref()))
        .collect();
    // sort_by is stable
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, c)| s!(c)).collect()
}

/// `rank`, truncated to `limit` entries.
pub fn suggest<S: AsRef<str>>(query: &str, candidates: &[S], limit: usize) -> Vec<String> {
    let mut out = rank(query, candidates);
    out.truncate(limit);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: [&str; 4] = ["Smith, John", "Doe, Jane", "Lee, Kim", "Smithers, Waylon"];

    #[test]
    fn empty_query_keeps_roster_order() {
        assert_eq!(rank("", &ROSTER), ROSTER);
    }

    #[test]
    fn closest_first() {
        let got = rank("jane doe", &ROSTER);
        assert_eq!(got[0], "Doe, Jane");
        let got = rank("kim", &ROSTER);
        assert_eq!(got[0], "Lee, Kim");
    }

    #[test]
    fn substring_ties_keep_order() {
        let got = rank("smith", &ROSTER);
        assert_eq!(&got[..2], ["Smith, John", "Smithers, Waylon"]);
    }

    #[test]
    fn limit_truncates() {
        assert_eq!(suggest("a", &ROSTER, 2).len(), 2);
    }
}
