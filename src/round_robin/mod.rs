use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// A record tagged with its domain and its position within that domain's group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRecord<T> {
    pub item: T,        // The URL or domain carried through the reorder
    pub domain: String, // Domain the record is grouped under
    pub rank: usize,    // Same-domain records seen before this one
}

/// Assigns each record its zero-based rank within its domain group
///
/// Ranks follow input order, so the first record seen for a domain gets 0,
/// the next one 1, and so on.
pub fn rank_records<T, I>(pairs: I) -> Vec<RankedRecord<T>>
where
    I: IntoIterator<Item = (T, String)>,
{
    let mut seen: HashMap<String, usize> = HashMap::new();

    pairs
        .into_iter()
        .map(|(item, domain)| {
            let counter = seen.entry(domain.clone()).or_insert(0);
            let rank = *counter;
            *counter += 1;
            RankedRecord { item, domain, rank }
        })
        .collect()
}

/// Reorders records so every domain appears once before any domain repeats
///
/// Records are sorted by `(rank, domain)`. Within one rank, domains come out
/// in lexicographic order; within one domain, input order is kept.
///
/// # Arguments
/// * `pairs` - `(record, domain)` pairs in original input order
///
/// # Returns
/// * `Vec<RankedRecord<T>>` - The records in round-robin order
pub fn interleave<T, I>(pairs: I) -> Vec<RankedRecord<T>>
where
    I: IntoIterator<Item = (T, String)>,
{
    let mut ranked = rank_records(pairs);
    ranked.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.domain.cmp(&b.domain)));

    if let Some(last) = ranked.last() {
        debug!("Interleaved {} records over {} rounds", ranked.len(), last.rank + 1);
    }
    ranked
}

/// Round-robin order over domains, each domain kept once
pub fn roundrobin_domains<I>(domains: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut kept = HashSet::new();

    interleave(domains.into_iter().map(|domain| ((), domain)))
        .into_iter()
        .filter_map(|record| {
            if kept.insert(record.domain.clone()) {
                Some(record.domain)
            } else {
                trace!("Dropping repeat of {}", record.domain);
                None
            }
        })
        .collect()
}

/// Round-robin order over URLs, every URL kept (duplicates included)
pub fn roundrobin_urls<I>(pairs: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    interleave(pairs).into_iter().map(|record| record.item).collect()
}

/// Number of distinct domains in the sequence
pub fn unique_domain_count<'a, I>(domains: I) -> usize
where
    I: IntoIterator<Item = &'a String>,
{
    domains.into_iter().collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(urls: &[&str], domains: &[&str]) -> Vec<(String, String)> {
        urls.iter()
            .zip(domains)
            .map(|(u, d)| (u.to_string(), d.to_string()))
            .collect()
    }

    #[test]
    fn test_rank_records_counts_within_group() {
        let ranked = rank_records(pairs(&["1", "2", "3", "4"], &["a.com", "b.com", "a.com", "a.com"]));
        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![0, 0, 1, 2]);
    }

    #[test]
    fn test_roundrobin_urls_example() {
        let input = pairs(
            &["https://a.com/x", "https://b.com/y", "https://a.com/z", "https://c.com/w"],
            &["a.com", "b.com", "a.com", "c.com"],
        );
        assert_eq!(
            roundrobin_urls(input),
            vec!["https://a.com/x", "https://b.com/y", "https://c.com/w", "https://a.com/z"]
        );
    }

    #[test]
    fn test_roundrobin_domains_example() {
        let domains = ["a.com", "b.com", "a.com", "c.com"].map(String::from);
        assert_eq!(roundrobin_domains(domains), vec!["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn test_same_rank_is_sorted_by_domain() {
        let input = pairs(&["z1", "m1", "a1", "z2"], &["z.com", "m.com", "a.com", "z.com"]);
        assert_eq!(roundrobin_urls(input), vec!["a1", "m1", "z1", "z2"]);
    }

    #[test]
    fn test_roundrobin_domains_is_lexicographic_after_dedup() {
        let domains = ["c.com", "a.com", "c.com", "b.com"].map(String::from);
        assert_eq!(roundrobin_domains(domains), vec!["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn test_duplicate_urls_are_preserved() {
        let input = pairs(&["https://a.com/", "https://a.com/", "https://b.com/"], &["a.com", "a.com", "b.com"]);
        assert_eq!(
            roundrobin_urls(input),
            vec!["https://a.com/", "https://b.com/", "https://a.com/"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(roundrobin_urls(Vec::new()).is_empty());
        assert!(roundrobin_domains(Vec::new()).is_empty());
    }

    #[test]
    fn test_unique_domain_count() {
        let domains = ["a.com", "b.com", "a.com"].map(String::from);
        assert_eq!(unique_domain_count(&domains), 2);
    }
}
