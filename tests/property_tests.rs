use proptest::prelude::*;
use roundrobinizer::round_robin::{interleave, roundrobin_domains, roundrobin_urls};
use roundrobinizer::FuzzListGenerator;
use std::collections::{HashMap, HashSet};

fn domain_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        ("[a-z]{1,6}", prop::sample::select(vec!["a.com", "b.org", "c.net", "d.co.uk", "e.io"])),
        0..60,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (path, domain))| (format!("https://{}/{}/{}", domain, path, i), domain.to_string()))
            .collect()
    })
}

proptest! {
    #[test]
    fn test_every_domain_once_per_round(pairs in domain_pairs()) {
        let ordered = interleave(pairs.clone());

        // ranks never decrease and a domain appears at most once per rank
        let mut seen_in_round = HashSet::new();
        let mut round = 0;
        for record in &ordered {
            prop_assert!(record.rank >= round);
            if record.rank > round {
                round = record.rank;
                seen_in_round.clear();
            }
            prop_assert!(seen_in_round.insert(record.domain.clone()));
        }

        // the first round holds exactly one record for every domain
        let unique: HashSet<&String> = pairs.iter().map(|(_, d)| d).collect();
        let first_round = ordered.iter().take_while(|r| r.rank == 0).count();
        prop_assert_eq!(first_round, unique.len());
    }

    #[test]
    fn test_same_domain_keeps_input_order(pairs in domain_pairs()) {
        let ordered = roundrobin_urls(pairs.clone());
        prop_assert_eq!(ordered.len(), pairs.len());

        let mut expected: HashMap<String, Vec<String>> = HashMap::new();
        for (url, domain) in &pairs {
            expected.entry(domain.clone()).or_default().push(url.clone());
        }
        let domain_of: HashMap<&String, &String> = pairs.iter().map(|(u, d)| (u, d)).collect();
        let mut actual: HashMap<String, Vec<String>> = HashMap::new();
        for url in &ordered {
            actual.entry(domain_of[url].clone()).or_default().push(url.clone());
        }
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_interleave_is_deterministic(pairs in domain_pairs()) {
        prop_assert_eq!(roundrobin_urls(pairs.clone()), roundrobin_urls(pairs));
    }

    #[test]
    fn test_dedup_keeps_each_domain_once(pairs in domain_pairs()) {
        let domains = roundrobin_domains(pairs.iter().map(|(_, d)| d.clone()));
        let unique: HashSet<&String> = pairs.iter().map(|(_, d)| d).collect();
        prop_assert_eq!(domains.len(), unique.len());
        prop_assert_eq!(domains.iter().collect::<HashSet<_>>(), unique);
    }

    #[test]
    fn test_fuzz_cross_product_complete(
        domains in prop::collection::hash_set("[a-z]{1,8}\\.com", 0..10),
        patterns in prop::collection::vec("[a-z/.]{1,10}", 1..8),
    ) {
        let domains: Vec<String> = domains.into_iter().collect();
        let generator = FuzzListGenerator::new(&domains);
        let mut out = Vec::new();
        let written = generator.write_to(&patterns, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(written, (domains.len() * patterns.len()) as u64);
        prop_assert_eq!(lines.len(), domains.len() * patterns.len());

        // pattern-major: block i is pattern i over every domain in order
        for (i, pattern) in patterns.iter().enumerate() {
            for (j, domain) in domains.iter().enumerate() {
                let expected = format!("https://{}/{}", domain, pattern);
                prop_assert_eq!(lines[i * domains.len() + j], expected.as_str());
            }
        }
    }
}
