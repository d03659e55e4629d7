use lexurl::{extract_features, normalize_url, rules, FEATURE_COUNT};
use proptest::prelude::*;

proptest! {
    #[test]
    fn extraction_is_deterministic(s in ".*") {
        prop_assert_eq!(extract_features(&s), extract_features(&s));
    }

    #[test]
    fn extraction_is_total_on_url_like_input(s in "[a-zA-Z0-9./:?#%_@-]{0,120}") {
        let f = extract_features(&s);
        prop_assert_eq!(f.url_length, s.chars().count());
    }

    #[test]
    fn counts_are_bounded_by_length(s in ".{0,200}") {
        let f = extract_features(&s);
        prop_assert!(f.num_digits <= f.url_length);
        prop_assert!(f.num_special_chars <= f.url_length);
        prop_assert!(f.num_params + f.num_fragments + f.num_slashes <= f.num_special_chars);
        prop_assert!(f.tld_length <= f.url_length);
    }

    #[test]
    fn flags_stay_binary(s in ".{0,200}") {
        let v = extract_features(&s).to_vector();
        prop_assert_eq!(v.len(), FEATURE_COUNT);
        for idx in [4, 5, 9, 11, 12, 13] {
            prop_assert!(v[idx] == 0.0 || v[idx] == 1.0);
        }
        for value in v {
            prop_assert!(value >= 0.0);
        }
    }

    #[test]
    fn subdomain_floor(s in "[^.]{0,40}(\\.[^.]{0,40})?") {
        prop_assert_eq!(extract_features(&s).num_subdomains, 0);
    }

    #[test]
    fn no_dot_means_no_tld(s in "[^.]{0,80}") {
        let f = extract_features(&s);
        prop_assert_eq!(f.tld_length, 0);
        prop_assert!(!f.is_common_tld);
    }

    #[test]
    fn aggregate_is_composition_of_rules(s in ".{0,120}") {
        let f = extract_features(&s);
        prop_assert_eq!(f.url_length, rules::url_length(&s));
        prop_assert_eq!(f.num_digits, rules::num_digits(&s));
        prop_assert_eq!(f.num_special_chars, rules::num_special_chars(&s));
        prop_assert_eq!(f.num_subdomains, rules::num_subdomains(&s));
        prop_assert_eq!(f.has_ip, rules::has_ip(&s));
        prop_assert_eq!(f.has_https, rules::has_https(&s));
        prop_assert_eq!(f.num_params, rules::num_params(&s));
        prop_assert_eq!(f.num_fragments, rules::num_fragments(&s));
        prop_assert_eq!(f.num_slashes, rules::num_slashes(&s));
        prop_assert_eq!(f.has_suspicious_words, rules::has_suspicious_words(&s));
        prop_assert_eq!(f.tld_length, rules::tld_length(&s));
        prop_assert_eq!(f.is_common_tld, rules::is_common_tld(&s));
        prop_assert_eq!(f.has_hex, rules::has_hex(&s));
        prop_assert_eq!(f.repeated_chars, rules::repeated_chars(&s));
    }

    #[test]
    fn common_tld_implies_three_chars(s in "[a-z]{1,10}\\.(com|org|net|edu|gov|io|info)(/[a-z]{0,5})?") {
        let f = extract_features(&s);
        if f.is_common_tld {
            prop_assert_eq!(f.tld_length, 3);
        }
    }

    #[test]
    fn normalization_is_idempotent(s in "[a-zA-Z0-9./:% \\x{200B}\\x{202E}\\x{FEFF}\\x{3002}\\x{FF10}-\\x{FF5A}]{0,80}") {
        let once = normalize_url(&s);
        prop_assert_eq!(normalize_url(&once), once);
    }
}
