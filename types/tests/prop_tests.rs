use proptest::prelude::*;
use std::str::FromStr;

use omp_types::{ActionType, ContentHash, Cryptocurrency, EscrowType};

proptest! {
    /// ContentHash from digest bytes always passes its own shape check.
    #[test]
    fn content_hash_from_digest_well_formed(bytes in prop::array::uniform32(0u8..)) {
        let hash = ContentHash::from_digest(&bytes);
        prop_assert!(ContentHash::is_well_formed(hash.as_str()));
        prop_assert_eq!(ContentHash::parse(hash.as_str()).unwrap(), hash);
    }

    /// Distinct digests give distinct hashes.
    #[test]
    fn content_hash_injective(a in prop::array::uniform32(0u8..), b in prop::array::uniform32(0u8..)) {
        prop_assert_eq!(ContentHash::from_digest(&a) == ContentHash::from_digest(&b), a == b);
    }

    /// Arbitrary strings are accepted as hashes only if they are 64 lower-case hex chars.
    #[test]
    fn content_hash_parse_matches_shape(s in "[0-9a-fA-Fx]{0,70}") {
        let expected = s.len() == 64 && s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        prop_assert_eq!(ContentHash::parse(&s).is_ok(), expected);
    }

    /// Tags outside the closed enumerations never parse.
    #[test]
    fn unknown_tags_rejected(s in "[a-z_]{1,16}") {
        // wire tags are upper-case, so any lower-case string is unknown
        prop_assert!(ActionType::from_str(&s).is_err());
        prop_assert!(EscrowType::from_str(&s).is_err());
        prop_assert!(Cryptocurrency::from_str(&s).is_err());
    }
}
