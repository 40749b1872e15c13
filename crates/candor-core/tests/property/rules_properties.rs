use candor_core::rules::word_count;
use proptest::prelude::*;

proptest! {
    #[test]
    fn word_count_never_exceeds_whitespace_tokens(text in ".{0,200}") {
        prop_assert!(word_count(&text) <= text.split_whitespace().count());
    }

    #[test]
    fn alphanumeric_words_are_all_counted(words in proptest::collection::vec("[a-z0-9]{1,8}", 0..20)) {
        prop_assert_eq!(word_count(&words.join(" ")), words.len());
    }
}
