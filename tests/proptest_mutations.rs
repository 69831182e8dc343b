use brutekit::leet;
use brutekit::mutator::{leet_variations, simple_lowercase, simple_uppercase, MutationEngine};
use brutekit::padding::{PaddingList, Placement};
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 64;

// Short words keep the leet fan-out small enough to enumerate
fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9]{1,6}",
        "[a-z!@#]{1,5}",
        "[a-zñéüß]{1,4}",
    ]
}

fn padding_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[0-9!@#a-z]{1,4}", 0..6)
}

fn placement_strategy() -> impl Strategy<Value = Placement> {
    prop_oneof![
        Just(Placement::Both),
        Just(Placement::Before),
        Just(Placement::After),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn prop_contains_original_and_case_forms(word in word_strategy(), pads in padding_strategy()) {
        let out = MutationEngine::new(PaddingList::from(pads)).generate(&word);
        prop_assert_eq!(&out[0], &word);
        prop_assert_eq!(&out[1], &simple_uppercase(&word));
        prop_assert_eq!(&out[2], &simple_lowercase(&word));
    }

    #[test]
    fn prop_padding_is_additive(
        word in word_strategy(),
        pads in padding_strategy(),
        placement in placement_strategy(),
    ) {
        let unpadded = MutationEngine::default().generate(&word);
        let p = pads.len();
        let out = MutationEngine::new(PaddingList::from(pads))
            .with_placement(placement)
            .generate(&word);

        let r = unpadded.len();
        prop_assert_eq!(out.len(), r + placement.fan_out() * r * p);
        prop_assert_eq!(&out[..r], unpadded.as_slice());
    }

    #[test]
    fn prop_leet_size_is_product(word in word_strategy()) {
        let variants = leet_variations(&word);
        prop_assert_eq!(variants.len(), leet::variation_count(&word));
        prop_assert_eq!(&variants[0], &word);
    }

    #[test]
    fn prop_expected_len_is_exact(word in word_strategy(), pads in padding_strategy()) {
        let engine = MutationEngine::new(PaddingList::from(pads));
        prop_assert_eq!(engine.generate(&word).len(), engine.expected_len(&word));
    }

    #[test]
    fn prop_words_without_substitutions_yield_three(word in "[A-Zdfjkmnpqruy0-9]{1,8}") {
        let out = MutationEngine::default().generate(&word);
        prop_assert_eq!(out.len(), 3);
    }
}
