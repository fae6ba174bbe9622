//! Property-based tests for word validation and scoring.

use proptest::prelude::*;
use word_scramble::{
    utils::LetterPool, GameSession, StartWords, ValidationVerdict, WordList, WordValidator,
};

type Validator = WordValidator<WordList>;

fn multiset_contains(root: &str, word: &str) -> bool {
    word.chars()
        .all(|ch| word.matches(ch).count() <= root.matches(ch).count())
}

prop_compose! {
    fn short_word()(word in "[a-e]{0,8}") -> String {
        word
    }
}

proptest! {
    #[test]
    fn is_possible_matches_multiset_inclusion(root in short_word(), word in short_word()) {
        prop_assert_eq!(
            Validator::is_possible(&word, &root),
            multiset_contains(&root, &word)
        );
    }

    #[test]
    fn root_letters_in_any_order_are_possible(root in "[a-z]{3,10}", seed in any::<u64>()) {
        let mut letters: Vec<char> = root.chars().collect();
        let len = letters.len();
        letters.rotate_left((seed as usize) % len);
        let shuffled: String = letters.into_iter().collect();
        prop_assert!(Validator::is_possible(&shuffled, &root));
    }

    #[test]
    fn checking_does_not_consume_pool(root in short_word(), word in short_word()) {
        let pool = LetterPool::from_word(&root);
        let first = pool.can_spell(&word);
        prop_assert_eq!(pool.can_spell(&word), first);
        prop_assert_eq!(pool.remaining(), root.chars().count());
    }

    #[test]
    fn score_is_sum_of_accepted_lengths(words in proptest::collection::vec("[a-h]{1,6}", 0..30)) {
        let dictionary = WordList::from_words(words.iter(), "en");
        let mut game = GameSession::new(WordValidator::new(dictionary));
        game.start_round(&StartWords::from_words(["abcdefgh"])).unwrap();

        let mut expected = 0;
        let mut previous = 0;
        for word in &words {
            let verdict = game.submit(word).unwrap();
            if verdict == ValidationVerdict::Accepted {
                expected += word.len() as u32;
            }
            prop_assert!(game.score() >= previous);
            previous = game.score();
        }
        prop_assert_eq!(game.score(), expected);
        prop_assert_eq!(game.used_words().len(), game.used_words().iter().count());
    }

    #[test]
    fn rejection_is_idempotent(word in "[a-z ]{0,10}") {
        let dictionary = WordList::from_words(["use", "sum"], "en");
        let mut game = GameSession::new(WordValidator::new(dictionary));
        game.start_round(&StartWords::from_words(["mouse"])).unwrap();

        let first = game.submit(&word).unwrap();
        prop_assume!(first != ValidationVerdict::Accepted);
        let (score, used) = (game.score(), game.used_words().to_vec());

        prop_assert_eq!(game.submit(&word).unwrap(), first);
        prop_assert_eq!(game.score(), score);
        prop_assert_eq!(game.used_words().to_vec(), used);
    }

    #[test]
    fn accepted_word_cannot_be_accepted_again(root in "[a-f]{3,8}", take in 1usize..8) {
        let word: String = root.chars().take(take).collect();
        prop_assume!(word != root);

        let dictionary = WordList::from_words([word.as_str()], "en");
        let mut game = GameSession::new(WordValidator::new(dictionary));
        game.start_round(&StartWords::from_words([root.as_str()])).unwrap();

        prop_assert_eq!(game.submit(&word).unwrap(), ValidationVerdict::Accepted);
        prop_assert_eq!(
            game.submit(&word).unwrap(),
            ValidationVerdict::RejectedDuplicateOrRoot
        );
        prop_assert_eq!(
            game.submit(&root).unwrap(),
            ValidationVerdict::RejectedDuplicateOrRoot
        );
    }
}
