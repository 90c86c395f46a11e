use wordfind::{
    explore, explore_parallel, filter_required, find_words, search, search_parallel, Constraints,
    Dictionary, SearchMode, ALPHABET, MAX_WORD_LENGTH,
};

fn get_test_dictionary() -> Dictionary {
    ["apple", "angle", "ankle", "crane", "crate", "trace", "zebra", "an", "ample", "kayak"]
        .into_iter()
        .collect()
}

fn five_letters() -> Constraints {
    Constraints::builder(5).build().unwrap()
}

#[test]
fn test_known_first_letter() {
    let dictionary: Dictionary = ["apple", "angle", "ankle"].into_iter().collect();
    let constraints = Constraints::builder(5).known(0, 'a').build().unwrap();

    let words = search(&constraints, &dictionary);
    assert_eq!(words, vec!["angle", "ankle", "apple"]);
}

#[test]
fn test_excluded_letter_removes_word() {
    let dictionary: Dictionary = ["apple", "angle", "ankle"].into_iter().collect();
    let constraints = Constraints::builder(5)
        .known(0, 'a')
        .exclude('p')
        .build()
        .unwrap();

    let words = search(&constraints, &dictionary);
    assert_eq!(words, vec!["angle", "ankle"]);
}

#[test]
fn test_required_letter() {
    let dictionary: Dictionary = ["apple", "angle", "ankle"].into_iter().collect();
    let constraints = Constraints::builder(5)
        .known(0, 'a')
        .include('k')
        .build()
        .unwrap();

    let outcome = find_words(&constraints, &dictionary, SearchMode::Sequential);
    assert_eq!(outcome.solutions, vec!["ankle"]);
}

#[test]
fn test_no_match_is_empty() {
    let dictionary: Dictionary = ["apple", "angle", "ankle"].into_iter().collect();
    let constraints = Constraints::builder(5).known(0, 'z').build().unwrap();

    let outcome = find_words(&constraints, &dictionary, SearchMode::Sequential);
    assert!(outcome.solutions.is_empty());
}

#[test]
fn test_only_matching_length() {
    let dictionary = get_test_dictionary();
    let constraints = Constraints::builder(2).build().unwrap();

    assert_eq!(search(&constraints, &dictionary), vec!["an"]);
}

#[test]
fn test_order_follows_alphabet() {
    let dictionary = get_test_dictionary();
    let words = search(&five_letters(), &dictionary);

    let mut sorted = words.clone();
    sorted.sort();
    assert_eq!(words, sorted);
    assert_eq!(words.len(), 9);
}

#[test]
fn test_multiple_known_positions() {
    let dictionary = get_test_dictionary();
    let constraints = Constraints::builder(5)
        .known(0, 'k')
        .known(4, 'k')
        .exclude('z')
        .build()
        .unwrap();

    assert_eq!(search(&constraints, &dictionary), vec!["kayak"]);
}

#[test]
fn test_all_positions_known() {
    let dictionary = get_test_dictionary();
    let constraints = Constraints::builder(5)
        .known_all("crate".chars().enumerate())
        .build()
        .unwrap();

    let outcome = explore(&constraints, &dictionary);
    assert_eq!(outcome.solutions, vec!["crate"]);
    assert_eq!(outcome.examined, 1);
}

#[test]
fn test_examined_counts_full_candidates() {
    let dictionary = get_test_dictionary();
    let constraints = Constraints::builder(3)
        .known(0, 'a')
        .exclude_all("abcdefghijklmnopqrstuvwx".chars().filter(|&c| c != 'a'))
        .build()
        .unwrap();

    // admissible: a, y, z -> 3 * 3 candidates for the two open positions
    let outcome = explore(&constraints, &dictionary);
    assert_eq!(outcome.examined, 9);
    assert!(outcome.solutions.is_empty());
}

#[test]
fn test_strict_filter_can_empty_result() {
    let dictionary = get_test_dictionary();
    let constraints = Constraints::builder(5).include('q').build().unwrap();

    assert!(!search(&constraints, &dictionary).is_empty());
    let outcome = find_words(&constraints, &dictionary, SearchMode::Sequential);
    assert!(outcome.solutions.is_empty());
}

#[test]
fn test_filter_required_keeps_order() {
    let constraints = Constraints::builder(5)
        .include('a')
        .include('e')
        .build()
        .unwrap();
    let words = vec![
        "crane".to_string(),
        "zebra".to_string(),
        "kayak".to_string(),
        "angle".to_string(),
    ];

    assert_eq!(
        filter_required(words, &constraints),
        vec!["crane", "zebra", "angle"]
    );
}

#[test]
fn test_filter_without_required_letters() {
    let words = vec!["crane".to_string(), "kayak".to_string()];
    assert_eq!(filter_required(words.clone(), &five_letters()), words);
}

#[test]
fn test_parallel_matches_sequential() {
    let dictionary = get_test_dictionary();
    let cases = [
        Constraints::builder(5).build().unwrap(),
        Constraints::builder(5).known(0, 'c').build().unwrap(),
        Constraints::builder(5).known(2, 'a').exclude('p').build().unwrap(),
        Constraints::builder(2).build().unwrap(),
    ];

    for constraints in &cases {
        assert_eq!(
            explore(constraints, &dictionary),
            explore_parallel(constraints, &dictionary)
        );
        assert_eq!(
            search(constraints, &dictionary),
            search_parallel(constraints, &dictionary)
        );
    }
}

#[test]
fn test_parallel_mode_applies_filter() {
    let dictionary = get_test_dictionary();
    let constraints = Constraints::builder(5).include('k').build().unwrap();

    let outcome = find_words(&constraints, &dictionary, SearchMode::Parallel);
    assert_eq!(outcome.solutions, vec!["ankle", "kayak"]);
}

#[test]
fn test_deterministic() {
    let dictionary = get_test_dictionary();
    let constraints = Constraints::builder(5).exclude('e').build().unwrap();

    let first = search(&constraints, &dictionary);
    for _ in 0..3 {
        assert_eq!(search(&constraints, &dictionary), first);
    }
}

#[test]
fn test_longest_word_single_letter_alphabet() {
    let longest = "a".repeat(MAX_WORD_LENGTH);
    let dictionary: Dictionary = [longest.as_str(), "aaaaa"].into_iter().collect();
    let constraints = Constraints::builder(MAX_WORD_LENGTH as i64)
        .exclude_all(ALPHABET.into_iter().filter(|&c| c != 'a'))
        .build()
        .unwrap();

    for mode in [SearchMode::Sequential, SearchMode::Parallel] {
        let outcome = find_words(&constraints, &dictionary, mode);
        assert_eq!(outcome.solutions, vec![longest.clone()]);
        assert_eq!(outcome.examined, 1);
    }
}

#[test]
fn test_no_words_of_length_skips_search() {
    let dictionary = get_test_dictionary();
    let constraints = Constraints::builder(MAX_WORD_LENGTH as i64).build().unwrap();

    let outcome = find_words(&constraints, &dictionary, SearchMode::Sequential);
    assert!(outcome.solutions.is_empty());
    assert_eq!(outcome.examined, 0);
}
