use shared::{Reveal, RevealSet};

#[test]
fn reveal_is_one_shot() {
    let mut reveals = RevealSet::new(3);

    assert_eq!(reveals.remaining(), 3);
    assert_eq!(reveals.reveal(1), Reveal::Revealed);
    assert_eq!(reveals.reveal(1), Reveal::AlreadyRevealed);
    assert_eq!(reveals.reveal(1), Reveal::AlreadyRevealed);

    assert!(reveals.is_revealed(1));
    assert!(!reveals.is_revealed(0));
    assert_eq!(reveals.remaining(), 2);
}

#[test]
fn reveal_twice_matches_once() {
    let mut once = RevealSet::new(4);
    let mut twice = RevealSet::new(4);

    once.reveal(2);
    twice.reveal(2);
    twice.reveal(2);

    for index in 0..4 {
        assert_eq!(once.is_revealed(index), twice.is_revealed(index));
    }
    assert_eq!(once.remaining(), twice.remaining());
}

#[test]
fn unknown_indices_are_ignored() {
    let mut reveals = RevealSet::new(1);

    assert_eq!(reveals.reveal(5), Reveal::Unknown);
    assert!(!reveals.is_revealed(5));
    assert_eq!(reveals.remaining(), 1);
}
