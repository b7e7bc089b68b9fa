use std::collections::HashSet;

use truco_core::model::card::{Card, MANILHA_BASE};
use truco_core::model::rank::Rank;
use truco_core::model::suit::Suit;

fn rest_of_deck(vira: Card) -> Vec<Card> {
    Card::deck().filter(|&card| card != vira).collect()
}

#[test]
fn relative_values_never_collide_for_any_vira() {
    for vira in Card::deck() {
        let rest = rest_of_deck(vira);
        assert_eq!(rest.len(), 39);
        let values: HashSet<u8> = rest.iter().map(|card| card.relative_value(vira)).collect();
        assert_eq!(values.len(), 39, "collision with vira {vira}");
    }
}

#[test]
fn exactly_four_manilhas_rank_above_everything_else() {
    for vira in Card::deck() {
        let rest = rest_of_deck(vira);
        let (manilhas, others): (Vec<Card>, Vec<Card>) =
            rest.into_iter().partition(|card| card.is_manilha(vira));
        assert_eq!(manilhas.len(), 4, "vira {vira}");

        let weakest_manilha = manilhas
            .iter()
            .map(|card| card.relative_value(vira))
            .min()
            .expect("four manilhas");
        let strongest_other = others
            .iter()
            .map(|card| card.relative_value(vira))
            .max()
            .expect("non-manilhas exist");
        assert!(weakest_manilha > strongest_other, "vira {vira}");
        assert!(weakest_manilha >= MANILHA_BASE);
    }
}

#[test]
fn non_manilhas_respect_rank_order() {
    for vira in Card::deck() {
        for a in rest_of_deck(vira) {
            for b in rest_of_deck(vira) {
                if a.is_manilha(vira) || b.is_manilha(vira) {
                    continue;
                }
                if a.rank > b.rank {
                    assert!(
                        a.relative_value(vira) > b.relative_value(vira),
                        "{a} should beat {b} under vira {vira}"
                    );
                }
            }
        }
    }
}

#[test]
fn ranking_is_deterministic() {
    let vira = Card::new(Rank::King, Suit::Hearts);
    for card in Card::deck() {
        assert_eq!(card.relative_value(vira), card.relative_value(vira));
    }
}

#[test]
fn four_of_diamonds_turns_fives_into_manilhas() {
    let vira = Card::new(Rank::Four, Suit::Diamonds);
    let fives = [
        Card::new(Rank::Five, Suit::Diamonds),
        Card::new(Rank::Five, Suit::Spades),
        Card::new(Rank::Five, Suit::Hearts),
        Card::new(Rank::Five, Suit::Clubs),
    ];
    let values: Vec<u8> = fives.iter().map(|card| card.relative_value(vira)).collect();
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));

    let best_other = rest_of_deck(vira)
        .into_iter()
        .filter(|card| card.rank != Rank::Five)
        .map(|card| card.relative_value(vira))
        .max()
        .expect("deck not empty");
    assert!(values[0] > best_other);
}

#[test]
fn vira_three_wraps_manilha_to_four() {
    let vira = Card::new(Rank::Three, Suit::Spades);
    let manilhas: Vec<Card> = rest_of_deck(vira)
        .into_iter()
        .filter(|card| card.is_manilha(vira))
        .collect();
    assert!(manilhas.iter().all(|card| card.rank == Rank::Four));
}
