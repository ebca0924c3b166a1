use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{alignment::strip_gaps, nw::NW, Aligner};
use crate::{cost_model::CostModel, error::Error, Cost, Sequence};

fn random_sequence(n: usize, rng: &mut impl Rng) -> Sequence {
    (0..n).map(|_| b"ACGT"[rng.gen_range(0..4)]).collect()
}

/// Pairs of random sequences with lengths up to 40, with a fixed seed per pair.
fn test_sequences() -> impl Iterator<Item = (Sequence, Sequence)> {
    let ns = [0usize, 1, 2, 3, 5, 8, 13, 21, 40];
    let seeds = [31415u64, 2718];
    ns.into_iter()
        .cartesian_product(ns)
        .cartesian_product(seeds)
        .map(|((n, m), seed)| {
            let ref mut rng = ChaCha8Rng::seed_from_u64(seed ^ (n as u64) << 8 ^ m as u64);
            (random_sequence(n, rng), random_sequence(m, rng))
        })
}

/// Exhaustive recursion over all alignments.
fn brute_force(cm: &CostModel, a: &[u8], b: &[u8]) -> Cost {
    match (a.split_last(), b.split_last()) {
        (None, _) => cm.gap_cost(b.len()).unwrap(),
        (_, None) => cm.gap_cost(a.len()).unwrap(),
        (Some((&x, a0)), Some((&y, b0))) => {
            let sub = cm.sub(x.try_into().unwrap(), y.try_into().unwrap());
            (brute_force(cm, a0, b0) + sub)
                .min(brute_force(cm, a0, b) + cm.gap())
                .min(brute_force(cm, a, b0) + cm.gap())
        }
    }
}

fn to_str(s: &[u8]) -> &str {
    std::str::from_utf8(s).unwrap()
}

#[test]
fn concrete_scenarios() {
    let nw = NW::default();
    let cases: &[(&str, &str, Cost, &str, &str)] = &[
        ("AG", "AC", 60, "A_G", "AC_"),
        ("A", "", 30, "A", "_"),
        ("", "ACG", 90, "___", "ACG"),
        ("", "", 0, "", ""),
        ("ACGT", "ACGT", 0, "ACGT", "ACGT"),
        ("A", "C", 60, "_A", "C_"),
        ("AC", "CA", 60, "_AC", "CA_"),
        ("GATTACA", "GCATGCT", 168, "G_ATTAC_A", "GCA_TGCT_"),
        ("ACGT", "TGCA", 156, "_ACGT", "TGCA_"),
    ];
    for &(a, b, cost, aa, ab) in cases {
        let (c, alignment) = nw.align(a.as_bytes(), b.as_bytes()).unwrap();
        assert_eq!(c, cost, "{a} {b}");
        assert_eq!(alignment.a, aa, "{a} {b}");
        assert_eq!(alignment.b, ab, "{a} {b}");
    }
}

#[test]
fn expanded_reference_pair() {
    let a = b"ACACTGACTACTGACTGGTGACTACTGACTGG";
    let b = b"TATTATACGCTATTATACGCGACGCGGACGCG";
    let (cost, alignment) = NW::default().align(a, b).unwrap();
    assert_eq!(cost, 660);
    assert_eq!(alignment.a, "____ACACTGACTACTG_ACTGGTGACTAC_TGACTG_G");
    assert_eq!(alignment.b, "TATTATAC_G_CTATTATAC__GCGAC_GCG_GAC_GCG");
    assert_eq!(alignment.verify(&CostModel::default(), a, b), 660);
}

#[test]
fn diagonal_wins_ties() {
    // A substitution costs exactly as much as two gaps.
    let mut sub = [[60; 4]; 4];
    for (i, row) in sub.iter_mut().enumerate() {
        row[i] = 0;
    }
    let nw = NW::new(CostModel::new(sub, 30).unwrap());
    let (cost, alignment) = nw.align(b"A", b"C").unwrap();
    assert_eq!(cost, 60);
    assert_eq!((alignment.a.as_str(), alignment.b.as_str()), ("A", "C"));
}

#[test]
fn gap_in_b_before_gap_in_a() {
    // Both orders of a deletion and an insertion cost the same.
    let (cost, alignment) = NW::default().align(b"AT", b"TA").unwrap();
    assert_eq!(cost, 60);
    assert_eq!((alignment.a.as_str(), alignment.b.as_str()), ("_AT", "TA_"));
}

#[test]
fn unit_cost_is_edit_distance() {
    let mut sub = [[1; 4]; 4];
    for (i, row) in sub.iter_mut().enumerate() {
        row[i] = 0;
    }
    let nw = NW::new(CostModel::new(sub, 1).unwrap());
    assert_eq!(nw.cost(b"ACGT", b"AGT").unwrap(), 1);
    assert_eq!(nw.cost(b"GATTACA", b"GCATGCT").unwrap(), 4);
    assert_eq!(nw.cost(b"", b"ACGTACGT").unwrap(), 8);
}

#[test]
fn invalid_symbols() {
    let nw = NW::default();
    for r in [nw.align(b"ACGN", b"ACG").map(|r| r.0), nw.cost(b"ACGN", b"ACG")] {
        match r {
            Err(Error::InvalidSymbol { seq, pos, symbol }) => {
                assert_eq!((seq, pos, symbol), ("a", 3, 'N'))
            }
            r => panic!("unexpected {r:?}"),
        }
    }
    assert!(matches!(
        nw.align(b"ACG", b"a"),
        Err(Error::InvalidSymbol { seq: "b", pos: 0, .. })
    ));
    // Empty input does not hide invalid symbols on the other side.
    assert!(nw.align(b"", b"AXC").is_err());
}

#[test]
fn large_costs_do_not_overflow() {
    let mut sub = [[1; 4]; 4];
    for (i, row) in sub.iter_mut().enumerate() {
        row[i] = 0;
    }
    let nw = NW::new(CostModel::new(sub, 1 << 28).unwrap());
    assert_eq!(nw.cost(b"AAA", b"").unwrap(), 3 << 28);
    assert_eq!(nw.align(b"AA", b"A").unwrap().0, 1 << 28);
    for r in [nw.cost(b"AAAAA", b"AAAA"), nw.align(b"AAAAA", b"AAAA").map(|r| r.0)] {
        assert!(matches!(r, Err(Error::CostOverflow { n: 5, m: 4 })), "{r:?}");
    }
}

#[test]
fn matches_brute_force() {
    let cm = CostModel::default();
    let nw = NW::default();
    let ref mut rng = ChaCha8Rng::seed_from_u64(1);
    for (n, m) in (0..=6).cartesian_product(0..=6) {
        let a = random_sequence(n, rng);
        let b = random_sequence(m, rng);
        assert_eq!(
            nw.align(&a, &b).unwrap().0,
            brute_force(&cm, &a, &b),
            "a {} b {}",
            to_str(&a),
            to_str(&b)
        );
    }
}

/// Test that:
/// - `cost` and `align` agree,
/// - the alignment spells both inputs and has the reported cost,
/// - the cost is symmetric.
#[test]
fn random_pairs() {
    let nw = NW::default();
    for (a, b) in test_sequences() {
        let cost = nw.cost(&a, &b).unwrap();
        let (align_cost, alignment) = nw.align(&a, &b).unwrap();
        assert_eq!(cost, align_cost, "a {} b {}", to_str(&a), to_str(&b));
        assert_eq!(alignment.a.len(), alignment.b.len());
        assert_eq!(strip_gaps(&alignment.a), a);
        assert_eq!(strip_gaps(&alignment.b), b);
        assert_eq!(alignment.verify(nw.cost_model(), &a, &b), cost);
        assert_eq!(nw.cost(&b, &a).unwrap(), cost);
    }
}

#[test]
fn self_alignment_is_identity() {
    let nw = NW::default();
    for (a, _) in test_sequences() {
        let (cost, alignment) = nw.align(&a, &a).unwrap();
        assert_eq!(cost, 0);
        assert_eq!(alignment.a.as_bytes(), a);
        assert_eq!(alignment.b.as_bytes(), a);
    }
}

#[test]
fn empty_against_sequence() {
    let nw = NW::default();
    for (_, b) in test_sequences() {
        let (cost, alignment) = nw.align(b"", &b).unwrap();
        assert_eq!(cost, 30 * b.len() as Cost);
        assert!(alignment.a.bytes().all(|c| c == b'_'));
        assert_eq!(alignment.b.as_bytes(), b);
    }
}

#[test]
fn appending_changes_cost_by_at_most_gap() {
    let nw = NW::default();
    let gap = nw.cost_model().gap();
    for (a, b) in test_sequences() {
        let cost = nw.cost(&a, &b).unwrap();
        for c in *b"ACGT" {
            let mut b2 = b.clone();
            b2.push(c);
            let diff = nw.cost(&a, &b2).unwrap() - cost;
            assert!((-gap..=gap).contains(&diff), "diff {diff}");
        }
    }
}
