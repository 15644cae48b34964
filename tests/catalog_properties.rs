use std::collections::BTreeSet;

use music_library::{Catalog, CatalogError};

/// Small deterministic generator so the interleavings are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn title(&mut self) -> String {
        let alphabet = ["a", "B", "c", "ab", "Ab", "b ", "zz", "Z", "0", "é"];
        let first = alphabet[(self.next() % alphabet.len() as u64) as usize];
        let second = alphabet[(self.next() % alphabet.len() as u64) as usize];
        format!("{first}{second}")
    }
}

fn titles(catalog: &Catalog) -> Vec<String> {
    catalog.list().map(|song| song.title.clone()).collect()
}

#[test]
fn listing_is_sorted_for_any_insert_order() {
    for seed in 0..20 {
        let mut rng = Lcg(seed);
        let mut catalog = Catalog::new();
        for _ in 0..40 {
            let title = rng.title();
            if !catalog.contains(&title) {
                catalog.insert(title, "artist", "genre").unwrap();
            }
        }
        let listed = titles(&catalog);
        let mut sorted = listed.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(listed, sorted, "seed {seed}");
    }
}

#[test]
fn interleaved_inserts_and_deletes_match_a_reference_set() {
    for seed in 0..20 {
        let mut rng = Lcg(seed + 100);
        let mut catalog = Catalog::new();
        let mut expected = BTreeSet::new();

        for _ in 0..200 {
            let title = rng.title();
            if rng.next() % 3 == 0 {
                let result = catalog.delete(&title);
                if expected.remove(&title) {
                    assert_eq!(result.unwrap().title, title);
                } else {
                    assert_eq!(result.unwrap_err(), CatalogError::NotFound(title.clone()));
                }
            } else {
                let before = titles(&catalog);
                let result = catalog.insert(title.clone(), "a", "g").map(|s| s.title.clone());
                if expected.insert(title.clone()) {
                    assert_eq!(result.unwrap(), title);
                } else {
                    assert_eq!(
                        result.unwrap_err(),
                        CatalogError::DuplicateTitle(title.clone())
                    );
                    assert_eq!(titles(&catalog), before);
                }
            }

            assert_eq!(catalog.is_empty(), catalog.list().next().is_none());
        }

        let expected: Vec<String> = expected.into_iter().collect();
        assert_eq!(titles(&catalog), expected, "seed {seed}");
    }
}

#[test]
fn clear_always_leaves_an_empty_listing() {
    for seed in 0..5 {
        let mut rng = Lcg(seed);
        let mut catalog = Catalog::new();
        for _ in 0..seed * 10 {
            let _ = catalog.insert(rng.title(), "", "");
        }
        catalog.clear();
        assert!(catalog.is_empty());
        assert_eq!(catalog.list().count(), 0);
    }
}

#[test]
fn listing_is_restartable() {
    let mut catalog = Catalog::new();
    catalog.insert("Yesterday", "Beatles", "Rock").unwrap();
    catalog.insert("Imagine", "Lennon", "Rock").unwrap();

    let first = titles(&catalog);
    let second = titles(&catalog);
    assert_eq!(first, ["Imagine", "Yesterday"]);
    assert_eq!(first, second);

    catalog.delete("Imagine").unwrap();
    assert_eq!(titles(&catalog), ["Yesterday"]);
}

#[test]
fn deleting_from_an_empty_catalog_fails() {
    let mut catalog = Catalog::new();
    assert_eq!(
        catalog.delete("Missing"),
        Err(CatalogError::NotFound("Missing".to_string()))
    );
    assert_eq!(catalog.list().count(), 0);
}
