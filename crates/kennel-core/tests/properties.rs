//! Property tests for the capacity, ordering and undo invariants.

use proptest::prelude::*;

use kennel_core::inventory::Inventory;
use kennel_core::name_index::NameIndex;
use kennel_core::{CheckInEngine, CheckInOptions, Pet, PetId, Species};

#[derive(Debug, Clone, Copy)]
enum Op {
    Reserve(Species),
    Release(Species),
}

fn species() -> impl Strategy<Value = Species> {
    prop_oneof![Just(Species::Dog), Just(Species::Cat)]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => species().prop_map(Op::Reserve),
        1 => species().prop_map(Op::Release),
    ]
}

proptest! {
    #[test]
    fn capacity_tracks_initial_plus_releases_minus_reservations(
        dogs in 0u32..8,
        cats in 0u32..8,
        ops in prop::collection::vec(op(), 0..64),
    ) {
        let mut inventory = Inventory::new(dogs, cats);
        let mut expected = [i64::from(dogs), i64::from(cats)];
        let slot = |s: Species| match s { Species::Dog => 0, Species::Cat => 1 };

        for op in ops {
            match op {
                Op::Reserve(s) => {
                    let had_space = inventory.has_space_for(s);
                    let result = inventory.reserve(s);
                    prop_assert_eq!(result.is_ok(), had_space);
                    if result.is_ok() {
                        expected[slot(s)] -= 1;
                    }
                }
                Op::Release(s) => {
                    inventory.release(s);
                    expected[slot(s)] += 1;
                }
            }

            prop_assert!(expected[0] >= 0 && expected[1] >= 0);
            prop_assert_eq!(i64::from(inventory.available(Species::Dog)), expected[0]);
            prop_assert_eq!(i64::from(inventory.available(Species::Cat)), expected[1]);
        }
    }

    #[test]
    fn name_index_stays_sorted_and_finds_every_name(
        names in prop::collection::vec("[A-Za-z]{1,8}", 0..40),
    ) {
        let mut index = NameIndex::new();
        for (i, name) in names.iter().enumerate() {
            index.insert(name, PetId::new(i.to_string()));
        }

        let entries = index.entries();
        prop_assert!(entries.windows(2).all(|w| w[0].name_lower <= w[1].name_lower));
        prop_assert_eq!(entries.len(), names.len());

        for name in &names {
            let found = index.find(&name.to_uppercase());
            prop_assert!(found.is_some());
            let id: usize = found.unwrap().as_str().parse().unwrap();
            prop_assert_eq!(names[id].to_lowercase(), name.to_lowercase());
        }
    }

    #[test]
    fn process_all_drains_in_arrival_order(
        kinds in prop::collection::vec(species(), 0..30),
        dogs in 0u32..10,
        cats in 0u32..10,
    ) {
        let mut engine = CheckInEngine::with_capacity(dogs, cats);
        for (i, s) in kinds.iter().enumerate() {
            let pet = Pet::new(PetId::new(i.to_string()), "Pet", s.as_str(), 1, None).unwrap();
            engine.add_pet(pet).unwrap();
        }

        let attempts = engine.process_all(CheckInOptions::default());
        let order: Vec<PetId> = attempts.iter().filter_map(|a| a.pet_id.clone()).collect();
        let expected: Vec<PetId> = (0..kinds.len()).map(|i| PetId::new(i.to_string())).collect();
        prop_assert_eq!(order, expected);
        prop_assert_eq!(engine.state().queue_length, 0);

        let confirmed_dogs = kinds.iter().filter(|s| **s == Species::Dog).count().min(dogs as usize);
        let confirmed_cats = kinds.iter().filter(|s| **s == Species::Cat).count().min(cats as usize);
        prop_assert_eq!(engine.state().bookings_count, confirmed_dogs + confirmed_cats);
    }

    #[test]
    fn undoing_everything_restores_capacity(
        kinds in prop::collection::vec(species(), 0..20),
        dogs in 0u32..6,
        cats in 0u32..6,
    ) {
        let mut engine = CheckInEngine::with_capacity(dogs, cats);
        for (i, s) in kinds.iter().enumerate() {
            let pet = Pet::new(PetId::new(i.to_string()), "Pet", s.as_str(), 1, None).unwrap();
            engine.add_pet(pet).unwrap();
        }
        engine.process_all(CheckInOptions::default());

        while engine.undo_recent().is_ok() {}

        let state = engine.state();
        prop_assert_eq!(state.undo_depth, 0);
        prop_assert_eq!(state.bookings_count, 0);
        prop_assert_eq!(state.inventory.dog_spaces_available, dogs);
        prop_assert_eq!(state.inventory.cat_spaces_available, cats);
    }
}
