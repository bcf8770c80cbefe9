//! Invariants of the derived stat engine, stress tracks and dice

use cnc_core::prelude::*;
use cnc_core::{evaluate_with, ScriptedDice};
use proptest::prelude::*;

fn build(attributes: [i32; 4], ranks: &[i32]) -> Character {
    let mut character = Character::new("prop", "Prop");
    for (attribute, base) in Attribute::all().iter().zip(attributes) {
        character = character.with_attribute(*attribute, base);
    }
    for (skill, rank) in Skill::all().iter().zip(ranks) {
        character = character.with_skill(*skill, *rank);
    }
    character.recompute(&RuleTables::default());
    character
}

proptest! {
    #[test]
    fn skill_bonus_is_attribute_plus_rank(
        attributes in prop::array::uniform4(-5i32..10),
        ranks in prop::collection::vec(0i32..6, 24),
    ) {
        let character = build(attributes, &ranks);
        for skill in Skill::all() {
            prop_assert_eq!(
                character.skill_bonus(*skill),
                character.attribute_total(skill.attribute()) + character.skill_rank(*skill)
            );
        }
    }

    #[test]
    fn active_defense_is_passive_plus_five(
        attributes in prop::array::uniform4(-5i32..10),
        ranks in prop::collection::vec(0i32..6, 24),
    ) {
        let d = build(attributes, &ranks).defense;
        prop_assert_eq!(d.active_dodge.value - d.passive_dodge, 5);
        prop_assert_eq!(d.active_mental.value - d.passive_mental, 5);
    }

    #[test]
    fn recompute_is_idempotent(
        attributes in prop::array::uniform4(-5i32..10),
        ranks in prop::collection::vec(0i32..6, 24),
    ) {
        let once = build(attributes, &ranks);
        let mut twice = once.clone();
        twice.recompute(&RuleTables::default());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn stress_never_exceeds_max(
        will in -3i32..8,
        start in 0u32..12,
        amount in 0u32..20,
        physical in any::<bool>(),
    ) {
        let mut character = build([0, 0, 0, will], &[]);
        let stress_type = if physical { StressType::Physical } else { StressType::Mental };

        character.apply_damage(start, stress_type);
        let before = character.stress.get(stress_type).current;
        let change = character.apply_damage(amount, stress_type);

        prop_assert_eq!(change.current, (before + amount).min(change.max));
        prop_assert!(change.current <= change.max);
    }

    #[test]
    fn extreme_values_never_panic(
        attributes in prop::array::uniform4(any::<i32>()),
        bonus in any::<i32>(),
        rank in any::<i32>(),
        weight in any::<u32>(),
        base_damage in any::<i32>(),
        modifier in any::<i32>(),
        stress in any::<u32>(),
    ) {
        let tables = RuleTables::default();
        let mut character = build(attributes, &[]).with_skill(Skill::Melee, rank).with_item(
            Item::new("club", "Club", ItemKind::Weapon(Weapon::new(base_damage, Skill::Melee, WeaponSize::Light)))
                .with_weight(weight),
        ).with_item(Item::new("crate", "Crate", ItemKind::Equipment(Default::default())).with_weight(weight));
        character.attributes.strength.bonus = bonus;
        character.stress.physical.current = stress;
        character.recompute(&tables);
        character.apply_damage(stress, StressType::Physical);

        let club = ItemId::from("club");
        let attack = roll_attack(&character, &club, &tables, &mut ScriptedDice::new([10, 10])).unwrap();
        let damage = resolve_damage(
            &character,
            &club,
            DamageOptions { exceed: Some(attack.roll.exceed(modifier)), target_armor: Some(modifier) },
            &tables,
        ).unwrap();
        prop_assert!(damage.final_damage() >= 0);
        prop_assert!(character.stress.physical.current <= character.stress.physical.max);

        let roll = evaluate_with(modifier, &mut ScriptedDice::new([1, 1]));
        prop_assert!(roll.is_fumble);
        prop_assert_eq!(roll.natural(), 2);
    }

    #[test]
    fn only_natural_extremes_classify(
        a in 1u8..=10,
        b in 1u8..=10,
        modifier in -30i32..30,
    ) {
        let roll = evaluate_with(modifier, &mut ScriptedDice::new([a, b]));
        prop_assert_eq!(roll.total, i32::from(a) + i32::from(b) + modifier);
        prop_assert_eq!(roll.is_critical, a == 10 && b == 10);
        prop_assert_eq!(roll.is_fumble, a == 1 && b == 1);
    }
}
