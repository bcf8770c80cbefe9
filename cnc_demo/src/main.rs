//! cnc_demo - A scripted skirmish driven entirely through cnc_core
//!
//! Two characters trade blows until one fills their physical stress track
//! or the round limit runs out. Every roll and damage resolution is printed
//! in the two message shapes a chat log would consume.
//!
//! Run with `RUST_LOG=cnc_core=debug` to see the engine's own tracing.

use clap::Parser;
use cnc_core::prelude::*;
use cnc_core::{DamageMessage, RollMessage, StressChange};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;

/// Scripted two-character skirmish
#[derive(Parser, Debug)]
#[command(name = "cnc_demo")]
#[command(about = "Run a seeded Core & Cold skirmish", long_about = None)]
struct Args {
    /// Seed for the dice
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many rounds
    #[arg(long, default_value_t = 5)]
    rounds: u32,

    /// Rule tables TOML file (bundled defaults when omitted)
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Print messages as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

/// Everything the host keeps between turns
struct Skirmish {
    tables: RuleTables,
    roster: Vec<Character>,
    encounter: Encounter,
    rng: ChaCha8Rng,
    json: bool,
}

impl Skirmish {
    fn new(tables: RuleTables, seed: u64, json: bool) -> Self {
        let mut roster = vec![veteran(), cutthroat()];
        for character in &mut roster {
            character.recompute(&tables);
        }

        Skirmish {
            tables,
            roster,
            encounter: Encounter::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            json,
        }
    }

    fn run(&mut self, max_rounds: u32) -> Result<(), Box<dyn Error>> {
        let ids: Vec<_> = self
            .roster
            .iter()
            .map(|c| self.encounter.add_participant(c.id.clone()))
            .collect();
        self.encounter.start()?;

        for roll in self.encounter.roll_initiative(&ids, &self.roster, &mut self.rng)? {
            self.print_roll(&roll.outcome.message());
        }

        while self.encounter.round() <= max_rounds {
            let Some(actor) = self.encounter.current().map(|p| p.character_id.clone()) else {
                break;
            };
            if let Some(change) = self.take_turn(&actor)? {
                if change.is_full() {
                    let name = self.name_of(&actor);
                    println!("{name} wins in round {}", self.encounter.round());
                    return Ok(());
                }
            }
            self.encounter.next_turn(&mut self.roster)?;
        }

        println!("Both fighters still stand after {max_rounds} rounds");
        Ok(())
    }

    /// Attack the first other roster member with the first weapon carried
    fn take_turn(&mut self, actor_id: &CharacterId) -> Result<Option<StressChange>, Box<dyn Error>> {
        let Some(actor) = self.roster.character(actor_id) else {
            return Ok(None);
        };
        let Some(target) = self.roster.iter().find(|c| &c.id != actor_id) else {
            return Ok(None);
        };
        let Some(weapon) = actor.weapons().next().map(|w| w.id.clone()) else {
            info!(actor = %actor_id, "no weapon, waiting");
            return Ok(None);
        };

        let attack = roll_attack(actor, &weapon, &self.tables, &mut self.rng)?;
        self.print_roll(&attack.message());

        let defense = target.defense_value(DefenseKind::Dodge);
        if !attack.roll.succeeds_against(defense) {
            info!(actor = %actor_id, total = attack.total(), defense, "miss");
            self.spend(actor_id, ActionKind::Attack)?;
            return Ok(None);
        }

        let damage = resolve_damage(
            actor,
            &weapon,
            DamageOptions {
                exceed: Some(attack.roll.exceed(defense)),
                target_armor: Some(equipped_armor(target)),
            },
            &self.tables,
        )?;
        self.print_damage(&damage.message());

        let target_id = target.id.clone();
        self.spend(actor_id, ActionKind::Attack)?;
        let change = self
            .roster
            .character_mut(&target_id)
            .map(|t| t.apply_damage(u32::try_from(damage.final_damage()).unwrap_or(0), StressType::Physical));

        Ok(change)
    }

    fn spend(&mut self, id: &CharacterId, action: ActionKind) -> Result<(), Box<dyn Error>> {
        if let Some(character) = self.roster.character_mut(id) {
            character.spend_action(action, &self.tables)?;
        }
        Ok(())
    }

    fn name_of(&self, id: &CharacterId) -> String {
        self.roster
            .character(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn print_roll(&self, message: &RollMessage) {
        if self.json {
            if let Ok(line) = serde_json::to_string(message) {
                println!("{line}");
            }
            return;
        }

        let flag = if message.is_critical {
            " CRITICAL"
        } else if message.is_fumble {
            " FUMBLE"
        } else {
            ""
        };
        println!(
            "{} | {} | {} = {} {:?}{}",
            message.actor_name, message.label, message.formula, message.total, message.dice, flag
        );
    }

    fn print_damage(&self, message: &DamageMessage) {
        if self.json {
            if let Ok(line) = serde_json::to_string(message) {
                println!("{line}");
            }
            return;
        }

        println!(
            "{} | {} | {} + {} - {} armor = {} damage",
            message.actor_name,
            message.weapon_name,
            message.base_damage,
            message.exceed,
            message.armor_reduction,
            message.final_damage
        );
    }
}

fn equipped_armor(character: &Character) -> i32 {
    character
        .items
        .iter()
        .filter(|i| i.equipped)
        .filter_map(|i| match &i.kind {
            ItemKind::Armor(armor) => Some(armor.damage_reduction.current),
            _ => None,
        })
        .sum()
}

fn veteran() -> Character {
    Character::new("veteran", "Old Mara")
        .with_attribute(Attribute::Strength, 3)
        .with_attribute(Attribute::Agility, 1)
        .with_attribute(Attribute::Mind, 1)
        .with_attribute(Attribute::Will, 2)
        .with_skill(Skill::Melee, 2)
        .with_skill(Skill::Resist, 1)
        .with_action_points(6)
        .with_item(
            Item::new("maul", "Maul", ItemKind::Weapon(Weapon::new(5, Skill::Melee, WeaponSize::Heavy)))
                .with_weight(4),
        )
        .with_item(Item {
            equipped: true,
            ..Item::new("coat", "Oilskin Coat", ItemKind::Armor(Armor::default())).with_weight(2)
        })
}

fn cutthroat() -> Character {
    let mut armor = Armor::default();
    armor.damage_reduction.base = 1;

    Character::new("cutthroat", "Finch")
        .with_attribute(Attribute::Strength, 1)
        .with_attribute(Attribute::Agility, 3)
        .with_attribute(Attribute::Mind, 2)
        .with_attribute(Attribute::Will, 1)
        .with_skill(Skill::Melee, 1)
        .with_skill(Skill::Vigilance, 2)
        .with_action_points(6)
        .with_item(
            Item::new("knife", "Knife", ItemKind::Weapon(Weapon::new(2, Skill::Melee, WeaponSize::Light)))
                .with_weight(1),
        )
        .with_item(Item {
            equipped: true,
            ..Item::new("jerkin", "Leather Jerkin", ItemKind::Armor(armor)).with_weight(2)
        })
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let tables = match &args.rules {
        Some(path) => cnc_core::load_rule_tables(path)?,
        None => RuleTables::default(),
    };
    info!(seed = args.seed, rounds = args.rounds, "starting skirmish");

    Skirmish::new(tables, args.seed, args.json).run(args.rounds)
}
