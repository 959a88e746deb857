//! Plain-text rendering of a pet for the terminal.

use imon_data::{PetStatus, MAX_HEARTS};
use std::fmt::Write;

fn hearts(value: u8) -> String {
    let filled = usize::from(value.min(MAX_HEARTS));
    let empty = usize::from(MAX_HEARTS) - filled;
    format!("{}{}", "♥".repeat(filled), "♡".repeat(empty))
}

/// Multi-line status block.
#[must_use]
pub fn status_block(status: &PetStatus) -> String {
    let mut out = String::new();

    if status.is_egg {
        out.push_str("An egg sits quietly. Hatch it to begin.\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{} ({}) · {} day(s) old · {} g",
        status.species.display_name(),
        status.stage.display_name(),
        status.age_days,
        status.weight_grams
    );

    if let Some(cause) = status.cause_of_death {
        let _ = writeln!(out, "Passed away from {cause}.");
        return out;
    }

    let _ = writeln!(out, "Hunger   {}", hearts(status.hunger_hearts.value()));
    let _ = writeln!(out, "Strength {}", hearts(status.strength_hearts.value()));

    let mut flags = Vec::new();
    if status.is_sleeping {
        flags.push("asleep".to_string());
    }
    if !status.lights_on {
        flags.push("lights off".to_string());
    }
    if status.poop_count > 0 {
        flags.push(format!("{} poop", status.poop_count));
    }
    if status.is_injured {
        flags.push("injured".to_string());
    }
    if !flags.is_empty() {
        let _ = writeln!(out, "{}", flags.join(", "));
    }

    let _ = writeln!(
        out,
        "Battles {}W/{}L · trainings {} · care mistakes {}",
        status.battle_wins, status.battle_losses, status.training_count, status.care_mistakes
    );
    if status.needs_attention {
        out.push_str("(!) Needs attention\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use imon_data::{CauseOfDeath, Lifecycle, PetState, StatHearts};

    #[test]
    fn test_hearts() {
        assert_eq!(hearts(0), "♡♡♡♡");
        assert_eq!(hearts(3), "♥♥♥♡");
    }

    #[test]
    fn test_egg_block() {
        let egg = PetState::new_egg(Utc::now());
        assert!(status_block(&PetStatus::from(&egg)).contains("egg"));
    }

    #[test]
    fn test_living_block() {
        let mut pet = PetState::hatched(Utc::now());
        pet.hunger_hearts = StatHearts::EMPTY;
        pet.poop_count = 2;
        let text = status_block(&PetStatus::from(&pet));
        assert!(text.starts_with("Botamon (Fresh)"));
        assert!(text.contains("Hunger   ♡♡♡♡"));
        assert!(text.contains("2 poop"));
        assert!(text.contains("Needs attention"));
    }

    #[test]
    fn test_memorial_block() {
        let mut pet = PetState::hatched(Utc::now());
        pet.lifecycle = Lifecycle::Dead(CauseOfDeath::UntreatedInjury);
        let text = status_block(&PetStatus::from(&pet));
        assert!(text.contains("an untreated injury"));
        assert!(!text.contains("Hunger"));
    }
}
