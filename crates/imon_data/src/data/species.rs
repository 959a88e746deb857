use serde::{Deserialize, Serialize};

/// Evolution stage. Ordering follows the evolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Fresh,
    InTraining,
    Rookie,
    Champion,
    Ultimate,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Fresh,
        Stage::InTraining,
        Stage::Rookie,
        Stage::Champion,
        Stage::Ultimate,
    ];

    /// Hit points a combatant of this stage starts a battle with.
    #[must_use]
    pub fn battle_hp(self) -> u32 {
        match self {
            Stage::Fresh => 1,
            Stage::InTraining => 2,
            Stage::Rookie => 3,
            Stage::Champion => 4,
            Stage::Ultimate => 5,
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Stage::Fresh => "Fresh",
            Stage::InTraining => "In-Training",
            Stage::Rookie => "Rookie",
            Stage::Champion => "Champion",
            Stage::Ultimate => "Ultimate",
        }
    }
}

/// Battle attribute. Vaccine beats virus, virus beats data, data beats vaccine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Vaccine,
    Virus,
    Data,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [Attribute::Vaccine, Attribute::Virus, Attribute::Data];

    #[must_use]
    pub fn has_advantage_over(self, other: Attribute) -> bool {
        matches!(
            (self, other),
            (Attribute::Vaccine, Attribute::Virus)
                | (Attribute::Virus, Attribute::Data)
                | (Attribute::Data, Attribute::Vaccine)
        )
    }
}

/// Every species a pet can be. Declaration order is catalogue order and is
/// used when picking random opponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Botamon,
    Koromon,
    Agumon,
    Betamon,
    Greymon,
    Tyrannomon,
    Devimon,
    Meramon,
    Airdramon,
    Seadramon,
    Numemon,
    MetalGreymon,
    Mamemon,
    Monzaemon,
}

impl Species {
    pub const ALL: [Species; 14] = [
        Species::Botamon,
        Species::Koromon,
        Species::Agumon,
        Species::Betamon,
        Species::Greymon,
        Species::Tyrannomon,
        Species::Devimon,
        Species::Meramon,
        Species::Airdramon,
        Species::Seadramon,
        Species::Numemon,
        Species::MetalGreymon,
        Species::Mamemon,
        Species::Monzaemon,
    ];

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Species::Botamon => "Botamon",
            Species::Koromon => "Koromon",
            Species::Agumon => "Agumon",
            Species::Betamon => "Betamon",
            Species::Greymon => "Greymon",
            Species::Tyrannomon => "Tyrannomon",
            Species::Devimon => "Devimon",
            Species::Meramon => "Meramon",
            Species::Airdramon => "Airdramon",
            Species::Seadramon => "Seadramon",
            Species::Numemon => "Numemon",
            Species::MetalGreymon => "MetalGreymon",
            Species::Mamemon => "Mamemon",
            Species::Monzaemon => "Monzaemon",
        }
    }

    #[must_use]
    pub fn stage(self) -> Stage {
        match self {
            Species::Botamon => Stage::Fresh,
            Species::Koromon => Stage::InTraining,
            Species::Agumon | Species::Betamon => Stage::Rookie,
            Species::Greymon
            | Species::Tyrannomon
            | Species::Devimon
            | Species::Meramon
            | Species::Airdramon
            | Species::Seadramon
            | Species::Numemon => Stage::Champion,
            Species::MetalGreymon | Species::Mamemon | Species::Monzaemon => Stage::Ultimate,
        }
    }

    #[must_use]
    pub fn attribute(self) -> Attribute {
        match self {
            Species::Botamon | Species::Koromon => Attribute::Data,
            Species::Agumon => Attribute::Vaccine,
            Species::Betamon => Attribute::Virus,
            Species::Greymon => Attribute::Vaccine,
            Species::Tyrannomon => Attribute::Data,
            Species::Devimon => Attribute::Virus,
            Species::Meramon => Attribute::Data,
            Species::Airdramon => Attribute::Vaccine,
            Species::Seadramon => Attribute::Data,
            Species::Numemon => Attribute::Virus,
            Species::MetalGreymon => Attribute::Vaccine,
            Species::Mamemon => Attribute::Data,
            Species::Monzaemon => Attribute::Vaccine,
        }
    }

    #[must_use]
    pub fn base_power(self) -> u32 {
        match self {
            Species::Botamon => 5,
            Species::Koromon => 15,
            Species::Agumon => 40,
            Species::Betamon => 35,
            Species::Greymon => 90,
            Species::Tyrannomon => 75,
            Species::Devimon => 85,
            Species::Meramon => 70,
            Species::Airdramon => 80,
            Species::Seadramon => 78,
            Species::Numemon => 30,
            Species::MetalGreymon => 160,
            Species::Mamemon => 140,
            Species::Monzaemon => 130,
        }
    }

    /// Weight the pet is reset to when it evolves into this species.
    #[must_use]
    pub fn base_weight(self) -> u16 {
        match self.stage() {
            Stage::Fresh | Stage::InTraining => 10,
            Stage::Rookie => 20,
            Stage::Champion => 30,
            Stage::Ultimate => 40,
        }
    }

    /// Local hour (0-23) at which this species falls asleep.
    #[must_use]
    pub fn bedtime_hour(self) -> u32 {
        match self {
            Species::Botamon | Species::Koromon => 20,
            Species::Devimon | Species::MetalGreymon => 22,
            Species::Numemon => 19,
            Species::Agumon
            | Species::Betamon
            | Species::Greymon
            | Species::Tyrannomon
            | Species::Meramon
            | Species::Airdramon
            | Species::Seadramon
            | Species::Mamemon
            | Species::Monzaemon => 21,
        }
    }

    /// Local hour (0-23) at which this species wakes up.
    #[must_use]
    pub fn wake_hour(self) -> u32 {
        7
    }

    /// Whether `hour` falls inside this species' night.
    #[must_use]
    pub fn is_sleep_time(self, hour: u32) -> bool {
        hour >= self.bedtime_hour() || hour < self.wake_hour()
    }
}
