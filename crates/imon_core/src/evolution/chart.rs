use super::requirement::EvolutionRequirement;
use crate::config::EvolutionTimingConfig;
use imon_data::Species;

/// Ordered table of every evolution path.
///
/// Row order matters: among the rows leaving one species, specific rows
/// are tried in table order before the fallback rows.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionChart {
    rows: Vec<EvolutionRequirement>,
}

impl EvolutionChart {
    /// The standard chart with stage timings taken from `timing`.
    #[must_use]
    pub fn new(timing: &EvolutionTimingConfig) -> Self {
        use EvolutionRequirement as Req;
        use Species::*;

        let fresh = timing.to_in_training_secs;
        let rookie = timing.to_rookie_secs;
        let champion = timing.to_champion_secs;
        let ultimate = timing.to_ultimate_secs;

        let rows = vec![
            Req::new(Botamon, Koromon, fresh).as_default(),
            // In-training
            Req::new(Koromon, Agumon, rookie).max_care_mistakes(1),
            Req::new(Koromon, Betamon, rookie)
                .min_care_mistakes(2)
                .as_default(),
            // Agumon line
            Req::new(Agumon, Greymon, champion)
                .max_care_mistakes(2)
                .min_battle_wins(5),
            Req::new(Agumon, Tyrannomon, champion)
                .min_care_mistakes(4)
                .min_weight(40),
            Req::new(Agumon, Devimon, champion).max_care_mistakes(3),
            Req::new(Agumon, Meramon, champion)
                .min_care_mistakes(4)
                .min_training_count(16),
            Req::new(Agumon, Numemon, champion).as_default(),
            // Betamon line
            Req::new(Betamon, Devimon, champion)
                .max_care_mistakes(3)
                .min_training_count(48),
            Req::new(Betamon, Airdramon, champion).min_care_mistakes(4),
            Req::new(Betamon, Seadramon, champion)
                .min_care_mistakes(4)
                .min_weight(35),
            Req::new(Betamon, Numemon, champion).as_default(),
            // Champions
            Req::new(Greymon, MetalGreymon, ultimate)
                .min_battle_wins(15)
                .min_win_rate(0.8)
                .as_default(),
            Req::new(Tyrannomon, Mamemon, ultimate).as_default(),
            Req::new(Devimon, MetalGreymon, ultimate).as_default(),
            Req::new(Meramon, Mamemon, ultimate).as_default(),
            Req::new(Airdramon, MetalGreymon, ultimate).as_default(),
            Req::new(Seadramon, Mamemon, ultimate).as_default(),
            Req::new(Numemon, Monzaemon, ultimate).as_default(),
        ];
        Self { rows }
    }

    /// The chart with default stage timings.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&EvolutionTimingConfig::default())
    }

    /// Custom chart, mostly for tests.
    #[must_use]
    pub fn from_rows(rows: Vec<EvolutionRequirement>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[EvolutionRequirement] {
        &self.rows
    }

    /// Rows leaving `species`, in table order.
    pub fn evolutions_for(&self, species: Species) -> impl Iterator<Item = &EvolutionRequirement> {
        self.rows.iter().filter(move |row| row.from == species)
    }
}

impl Default for EvolutionChart {
    fn default() -> Self {
        Self::standard()
    }
}
