// Span/amplifier link budget for a planned fibre route
use crate::path::DistanceRoute;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Assumed noise floor of the receiver, in dBm
const NOISE_FLOOR_DBM: f64 = -58.0;
/// Share of fibre loss counted against OSNR
const RESIDUAL_LOSS_FACTOR: f64 = 0.1;

/// Optical parameters used to estimate a link budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetConfig {
    pub launch_dbm: f64,
    pub loss_db_per_km: f64,
    pub amp_gain_db: f64,
    pub amp_nf_db: f64,
    pub span_km: f64,
    pub osnr_threshold_db: f64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            launch_dbm: 0.0,
            loss_db_per_km: 0.22,
            amp_gain_db: 20.0,
            amp_nf_db: 4.0,
            span_km: 80.0,
            osnr_threshold_db: 18.0,
        }
    }
}

impl BudgetConfig {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("launch_dbm", self.launch_dbm),
            ("loss_db_per_km", self.loss_db_per_km),
            ("amp_gain_db", self.amp_gain_db),
            ("amp_nf_db", self.amp_nf_db),
            ("span_km", self.span_km),
            ("osnr_threshold_db", self.osnr_threshold_db),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidConfig(format!("{} must be a finite number", name)));
        }
        if self.span_km <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "span_km must be positive, got {}",
                self.span_km
            )));
        }
        if self.loss_db_per_km < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "loss_db_per_km must not be negative, got {}",
                self.loss_db_per_km
            )));
        }
        if self.amp_nf_db < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "amp_nf_db must not be negative, got {}",
                self.amp_nf_db
            )));
        }
        Ok(())
    }
}

/// Coarse planning estimate for a route.
///
/// Amplifiers sit at every span boundary between the two terminals. The OSNR
/// margin is a rough heuristic: each amplifier adds its noise figure on top
/// of a fixed noise floor, plus a tenth of the total fibre loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkBudget {
    pub distance_km: f64,
    pub amplifiers: u32,
    pub total_loss_db: f64,
    pub osnr_margin_db: f64,
    pub regen_required: bool,
}

impl LinkBudget {
    pub fn estimate(route: &DistanceRoute, config: &BudgetConfig) -> Self {
        let distance_km = route.total_distance;
        let spans = (distance_km / config.span_km).ceil();
        let amplifiers = (spans - 1.0).max(0.0) as u32;
        let total_loss_db = distance_km * config.loss_db_per_km;

        let total_nf = config.amp_nf_db * f64::from(amplifiers.max(1));
        let residual = total_loss_db * RESIDUAL_LOSS_FACTOR;
        let osnr_margin_db = config.launch_dbm - (NOISE_FLOOR_DBM + total_nf + residual);

        Self {
            distance_km,
            amplifiers,
            total_loss_db,
            osnr_margin_db,
            regen_required: osnr_margin_db < config.osnr_threshold_db,
        }
    }
}
