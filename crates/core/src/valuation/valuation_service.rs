use log::debug;

use crate::errors::Result;

use super::berkus::{calculate_berkus, BerkusInput, BerkusValuation};
use super::dcf::{calculate_dcf, DcfInput, DcfValuation};
use super::multiples::{calculate_multiples, MultiplesInput, MultiplesValuation};
use super::risk_factor::{calculate_risk_factor, RiskFactorInput, RiskFactorValuation};
use super::scorecard::{calculate_scorecard, ScorecardInput, ScorecardValuation};
use super::vc_method::{calculate_vc_method, VcMethodInput, VcMethodValuation};

/// Single entry point over the six valuation methods.
///
/// Every operation is a pure function of its inputs; the service carries no
/// state, so one instance can be shared freely across callers.
pub trait ValuationServiceTrait: Send + Sync {
    fn dcf_valuation(&self, input: &DcfInput) -> Result<DcfValuation>;
    fn multiples_valuation(&self, input: &MultiplesInput) -> Result<MultiplesValuation>;
    fn scorecard_valuation(&self, input: &ScorecardInput) -> Result<ScorecardValuation>;
    fn berkus_valuation(&self, input: &BerkusInput) -> Result<BerkusValuation>;
    fn risk_factor_valuation(&self, input: &RiskFactorInput) -> Result<RiskFactorValuation>;
    fn vc_method_valuation(&self, input: &VcMethodInput) -> Result<VcMethodValuation>;
}

/// Stateless facade over the method calculators.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        debug!("Initializing valuation service");
        ValuationService
    }
}

impl ValuationServiceTrait for ValuationService {
    fn dcf_valuation(&self, input: &DcfInput) -> Result<DcfValuation> {
        calculate_dcf(input)
    }

    fn multiples_valuation(&self, input: &MultiplesInput) -> Result<MultiplesValuation> {
        calculate_multiples(input)
    }

    fn scorecard_valuation(&self, input: &ScorecardInput) -> Result<ScorecardValuation> {
        calculate_scorecard(input)
    }

    fn berkus_valuation(&self, input: &BerkusInput) -> Result<BerkusValuation> {
        calculate_berkus(input)
    }

    fn risk_factor_valuation(&self, input: &RiskFactorInput) -> Result<RiskFactorValuation> {
        calculate_risk_factor(input)
    }

    fn vc_method_valuation(&self, input: &VcMethodInput) -> Result<VcMethodValuation> {
        calculate_vc_method(input)
    }
}
