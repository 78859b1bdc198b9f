use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The five Berkus risk-reduction criteria.
///
/// All five must be scored on every call; the method rejects partial sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BerkusCriterion {
    Concept,
    Prototype,
    Team,
    StrategicRelationships,
    ProductRollout,
}

impl BerkusCriterion {
    pub const ALL: [BerkusCriterion; 5] = [
        BerkusCriterion::Concept,
        BerkusCriterion::Prototype,
        BerkusCriterion::Team,
        BerkusCriterion::StrategicRelationships,
        BerkusCriterion::ProductRollout,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            BerkusCriterion::Concept => "concept",
            BerkusCriterion::Prototype => "prototype",
            BerkusCriterion::Team => "team",
            BerkusCriterion::StrategicRelationships => "strategic_relationships",
            BerkusCriterion::ProductRollout => "product_rollout",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            BerkusCriterion::Concept => "Sound Idea (Basic Value)",
            BerkusCriterion::Prototype => "Prototype (Reduces Technology Risk)",
            BerkusCriterion::Team => "Quality Management Team (Reduces Execution Risk)",
            BerkusCriterion::StrategicRelationships => {
                "Strategic Relationships (Reduces Market Risk)"
            }
            BerkusCriterion::ProductRollout => "Product Rollout or Sales (Reduces Financial Risk)",
        }
    }
}

impl fmt::Display for BerkusCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for a Berkus valuation: a score per required criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BerkusInput {
    pub criteria_scores: HashMap<BerkusCriterion, i32>,
}

/// Value assigned to a single Berkus criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BerkusCriterionValue {
    pub name: String,
    pub score: i32,
    pub value: Decimal,
}

/// Result of a Berkus valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BerkusValuation {
    pub valuation: Decimal,
    pub max_possible: Decimal,
    pub breakdown: HashMap<BerkusCriterion, BerkusCriterionValue>,
}
