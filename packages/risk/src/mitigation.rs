//! Mitigation checklist and insurance coverage gaps.
//!
//! The action catalogue is static. [`prioritize`] keeps every general
//! action plus the hazard-specific actions for hazards that are not rated
//! low at the queried location.

use hazard_map_hazard_models::mitigation::{
    ActionCategory, ActionCost, Impact, MitigationAction, MitigationPlan, Timeframe,
};
use hazard_map_hazard_models::{Hazard, RiskData, RiskLevel};

/// Every action the engine can recommend, in display order.
pub static ACTIONS: [MitigationAction; 12] = [
    MitigationAction {
        id: "1",
        title: "Create defensible space",
        description: "Clear 5 feet of vegetation around your home. Remove dead plants, leaves, and debris.",
        cost: ActionCost::Free,
        timeframe: Timeframe::Immediate,
        impact: Impact::High,
        category: ActionCategory::Wildfire,
        insurance_tip: None,
    },
    MitigationAction {
        id: "2",
        title: "Locate gas & water shutoffs",
        description: "Know where your main gas and water shutoff valves are located. Practice turning them off.",
        cost: ActionCost::Free,
        timeframe: Timeframe::Immediate,
        impact: Impact::High,
        category: ActionCategory::Earthquake,
        insurance_tip: None,
    },
    MitigationAction {
        id: "3",
        title: "Save evacuation routes",
        description: "Download offline maps with 2-3 evacuation routes. Share with family members.",
        cost: ActionCost::Free,
        timeframe: Timeframe::Immediate,
        impact: Impact::High,
        category: ActionCategory::General,
        insurance_tip: None,
    },
    MitigationAction {
        id: "4",
        title: "Elevate important items",
        description: "Move electronics, documents, and valuables off the floor and to higher shelves.",
        cost: ActionCost::Free,
        timeframe: Timeframe::Immediate,
        impact: Impact::Medium,
        category: ActionCategory::Flood,
        insurance_tip: None,
    },
    MitigationAction {
        id: "5",
        title: "Photograph your belongings",
        description: "Take photos/video of all rooms and valuables for insurance claims. Store in cloud.",
        cost: ActionCost::Free,
        timeframe: Timeframe::Immediate,
        impact: Impact::High,
        category: ActionCategory::General,
        insurance_tip: None,
    },
    MitigationAction {
        id: "6",
        title: "Secure heavy furniture",
        description: "Anchor bookcases, TVs, and water heaters to wall studs using earthquake straps.",
        cost: ActionCost::Low,
        timeframe: Timeframe::Week,
        impact: Impact::High,
        category: ActionCategory::Earthquake,
        insurance_tip: None,
    },
    MitigationAction {
        id: "7",
        title: "Build a go-bag",
        description: "72-hour kit with water, food, medications, documents, cash, and phone charger.",
        cost: ActionCost::Low,
        timeframe: Timeframe::Week,
        impact: Impact::High,
        category: ActionCategory::General,
        insurance_tip: None,
    },
    MitigationAction {
        id: "8",
        title: "Install smoke detectors",
        description: "Ensure working smoke detectors on every floor. Replace batteries every 6 months.",
        cost: ActionCost::Low,
        timeframe: Timeframe::Week,
        impact: Impact::High,
        category: ActionCategory::Wildfire,
        insurance_tip: None,
    },
    MitigationAction {
        id: "9",
        title: "Review renters/homeowners insurance",
        description: "Check if your policy covers smoke damage, water backup, and displacement costs.",
        cost: ActionCost::Free,
        timeframe: Timeframe::Month,
        impact: Impact::High,
        category: ActionCategory::General,
        insurance_tip: Some(
            "Most standard policies do NOT cover flood or earthquake damage. These require separate policies.",
        ),
    },
    MitigationAction {
        id: "10",
        title: "Get earthquake insurance quote",
        description: "California Earthquake Authority (CEA) policies start around $2-3/day.",
        cost: ActionCost::Medium,
        timeframe: Timeframe::Month,
        impact: Impact::High,
        category: ActionCategory::Earthquake,
        insurance_tip: Some(
            "CEA policies have 5-15% deductibles. Make sure you can cover this amount.",
        ),
    },
    MitigationAction {
        id: "11",
        title: "Consider flood insurance",
        description: "NFIP policies available even outside high-risk zones. ~$500-700/year for low-risk areas.",
        cost: ActionCost::Medium,
        timeframe: Timeframe::Month,
        impact: Impact::High,
        category: ActionCategory::Flood,
        insurance_tip: Some(
            "NFIP policies have a 30-day waiting period. Don't wait until a storm is forecast.",
        ),
    },
    MitigationAction {
        id: "12",
        title: "Start emergency fund",
        description: "Target $1,000 initially, then build to cover insurance deductibles.",
        cost: ActionCost::Medium,
        timeframe: Timeframe::Month,
        impact: Impact::High,
        category: ActionCategory::General,
        insurance_tip: None,
    },
];

/// Listed when earthquake risk is not low.
pub const EARTHQUAKE_GAP: &str = "Earthquake insurance";

/// Listed when flood risk is not low.
pub const FLOOD_GAP: &str = "Flood insurance (NFIP)";

/// Listed for every location.
pub const ALWAYS_GAPS: [&str; 2] = ["Evacuation/displacement coverage", "Smoke damage coverage"];

/// The hazard an action category targets, or `None` for general actions.
#[must_use]
pub const fn category_hazard(category: ActionCategory) -> Option<Hazard> {
    match category {
        ActionCategory::Wildfire => Some(Hazard::Wildfire),
        ActionCategory::Flood => Some(Hazard::Flood),
        ActionCategory::Earthquake => Some(Hazard::Earthquake),
        ActionCategory::General => None,
    }
}

fn is_relevant(action: &MitigationAction, risk: &RiskData) -> bool {
    category_hazard(action.category).is_none_or(|hazard| risk.score(hazard).level() != RiskLevel::Low)
}

/// Selects the actions relevant to `risk`, grouped by timeframe.
#[must_use]
pub fn prioritize(risk: &RiskData) -> MitigationPlan {
    let mut plan = MitigationPlan::default();

    for action in ACTIONS.iter().filter(|a| is_relevant(a, risk)) {
        let bucket = match action.timeframe {
            Timeframe::Immediate => &mut plan.immediate,
            Timeframe::Week => &mut plan.week,
            Timeframe::Month => &mut plan.month,
            Timeframe::Quarter => &mut plan.quarter,
        };
        bucket.push(action);
    }

    log::debug!("Selected {} of {} mitigation actions", plan.len(), ACTIONS.len());

    plan
}

/// Insurance coverage gaps for `risk`.
///
/// Earthquake and flood coverage are listed when those hazards are not
/// rated low; displacement and smoke coverage are always listed.
#[must_use]
pub fn coverage_gaps(risk: &RiskData) -> Vec<&'static str> {
    let mut gaps = Vec::with_capacity(4);
    if risk.earthquake.level() != RiskLevel::Low {
        gaps.push(EARTHQUAKE_GAP);
    }
    if risk.flood.level() != RiskLevel::Low {
        gaps.push(FLOOD_GAP);
    }
    gaps.extend(ALWAYS_GAPS);
    gaps
}

/// Looks up a catalogue action by ID.
#[must_use]
pub fn action(id: &str) -> Option<&'static MitigationAction> {
    ACTIONS.iter().find(|a| a.id == id)
}
