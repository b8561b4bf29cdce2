//! Mitigation action types.
//!
//! Actions are static reference content; a [`MitigationPlan`] is the
//! per-query selection of those actions, grouped by when they should be
//! done.

use std::collections::BTreeSet;

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

/// Rough out-of-pocket cost of an action.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActionCost {
    /// No cost
    Free,
    /// $1-50
    Low,
    /// $50-500
    Medium,
    /// $500+
    High,
}

impl ActionCost {
    /// Dollar range label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Low => "$1-50",
            Self::Medium => "$50-500",
            Self::High => "$500+",
        }
    }
}

/// When an action should be completed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Timeframe {
    /// Right now
    Immediate,
    /// Within a week
    Week,
    /// Within a month
    Month,
    /// Within a quarter
    Quarter,
}

/// Expected reduction in exposure from completing an action.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Impact {
    /// Minor improvement
    Low,
    /// Noticeable improvement
    Medium,
    /// Major improvement
    High,
}

/// Which hazard an action addresses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActionCategory {
    /// Wildfire-specific preparation
    Wildfire,
    /// Flood-specific preparation
    Flood,
    /// Earthquake-specific preparation
    Earthquake,
    /// Useful regardless of hazard
    General,
}

/// A single recommended preparedness action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MitigationAction {
    /// Stable identifier used for completion tracking.
    pub id: &'static str,
    /// Short imperative title.
    pub title: &'static str,
    /// What to do.
    pub description: &'static str,
    /// Cost tier.
    pub cost: ActionCost,
    /// Timeframe bucket.
    pub timeframe: Timeframe,
    /// Impact tier.
    pub impact: Impact,
    /// Hazard addressed.
    pub category: ActionCategory,
    /// Insurance-related caveat, if any.
    pub insurance_tip: Option<&'static str>,
}

/// Actions selected for one location, grouped by timeframe.
///
/// Within each group actions keep their catalogue order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MitigationPlan {
    /// Free actions to do right away.
    pub immediate: Vec<&'static MitigationAction>,
    /// Low-cost actions for this week.
    pub week: Vec<&'static MitigationAction>,
    /// Important actions for this month.
    pub month: Vec<&'static MitigationAction>,
    /// Longer-running projects.
    pub quarter: Vec<&'static MitigationAction>,
}

impl MitigationPlan {
    /// Iterates all actions, grouped immediate → quarter.
    pub fn iter(&self) -> impl Iterator<Item = &'static MitigationAction> + '_ {
        self.immediate
            .iter()
            .chain(&self.week)
            .chain(&self.month)
            .chain(&self.quarter)
            .copied()
    }

    /// Total number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.immediate.len() + self.week.len() + self.month.len() + self.quarter.len()
    }

    /// Whether the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `(completed, total)` given the IDs a user has checked off.
    ///
    /// IDs that are not part of this plan are ignored.
    #[must_use]
    pub fn progress(&self, completed: &BTreeSet<String>) -> (usize, usize) {
        let done = self.iter().filter(|a| completed.contains(a.id)).count();
        (done, self.len())
    }
}
