use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stages of the job-posting wizard, in forward navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStage {
    Classify,
    AdTypes,
    Write,
    Manage,
}

impl WizardStage {
    pub const fn ordered() -> [Self; 4] {
        [Self::Classify, Self::AdTypes, Self::Write, Self::Manage]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Classify => "classify",
            Self::AdTypes => "ad_types",
            Self::Write => "write",
            Self::Manage => "manage",
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Classify => Some(Self::AdTypes),
            Self::AdTypes => Some(Self::Write),
            Self::Write => Some(Self::Manage),
            Self::Manage => None,
        }
    }

    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Classify => None,
            Self::AdTypes => Some(Self::Classify),
            Self::Write => Some(Self::AdTypes),
            Self::Manage => Some(Self::Write),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceMode {
    OnSite,
    Hybrid,
    Remote,
}

impl WorkspaceMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::OnSite => "On-site",
            Self::Hybrid => "Hybrid",
            Self::Remote => "Remote",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    FullTime,
    PartTime,
    Contract,
    Casual,
    Internship,
}

impl WorkType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full time",
            Self::PartTime => "Part time",
            Self::Contract => "Contract/Temp",
            Self::Casual => "Casual/Vacation",
            Self::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayType {
    Hourly,
    AnnualSalary,
    AnnualPlusCommission,
}

impl PayType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hourly => "Hourly rate",
            Self::AnnualSalary => "Annual salary",
            Self::AnnualPlusCommission => "Annual plus commission",
        }
    }
}

/// Delivery medium for a candidate notification package.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    #[default]
    None,
    App,
    Email,
    Both,
}

impl NotificationChannel {
    pub const fn ordered() -> [Self; 4] {
        [Self::None, Self::App, Self::Email, Self::Both]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No notifications",
            Self::App => "App notifications",
            Self::Email => "Email notifications",
            Self::Both => "App and email notifications",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "app" => Some(Self::App),
            "email" => Some(Self::Email),
            "both" => Some(Self::Both),
            _ => None,
        }
    }
}

/// Number of candidates a notification package targets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum NotificationReach {
    #[default]
    Reach100,
    Reach250,
    Reach500,
    Reach750,
    Reach1000,
}

impl NotificationReach {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Reach100,
            Self::Reach250,
            Self::Reach500,
            Self::Reach750,
            Self::Reach1000,
        ]
    }

    pub const fn candidates(self) -> u32 {
        match self {
            Self::Reach100 => 100,
            Self::Reach250 => 250,
            Self::Reach500 => 500,
            Self::Reach750 => 750,
            Self::Reach1000 => 1000,
        }
    }
}

impl TryFrom<u32> for NotificationReach {
    type Error = UnsupportedReach;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ordered()
            .into_iter()
            .find(|reach| reach.candidates() == value)
            .ok_or(UnsupportedReach(value))
    }
}

impl From<NotificationReach> for u32 {
    fn from(reach: NotificationReach) -> Self {
        reach.candidates()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("notification reach must be one of 100, 250, 500, 750 or 1000 (got {0})")]
pub struct UnsupportedReach(pub u32);

/// Identifier for one in-progress draft; regenerated whenever the draft is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftId(pub Uuid);

impl DraftId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DraftId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "draft-{}", self.0.simple())
    }
}

/// Authenticated employer on whose behalf a posting is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerIdentity {
    pub employer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl EmployerIdentity {
    pub fn new(employer_id: impl Into<String>) -> Self {
        Self {
            employer_id: employer_id.into(),
            company_name: None,
        }
    }

    /// Only identities carrying a non-blank employer id may submit.
    pub fn is_stable(&self) -> bool {
        !self.employer_id.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_step_forward_and_back() {
        assert_eq!(WizardStage::Classify.next(), Some(WizardStage::AdTypes));
        assert_eq!(WizardStage::Manage.next(), None);
        assert_eq!(WizardStage::Classify.previous(), None);
        assert!(WizardStage::Write < WizardStage::Manage);
    }

    #[test]
    fn reach_serializes_as_candidate_count() {
        let json = serde_json::to_string(&NotificationReach::Reach750).expect("serialize");
        assert_eq!(json, "750");

        let parsed: NotificationReach = serde_json::from_str("250").expect("deserialize");
        assert_eq!(parsed, NotificationReach::Reach250);

        let rejected = serde_json::from_str::<NotificationReach>("300");
        assert!(rejected.is_err());
    }

    #[test]
    fn blank_employer_ids_are_not_stable() {
        assert!(EmployerIdentity::new("emp-42").is_stable());
        assert!(!EmployerIdentity::new("   ").is_stable());
    }
}
