//! Activity and attendance enumerations plus the structured log record.
//!
//! Loggable activities arrive at the boundary as free-form strings (manual
//! commands, or the output of the external log-parsing collaborator). They are
//! converted once into these tagged enumerations; the rest of the backend
//! never handles raw activity strings.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Everything the division hands out points for.
///
/// `key()` doubles as the value-table key in the configuration document, so
/// the variants cover the full default key set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Ad,
    AdX3,
    Recruitment,
    RecruitmentSession,
    Rally,
    RallyX5,
    Patrol,
    Gamenight,
    Training,
    Raid,
    Hosting,
    Cohosting,
    Booster,
    Joint,
    EventLogging,
    ContractPayment,
    Nameplate,
    BaseCommander,
    Bank,
    GoldBar,
    Trainee,
    VisitorTransport,
    PizzaDelivery,
}

impl ActivityKind {
    /// Every activity kind, in value-table order.
    pub const ALL: [ActivityKind; 23] = [
        ActivityKind::Ad,
        ActivityKind::AdX3,
        ActivityKind::Recruitment,
        ActivityKind::RecruitmentSession,
        ActivityKind::Rally,
        ActivityKind::RallyX5,
        ActivityKind::Patrol,
        ActivityKind::Gamenight,
        ActivityKind::Training,
        ActivityKind::Raid,
        ActivityKind::Hosting,
        ActivityKind::Cohosting,
        ActivityKind::Booster,
        ActivityKind::Joint,
        ActivityKind::EventLogging,
        ActivityKind::ContractPayment,
        ActivityKind::Nameplate,
        ActivityKind::BaseCommander,
        ActivityKind::Bank,
        ActivityKind::GoldBar,
        ActivityKind::Trainee,
        ActivityKind::VisitorTransport,
        ActivityKind::PizzaDelivery,
    ];

    /// The value-table key for this activity.
    pub fn key(&self) -> &'static str {
        match self {
            ActivityKind::Ad => "ad",
            ActivityKind::AdX3 => "adX3",
            ActivityKind::Recruitment => "recruitment",
            ActivityKind::RecruitmentSession => "recruitmentsession",
            ActivityKind::Rally => "rally",
            ActivityKind::RallyX5 => "rallyX5",
            ActivityKind::Patrol => "patrol",
            ActivityKind::Gamenight => "gamenight",
            ActivityKind::Training => "training",
            ActivityKind::Raid => "raid",
            ActivityKind::Hosting => "hosting",
            ActivityKind::Cohosting => "cohosting",
            ActivityKind::Booster => "booster",
            ActivityKind::Joint => "joint",
            ActivityKind::EventLogging => "eventlogging",
            ActivityKind::ContractPayment => "contractpayment",
            ActivityKind::Nameplate => "nameplate",
            ActivityKind::BaseCommander => "basecommander",
            ActivityKind::Bank => "bank",
            ActivityKind::GoldBar => "goldbar",
            ActivityKind::Trainee => "trainee",
            ActivityKind::VisitorTransport => "visitortransport",
            ActivityKind::PizzaDelivery => "pizzadelivery",
        }
    }

    /// Human-readable label for operator-facing listings.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Ad => "ad",
            ActivityKind::AdX3 => "ad x3",
            ActivityKind::Recruitment => "recruitment",
            ActivityKind::RecruitmentSession => "recruitment session",
            ActivityKind::Rally => "rally",
            ActivityKind::RallyX5 => "rally with 5 or more people",
            ActivityKind::Patrol => "patrol",
            ActivityKind::Gamenight => "gamenight",
            ActivityKind::Training => "training",
            ActivityKind::Raid => "raid",
            ActivityKind::Hosting => "event hosting",
            ActivityKind::Cohosting => "event co-hosting",
            ActivityKind::Booster => "server booster event bonus",
            ActivityKind::Joint => "joint event with other divisions bonus",
            ActivityKind::EventLogging => "logistics event logging",
            ActivityKind::ContractPayment => "contract officer completed payment",
            ActivityKind::Nameplate => "nameplate order completed",
            ActivityKind::BaseCommander => "leaderboard base commander kill",
            ActivityKind::Bank => "leaderboard bank robbery completed",
            ActivityKind::GoldBar => "leaderboard gold bar stolen",
            ActivityKind::Trainee => "leaderboard trainee trained",
            ActivityKind::VisitorTransport => "leaderboard visitor transported",
            ActivityKind::PizzaDelivery => "leaderboard pizza delivered",
        }
    }

    /// Whether the activity is a hosted event that carries attendance and
    /// booster bonuses.
    pub fn is_event(&self) -> bool {
        matches!(
            self,
            ActivityKind::Patrol
                | ActivityKind::Gamenight
                | ActivityKind::Training
                | ActivityKind::Raid
                | ActivityKind::RecruitmentSession
        )
    }

    /// Whether the activity is a per-completion leaderboard task.
    pub fn is_leaderboard_task(&self) -> bool {
        matches!(
            self,
            ActivityKind::VisitorTransport
                | ActivityKind::PizzaDelivery
                | ActivityKind::Bank
                | ActivityKind::GoldBar
                | ActivityKind::Trainee
                | ActivityKind::BaseCommander
        )
    }
}

impl FromStr for ActivityKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ActivityKind::ALL
            .into_iter()
            .find(|kind| kind.key() == value)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown activity '{}'", value)))
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How a member took part in an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttendanceKind {
    Attending,
    CoHosting,
    Hosting,
}

impl AttendanceKind {
    /// The value-table key for the attendance bonus. Plain attendance has no
    /// bonus key of its own; the event's base value already covers it.
    pub fn key(&self) -> &'static str {
        match self {
            AttendanceKind::Attending => "attending",
            AttendanceKind::CoHosting => "cohosting",
            AttendanceKind::Hosting => "hosting",
        }
    }

    /// Human-readable label for operator-facing listings.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceKind::Attending => "attending",
            AttendanceKind::CoHosting => "co-hosting",
            AttendanceKind::Hosting => "hosting",
        }
    }
}

impl FromStr for AttendanceKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "attending" => Ok(AttendanceKind::Attending),
            "cohosting" => Ok(AttendanceKind::CoHosting),
            "hosting" => Ok(AttendanceKind::Hosting),
            other => Err(AppError::InvalidInput(format!(
                "Unknown attendance kind '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for AttendanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A structured, point-granting log record.
///
/// Produced by manual log commands and by the external log-parsing
/// collaborator alike; both feed the same award path.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    /// Member receiving the points.
    pub user_id: u64,
    /// What was done.
    pub activity: ActivityKind,
    /// How the member took part, for event activities.
    pub attendance: Option<AttendanceKind>,
    /// Completion count, attendee count for rallies, or ads posted that day.
    pub quantity: u32,
    /// Whether the member is a server booster; set by the boundary from the
    /// member's roles.
    pub booster: bool,
}

impl ActivityRecord {
    /// Builds a single-completion record with no attendance or booster flag.
    pub fn new(user_id: u64, activity: ActivityKind) -> Self {
        Self {
            user_id,
            activity,
            attendance: None,
            quantity: 1,
            booster: false,
        }
    }
}

/// Result of applying one activity record to the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct AwardedPoints {
    /// Points granted by this record, booster bonus included.
    pub amount: f64,
    /// Portion of `amount` contributed by the server-booster bonus.
    pub booster_bonus: f64,
    /// The member's total after the grant.
    pub total: f64,
}
