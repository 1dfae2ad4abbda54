//! Record Store: structured tables loaded once at startup.
//!
//! Three delimited sources with header rows (denials, members, plans) are
//! read into plain in-memory vectors. A table that fails to load is marked
//! unavailable without blocking the others; nothing here mutates after
//! load.

pub mod error;
pub mod loader;
pub mod model;


pub use error::DataLoadError;
pub use loader::{
    DENIAL_FILE, MEMBER_FILE, PLAN_FILE, load_denials, load_members, load_plans, load_tables,
};
pub use model::{DenialRecord, MemberRecord, PlanRecord};

/// The three structured tables, each `None` when its source failed to load.
#[derive(Debug, Default)]
pub struct Tables {
    pub denials: Option<Vec<DenialRecord>>,
    pub members: Option<Vec<MemberRecord>>,
    pub plans: Option<Vec<PlanRecord>>,
}

impl Tables {
    /// Returns `true` when no table loaded at all.
    pub fn all_failed(&self) -> bool {
        self.denials.is_none() && self.members.is_none() && self.plans.is_none()
    }

    /// Denial rows, empty when the table is unavailable.
    pub fn denials(&self) -> &[DenialRecord] {
        self.denials.as_deref().unwrap_or_default()
    }

    /// Member rows, empty when the table is unavailable.
    pub fn members(&self) -> &[MemberRecord] {
        self.members.as_deref().unwrap_or_default()
    }

    /// Plan rows, empty when the table is unavailable.
    pub fn plans(&self) -> &[PlanRecord] {
        self.plans.as_deref().unwrap_or_default()
    }
}
