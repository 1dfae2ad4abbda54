use serde::{Deserialize, Serialize};

/// One row of the denial-reason table.
///
/// Logical key is `(user_code, denial_code)`; the source data does not
/// guarantee uniqueness, so lookups take the first row in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenialRecord {
    pub user_code: String,
    pub denial_code: String,
    pub description: String,
    pub suggested_action: String,
}

/// One row of the member-subscription table.
///
/// Loaded for readiness reporting and future routing; no direct-lookup
/// path is defined over members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub member_id: String,
    pub member_name: String,
    pub plan_id: String,
    pub status: String,
    pub effective_date: String,
    pub end_date: String,
}

/// One row of the plan-coverage table. Extra source columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub plan_id: String,
    pub covered_services: String,
    pub copay: String,
}
