use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::user::Email;

/// Role required for admission into a team
pub const EMPLOYEE_ROLE: &str = "employee";

/// Team membership document stored in the `teams` collection
///
/// Links a member (`email`) to the employer that admitted them
/// (`user_email`, the HR account's email). `work_at` carries the employer's
/// company name. References are denormalized email strings; neither side is
/// validated against the `users` collection at write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembership {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: Email,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub role: String,
    pub user_email: Email,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_at: Option<String>,
    pub joined_at: String,
}

impl TeamMembership {
    /// Admits a member into an employer's team
    ///
    /// # Business Rules Enforced
    /// - Only the "employee" role is admitted
    /// - Admission timestamp is set at creation
    pub fn admit(
        email: Email,
        name: Option<String>,
        photo: Option<String>,
        role: String,
        user_email: Email,
        work_at: Option<String>,
    ) -> Result<Self, String> {
        if role != EMPLOYEE_ROLE {
            return Err(format!("Only employees can join a team, got role: {}", role));
        }

        Ok(Self {
            id: None,
            email,
            name,
            photo,
            role,
            user_email,
            work_at,
            joined_at: Utc::now().to_rfc3339(),
        })
    }
}
