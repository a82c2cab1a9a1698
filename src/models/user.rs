//! # User Model
//!
//! Registered shoppers and administrators. The identifier may be supplied by
//! the upstream identity provider at registration time; age is derived from
//! the stored date of birth whenever a report needs it.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TimeStamped;

/// Account gender, used by the dashboard user-ratio breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Account role; `Admin` unlocks the dashboard and management endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

/// A registered account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub photo: String,
    pub gender: Gender,
    pub role: Role,
    pub dob: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Age in completed years as of the reference date
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let mut age = today.year() - self.dob.year();
        if (today.month(), today.day()) < (self.dob.month(), self.dob.day()) {
            age -= 1;
        }
        age.max(0) as u32
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl TimeStamped for User {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// New user for registration. The id is optional: identity providers hand us
/// a stable id, otherwise one is generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub photo: String,
    pub gender: Gender,
    #[serde(default)]
    pub role: Role,
    pub dob: NaiveDate,
}

impl NewUser {
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            email: self.email,
            photo: self.photo,
            gender: self.gender,
            role: self.role,
            dob: self.dob,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_born(dob: NaiveDate) -> User {
        NewUser {
            id: None,
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            photo: "asha.png".to_string(),
            gender: Gender::Female,
            role: Role::User,
            dob,
        }
        .into_user(Utc::now())
    }

    #[test]
    fn test_age_counts_completed_years() {
        let user = user_born(NaiveDate::from_ymd_opt(2000, 6, 15).unwrap());
        let before_birthday = NaiveDate::from_ymd_opt(2026, 6, 14).unwrap();
        let on_birthday = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();

        assert_eq!(user.age_on(before_birthday), 25);
        assert_eq!(user.age_on(on_birthday), 26);
    }

    #[test]
    fn test_age_never_underflows() {
        let user = user_born(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
        assert_eq!(user.age_on(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()), 0);
    }

    #[test]
    fn test_role_serialization_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
    }

    #[test]
    fn test_provided_id_is_kept() {
        let id = Uuid::new_v4();
        let user = NewUser {
            id: Some(id),
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            photo: "ravi.png".to_string(),
            gender: Gender::Male,
            role: Role::Admin,
            dob: NaiveDate::from_ymd_opt(1990, 3, 2).unwrap(),
        }
        .into_user(Utc::now());

        assert_eq!(user.id, id);
        assert!(user.is_admin());
    }
}
