use chrono::NaiveDate;
use serde::Serialize;

use crate::db::{Complaint, ProfileRecord};
use crate::domain::ranking::RankedComplaint;

/// Envelope used for errors and operational endpoints. Listing endpoints
/// return bare arrays for the dashboard frontend.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ComplaintDto {
    pub unique_key: i64,
    pub account: Option<String>,
    pub opendate: Option<NaiveDate>,
    pub complaint_type: Option<String>,
    pub descriptor: Option<String>,
    pub zip: Option<String>,
    pub borough: Option<String>,
    pub city: Option<String>,
    pub council_dist: Option<String>,
    pub community_board: Option<String>,
    pub closedate: Option<NaiveDate>,
}

impl From<Complaint> for ComplaintDto {
    fn from(c: Complaint) -> Self {
        Self {
            unique_key: c.unique_key,
            account: c.account,
            opendate: c.opendate,
            complaint_type: c.complaint_type,
            descriptor: c.descriptor,
            zip: c.zip,
            borough: c.borough,
            city: c.city,
            council_dist: c.council_dist,
            community_board: c.community_board,
            closedate: c.closedate,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TopComplaintDto {
    pub complaint_type: String,
    pub count: i64,
}

impl From<RankedComplaint> for TopComplaintDto {
    fn from(r: RankedComplaint) -> Self {
        Self {
            complaint_type: r.complaint_type,
            count: r.count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub id: i32,
    pub user_id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub district: String,
    pub party: String,
    pub borough: String,
}

impl From<ProfileRecord> for ProfileDto {
    fn from(p: ProfileRecord) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            username: p.username,
            first_name: p.first_name,
            last_name: p.last_name,
            full_name: p.full_name,
            district: p.district,
            party: p.party,
            borough: p.borough,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complaint_dto_shape() {
        let dto = ComplaintDto::from(Complaint {
            unique_key: 17,
            account: Some("NYCC07".to_string()),
            opendate: NaiveDate::from_ymd_opt(2024, 3, 1),
            complaint_type: Some("Noise".to_string()),
            descriptor: Some("Loud Music".to_string()),
            zip: Some("10001".to_string()),
            borough: Some("MANHATTAN".to_string()),
            city: None,
            council_dist: Some("NYCC07".to_string()),
            community_board: None,
            closedate: None,
        });

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["unique_key"], 17);
        assert_eq!(json["opendate"], "2024-03-01");
        assert!(json["closedate"].is_null());
        assert_eq!(json.as_object().unwrap().len(), 11);
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::<()>::error("nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "nope");
        assert!(json.get("data").is_none());
    }
}
