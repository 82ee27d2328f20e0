use std::fmt::{Debug, Display};
use std::io::Error as IoError;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::{DateTime, Utc};
use derivative::Derivative;
use serde::{Serialize, Serializer};

use crate::campaign::{Amount, CampaignId, CampaignStatus};

#[derive(Debug, Serialize, Derivative)]
#[derivative(PartialEq, Eq)]
#[serde(untagged)]
pub enum Error {
    // 400
    #[serde(serialize_with = "display")]
    InvalidJson(#[derivative(PartialEq = "ignore")] JsonPayloadError),
    #[serde(serialize_with = "display")]
    InvalidPath(#[derivative(PartialEq = "ignore")] PathError),
    #[serde(serialize_with = "display")]
    InvalidQuery(#[derivative(PartialEq = "ignore")] QueryPayloadError),
    InvalidFundingTarget {
        target_amount: Amount,
    },
    InvalidCampaignWindow {
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    },

    // 404
    PathNotFound,
    CampaignNotFound {
        campaign_id: CampaignId,
    },

    // 409
    ConcurrentModificationDetected,
    CampaignAlreadyExists {
        campaign_id: CampaignId,
    },
    CampaignNotPending {
        campaign_id: CampaignId,
        status: CampaignStatus,
    },

    // 500
    FundingTargetNotPositive {
        campaign_id: CampaignId,
    },
    ExistentialState(String),
    #[serde(serialize_with = "display")]
    IoError(#[derivative(PartialEq = "ignore")] IoError),
}

impl Error {
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "E4001000",
            Error::InvalidPath(_) => "E4001001",
            Error::InvalidQuery(_) => "E4001002",
            Error::InvalidFundingTarget { .. } => "E4001003",
            Error::InvalidCampaignWindow { .. } => "E4001004",
            Error::PathNotFound => "E4041000",
            Error::CampaignNotFound { .. } => "E4041001",
            Error::ConcurrentModificationDetected => "E4091000",
            Error::CampaignAlreadyExists { .. } => "E4091001",
            Error::CampaignNotPending { .. } => "E4091002",
            Error::FundingTargetNotPositive { .. } => "E5001000",
            Error::ExistentialState(_) => "E5001001",
            Error::IoError(_) => "E5001002",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "The given json could not be parsed",
            Error::InvalidPath(_) => "The given path could not be parsed",
            Error::InvalidQuery(_) => "The given query could not be parsed",
            Error::InvalidFundingTarget { .. } => "The funding target must be greater than zero",
            Error::InvalidCampaignWindow { .. } => "The campaign must end after it starts",
            Error::PathNotFound => "The requested path was not found",
            Error::CampaignNotFound { .. } => "The requested campaign was not found",
            Error::ConcurrentModificationDetected => {
                "The server detected a concurrent modification"
            }
            Error::CampaignAlreadyExists { .. } => "A campaign with this id already exists",
            Error::CampaignNotPending { .. } => "The requested campaign is not pending approval",
            Error::FundingTargetNotPositive { .. } => {
                "The campaign has no positive funding target to measure progress against"
            }
            Error::ExistentialState(_) => "The server detected an invalid state",
            Error::IoError(_) => "An error occurred during an I/O operation",
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Error::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Error::InvalidFundingTarget { .. } => StatusCode::BAD_REQUEST,
            Error::InvalidCampaignWindow { .. } => StatusCode::BAD_REQUEST,
            Error::PathNotFound => StatusCode::NOT_FOUND,
            Error::CampaignNotFound { .. } => StatusCode::NOT_FOUND,
            Error::ConcurrentModificationDetected => StatusCode::CONFLICT,
            Error::CampaignAlreadyExists { .. } => StatusCode::CONFLICT,
            Error::CampaignNotPending { .. } => StatusCode::CONFLICT,
            Error::FundingTargetNotPositive { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::ExistentialState(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        #[derive(Serialize)]
        struct Dummy<'a> {
            error_code: &'static str,
            error_message: &'static str,
            error_meta: &'a Error,
        }

        HttpResponse::build(self.status_code()).json(&Dummy {
            error_code: self.error_code(),
            error_message: self.error_message(),
            error_meta: self,
        })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(self, f)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Error {
        Error::IoError(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidJson(err) => Some(err),
            Error::InvalidPath(err) => Some(err),
            Error::InvalidQuery(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

fn display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_follow_status_codes() {
        let campaign_id = CampaignId::new();
        let errors = vec![
            Error::InvalidFundingTarget { target_amount: 0 },
            Error::PathNotFound,
            Error::CampaignNotFound { campaign_id },
            Error::CampaignNotPending {
                campaign_id,
                status: CampaignStatus::Active,
            },
            Error::FundingTargetNotPositive { campaign_id },
        ];

        for error in errors {
            let status = error.status_code().as_u16().to_string();
            assert_eq!(&error.error_code()[1..4], status, "{:?}", error);
        }
    }

    #[test]
    fn error_meta_serializes_fields() {
        let campaign_id = CampaignId::new();
        let error = Error::CampaignNotPending {
            campaign_id,
            status: CampaignStatus::Active,
        };

        let meta = serde_json::to_value(&error).unwrap();

        assert_eq!(meta["campaign_id"], campaign_id.to_string());
        assert_eq!(meta["status"], "ACTIVE");
    }
}
