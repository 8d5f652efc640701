use eparnova_core::portfolio::encours::{EncoursOptions, FetchPolicy, RealEstateGrouping};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};

fn bad_request(err: eparnova_core::Error) -> ApiError {
    ApiError::BadRequest(err.to_string())
}

/// Query string shared by the encours endpoints.
///
/// Unset parameters fall back to the server defaults. Unknown values are a
/// `BadRequest`.
#[derive(Debug, Default, Deserialize)]
pub struct EncoursQuery {
    pub grouping: Option<String>,
    pub policy: Option<String>,
    pub limit: Option<usize>,
}

impl EncoursQuery {
    pub fn into_options(self, defaults: EncoursOptions) -> ApiResult<EncoursOptions> {
        let grouping = match self.grouping.as_deref() {
            Some(v) => v.parse::<RealEstateGrouping>().map_err(bad_request)?,
            None => defaults.grouping,
        };
        let fetch_policy = match self.policy.as_deref() {
            Some(v) => v.parse::<FetchPolicy>().map_err(bad_request)?,
            None => defaults.fetch_policy,
        };
        Ok(EncoursOptions {
            grouping,
            fetch_policy,
            limit: self.limit.or(defaults.limit),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PolicyQuery {
    pub policy: Option<String>,
}

impl PolicyQuery {
    pub fn into_policy(self, default: FetchPolicy) -> ApiResult<FetchPolicy> {
        match self.policy.as_deref() {
            Some(v) => v.parse::<FetchPolicy>().map_err(bad_request),
            None => Ok(default),
        }
    }
}
