//! Login parameters shared by users and admins.

use crate::model::api::CredentialsDto;

/// Email & plaintext password to check against a stored account.
#[derive(Debug, Clone)]
pub struct CredentialsParam {
    pub email: String,
    pub password: String,
}

impl From<CredentialsDto> for CredentialsParam {
    fn from(dto: CredentialsDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}
