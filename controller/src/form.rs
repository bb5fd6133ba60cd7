//! Login and registration form state with local validation.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::consts::MIN_PASSWORD_CHARS;
use crate::error::ValidationError;
use crate::wire::{LoginBody, OtpBody, RegisterBody};

/// Every editable input across both forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    LoginEmail,
    LoginPassword,
    LoginOtp,
    RegisterEmail,
    RegisterPassword,
    RegisterConfirm,
}

impl Field {
    /// DOM id of the matching input element.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::LoginEmail => "loginEmail",
            Self::LoginPassword => "loginPassword",
            Self::LoginOtp => "loginOtp",
            Self::RegisterEmail => "registerEmail",
            Self::RegisterPassword => "registerPassword",
            Self::RegisterConfirm => "confirmPassword",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub otp: String,
}

impl LoginForm {
    /// Build the OTP request. Only the email is required.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingEmail`] when the email is blank.
    pub fn otp_request(&self) -> Result<OtpBody, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        Ok(OtpBody { email: email.to_owned() })
    }

    /// Build the login request. Only the OTP is checked locally; the service
    /// judges email and password.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingOtp`] when the OTP is blank.
    pub fn login_request(&self) -> Result<LoginBody, ValidationError> {
        let otp = self.otp.trim();
        if otp.is_empty() {
            return Err(ValidationError::MissingOtp);
        }
        Ok(LoginBody {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            otp: otp.to_owned(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Build the registration request. Mismatch is checked before length.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Mismatch`] or [`ValidationError::TooShort`].
    pub fn register_request(&self) -> Result<RegisterBody, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::Mismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ValidationError::TooShort);
        }
        Ok(RegisterBody {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
