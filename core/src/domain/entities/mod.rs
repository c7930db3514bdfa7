//! Domain entities representing core business objects.

pub mod account;
pub mod verification_code;

pub use account::{Account, AccountRole, AccountType};
pub use verification_code::{
    is_code_valid, is_code_valid_at, VerificationCode, DEFAULT_CODE_EXPIRATION_MINUTES,
};
