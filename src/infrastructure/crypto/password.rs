//! Password hashing utilities

use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash of "password" at the default cost. Verified against when a login
/// names an unknown email, so that path costs the same as a wrong password.
pub(crate) const DUMMY_HASH: &str = "$2a$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW";

/// Hash a password using bcrypt (fresh random salt per hash).
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, hash)
}
