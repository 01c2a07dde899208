//! [`Session`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{AsRef, Display, FromStr};
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::domain::User;
use crate::domain::user;

/// User session, as carried by the access token's claims.
///
/// A [`Session`] is valid exactly while `now < expires_at`; an expired or
/// undecodable token is treated as no session at all.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Session {
    /// ID of the [`User`] this [`Session`] belongs to.
    pub user_id: user::Id,

    /// [`DateTime`] when this [`Session`] expires.
    #[serde(rename = "exp", with = "common::datetime::serde::unix_timestamp")]
    pub expires_at: ExpirationDateTime,
}

impl Session {
    /// Indicates whether this [`Session`] has expired at the provided
    /// moment.
    #[must_use]
    pub fn is_expired_at(&self, now: common::DateTime) -> bool {
        self.expires_at <= now.coerce()
    }
}

/// Access or refresh token of a [`Session`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, FromStr, Serialize)]
pub struct Token(String);

impl Token {
    /// Creates a new [`Token`] without checking its contents.
    ///
    /// # Safety
    ///
    /// The provided `token` must be a valid [`Token`] representation.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(token: String) -> Self {
        Self(token)
    }
}

/// [`DateTime`] of a [`Session`] expiration.
pub type ExpirationDateTime = DateTimeOf<(Session, unit::Expiration)>;

/// Credentials exchanged for a [`TokenPair`] on login.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// [`Username`] to log in as.
    ///
    /// [`Username`]: user::Username
    pub username: user::Username,

    /// [`Password`] to log in with.
    ///
    /// [`Password`]: user::Password
    pub password: secrecy::SecretBox<user::Password>,
}

/// Pair of tokens issued by the platform on login.
#[derive(Clone, Debug)]
pub struct TokenPair {
    /// Access [`Token`].
    pub access: Token,

    /// Refresh [`Token`].
    pub refresh: Token,
}

/// Decodes the [`Session`] claims of a [`Token`] without verifying its
/// signature.
///
/// The platform signs its tokens server-side; the client only reads the
/// embedded expiry and user ID, exactly like the stored-token check of the
/// admin screens. Expiry is NOT checked here.
///
/// # Errors
///
/// Returns an error if the token is not a structurally valid JWT carrying
/// [`Session`] claims.
pub fn decode_unverified(
    token: &Token,
) -> Result<Session, jsonwebtoken::errors::Error> {
    let mut validation =
        jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;

    jsonwebtoken::decode::<Session>(
        token.as_ref(),
        &jsonwebtoken::DecodingKey::from_secret(&[]),
        &validation,
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod spec {
    use common::DateTime;

    use super::{decode_unverified, Session, Token};

    #[test]
    fn decoding_ignores_the_signature_but_not_the_structure() {
        let session = Session {
            user_id: 42.into(),
            expires_at: (DateTime::now()
                + std::time::Duration::from_secs(600))
            .coerce(),
        };
        let token = Token(
            jsonwebtoken::encode(
                &jsonwebtoken::Header::default(),
                &session,
                &jsonwebtoken::EncodingKey::from_secret(b"server-only"),
            )
            .unwrap(),
        );

        let decoded = decode_unverified(&token).unwrap();
        assert_eq!(decoded.user_id, session.user_id);
        assert_eq!(decoded.expires_at, session.expires_at);

        assert!(decode_unverified(&Token("garbage".to_owned())).is_err());
        assert!(
            decode_unverified(&Token("a.not-base64.c".to_owned())).is_err()
        );
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let now = DateTime::now();
        let session = Session {
            user_id: 1.into(),
            expires_at: now.coerce(),
        };

        assert!(session.is_expired_at(now));
        assert!(session
            .is_expired_at(now + std::time::Duration::from_secs(1)));
        assert!(!Session {
            user_id: 1.into(),
            expires_at: (now + std::time::Duration::from_secs(60)).coerce(),
        }
        .is_expired_at(now));
    }
}
