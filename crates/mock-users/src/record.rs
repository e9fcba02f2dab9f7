//! User document types.
//!
//! These mirror the shape of the `users` collection as exported by
//! `mongoexport`, including Mongoose's `_id` and `__v` keys. Field order is
//! the order the documents are written in.
//!
//! Deserialization is strict: unknown keys are rejected and every key must be
//! present, with `null` spelled out for empty optional values. The only
//! exception is a user's embedded `profile`, which may be `{}` or absent.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use uuid::Uuid;

use crate::extended_json::{ExtendedDate, ObjectId};

/// Sign-in method the account was created with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Google OAuth.
    Google,
    /// Email and password.
    #[default]
    Email,
    /// Phone number OTP.
    Phone,
}

/// Moderation state of an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Account in good standing.
    #[default]
    Active,
    /// Account permanently banned.
    Banned,
    /// Account deleted by its owner.
    Deleted,
    /// Account temporarily suspended.
    Suspended,
}

/// Gender recorded on a profile and used in match filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other or undisclosed.
    Other,
}

/// GeoJSON geometry kind; profiles only store points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeoPointKind {
    /// A single coordinate pair.
    #[default]
    Point,
}

/// A complete user document.
///
/// `id`, `user_id`, `email` and the photo identifiers inside `profile` are
/// unique per generated record; every other field is copied from the
/// template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct UserRecord {
    /// Document identifier.
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Application-level user identifier.
    #[serde(rename = "user_id")]
    pub user_id: Uuid,
    /// Sign-in email address.
    pub email: String,
    /// Name shown in the app.
    pub display_name: String,
    /// Avatar URL.
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    /// Sign-in method.
    #[serde(rename = "provider")]
    pub auth_provider: AuthProvider,
    /// Whether the email address has been verified.
    pub is_email_verified: bool,
    /// Whether the phone number has been verified.
    pub is_phone_verified: bool,
    /// Moderation state.
    pub status: AccountStatus,
    /// Embedded dating profile.
    #[serde(default, deserialize_with = "deserialize_profile")]
    pub profile: ProfileRecord,
    /// Match filters.
    pub preferences: Preferences,
    /// Billing state.
    pub subscription: Subscription,
    /// Likes and passes made since the last daily reset.
    pub daily_interaction_count: u32,
    /// Expo push tokens registered by the user's devices.
    pub notification_tokens: Vec<String>,
    /// When `daily_interaction_count` was last reset.
    pub last_interaction_reset_at: ExtendedDate,
    /// Creation timestamp.
    pub created_at: ExtendedDate,
    /// Last modification timestamp.
    pub updated_at: ExtendedDate,
    /// Last sign-in timestamp.
    pub last_login_at: ExtendedDate,
    /// Mongoose document version key.
    #[serde(rename = "__v")]
    pub schema_version: u32,
}

/// The dating-profile portion of a user document.
///
/// The default value stands in for a user template's `"profile": {}`
/// placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Where the user is.
    pub location: GeoPoint,
    /// Free-text biography.
    pub bio: String,
    /// Interest tags.
    pub interests: Vec<String>,
    /// Height in centimetres; zero when not given.
    pub height: u32,
    /// Highest education level.
    pub education: String,
    /// Job title.
    pub occupation: String,
    /// Employer.
    pub company: String,
    /// School or university.
    pub school: String,
    /// Whether onboarding has been completed.
    pub is_onboarded: bool,
    /// Uploaded photos in display order.
    pub photos: Vec<Photo>,
    /// Date of birth.
    #[serde(deserialize_with = "Option::deserialize")]
    pub date_of_birth: Option<ExtendedDate>,
    /// Given name.
    pub first_name: String,
    /// Gender.
    #[serde(deserialize_with = "Option::deserialize")]
    pub gender: Option<Gender>,
    /// Family name.
    pub last_name: String,
}

/// A GeoJSON point with a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeoPoint {
    /// Geometry kind, always `Point`.
    #[serde(rename = "type")]
    pub kind: GeoPointKind,
    /// City, state and postcode label.
    pub city: String,
    /// `[longitude, latitude]`, written back exactly as read.
    pub coordinates: [Number; 2],
}

impl Default for GeoPoint {
    fn default() -> Self {
        Self {
            kind: GeoPointKind::Point,
            city: String::new(),
            coordinates: [Number::from(0), Number::from(0)],
        }
    }
}

/// One uploaded profile photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Photo {
    /// Public URL of the image.
    pub url: String,
    /// Whether this is the photo shown first.
    pub is_primary: bool,
    /// Upload timestamp.
    pub uploaded_at: ExtendedDate,
    /// Subdocument identifier.
    #[serde(rename = "_id")]
    pub id: ObjectId,
}

/// Match filters applied when building a user's discovery feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Preferences {
    /// Maximum distance to other users, in kilometres.
    pub distance_max_km: u32,
    /// Inclusive `[min, max]` age bounds.
    pub age_range: [u32; 2],
    /// Genders to show; empty shows everyone.
    pub show_me: Vec<Gender>,
}

/// Billing state of a user's subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Subscription {
    /// Subscription lifecycle status, `none` for free accounts.
    pub status: String,
    /// Plan identifier.
    pub plan: String,
    /// Start of the current billing period.
    #[serde(deserialize_with = "Option::deserialize")]
    pub start_date: Option<ExtendedDate>,
    /// End of the current billing period.
    #[serde(deserialize_with = "Option::deserialize")]
    pub end_date: Option<ExtendedDate>,
    /// Whether the plan renews automatically.
    pub auto_renew: bool,
    /// Last successful payment.
    #[serde(deserialize_with = "Option::deserialize")]
    pub last_payment_at: Option<ExtendedDate>,
    /// Payment processor.
    #[serde(deserialize_with = "Option::deserialize")]
    pub provider: Option<String>,
    /// Last change to this subscription.
    #[serde(deserialize_with = "Option::deserialize")]
    pub updated_at: Option<ExtendedDate>,
}

/// Reads a user's embedded profile, mapping the `{}` placeholder to the
/// default profile.
fn deserialize_profile<'de, D>(deserializer: D) -> Result<ProfileRecord, D::Error>
where
    D: Deserializer<'de>,
{
    let fields = Map::<String, Value>::deserialize(deserializer)?;
    if fields.is_empty() {
        return Ok(ProfileRecord::default());
    }
    ProfileRecord::deserialize(Value::Object(fields)).map_err(de::Error::custom)
}
