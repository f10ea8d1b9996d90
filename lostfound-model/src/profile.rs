//! Profile documents as stored remotely and as held by a loaded screen.

use crate::ids::UserId;

/// Body of a profile document in the `userDetails` collection.
///
/// Stored documents were written by the mobile client with the field names
/// `displayedName` and `phoneNo`; the canonical names are read only when the
/// stored name is absent, and a document carrying both keeps the stored one.
/// Every field is optional and unknown fields are ignored, so a sparse
/// document still decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "StoredProfileDocument"))]
pub struct ProfileDocument {
    #[cfg_attr(feature = "serde", serde(rename = "displayedName"))]
    pub display_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "phoneNo"))]
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub points: Option<u64>,
}

/// Every name a profile field has been stored under.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize, Default)]
#[serde(default)]
struct StoredProfileDocument {
    #[serde(rename = "displayedName")]
    displayed_name: Option<String>,
    #[serde(rename = "displayName")]
    display_name: Option<String>,
    #[serde(rename = "phoneNo")]
    phone_no: Option<String>,
    #[serde(rename = "phoneNumber")]
    phone_number: Option<String>,
    email: Option<String>,
    points: Option<u64>,
}

#[cfg(feature = "serde")]
impl From<StoredProfileDocument> for ProfileDocument {
    fn from(stored: StoredProfileDocument) -> Self {
        Self {
            display_name: stored.displayed_name.or(stored.display_name),
            phone_number: stored.phone_no.or(stored.phone_number),
            email: stored.email,
            points: stored.points,
        }
    }
}

impl ProfileDocument {
    /// Attach the key the document was read under.
    pub fn into_profile(self, id: UserId) -> UserProfile {
        UserProfile {
            id,
            display_name: self.display_name,
            phone_number: self.phone_number,
            email: self.email,
            points: self.points,
        }
    }
}

/// A user's profile as handed to the rendering layer.
///
/// Fields are carried exactly as decoded; defaults such as zero points are
/// applied by the view projection, never here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UserProfile {
    pub id: UserId,
    pub display_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub points: Option<u64>,
}

impl UserProfile {
    pub fn new(id: UserId) -> Self {
        ProfileDocument::default().into_profile(id)
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_points(mut self, points: u64) -> Self {
        self.points = Some(points);
        self
    }

    /// Preferred contact: phone first, then email.
    pub fn contact(&self) -> Option<&str> {
        self.phone_number.as_deref().or(self.email.as_deref())
    }

    pub fn points_or_default(&self) -> u64 {
        self.points.unwrap_or(0)
    }
}
