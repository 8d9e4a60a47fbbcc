//! Decoding and encoding of the JSON documents stored on a card profile.
//!
//! Decoding fails with [`ProfileError::InvalidCardData`] naming the document, since a
//! merge must never run against a partially decoded profile.

use serde::{de::DeserializeOwned, Serialize};

use crate::server::{
    error::profile::ProfileError,
    model::{
        db::{PilotDomainModel, UserDomainModel},
        document::{DocumentKind, ProfileDocuments},
    },
};

/// Re-encoded document bodies ready to be written back to the domain rows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedDocuments {
    pub load_player_json: String,
    pub pilot_data_group_json: String,
    pub user_json: String,
    pub mobile_user_group_json: String,
}

pub fn decode_document<T: DeserializeOwned>(
    card_id: i32,
    document: DocumentKind,
    json: &str,
) -> Result<T, ProfileError> {
    serde_json::from_str(json).map_err(|source| ProfileError::InvalidCardData {
        card_id,
        document,
        source,
    })
}

pub fn encode_document<T: Serialize>(document: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(document)
}

/// Decode all four documents of a profile from its domain rows
pub fn decode_profile(
    pilot_domain: &PilotDomainModel,
    user_domain: &UserDomainModel,
) -> Result<ProfileDocuments, ProfileError> {
    let card_id = pilot_domain.card_id;

    Ok(ProfileDocuments {
        load_player: decode_document(
            card_id,
            DocumentKind::LoadPlayer,
            &pilot_domain.load_player_json,
        )?,
        pilot_data: decode_document(
            card_id,
            DocumentKind::PilotDataGroup,
            &pilot_domain.pilot_data_group_json,
        )?,
        user: decode_document(card_id, DocumentKind::User, &user_domain.user_json)?,
        mobile_user: decode_document(
            card_id,
            DocumentKind::MobileUserGroup,
            &user_domain.mobile_user_group_json,
        )?,
    })
}

pub fn encode_profile(documents: &ProfileDocuments) -> Result<EncodedDocuments, serde_json::Error> {
    Ok(EncodedDocuments {
        load_player_json: encode_document(&documents.load_player)?,
        pilot_data_group_json: encode_document(&documents.pilot_data)?,
        user_json: encode_document(&documents.user)?,
        mobile_user_group_json: encode_document(&documents.mobile_user)?,
    })
}
