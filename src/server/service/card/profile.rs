use sea_orm::ConnectionTrait;

use crate::server::{
    data::card::domain::ProfileDomainRepository,
    error::{profile::ProfileError, Error},
    model::{
        db::{PilotDomainModel, UserDomainModel},
        document::{DocumentKind, ProfileDocuments},
    },
    service::card::codec::{decode_profile, encode_profile},
};

/// Domain rows of a card together with their decoded documents
pub struct LoadedProfile {
    pub card_id: i32,
    pub pilot_domain: PilotDomainModel,
    pub user_domain: UserDomainModel,
    pub documents: ProfileDocuments,
}

/// Reads and writes the document set of a card profile
pub struct ProfileDocumentService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileDocumentService<'a, C> {
    /// Creates a new instance of [`ProfileDocumentService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Load and decode every document of a card
    ///
    /// A missing pilot or user domain row is reported as
    /// [`ProfileError::MissingDocument`], a document that does not decode as
    /// [`ProfileError::InvalidCardData`].
    pub async fn load(&self, card_id: i32) -> Result<LoadedProfile, Error> {
        let domain_repository = ProfileDomainRepository::new(self.db);

        let pilot_domain = domain_repository
            .get_pilot_domain(card_id)
            .await?
            .ok_or(ProfileError::MissingDocument {
                card_id,
                document: DocumentKind::LoadPlayer,
            })?;
        let user_domain = domain_repository
            .get_user_domain(card_id)
            .await?
            .ok_or(ProfileError::MissingDocument {
                card_id,
                document: DocumentKind::User,
            })?;

        let documents = decode_profile(&pilot_domain, &user_domain)?;

        Ok(LoadedProfile {
            card_id,
            pilot_domain,
            user_domain,
            documents,
        })
    }

    /// Re-encode the documents and write both domain rows
    pub async fn save(&self, profile: LoadedProfile) -> Result<(), Error> {
        let domain_repository = ProfileDomainRepository::new(self.db);
        let encoded = encode_profile(&profile.documents)?;

        domain_repository
            .update_pilot_documents(
                profile.pilot_domain,
                encoded.load_player_json,
                encoded.pilot_data_group_json,
            )
            .await?;
        domain_repository
            .update_user_documents(
                profile.user_domain,
                encoded.user_json,
                encoded.mobile_user_group_json,
            )
            .await?;

        Ok(())
    }
}
