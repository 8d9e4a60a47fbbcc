use sea_orm::DatabaseConnection;

use crate::{
    model::card::{CustomMessageDto, CustomMessageGroupDto, UpsertCustomMessagesRequest},
    server::{
        data::card::{domain::ProfileDomainRepository, profile::CardProfileRepository},
        error::{profile::ProfileError, Error},
        model::document::{CommandMessageGroup, DocumentKind, MobileUserGroup},
        service::card::codec::{decode_document, encode_document},
    },
};

/// Stick direction a custom message is bound to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Up = 1,
    Down = 2,
    Left = 3,
    Right = 4,
}

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    /// Creates a new instance of [`MessageService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replace the directional messages of a card for each supplied context
    ///
    /// # Returns
    /// - `Ok(())`: The messages were stored
    /// - `Err(Error::ProfileError)`: The card does not exist, has no user domain or its
    ///   mobile user document does not decode
    /// - `Err(Error::DbErr)`: A database operation failed
    pub async fn upsert_custom_messages(
        &self,
        request: &UpsertCustomMessagesRequest,
    ) -> Result<(), Error> {
        let profile_repository = CardProfileRepository::new(self.db);
        let domain_repository = ProfileDomainRepository::new(self.db);

        let card = profile_repository
            .find_by_access_code(&request.access_code, &request.chip_id)
            .await?
            .ok_or_else(|| ProfileError::NotFound(format!("access code {}", request.access_code)))?;

        let user_domain = domain_repository.get_user_domain(card.id).await?.ok_or(
            ProfileError::MissingDocument {
                card_id: card.id,
                document: DocumentKind::MobileUserGroup,
            },
        )?;

        let mut mobile_user: MobileUserGroup = decode_document(
            card.id,
            DocumentKind::MobileUserGroup,
            &user_domain.mobile_user_group_json,
        )?;

        let setting = &request.message_setting;
        upsert_message_group(
            setting.start_group.as_ref(),
            &mut mobile_user.opening_messages,
        );
        upsert_message_group(
            setting.in_battle_group.as_ref(),
            &mut mobile_user.playing_messages,
        );
        upsert_message_group(
            setting.result_group.as_ref(),
            &mut mobile_user.result_messages,
        );

        let user_json = user_domain.user_json.clone();
        let mobile_user_group_json = encode_document(&mobile_user)?;
        domain_repository
            .update_user_documents(user_domain, user_json, mobile_user_group_json)
            .await?;

        Ok(())
    }
}

/// Replace `messages` with the directions supplied in `group`
///
/// A missing group or a group with no direction set leaves `messages` untouched.
pub fn upsert_message_group(
    group: Option<&CustomMessageGroupDto>,
    messages: &mut Vec<CommandMessageGroup>,
) {
    let Some(group) = group else {
        return;
    };

    let replacement: Vec<CommandMessageGroup> = [
        (Command::Up, &group.up_message),
        (Command::Down, &group.down_message),
        (Command::Left, &group.left_message),
        (Command::Right, &group.right_message),
    ]
    .into_iter()
    .filter_map(|(command, message)| message.as_ref().map(|m| with_direction(m, command)))
    .collect();

    if replacement.is_empty() {
        return;
    }

    *messages = replacement;
}

fn with_direction(message: &CustomMessageDto, command: Command) -> CommandMessageGroup {
    CommandMessageGroup {
        command: command as u32,
        message_id: message.message_id,
        phrase_id: message.phrase_id,
        stamp_id: message.stamp_id,
        message_position: message.message_position,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(message_id: u32) -> CustomMessageDto {
        CustomMessageDto {
            message_id,
            phrase_id: 2,
            stamp_id: 3,
            message_position: 1,
        }
    }

    fn existing() -> Vec<CommandMessageGroup> {
        vec![CommandMessageGroup {
            command: Command::Left as u32,
            message_id: 99,
            ..Default::default()
        }]
    }

    /// Expect a single Up entry when only the up message is supplied
    #[test]
    fn up_only_replaces_with_single_entry() {
        let mut messages = existing();
        let group = CustomMessageGroupDto {
            up_message: Some(message(10)),
            ..Default::default()
        };

        upsert_message_group(Some(&group), &mut messages);

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].command, 1);
        assert_eq!(messages[0].message_id, 10);
        assert_eq!(messages[0].phrase_id, 2);
        assert_eq!(messages[0].stamp_id, 3);
    }

    /// Expect entries ordered Up, Down, Left, Right
    #[test]
    fn builds_entries_in_direction_order() {
        let mut messages = Vec::new();
        let group = CustomMessageGroupDto {
            right_message: Some(message(4)),
            left_message: Some(message(3)),
            down_message: Some(message(2)),
            up_message: Some(message(1)),
        };

        upsert_message_group(Some(&group), &mut messages);

        let commands: Vec<u32> = messages.iter().map(|m| m.command).collect();
        assert_eq!(commands, vec![1, 2, 3, 4]);
    }

    /// Expect existing messages to be kept when no direction is set
    #[test]
    fn empty_group_keeps_existing() {
        let mut messages = existing();

        upsert_message_group(Some(&CustomMessageGroupDto::default()), &mut messages);

        assert_eq!(messages, existing());
    }

    /// Expect existing messages to be kept when the group is absent
    #[test]
    fn missing_group_keeps_existing() {
        let mut messages = existing();

        upsert_message_group(None, &mut messages);

        assert_eq!(messages, existing());
    }
}
