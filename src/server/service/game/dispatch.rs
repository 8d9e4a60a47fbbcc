use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::game::{
        ErrorCode, GameRequest, GameResponse, RequestType, SaveVscResultResponse,
        SaveVsmResultResponse,
    },
    server::{
        error::Error,
        service::game::{vsc::VscResultService, vsm::VsmResultService},
    },
};

/// Routes a cabinet request envelope to its handler and builds the response envelope
pub struct GameDispatcher<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameDispatcher<'a> {
    /// Creates a new instance of [`GameDispatcher`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Handle a cabinet request
    ///
    /// Profile failures (unknown session, undecodable documents) are reported in the
    /// envelope as [`ErrorCode::ErrServer`], as are unsupported request types and
    /// requests missing their payload.
    ///
    /// # Returns
    /// - `Ok(GameResponse)`: Envelope echoing the request type and id
    /// - `Err(Error)`: A store failure that should surface as a server error
    pub async fn dispatch(&self, request: &GameRequest) -> Result<GameResponse, Error> {
        match request.request_type {
            RequestType::SaveVsmResult => {
                let error = match &request.save_vsm_result {
                    Some(payload) => {
                        envelope_status(VsmResultService::new(self.db).save(payload).await)?
                    }
                    None => missing_payload(request),
                };

                let mut response =
                    GameResponse::for_request(request.request_type, request.request_id, error);
                response.save_vsm_result = Some(SaveVsmResultResponse::default());

                Ok(response)
            }
            RequestType::SaveVscResult => {
                let error = match &request.save_vsc_result {
                    Some(payload) => {
                        envelope_status(VscResultService::new(self.db).save(payload).await)?
                    }
                    None => missing_payload(request),
                };

                let mut response =
                    GameResponse::for_request(request.request_type, request.request_id, error);
                response.save_vsc_result = Some(SaveVscResultResponse::default());

                Ok(response)
            }
            request_type => {
                tracing::warn!(
                    request_id = request.request_id,
                    "Unsupported game request type {:?}",
                    request_type
                );

                Ok(GameResponse::for_request(
                    request_type,
                    request.request_id,
                    ErrorCode::ErrServer,
                ))
            }
        }
    }
}

fn missing_payload(request: &GameRequest) -> ErrorCode {
    tracing::warn!(
        request_id = request.request_id,
        "Game request {:?} is missing its payload",
        request.request_type
    );

    ErrorCode::ErrServer
}

fn envelope_status(outcome: Result<(), Error>) -> Result<ErrorCode, Error> {
    match outcome {
        Ok(()) => Ok(ErrorCode::Success),
        Err(Error::ProfileError(err)) => {
            tracing::warn!("Rejected battle result: {}", err);

            Ok(ErrorCode::ErrServer)
        }
        Err(err) => Err(err),
    }
}
