use crate::http::{Transport, TransportError, TransportResponse};
use common::messages::ErrorResponse;
use common::{
    can_buy_card, can_buy_landmark, card, diff, landmark, CardIndex, Change, GameSnapshot,
    LandmarkId, PlayerNum, PurchaseError,
};
use std::fmt;
use thiserror::Error;
use tracing::{info, warn};

// Coarse classification of an ActionError, for callers that only need to
// decide how to present it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Validation,
    Server,
}

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("No game in progress. Start a game first.")]
    NotStarted,
    #[error(transparent)]
    Rejected(#[from] PurchaseError),
    #[error(transparent)]
    Network(#[from] TransportError),
    #[error("Server refused {action} with status {status}: {message}")]
    Server {
        action: Action,
        status: u16,
        message: String,
    },
    #[error("Server sent an unreadable game state for {action}: {source}")]
    Decode {
        action: Action,
        #[source]
        source: serde_json::Error,
    },
}

impl ActionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActionError::NotStarted | ActionError::Rejected(_) => ErrorKind::Validation,
            ActionError::Network(_) => ErrorKind::Network,
            ActionError::Server { .. } | ActionError::Decode { .. } => ErrorKind::Server,
        }
    }
}

// Every state-changing call the game service accepts
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Start,
    Test,
    RollSingle,
    RollDouble,
    Confirm,
    Steal(PlayerNum),
    PurchaseCard(CardIndex),
    PurchaseLandmark(LandmarkId),
    EndTurn,
    NpcMove,
}

impl Action {
    pub fn path(&self) -> String {
        match self {
            Action::Start => "/game/start".to_string(),
            Action::Test => "/game/test".to_string(),
            Action::RollSingle => "/game/rollSingle".to_string(),
            Action::RollDouble => "/game/rollDouble".to_string(),
            Action::Confirm => "/game/confirm".to_string(),
            Action::Steal(player) => format!("/game/steal/{}", player),
            Action::PurchaseCard(idx) => format!("/game/purchaseCard/{}", idx),
            Action::PurchaseLandmark(id) => format!("/game/purchaseLandmark/{}", id),
            Action::EndTurn => "/game/endTurn".to_string(),
            Action::NpcMove => "/game/npcMove".to_string(),
        }
    }

    // Start and test create a brand new game, so there is nothing to compare
    // the response against.
    pub fn starts_game(&self) -> bool {
        matches!(self, Action::Start | Action::Test)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Start => write!(f, "start"),
            Action::Test => write!(f, "test"),
            Action::RollSingle => write!(f, "roll one die"),
            Action::RollDouble => write!(f, "roll two dice"),
            Action::Confirm => write!(f, "confirm roll"),
            Action::Steal(player) => write!(f, "steal from player {}", player),
            Action::PurchaseCard(idx) => write!(f, "purchase card {}", idx),
            Action::PurchaseLandmark(id) => write!(f, "purchase landmark {}", id),
            Action::EndTurn => write!(f, "end turn"),
            Action::NpcMove => write!(f, "computer move"),
        }
    }
}

// Owns the current game snapshot and the one before it. All requests to the
// game service go through here; `&mut self` on every action keeps a single
// request in flight per synchronizer.
#[derive(Debug)]
pub struct Synchronizer<T: Transport> {
    transport: T,
    current: Option<GameSnapshot>,
    previous: Option<GameSnapshot>,
}

impl<T: Transport> Synchronizer<T> {
    pub fn new(transport: T) -> Self {
        Synchronizer {
            transport,
            current: None,
            previous: None,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn current(&self) -> Option<&GameSnapshot> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> Option<&GameSnapshot> {
        self.previous.as_ref()
    }

    pub fn changes(&self) -> Vec<Change> {
        match (&self.previous, &self.current) {
            (Some(before), Some(after)) => diff(before, after),
            _ => Vec::new(),
        }
    }

    pub async fn start(&mut self) -> Result<&GameSnapshot, ActionError> {
        self.perform(Action::Start).await
    }

    pub async fn test(&mut self) -> Result<&GameSnapshot, ActionError> {
        self.perform(Action::Test).await
    }

    pub async fn roll_single(&mut self) -> Result<&GameSnapshot, ActionError> {
        self.perform(Action::RollSingle).await
    }

    pub async fn roll_double(&mut self) -> Result<&GameSnapshot, ActionError> {
        self.perform(Action::RollDouble).await
    }

    pub async fn confirm(&mut self) -> Result<&GameSnapshot, ActionError> {
        self.perform(Action::Confirm).await
    }

    pub async fn steal(&mut self, player: PlayerNum) -> Result<&GameSnapshot, ActionError> {
        self.perform(Action::Steal(player)).await
    }

    pub async fn purchase_card(&mut self, idx: CardIndex) -> Result<&GameSnapshot, ActionError> {
        self.perform(Action::PurchaseCard(idx)).await
    }

    pub async fn purchase_landmark(
        &mut self,
        id: LandmarkId,
    ) -> Result<&GameSnapshot, ActionError> {
        self.perform(Action::PurchaseLandmark(id)).await
    }

    pub async fn end_turn(&mut self) -> Result<&GameSnapshot, ActionError> {
        self.perform(Action::EndTurn).await
    }

    pub async fn npc_move(&mut self) -> Result<&GameSnapshot, ActionError> {
        self.perform(Action::NpcMove).await
    }

    // Neither slot is touched unless the call succeeds and the body decodes.
    // Purchases are checked against the held snapshot first and refused
    // without contacting the server.
    pub async fn perform(&mut self, action: Action) -> Result<&GameSnapshot, ActionError> {
        if action.starts_game() {
            let snapshot = self.fetch(action).await?;
            self.previous = Some(snapshot.clone());
            return Ok(self.current.insert(snapshot));
        }

        let current = self.current.as_ref().ok_or(ActionError::NotStarted)?;
        let checked = match action {
            Action::PurchaseCard(idx) => can_buy_card(current, card(idx)),
            Action::PurchaseLandmark(id) => can_buy_landmark(current, landmark(id)),
            _ => Ok(()),
        };
        if let Err(err) = checked {
            info!("{} refused locally: {}", action, err);
            return Err(err.into());
        }

        let snapshot = self.fetch(action).await?;
        self.previous = self.current.take();
        Ok(self.current.insert(snapshot))
    }

    async fn fetch(&self, action: Action) -> Result<GameSnapshot, ActionError> {
        let path = action.path();
        info!("sending {} ({})", action, path);
        let TransportResponse { status, body } = match self.transport.get(&path).await {
            Ok(response) => response,
            Err(err) => {
                warn!("{} failed: {}", action, err);
                return Err(err.into());
            }
        };

        if !(200..300).contains(&status) {
            let message = ErrorResponse::parse(&body)
                .map(|e| e.message)
                .unwrap_or_else(|| "no details given".to_string());
            warn!("{} rejected with status {}: {}", action, status, message);
            return Err(ActionError::Server {
                action,
                status,
                message,
            });
        }

        let snapshot = GameSnapshot::from_json(&body).map_err(|source| {
            warn!("{} returned an undecodable snapshot: {}", action, source);
            ActionError::Decode { action, source }
        })?;
        info!(
            "{} ok: player {} to {}",
            action,
            snapshot.current_player_num(),
            snapshot.step()
        );
        Ok(snapshot)
    }
}
