use uuid::Uuid;

/// Domain events raised when the tournament registry changes
///
/// The registry is append-only, so these are the only two moments in a
/// team's life. They are used for:
/// - Structured logging of admissions
/// - Auditing who joined which roster
///
/// # Example
/// ```
/// use esports_registration_api::domain::team::TeamEvent;
/// use uuid::Uuid;
///
/// let event = TeamEvent::Registered {
///     team_id: Uuid::new_v4(),
///     name: "Alpha".to_string(),
/// };
/// assert_eq!(event.kind(), "team_registered");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// Fired when a team is admitted
    Registered {
        /// ID of the newly registered team
        team_id: Uuid,
        /// Team name as stored
        name: String,
    },
    /// Fired when a player is added to a team's roster
    PlayerJoined {
        /// Team whose roster grew
        team_id: Uuid,
        /// ID of the new player
        player_id: Uuid,
        /// The player's in-game nickname
        nickname: String,
        /// Roster size after the player joined
        roster_size: usize,
    },
}

impl TeamEvent {
    /// Returns the team_id for this event
    pub fn team_id(&self) -> Uuid {
        match self {
            TeamEvent::Registered { team_id, .. } => *team_id,
            TeamEvent::PlayerJoined { team_id, .. } => *team_id,
        }
    }

    /// Short name used as the `event` field in log records
    pub fn kind(&self) -> &'static str {
        match self {
            TeamEvent::Registered { .. } => "team_registered",
            TeamEvent::PlayerJoined { .. } => "player_joined",
        }
    }
}
