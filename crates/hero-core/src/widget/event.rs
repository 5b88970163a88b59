//! Completion events delivered from fetch tasks to the widget.

use super::token::SelectionToken;
use crate::api::{
    ApiError, Endpoint, HeroClient, HeroId, HeroImage, HeroOccupation, HeroPowerStats,
    HeroSummary, HttpTransport,
};
use crate::ui::Region;

/// One request the widget has started. Every spawned fetch turns into exactly
/// one [`WidgetEvent`]: the response from [`Fetch::run`], or an
/// [`ApiError::Interrupted`] failure if the task ends without one.
#[derive(Debug, Clone)]
pub(crate) enum Fetch {
    Heroes,
    Image { token: SelectionToken, id: HeroId },
    Occupation { token: SelectionToken, id: HeroId },
    PowerStats { token: SelectionToken, id: HeroId },
}

impl Fetch {
    fn endpoint(&self) -> Endpoint {
        match self {
            Fetch::Heroes => Endpoint::All,
            Fetch::Image { .. } => Endpoint::Image,
            Fetch::Occupation { .. } => Endpoint::Occupation,
            Fetch::PowerStats { .. } => Endpoint::PowerStats,
        }
    }

    /// Perform the blocking request.
    pub(crate) fn run<T: HttpTransport>(self, client: &HeroClient<T>) -> WidgetEvent {
        match self {
            Fetch::Heroes => WidgetEvent::HeroesLoaded(client.list_heroes()),
            Fetch::Image { token, id } => WidgetEvent::ImageLoaded {
                token,
                result: client.image(&id),
                id,
            },
            Fetch::Occupation { token, id } => WidgetEvent::OccupationLoaded {
                token,
                result: client.occupation(&id),
                id,
            },
            Fetch::PowerStats { token, id } => WidgetEvent::PowerStatsLoaded {
                token,
                result: client.power_stats(&id),
                id,
            },
        }
    }

    /// The failure event for a request whose task ended without a result.
    pub(crate) fn interrupted(self, reason: String) -> WidgetEvent {
        let err = ApiError::Interrupted {
            endpoint: self.endpoint(),
            reason,
        };
        match self {
            Fetch::Heroes => WidgetEvent::HeroesLoaded(Err(err)),
            Fetch::Image { token, id } => WidgetEvent::ImageLoaded {
                token,
                id,
                result: Err(err),
            },
            Fetch::Occupation { token, id } => WidgetEvent::OccupationLoaded {
                token,
                id,
                result: Err(err),
            },
            Fetch::PowerStats { token, id } => WidgetEvent::PowerStatsLoaded {
                token,
                id,
                result: Err(err),
            },
        }
    }
}

/// Result of one fetch, tagged with the search it belongs to.
#[derive(Debug)]
pub enum WidgetEvent {
    HeroesLoaded(Result<Vec<HeroSummary>, ApiError>),
    ImageLoaded {
        token: SelectionToken,
        id: HeroId,
        result: Result<HeroImage, ApiError>,
    },
    OccupationLoaded {
        token: SelectionToken,
        id: HeroId,
        result: Result<HeroOccupation, ApiError>,
    },
    PowerStatsLoaded {
        token: SelectionToken,
        id: HeroId,
        result: Result<HeroPowerStats, ApiError>,
    },
}

impl WidgetEvent {
    /// Token of the search this event answers; `None` for the hero list.
    pub fn token(&self) -> Option<SelectionToken> {
        match self {
            WidgetEvent::HeroesLoaded(_) => None,
            WidgetEvent::ImageLoaded { token, .. }
            | WidgetEvent::OccupationLoaded { token, .. }
            | WidgetEvent::PowerStatsLoaded { token, .. } => Some(*token),
        }
    }

    pub fn hero_id(&self) -> Option<&HeroId> {
        match self {
            WidgetEvent::HeroesLoaded(_) => None,
            WidgetEvent::ImageLoaded { id, .. }
            | WidgetEvent::OccupationLoaded { id, .. }
            | WidgetEvent::PowerStatsLoaded { id, .. } => Some(id),
        }
    }

    /// Region this event updates.
    pub fn region(&self) -> Region {
        match self {
            WidgetEvent::HeroesLoaded(_) => Region::SearchDropdown,
            WidgetEvent::ImageLoaded { .. } => Region::HeroImg,
            WidgetEvent::OccupationLoaded { .. } => Region::HeroOccupation,
            WidgetEvent::PowerStatsLoaded { .. } => Region::HeroBarChart,
        }
    }
}

/// What `handle_event` did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// The region was updated with the response.
    Applied(Region),
    /// The request failed; `message` is the error text.
    Failed { region: Region, message: String },
    /// The response belonged to an older search and was dropped.
    Discarded(Region),
}
