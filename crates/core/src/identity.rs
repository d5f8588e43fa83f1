use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{AppResult, NonEmptyString};

macro_rules! opaque_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(NonEmptyString);

        impl $name {
            /// Creates a validated identifier from a stable external value.
            pub fn new(value: impl Into<String>) -> AppResult<Self> {
                NonEmptyString::new(value).map(Self)
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Display for $name {
            fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
                formatter.write_str(self.0.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0.into()
            }
        }
    };
}

opaque_identifier!(
    /// Stable identifier of an authenticated actor, issued by the identity provider.
    ActorId
);

opaque_identifier!(
    /// Identifier of a creator (model) that owns content resources.
    CreatorId
);

opaque_identifier!(
    /// Identifier of a studio (agency) that supervises assigned creators.
    StudioId
);

impl CreatorId {
    /// Returns the creator identity an actor represents when acting as itself.
    #[must_use]
    pub fn from_actor(actor_id: &ActorId) -> Self {
        Self(actor_id.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{ActorId, CreatorId, StudioId};

    #[test]
    fn identifiers_reject_blank_values() {
        assert!(ActorId::new("").is_err());
        assert!(CreatorId::new(" \t").is_err());
        assert!(StudioId::new("\n").is_err());
    }

    #[test]
    fn creator_from_actor_keeps_the_same_value() {
        let actor_id = ActorId::new("m1");
        assert!(actor_id.is_ok());
        if let Ok(actor_id) = actor_id {
            assert_eq!(CreatorId::from_actor(&actor_id).as_str(), "m1");
        }
    }

    #[test]
    fn identifiers_serialize_as_plain_strings() {
        let studio_id = StudioId::new("s1").map(|value| serde_json::to_string(&value));
        assert!(matches!(studio_id, Ok(Ok(ref json)) if json == "\"s1\""));
    }
}
